//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;
use glam::Vec2;

/// Aktualisiert die Viewport-Größe für die Koordinaten-Umrechnung.
///
/// Ungültige Größen (z.B. minimiertes Fenster) werden übernommen, der Editor
/// ignoriert dann Klicks bis zum nächsten gültigen Resize.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    let size = Vec2::from(size);
    if state.editor.viewport().size == size {
        return;
    }
    state.editor.set_viewport_size(size);
    if state.editor.viewport().is_valid() {
        log::debug!("Viewport-Größe: {}x{}", size.x, size.y);
    } else {
        log::warn!("Ungültige Viewport-Größe: {}x{}", size.x, size.y);
    }
}
