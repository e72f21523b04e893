//! Handler für das Bearbeiten von Kontrollpunkten.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::PointerButton;

/// Setzt die Per-Frame-Tastenflags zurück.
pub fn begin_frame(state: &mut AppState) {
    use_cases::editing::begin_frame(state);
}

/// Verarbeitet einen Zeigerdruck im Viewport.
pub fn press_pointer(
    state: &mut AppState,
    screen_pos: glam::Vec2,
    button: PointerButton,
    hit_threshold_px: f32,
) {
    use_cases::editing::press_pointer(state, screen_pos, button, hit_threshold_px);
}

/// Verarbeitet eine Zeigerbewegung.
pub fn move_pointer(state: &mut AppState, screen_pos: glam::Vec2) {
    use_cases::editing::move_pointer(state, screen_pos);
}

/// Verarbeitet das Loslassen einer Zeigertaste.
pub fn release_pointer(state: &mut AppState, button: PointerButton) {
    use_cases::editing::release_pointer(state, button);
}

/// Löscht den selektierten Kontrollpunkt.
pub fn delete_selected(state: &mut AppState) {
    use_cases::editing::delete_selected(state);
}

/// Entfernt alle Kontrollpunkte.
pub fn clear(state: &mut AppState) {
    use_cases::editing::clear(state);
}
