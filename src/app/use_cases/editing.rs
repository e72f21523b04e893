//! Use-Cases: Kontrollpunkte per Zeiger und Tastatur bearbeiten.
//!
//! Jede Mutation der Punktsequenz markiert die Kurve als veraltet; die
//! Neuberechnung erfolgt gesammelt nach dem Intent.

use crate::app::AppState;
use crate::core::{EditOutcome, PointerButton};

fn apply_outcome(state: &mut AppState, outcome: EditOutcome) {
    match outcome {
        EditOutcome::Added { index } => {
            log::info!("Kontrollpunkt {} hinzugefügt", index);
        }
        EditOutcome::Removed { index } => {
            log::info!(
                "Kontrollpunkt {} gelöscht ({} verbleibend)",
                index,
                state.editor.points().len()
            );
        }
        EditOutcome::Cleared { removed } => {
            log::info!("{} Kontrollpunkte entfernt", removed);
        }
        EditOutcome::DragStarted { index } => {
            log::debug!("Drag auf Kontrollpunkt {} gestartet", index);
        }
        EditOutcome::DragEnded { index } => {
            log::debug!("Drag beendet (Selektion: {:?})", index);
        }
        EditOutcome::Moved { .. } | EditOutcome::Unchanged => {}
    }

    if outcome.changes_points() {
        state.curve.mark_dirty();
    }
}

/// Frame-Beginn: "gerade gedrückt"-Flags zurücksetzen.
pub fn begin_frame(state: &mut AppState) {
    state.editor.begin_frame();
}

/// Zeigerdruck im Viewport (Hinzufügen, Drag-Start oder Löschen).
pub fn press_pointer(
    state: &mut AppState,
    screen_pos: glam::Vec2,
    button: PointerButton,
    hit_threshold_px: f32,
) {
    let outcome = state
        .editor
        .pointer_pressed(screen_pos, button, hit_threshold_px);
    apply_outcome(state, outcome);
}

/// Zeigerbewegung (Drag-Update).
pub fn move_pointer(state: &mut AppState, screen_pos: glam::Vec2) {
    let outcome = state.editor.pointer_moved(screen_pos);
    apply_outcome(state, outcome);
}

/// Zeigertaste losgelassen.
pub fn release_pointer(state: &mut AppState, button: PointerButton) {
    let outcome = state.editor.pointer_released(button);
    apply_outcome(state, outcome);
}

/// Löscht den selektierten Kontrollpunkt, falls vorhanden.
pub fn delete_selected(state: &mut AppState) {
    let outcome = state.editor.delete_selected();
    if outcome == EditOutcome::Unchanged {
        log::debug!("Kein Kontrollpunkt selektiert, nichts zu löschen");
    }
    apply_outcome(state, outcome);
}

/// Entfernt alle Kontrollpunkte und die abgeleitete Kurve.
pub fn clear(state: &mut AppState) {
    let outcome = state.editor.clear();
    apply_outcome(state, outcome);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn press_on_empty_space_marks_curve_dirty() {
        let mut state = AppState::new();
        state.curve.dirty = false;

        press_pointer(&mut state, Vec2::new(50.0, 50.0), PointerButton::Primary, 6.0);

        assert_eq!(state.point_count(), 1);
        assert!(state.curve.dirty);
    }

    #[test]
    fn drag_start_does_not_mark_curve_dirty() {
        let mut state = AppState::new();
        press_pointer(&mut state, Vec2::new(50.0, 50.0), PointerButton::Primary, 6.0);
        release_pointer(&mut state, PointerButton::Primary);
        state.curve.dirty = false;

        begin_frame(&mut state);
        press_pointer(&mut state, Vec2::new(50.0, 50.0), PointerButton::Primary, 6.0);

        assert_eq!(state.point_count(), 1);
        assert!(!state.curve.dirty);
    }

    #[test]
    fn delete_without_selection_is_noop() {
        let mut state = AppState::new();
        press_pointer(&mut state, Vec2::new(50.0, 50.0), PointerButton::Primary, 6.0);
        state.curve.dirty = false;

        delete_selected(&mut state);

        assert_eq!(state.point_count(), 1);
        assert!(!state.curve.dirty);
    }
}
