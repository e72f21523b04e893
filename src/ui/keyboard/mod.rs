//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// Solange ein Textfeld (z.B. ein DragValue im Panel) den Fokus hat, werden
/// keine Shortcuts ausgelöst.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui, has_selection: bool) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if ui.ctx().wants_keyboard_input() {
        return events;
    }

    let (modifiers, key_r_pressed, key_del_pressed, key_c_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::R),
            i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace),
            i.key_pressed(egui::Key::C),
        )
    });

    // R = Shader neu laden
    if key_r_pressed && !modifiers.command {
        events.push(AppIntent::ReloadShadersRequested);
    }

    if key_del_pressed && has_selection {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    // Ctrl+Shift+C = alle Punkte entfernen
    if key_c_pressed && modifiers.command && modifiers.shift {
        events.push(AppIntent::ClearRequested);
    }

    events
}

#[cfg(test)]
mod tests;
