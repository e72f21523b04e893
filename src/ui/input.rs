//! Viewport-Input-Handling: Zeiger-Events und Resize → AppIntent.
//!
//! Positionen werden relativ zur linken oberen Viewport-Ecke in Pixeln
//! weitergegeben (y nach unten), die Umrechnung in den Kurvenraum macht
//! der Editor.

use super::keyboard;
use crate::app::AppIntent;
use crate::core::PointerButton;

const BUTTONS: [(egui::PointerButton, PointerButton); 2] = [
    (egui::PointerButton::Primary, PointerButton::Primary),
    (egui::PointerButton::Secondary, PointerButton::Secondary),
];

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Debug, Default)]
pub struct InputState {
    /// Zuletzt gemeldete Zeigerposition (lokal), um redundante Moves zu sparen
    last_pointer_pos: Option<glam::Vec2>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Reihenfolge pro Frame: Resize, Tastatur, Bewegung, Drücken, Loslassen.
    /// Ein Druck zählt nur, wenn der Zeiger über dem Viewport liegt; das
    /// Loslassen wird immer gemeldet, damit ein Drag außerhalb sauber endet.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        has_selection: bool,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;

        events.push(AppIntent::ViewportResized {
            size: [rect.width(), rect.height()],
        });

        events.extend(keyboard::collect_keyboard_intents(ui, has_selection));

        let (latest_pos, interact_pos, pressed, released) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.interact_pos(),
                BUTTONS.map(|(egui_button, _)| i.pointer.button_pressed(egui_button)),
                BUTTONS.map(|(egui_button, _)| i.pointer.button_released(egui_button)),
            )
        });

        let to_local = |pos: egui::Pos2| {
            let local = pos - rect.min;
            glam::Vec2::new(local.x, local.y)
        };

        if let Some(pos) = latest_pos.map(to_local) {
            if self.last_pointer_pos != Some(pos) {
                self.last_pointer_pos = Some(pos);
                events.push(AppIntent::PointerMoved { screen_pos: pos });
            }
        }

        if response.contains_pointer() {
            if let Some(pos) = interact_pos.map(to_local) {
                for ((_, button), was_pressed) in BUTTONS.iter().zip(pressed) {
                    if was_pressed {
                        events.push(AppIntent::PointerPressed {
                            screen_pos: pos,
                            button: *button,
                        });
                    }
                }
            }
        }

        for ((_, button), was_released) in BUTTONS.iter().zip(released) {
            if was_released {
                events.push(AppIntent::PointerReleased { button: *button });
            }
        }

        events
    }
}
