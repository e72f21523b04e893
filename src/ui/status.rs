//! Status-Bar am unteren Bildschirmrand.

use crate::app::{describe_command, AppState, CurveStatus};
use crate::core::DragState;

/// Kurzbeschreibung des Kurvenstatus für die Anzeige.
fn curve_status_label(status: &CurveStatus) -> String {
    match status {
        CurveStatus::Empty => "Kurve: leer".to_string(),
        CurveStatus::InsufficientPoints {
            required,
            available,
        } => format!("Kurve: {} von {} Punkten", available, required),
        CurveStatus::Ready { samples, skipped } if *skipped > 0 => {
            format!("Kurve: {} Samples ({} übersprungen)", samples, skipped)
        }
        CurveStatus::Ready { samples, .. } => format!("Kurve: {} Samples", samples),
        CurveStatus::Failed { error } => format!("Kurve: Fehler ({})", error),
    }
}

/// Tooltip mit den letzten Aktionen, neueste oben.
fn command_history_text(state: &AppState) -> String {
    let mut text = format!("{} Aktionen gesamt", state.command_log.total());
    for command in state.command_log.recent(HISTORY_LINES) {
        text.push('\n');
        text.push_str(&describe_command(command));
    }
    text
}

const HISTORY_LINES: usize = 10;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Punkte: {}", state.point_count()));

            ui.separator();

            match state.curve.effective_order {
                Some(effective) if effective != state.params.order => {
                    ui.label(format!("k: {} (wirksam {})", state.params.order, effective));
                }
                _ => {
                    ui.label(format!("k: {}", state.params.order));
                }
            }

            ui.separator();

            ui.label(format!("Schritt: {:.3}", state.params.step));

            ui.separator();

            ui.label(curve_status_label(&state.curve.status));

            ui.separator();

            match state.editor.selected_index() {
                Some(index) => ui.label(format!("Selektiert: #{}", index)),
                None => ui.label("Selektiert: -"),
            };

            if state.editor.drag_state() == DragState::Dragging {
                ui.separator();
                ui.label("Drag");
            }

            if let Some(last) = state.command_log.last() {
                ui.separator();
                ui.label(format!("Zuletzt: {}", describe_command(last)))
                    .on_hover_text(command_history_text(state));
            }

            if let Some(ref msg) = state.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SplineError;

    #[test]
    fn test_status_label_mentions_skipped_samples() {
        let label = curve_status_label(&CurveStatus::Ready {
            samples: 4,
            skipped: 1,
        });
        assert!(label.contains("4 Samples"));
        assert!(label.contains("1 übersprungen"));
    }

    #[test]
    fn test_status_label_for_failed_curve() {
        let label = curve_status_label(&CurveStatus::Failed {
            error: SplineError::InvalidStep { step: 0.0 },
        });
        assert!(label.starts_with("Kurve: Fehler"));
    }

    #[test]
    fn test_history_text_lists_latest_actions() {
        let mut state = AppState::new();
        state.command_log.record(&crate::app::AppCommand::BeginFrame);
        state.command_log.record(&crate::app::AppCommand::SetOrder { order: 4 });
        state.command_log.record(&crate::app::AppCommand::ClearPoints);

        let text = command_history_text(&state);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["2 Aktionen gesamt", "Alle Punkte löschen", "Ordnung 4"]);
    }
}
