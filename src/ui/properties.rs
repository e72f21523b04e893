//! Parameter-Panel (rechte Seitenleiste) für Ordnung, Schrittweite und Anzeige.

use crate::app::{AppIntent, AppState};
use crate::shared::MIN_ORDER;

/// Rendert das Parameter-Panel und gibt erzeugte Events zurück.
///
/// Arbeitet auf Kopien der Parameter; Änderungen gehen nur als Intent raus.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(220.0)
        .min_width(180.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Kurve");
            ui.separator();

            render_curve_params(ui, state, &mut events);

            ui.separator();
            render_display_toggles(ui, state, &mut events);

            ui.separator();
            render_point_actions(ui, state, &mut events);
        });

    events
}

fn render_curve_params(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let max_order = state.options.max_order.max(MIN_ORDER);

    let mut order = state.params.order;
    let order_response = ui.add(
        egui::Slider::new(&mut order, MIN_ORDER..=max_order)
            .text("Ordnung k")
            .integer(),
    );
    if order_response.changed() && order != state.params.order {
        events.push(AppIntent::SetOrderRequested { order });
    }

    match state.curve.effective_order {
        Some(effective) if effective != state.params.order => {
            ui.label(
                egui::RichText::new(format!("Wirksam: k = {} (zu wenige Punkte)", effective))
                    .color(egui::Color32::YELLOW),
            );
        }
        _ => {}
    }

    let mut step = state.params.step;
    let step_response = ui.add(
        egui::Slider::new(&mut step, state.options.min_step..=state.options.max_step)
            .text("Schrittweite")
            .logarithmic(true)
            .max_decimals(3),
    );
    if step_response.changed() && step != state.params.step {
        events.push(AppIntent::SetSampleStepRequested { step });
    }
}

fn render_display_toggles(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let mut show_points = state.params.show_control_points;
    if ui.checkbox(&mut show_points, "Kontrollpunkte").changed() {
        events.push(AppIntent::SetShowControlPointsRequested {
            visible: show_points,
        });
    }

    let mut show_curve = state.params.show_curve;
    if ui.checkbox(&mut show_curve, "Kurve").changed() {
        events.push(AppIntent::SetShowCurveRequested {
            visible: show_curve,
        });
    }
}

fn render_point_actions(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    let points = state.editor.points();

    match state.editor.selected_index() {
        Some(index) => {
            if let Some(point) = points.get(index) {
                ui.label(format!("Punkt #{}", index));
                ui.label(format!(
                    "Position: ({:.3}, {:.3})",
                    point.position.x, point.position.y
                ));
            }
            if ui.button("Punkt löschen").clicked() {
                events.push(AppIntent::DeleteSelectedRequested);
            }
        }
        None => {
            ui.label("Keine Selektion");
        }
    }

    ui.add_space(4.0);

    if ui
        .add_enabled(!points.is_empty(), egui::Button::new("Alle Punkte entfernen"))
        .clicked()
    {
        events.push(AppIntent::ClearRequested);
    }
}
