//! Top-Menü (File, Edit, View, Help).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Edit", |ui| {
                let has_points = !state.editor.points().is_empty();
                let has_selection = state.editor.selected_index().is_some();

                if ui
                    .add_enabled(has_selection, egui::Button::new("Punkt löschen (Entf)"))
                    .clicked()
                {
                    events.push(AppIntent::DeleteSelectedRequested);
                    ui.close();
                }

                if ui
                    .add_enabled(
                        has_points,
                        egui::Button::new("Alle entfernen (Ctrl+Shift+C)"),
                    )
                    .clicked()
                {
                    events.push(AppIntent::ClearRequested);
                    ui.close();
                }
            });

            ui.menu_button("View", |ui| {
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

                ui.separator();

                if ui.button("Optionen...").clicked() {
                    events.push(AppIntent::OpenOptionsDialogRequested);
                    ui.close();
                }

                if ui.button("Shader neu laden (R)").clicked() {
                    events.push(AppIntent::ReloadShadersRequested);
                    ui.close();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    log::info!("BSpline-Editor v{}", env!("CARGO_PKG_VERSION"));
                    ui.close();
                }
            });
        });
    });

    events
}
