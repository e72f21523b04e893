//! Optionen-Dialog für Farben, Größen, Kurvengrenzen und Shader-Pfad.

use crate::app::{AppIntent, AppState};
use crate::shared::{MAX_ORDER, MIN_ORDER, STEP_FLOOR};
use std::path::PathBuf;

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(360.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .max_height(500.0)
                .show(ui, |ui| {
                    // ── Kontrollpunkte ──────────────────────────────
                    ui.collapsing("Kontrollpunkte", |ui| {
                        ui.horizontal(|ui| {
                            ui.label("Größe (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.point_size_px)
                                        .range(1.0..=32.0)
                                        .speed(0.1),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Pick-Radius (px):");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.hit_threshold_px)
                                        .range(1.0..=50.0)
                                        .speed(0.5),
                                )
                                .changed();
                        });
                        changed |= color_edit(ui, "Standardfarbe:", &mut opts.control_point_color);
                        changed |= color_edit(ui, "Selektiert:", &mut opts.selected_point_color);
                    });

                    // ── Kurve ───────────────────────────────────────
                    ui.collapsing("Kurve", |ui| {
                        changed |= color_edit(ui, "Farbe:", &mut opts.curve_color);
                        ui.horizontal(|ui| {
                            ui.label("Max. Ordnung:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.max_order)
                                        .range(MIN_ORDER..=MAX_ORDER * 2),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Min. Schrittweite:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.min_step)
                                        .range(STEP_FLOOR..=0.5)
                                        .speed(0.001),
                                )
                                .changed();
                        });
                        ui.horizontal(|ui| {
                            ui.label("Max. Schrittweite:");
                            changed |= ui
                                .add(
                                    egui::DragValue::new(&mut opts.max_step)
                                        .range(0.01..=1.0)
                                        .speed(0.01),
                                )
                                .changed();
                        });
                        changed |= ui
                            .checkbox(
                                &mut opts.clamp_order_to_point_count,
                                "Ordnung auf Punktanzahl begrenzen",
                            )
                            .on_hover_text("Aus: Kurve bleibt leer, bis genug Punkte gesetzt sind")
                            .changed();
                    });

                    // ── Darstellung ─────────────────────────────────
                    ui.collapsing("Darstellung", |ui| {
                        changed |= color_edit(ui, "Hintergrund:", &mut opts.background_color);
                        ui.horizontal(|ui| {
                            ui.label("Shader-Datei:");
                            let mut path_text = opts
                                .shader_path
                                .as_ref()
                                .map(|p| p.display().to_string())
                                .unwrap_or_default();
                            if ui.text_edit_singleline(&mut path_text).changed() {
                                let trimmed = path_text.trim();
                                opts.shader_path =
                                    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
                                changed = true;
                            }
                        });
                        ui.label(
                            egui::RichText::new("Leer = eingebetteter Shader, neu laden mit R")
                                .small()
                                .weak(),
                        );
                    });
                });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged { options: opts });
    }

    events
}

/// Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut rgba = egui::Rgba::from_rgba_unmultiplied(color[0], color[1], color[2], color[3]);
        if egui::color_picker::color_edit_button_rgba(
            ui,
            &mut rgba,
            egui::color_picker::Alpha::OnlyBlend,
        )
        .changed()
        {
            *color = rgba.to_rgba_unmultiplied();
            changed = true;
        }
    });
    changed
}
