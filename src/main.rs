//! BSpline-Editor.
//!
//! Interaktiver Editor für B-Spline-Kurven: Kontrollpunkte per Maus setzen,
//! ziehen und löschen, Ordnung und Abtastung live einstellen.

use eframe::egui;
use eframe::egui_wgpu;
use bspline_editor::shared::{render_request_channel, RenderRequest, RenderRequestReceiver};
use bspline_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren (Info, per RUST_LOG überschreibbar)
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        log::info!("BSpline-Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1024.0, 800.0])
                .with_title("BSpline-Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "BSpline-Editor",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(EditorApp::new(render_state)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    render_requests: RenderRequestReceiver,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    device: eframe::wgpu::Device,
    queue: eframe::wgpu::Queue,
    input: ui::InputState,
}

impl EditorApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let (sender, receiver) = render_request_channel();
        let mut renderer = render::Renderer::new(render_state);

        // Eigener Shader aus der Konfiguration direkt beim Start
        if editor_options.shader_path.is_some() {
            let result = render::load_shader_source(editor_options.shader_path.as_deref())
                .and_then(|source| renderer.reload_shaders(&render_state.device, &source));
            if let Err(e) = result {
                log::warn!("Konfigurierter Shader nicht nutzbar, verwende eingebetteten: {:#}", e);
            }
        }

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::with_render_requests(sender),
            render_requests: receiver,
            renderer: std::sync::Arc::new(std::sync::Mutex::new(renderer)),
            device: render_state.device.clone(),
            queue: render_state.queue.clone(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events.iter().any(|e| {
            !matches!(
                e,
                AppIntent::FrameStarted | AppIntent::ViewportResized { .. }
            )
        });

        self.process_events(events);

        self.drain_render_requests();

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        // Frame-Beginn immer zuerst, damit "gerade gedrückt" nur diesen Frame gilt
        let mut events = vec![AppIntent::FrameStarted];

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    self.state.editor.selected_index().is_some(),
                ));

                let scene = self.controller.build_render_scene(&self.state);

                let [r, g, b, a] = scene.background_color;
                ui.painter().rect_filled(
                    rect,
                    0.0,
                    egui::Rgba::from_rgba_unmultiplied(r, g, b, a),
                );

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback::new(
                        self.renderer.clone(),
                        scene,
                        &self.device,
                        &self.queue,
                    ),
                );

                ui.painter().add(callback);

                if self.state.editor.points().is_empty() {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        "Linksklick: Punkt setzen / ziehen · Rechtsklick: Punkt löschen",
                        egui::FontId::proportional(18.0),
                        egui::Color32::GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    /// Arbeitet Render-Aufträge des Controllers ab (z.B. Shader-Reload).
    fn drain_render_requests(&mut self) {
        while let Ok(request) = self.render_requests.try_recv() {
            match request {
                RenderRequest::ReloadShaders { path } => {
                    let Ok(mut renderer) = self.renderer.lock() else {
                        log::error!("Renderer-Lock fehlgeschlagen (Mutex vergiftet)");
                        return;
                    };
                    let result = render::load_shader_source(path.as_deref())
                        .and_then(|source| renderer.reload_shaders(&self.device, &source));
                    self.state.status_message = match result {
                        Ok(()) => None,
                        Err(e) => {
                            log::warn!("{:#}", e);
                            Some(format!("{:#}", e))
                        }
                    };
                }
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || ctx.input(|i| i.pointer.is_moving())
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
