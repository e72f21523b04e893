//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::use_cases;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::{RenderRequestSender, RenderScene};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController {
    /// Kanal zum Renderer (Shader-Reload); None in headless Tests
    render_requests: Option<RenderRequestSender>,
}

impl AppController {
    /// Erstellt einen Controller ohne Renderer-Anbindung.
    pub fn new() -> Self {
        Self {
            render_requests: None,
        }
    }

    /// Erstellt einen Controller, der Render-Aufträge über `sender` schickt.
    pub fn with_render_requests(sender: RenderRequestSender) -> Self {
        Self {
            render_requests: Some(sender),
        }
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    ///
    /// Nach allen Commands wird die Kurve neu abgetastet, falls Punkte oder
    /// Parameter sich geändert haben.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        let result = commands
            .into_iter()
            .try_for_each(|command| self.handle_command(state, command));

        use_cases::curve::recompute_if_dirty(state);
        result
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::BeginFrame => handlers::editing::begin_frame(state),
            AppCommand::PressPointer {
                screen_pos,
                button,
                hit_threshold_px,
            } => handlers::editing::press_pointer(state, screen_pos, button, hit_threshold_px),
            AppCommand::MovePointer { screen_pos } => {
                handlers::editing::move_pointer(state, screen_pos)
            }
            AppCommand::ReleasePointer { button } => {
                handlers::editing::release_pointer(state, button)
            }
            AppCommand::DeleteSelectedPoint => handlers::editing::delete_selected(state),
            AppCommand::ClearPoints => handlers::editing::clear(state),

            // === Viewport & Kurve ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetOrder { order } => handlers::view::set_order(state, order),
            AppCommand::SetSampleStep { step } => handlers::view::set_sample_step(state, step),
            AppCommand::SetShowControlPoints { visible } => {
                handlers::view::set_show_control_points(state, visible)
            }
            AppCommand::SetShowCurve { visible } => handlers::view::set_show_curve(state, visible),
            AppCommand::RequestShaderReload => {
                handlers::view::request_shader_reload(state, self.render_requests.as_ref())?
            }

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
            AppCommand::OpenOptionsDialog => handlers::dialog::open_options_dialog(state),
            AppCommand::CloseOptionsDialog => handlers::dialog::close_options_dialog(state),
            AppCommand::ApplyOptions { options } => {
                handlers::dialog::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::dialog::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
