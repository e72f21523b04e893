//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::FrameStarted => vec![AppCommand::BeginFrame],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerPressed { screen_pos, button } => vec![AppCommand::PressPointer {
            screen_pos,
            button,
            hit_threshold_px: state.options.hit_threshold_px,
        }],
        AppIntent::PointerMoved { screen_pos } => vec![AppCommand::MovePointer { screen_pos }],
        AppIntent::PointerReleased { button } => vec![AppCommand::ReleasePointer { button }],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedPoint],
        AppIntent::ClearRequested => vec![AppCommand::ClearPoints],
        AppIntent::SetOrderRequested { order } => vec![AppCommand::SetOrder { order }],
        AppIntent::SetSampleStepRequested { step } => vec![AppCommand::SetSampleStep { step }],
        AppIntent::SetShowControlPointsRequested { visible } => {
            vec![AppCommand::SetShowControlPoints { visible }]
        }
        AppIntent::SetShowCurveRequested { visible } => vec![AppCommand::SetShowCurve { visible }],
        AppIntent::ReloadShadersRequested => vec![AppCommand::RequestShaderReload],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
