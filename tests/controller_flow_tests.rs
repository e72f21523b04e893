use bspline_editor::shared::{render_request_channel, RenderRequest};
use bspline_editor::{AppCommand, AppController, AppIntent, AppState, CurveStatus, PointerButton};
use glam::Vec2;

/// Pixelpositionen (800x800-Viewport) der Kurvenraum-Punkte (-0.5,0), (0,0.5), (0.5,0).
const ARC_PIXELS: [(f32, f32); 3] = [(199.5, 399.5), (399.5, 199.5), (599.5, 399.5)];

fn click(controller: &mut AppController, state: &mut AppState, pos: Vec2, button: PointerButton) {
    for intent in [
        AppIntent::FrameStarted,
        AppIntent::PointerPressed {
            screen_pos: pos,
            button,
        },
        AppIntent::PointerReleased { button },
    ] {
        controller
            .handle_intent(state, intent)
            .expect("Klick sollte ohne Fehler durchlaufen");
    }
}

fn state_with_arc(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    controller
        .handle_intent(&mut state, AppIntent::ViewportResized { size: [800.0, 800.0] })
        .expect("Resize sollte funktionieren");
    for (x, y) in ARC_PIXELS {
        click(controller, &mut state, Vec2::new(x, y), PointerButton::Primary);
    }
    state
}

#[test]
fn test_three_points_linear_curve_has_five_samples() {
    let mut controller = AppController::new();
    let state = state_with_arc(&mut controller);

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.params.order, 2);
    assert_eq!(
        state.curve.status,
        CurveStatus::Ready {
            samples: 5,
            skipped: 0
        }
    );
    assert_eq!(state.sample_count(), 5);

    // Jeder Sample liegt auf einem der beiden Polygon-Segmente
    for sample in state.curve.samples.iter() {
        let p = sample.position;
        let on_left = (p.y - (p.x + 0.5)).abs() < 1e-4 && p.x <= 1e-4;
        let on_right = (p.y - (0.5 - p.x)).abs() < 1e-4 && p.x >= -1e-4;
        assert!(on_left || on_right, "Sample {p:?} liegt nicht auf dem Polygon");
    }
}

#[test]
fn test_single_point_gives_empty_curve() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    click(
        &mut controller,
        &mut state,
        Vec2::new(100.0, 100.0),
        PointerButton::Primary,
    );

    assert_eq!(state.point_count(), 1);
    assert_eq!(state.curve.status, CurveStatus::Empty);
    assert_eq!(state.sample_count(), 0);
}

#[test]
fn test_clear_resets_points_curve_and_selection() {
    let mut controller = AppController::new();
    let mut state = state_with_arc(&mut controller);

    // Punkt 1 per Druck selektieren
    controller
        .handle_intent(&mut state, AppIntent::FrameStarted)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                screen_pos: Vec2::new(ARC_PIXELS[1].0, ARC_PIXELS[1].1),
                button: PointerButton::Primary,
            },
        )
        .unwrap();
    assert_eq!(state.editor.selected_index(), Some(1));

    controller
        .handle_intent(&mut state, AppIntent::ClearRequested)
        .expect("ClearRequested sollte funktionieren");

    assert_eq!(state.point_count(), 0);
    assert_eq!(state.sample_count(), 0);
    assert_eq!(state.editor.selected_index(), None);
    assert_eq!(state.curve.status, CurveStatus::Empty);
}

#[test]
fn test_order_change_recomputes_curve() {
    let mut controller = AppController::new();
    let mut state = state_with_arc(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::SetOrderRequested { order: 3 })
        .expect("SetOrderRequested sollte funktionieren");

    assert_eq!(state.params.order, 3);
    assert_eq!(state.curve.effective_order, Some(3));
    assert!(matches!(state.curve.status, CurveStatus::Ready { .. }));
}

#[test]
fn test_order_above_point_count_is_clamped_for_evaluation() {
    let mut controller = AppController::new();
    let mut state = state_with_arc(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::SetOrderRequested { order: 7 })
        .unwrap();

    assert_eq!(state.params.order, 7);
    assert_eq!(state.curve.effective_order, Some(3));
}

#[test]
fn test_step_change_changes_sample_count() {
    let mut controller = AppController::new();
    let mut state = state_with_arc(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::SetSampleStepRequested { step: 0.1 })
        .unwrap();

    assert_eq!(state.sample_count(), 10);
}

#[test]
fn test_hide_curve_keeps_samples_but_hides_in_scene() {
    let mut controller = AppController::new();
    let mut state = state_with_arc(&mut controller);

    controller
        .handle_intent(&mut state, AppIntent::SetShowCurveRequested { visible: false })
        .unwrap();

    let scene = controller.build_render_scene(&state);
    assert!(!scene.show_curve);
    assert!(scene.show_control_points);
    assert_eq!(scene.control_points.len(), 3);
}

#[test]
fn test_reload_shaders_reaches_render_channel() {
    let (sender, receiver) = render_request_channel();
    let mut controller = AppController::with_render_requests(sender);
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ReloadShadersRequested)
        .expect("ReloadShadersRequested sollte funktionieren");

    assert_eq!(
        receiver.try_recv().ok(),
        Some(RenderRequest::ReloadShaders { path: None })
    );
}

#[test]
fn test_reload_shaders_without_renderer_is_harmless() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::ReloadShadersRequested)
        .expect("Ohne Renderer sollte der Reload ignoriert werden");

    assert!(matches!(
        state.command_log.last(),
        Some(AppCommand::RequestShaderReload)
    ));
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");

    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_options_dialog_open_and_close() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::OpenOptionsDialogRequested)
        .unwrap();
    assert!(state.show_options_dialog);

    controller
        .handle_intent(&mut state, AppIntent::CloseOptionsDialogRequested)
        .unwrap();
    assert!(!state.show_options_dialog);
}
