use bspline_editor::{
    AppController, AppIntent, AppState, DragState, PointerButton, ViewportTransform,
};
use glam::Vec2;

fn run(controller: &mut AppController, state: &mut AppState, intents: Vec<AppIntent>) {
    for intent in intents {
        controller
            .handle_intent(state, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }
}

fn press(pos: Vec2, button: PointerButton) -> AppIntent {
    AppIntent::PointerPressed {
        screen_pos: pos,
        button,
    }
}

fn click(controller: &mut AppController, state: &mut AppState, pos: Vec2, button: PointerButton) {
    run(
        controller,
        state,
        vec![
            AppIntent::FrameStarted,
            press(pos, button),
            AppIntent::PointerReleased { button },
        ],
    );
}

fn state_with_points(controller: &mut AppController, pixels: &[Vec2]) -> AppState {
    let mut state = AppState::new();
    run(
        controller,
        &mut state,
        vec![AppIntent::ViewportResized {
            size: [640.0, 480.0],
        }],
    );
    for &pos in pixels {
        click(controller, &mut state, pos, PointerButton::Primary);
    }
    state
}

fn positions(state: &AppState) -> Vec<Vec2> {
    state.editor.points().positions()
}

#[test]
fn test_primary_click_on_empty_space_appends_point() {
    let mut controller = AppController::new();
    let state = state_with_points(&mut controller, &[Vec2::new(319.5, 239.5)]);

    assert_eq!(state.point_count(), 1);
    let point = state.editor.points().get(0).expect("Punkt existiert");
    assert!(point.position.abs_diff_eq(Vec2::ZERO, 1e-6));
    assert_eq!(point.color, state.options.control_point_color);
    assert_eq!(state.editor.drag_state(), DragState::Idle);
}

#[test]
fn test_point_is_hit_at_its_placement_position() {
    let mut controller = AppController::new();
    let pixel = Vec2::new(123.0, 77.0);
    let mut state = state_with_points(&mut controller, &[pixel]);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::FrameStarted, press(pixel, PointerButton::Primary)],
    );

    assert_eq!(state.point_count(), 1, "Treffer darf keinen Punkt anhängen");
    assert_eq!(state.editor.selected_index(), Some(0));
    assert_eq!(state.editor.drag_state(), DragState::Dragging);
}

#[test]
fn test_click_beyond_threshold_misses_and_adds_point() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&mut controller, &[Vec2::new(100.0, 100.0)]);
    let threshold = state.options.hit_threshold_px;

    click(
        &mut controller,
        &mut state,
        Vec2::new(100.0 + threshold + 1.0, 100.0),
        PointerButton::Primary,
    );

    assert_eq!(state.point_count(), 2);
    assert_eq!(state.editor.selected_index(), None);
}

#[test]
fn test_drag_moves_selected_point_after_press_frame() {
    let mut controller = AppController::new();
    let start = Vec2::new(200.0, 200.0);
    let target = Vec2::new(400.0, 100.0);
    let mut state = state_with_points(&mut controller, &[start, Vec2::new(50.0, 50.0)]);
    let before = positions(&state);

    // Bewegung im Frame des Drucks wird ignoriert
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::FrameStarted,
            press(start, PointerButton::Primary),
            AppIntent::PointerMoved { screen_pos: target },
        ],
    );
    assert_eq!(positions(&state), before);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::FrameStarted,
            AppIntent::PointerMoved { screen_pos: target },
        ],
    );

    let expected = ViewportTransform::new(Vec2::new(640.0, 480.0)).screen_to_curve(target);
    let after = positions(&state);
    assert_eq!(after.len(), 2);
    assert!(after[0].abs_diff_eq(expected, 1e-6));
    assert_eq!(after[1], before[1]);

    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::FrameStarted,
            AppIntent::PointerReleased {
                button: PointerButton::Primary,
            },
        ],
    );
    assert_eq!(state.editor.drag_state(), DragState::Idle);
    assert_eq!(state.editor.selected_index(), Some(0), "Selektion bleibt");

    // Nach dem Loslassen verschiebt eine Bewegung nichts mehr
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::FrameStarted,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(10.0, 10.0),
            },
        ],
    );
    assert!(positions(&state)[0].abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_secondary_click_deletes_and_shifts_indices() {
    let mut controller = AppController::new();
    let pixels = [
        Vec2::new(100.0, 100.0),
        Vec2::new(200.0, 100.0),
        Vec2::new(300.0, 100.0),
    ];
    let mut state = state_with_points(&mut controller, &pixels);
    let before = positions(&state);

    click(&mut controller, &mut state, pixels[1], PointerButton::Secondary);

    let after = positions(&state);
    assert_eq!(after.len(), 2);
    assert_eq!(after[0], before[0]);
    assert_eq!(after[1], before[2]);
    assert_eq!(state.editor.selected_index(), None);
}

#[test]
fn test_secondary_click_on_empty_space_is_noop() {
    let mut controller = AppController::new();
    let mut state = state_with_points(&mut controller, &[Vec2::new(100.0, 100.0)]);

    click(
        &mut controller,
        &mut state,
        Vec2::new(500.0, 400.0),
        PointerButton::Secondary,
    );

    assert_eq!(state.point_count(), 1);
}

#[test]
fn test_secondary_miss_drops_selection_before_delete_key() {
    let mut controller = AppController::new();
    let pixel = Vec2::new(100.0, 100.0);
    let mut state = state_with_points(&mut controller, &[pixel]);

    click(&mut controller, &mut state, pixel, PointerButton::Primary);
    assert_eq!(state.editor.selected_index(), Some(0));

    click(
        &mut controller,
        &mut state,
        Vec2::new(500.0, 400.0),
        PointerButton::Secondary,
    );
    assert_eq!(state.editor.selected_index(), None);

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::DeleteSelectedRequested],
    );
    assert_eq!(state.point_count(), 1);
}

#[test]
fn test_delete_key_removes_selected_point() {
    let mut controller = AppController::new();
    let pixels = [Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0)];
    let mut state = state_with_points(&mut controller, &pixels);
    let before = positions(&state);

    click(&mut controller, &mut state, pixels[0], PointerButton::Primary);
    assert_eq!(state.editor.selected_index(), Some(0));

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::DeleteSelectedRequested],
    );

    assert_eq!(positions(&state), vec![before[1]]);
    assert_eq!(state.editor.selected_index(), None);
}

#[test]
fn test_stale_selection_after_clear_is_harmless() {
    let mut controller = AppController::new();
    let pixels = [Vec2::new(100.0, 100.0), Vec2::new(300.0, 300.0)];
    let mut state = state_with_points(&mut controller, &pixels);

    // Drag auf Punkt 1 beginnen, dann mitten im Drag alles löschen
    run(
        &mut controller,
        &mut state,
        vec![
            AppIntent::FrameStarted,
            press(pixels[1], PointerButton::Primary),
            AppIntent::ClearRequested,
            AppIntent::FrameStarted,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(10.0, 10.0),
            },
            AppIntent::DeleteSelectedRequested,
            AppIntent::PointerReleased {
                button: PointerButton::Primary,
            },
        ],
    );

    assert_eq!(state.point_count(), 0);
    assert_eq!(state.editor.selected_index(), None);
    assert_eq!(state.editor.drag_state(), DragState::Idle);
    assert_eq!(state.sample_count(), 0);
}

#[test]
fn test_clicks_are_ignored_while_viewport_is_invalid() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    run(
        &mut controller,
        &mut state,
        vec![AppIntent::ViewportResized { size: [0.0, 0.0] }],
    );
    click(
        &mut controller,
        &mut state,
        Vec2::new(10.0, 10.0),
        PointerButton::Primary,
    );

    assert_eq!(state.point_count(), 0);
}
