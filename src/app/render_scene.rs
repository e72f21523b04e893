//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;
use std::sync::Arc;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    let viewport = state.editor.viewport();

    RenderScene {
        control_points: Arc::from(state.editor.points().as_slice()),
        curve: state.curve.samples.clone(),
        show_control_points: state.params.show_control_points,
        show_curve: state.params.show_curve,
        selected_index: state.editor.selected_index(),
        selected_point_color: state.options.selected_point_color,
        viewport_size: viewport.size.to_array(),
        point_size_px: state.options.point_size_px,
        background_color: state.options.background_color,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::use_cases;
    use crate::app::AppState;
    use glam::Vec2;

    #[test]
    fn build_reflects_points_curve_and_toggles() {
        let mut state = AppState::new();
        state.editor.set_viewport_size(Vec2::new(1280.0, 720.0));
        for p in [(-0.5f32, 0.0f32), (0.0, 0.5), (0.5, 0.0)] {
            state.editor.push_point(Vec2::new(p.0, p.1));
        }
        use_cases::curve::recompute(&mut state);
        state.params.show_curve = false;

        let scene = build(&state);

        assert_eq!(scene.control_points.len(), 3);
        assert_eq!(scene.curve.len(), state.sample_count());
        assert!(!scene.show_curve);
        assert!(scene.show_control_points);
        assert_eq!(scene.viewport_size, [1280.0, 720.0]);
        assert_eq!(scene.selected_index, None);
        assert!(scene.has_geometry());
    }
}
