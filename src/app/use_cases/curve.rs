//! Use-Cases: Kurvenparameter ändern und die Kurve neu abtasten.

use crate::app::state::CurveStatus;
use crate::app::AppState;
use crate::core::{sample, SplineError};
use crate::shared::options::MIN_ORDER;
use std::sync::Arc;

/// Setzt die Ordnung k, geklemmt auf `[2, max_order]`.
pub fn set_order(state: &mut AppState, order: usize) {
    let max_order = state.options.max_order.max(MIN_ORDER);
    let clamped = order.clamp(MIN_ORDER, max_order);
    if clamped != order {
        log::warn!(
            "Ordnung {} außerhalb [{}, {}], verwende {}",
            order,
            MIN_ORDER,
            max_order,
            clamped
        );
    }
    if clamped != state.params.order {
        log::info!("Ordnung: {} → {}", state.params.order, clamped);
        state.params.order = clamped;
        state.curve.mark_dirty();
    }
}

/// Setzt die Schrittweite, geklemmt auf `[min_step, max_step]`.
///
/// Nicht-endliche Werte werden verworfen.
pub fn set_sample_step(state: &mut AppState, step: f32) {
    if !step.is_finite() {
        log::warn!("Ungültige Schrittweite {} ignoriert", step);
        return;
    }
    let clamped = step.clamp(state.options.min_step, state.options.max_step);
    if clamped != step {
        log::warn!(
            "Schrittweite {} außerhalb [{}, {}], verwende {}",
            step,
            state.options.min_step,
            state.options.max_step,
            clamped
        );
    }
    if clamped != state.params.step {
        log::info!("Schrittweite: {} → {}", state.params.step, clamped);
        state.params.step = clamped;
        state.curve.mark_dirty();
    }
}

/// Kontrollpunkte ein-/ausblenden.
pub fn set_show_control_points(state: &mut AppState, visible: bool) {
    state.params.show_control_points = visible;
}

/// Kurve ein-/ausblenden.
pub fn set_show_curve(state: &mut AppState, visible: bool) {
    state.params.show_curve = visible;
}

/// Bringt die Parameter nach einem Options-Wechsel in die neuen Grenzen.
pub fn reclamp_params(state: &mut AppState) {
    let order = state.params.order;
    let step = state.params.step;
    state.params.order = order.clamp(MIN_ORDER, state.options.max_order.max(MIN_ORDER));
    state.params.step = step.clamp(state.options.min_step, state.options.max_step);
    state.curve.mark_dirty();
}

/// Ordnung, mit der bei `point_count` Punkten tatsächlich ausgewertet wird.
///
/// `None`, wenn die Kurve unterdrückt werden muss.
pub fn effective_order(requested: usize, point_count: usize, clamp_to_count: bool) -> Option<usize> {
    if point_count < 2 {
        None
    } else if point_count >= requested {
        Some(requested)
    } else if clamp_to_count {
        Some(point_count)
    } else {
        None
    }
}

/// Tastet die Kurve aus den aktuellen Kontrollpunkten neu ab.
///
/// Ersetzt die Samples komplett; veraltete Daten bleiben nie stehen.
pub fn recompute(state: &mut AppState) {
    let positions = state.editor.points().positions();
    let available = positions.len();
    let requested = state.params.order;

    state.curve.dirty = false;
    state.curve.samples = Arc::from(Vec::new());
    state.curve.effective_order = None;

    if available < 2 {
        state.curve.status = CurveStatus::Empty;
        return;
    }

    let Some(order) = effective_order(
        requested,
        available,
        state.options.clamp_order_to_point_count,
    ) else {
        log::debug!(
            "Kurve unterdrückt: Ordnung {} benötigt {} Punkte, vorhanden {}",
            requested,
            requested,
            available
        );
        state.curve.status = CurveStatus::InsufficientPoints {
            required: requested,
            available,
        };
        return;
    };

    match sample(
        &positions,
        order,
        state.params.step,
        state.options.curve_color,
    ) {
        Ok(samples) => {
            log::debug!(
                "Kurve neu abgetastet: {} Punkte (k={}, übersprungen {})",
                samples.points.len(),
                order,
                samples.skipped
            );
            state.curve.status = CurveStatus::Ready {
                samples: samples.points.len(),
                skipped: samples.skipped,
            };
            state.curve.samples = Arc::from(samples.points);
            state.curve.effective_order = Some(order);
        }
        Err(SplineError::InsufficientControlPoints {
            required,
            available,
        }) => {
            state.curve.status = CurveStatus::InsufficientPoints {
                required,
                available,
            };
        }
        Err(error) => {
            log::warn!("Kurve nicht berechenbar: {}", error);
            state.curve.status = CurveStatus::Failed { error };
        }
    }
}

/// Neuberechnung nur, wenn sich seit der letzten Berechnung etwas geändert hat.
pub fn recompute_if_dirty(state: &mut AppState) {
    if state.curve.dirty {
        recompute(state);
    }
}
