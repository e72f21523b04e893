//! Abtastung der Kurve in festen Parameterschritten für die Darstellung.

use super::{KnotVector, SplineError, SplineEvaluator};
use glam::Vec2;

/// Höchstzahl an Samples pro Abtastung; feinere Schrittweiten gelten als ungültig.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Ein ausgewerteter Kurvenpunkt inkl. Anzeigefarbe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Position im Kurvenraum ([-1, 1], y nach oben)
    pub position: Vec2,
    /// RGBA-Farbe
    pub color: [f32; 4],
}

/// Ergebnis einer vollständigen Abtastung.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveSamples {
    /// Nach aufsteigendem `u` geordnete Punkte (als Line-Strip verbindbar)
    pub points: Vec<CurvePoint>,
    /// Anzahl übersprungener Samples wegen zusammenfallender Knoten
    pub skipped: usize,
}

impl CurveSamples {
    /// Gibt `true` zurück, wenn keine Punkte erzeugt wurden.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Tastet die B-Spline der Ordnung `order` über ihren gültigen Parameterbereich ab.
///
/// - Weniger als 2 Kontrollpunkte → leere Sequenz (keine Kurve).
/// - Weniger Kontrollpunkte als `order` → `InsufficientControlPoints`;
///   der Aufrufer unterdrückt die Kurve für diesen Frame.
/// - `u_i = start + i * step` solange `u_i < end`; identische Eingaben liefern
///   bitgleiche Ausgaben.
/// - Mehr als [`MAX_SAMPLES`] Schritte über den Parameterbereich → `InvalidStep`.
pub fn sample(
    control_points: &[Vec2],
    order: usize,
    step: f32,
    color: [f32; 4],
) -> Result<CurveSamples, SplineError> {
    if control_points.len() < 2 {
        return Ok(CurveSamples::default());
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(SplineError::InvalidStep { step });
    }
    if control_points.len() < order {
        return Err(SplineError::InsufficientControlPoints {
            required: order,
            available: control_points.len(),
        });
    }

    let knots = KnotVector::build(order, control_points.len() - 1)?;
    let (start, end) = knots.domain();
    let mut evaluator = SplineEvaluator::new(control_points, &knots)?;

    let steps = (end - start) / step;
    if !(steps <= MAX_SAMPLES as f32) {
        return Err(SplineError::InvalidStep { step });
    }
    // +1 wegen Rundung von `steps`; das Abbruchkriterium bleibt `u >= end`
    let count = steps as usize + 1;

    let mut samples = CurveSamples {
        points: Vec::with_capacity(count),
        skipped: 0,
    };

    for i in 0..=count {
        let u = start + i as f32 * step;
        if u >= end {
            break;
        }
        match evaluator.point_at(u) {
            Ok(position) => samples.points.push(CurvePoint { position, color }),
            Err(SplineError::CoincidentKnots { span, knot_index }) => {
                log::debug!(
                    "Sample u={:.4} übersprungen (Spanne {}, Knoten {})",
                    u,
                    span,
                    knot_index
                );
                samples.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(samples)
}
