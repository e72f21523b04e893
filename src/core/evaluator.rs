//! Lokale De-Boor-Auswertung einer B-Spline-Kurve.
//!
//! Pro Parameterwert werden nur die `k` Kontrollpunkte gelesen, deren Träger
//! die aktuelle Knotenspanne überdeckt. Das hält die Auswertung billig genug,
//! um die komplette Kurve in jedem Frame neu zu berechnen.

use super::{KnotVector, SplineError};
use glam::Vec2;

/// Wertet eine B-Spline-Kurve mit wiederverwendbarem Arbeitspuffer aus.
///
/// Ordnung und höchster Index kommen aus dem Knotenvektor; die Anzahl der
/// Kontrollpunkte muss `m + 1` sein.
pub struct SplineEvaluator<'a> {
    control_points: &'a [Vec2],
    knots: &'a KnotVector,
    scratch: Vec<Vec2>,
}

impl<'a> SplineEvaluator<'a> {
    /// Erstellt einen Evaluator für die gegebenen Kontrollpunkte.
    pub fn new(control_points: &'a [Vec2], knots: &'a KnotVector) -> Result<Self, SplineError> {
        let required = knots.last_index() + 1;
        if control_points.len() != required {
            return Err(SplineError::InsufficientControlPoints {
                required,
                available: control_points.len(),
            });
        }
        Ok(Self {
            control_points,
            knots,
            scratch: Vec::with_capacity(knots.order()),
        })
    }

    /// Berechnet den Kurvenpunkt für `u ∈ [knots[k-1], knots[m+1])`.
    pub fn point_at(&mut self, u: f32) -> Result<Vec2, SplineError> {
        let order = self.knots.order();
        let last_index = self.knots.last_index();
        let (start, end) = self.knots.domain();
        let out_of_domain = SplineError::ParameterOutOfDomain { u, start, end };

        if !(u >= start && u < end) {
            return Err(out_of_domain);
        }
        let span = self.knots.find_span(u).ok_or(out_of_domain)?;
        if span + 1 < order || span > last_index {
            return Err(out_of_domain);
        }

        // C[i] = P[d - i] für die k aktiven Kontrollpunkte
        let control_points = self.control_points;
        self.scratch.clear();
        self.scratch
            .extend((0..order).map(|i| control_points[span - i]));

        let knots = self.knots;
        for r in (2..=order).rev() {
            for s in 0..=(r - 2) {
                let i = span - s;
                let denom = knots[i + r - 1] - knots[i];
                if denom <= 0.0 {
                    return Err(SplineError::CoincidentKnots {
                        span,
                        knot_index: i,
                    });
                }
                let omega = (u - knots[i]) / denom;
                self.scratch[s] = omega * self.scratch[s] + (1.0 - omega) * self.scratch[s + 1];
            }
        }

        Ok(self.scratch[0])
    }
}

/// Einmalige Auswertung ohne Puffer-Wiederverwendung.
pub fn evaluate(control_points: &[Vec2], knots: &KnotVector, u: f32) -> Result<Vec2, SplineError> {
    SplineEvaluator::new(control_points, knots)?.point_at(u)
}
