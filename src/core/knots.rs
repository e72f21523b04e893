//! Standard-Knotenvektor (clamped, uniform) für B-Splines.

use super::SplineError;

/// Normierter Knotenvektor der Länge `m + k + 1`.
///
/// Die ersten `k` Einträge sind 0.0, die letzten `k` Einträge 1.0,
/// dazwischen gleichmäßig verteilt mit Abstand `1 / (m - k + 2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector {
    values: Vec<f32>,
    order: usize,
    last_index: usize,
}

impl KnotVector {
    /// Baut den Standard-Knotenvektor für Ordnung `order` (k) und
    /// höchsten Kontrollpunkt-Index `last_index` (m).
    pub fn build(order: usize, last_index: usize) -> Result<Self, SplineError> {
        if order < 2 {
            return Err(SplineError::InvalidOrder { order });
        }
        // m - k + 2 > 0, ohne usize-Unterlauf formuliert
        if last_index + 2 <= order {
            return Err(SplineError::DegenerateKnotSpacing { order, last_index });
        }

        let spacing = 1.0 / (last_index + 2 - order) as f32;
        let len = last_index + order + 1;
        let values = (0..len)
            .map(|i| {
                if i < order {
                    0.0
                } else if i <= last_index {
                    (i + 1 - order) as f32 * spacing
                } else {
                    1.0
                }
            })
            .collect();

        Ok(Self {
            values,
            order,
            last_index,
        })
    }

    /// Ordnung k, für die der Vektor gebaut wurde.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Höchster Kontrollpunkt-Index m.
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Gültiger Parameterbereich `[knots[k-1], knots[m+1])`.
    pub fn domain(&self) -> (f32, f32) {
        (
            self.values[self.order - 1],
            self.values[self.last_index + 1],
        )
    }

    /// Sucht die Knotenspanne `d` mit `knots[d] <= u < knots[d+1]`.
    ///
    /// Lineare Suche, bei Gleichstand gewinnt die erste passende Spanne
    /// (halboffene Intervalle).
    pub fn find_span(&self, u: f32) -> Option<usize> {
        self.values
            .windows(2)
            .position(|w| w[0] <= u && u < w[1])
    }

    /// Read-only Sicht auf die Knotenwerte.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Anzahl der Knoten (`m + k + 1`).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Immer `false` für gültig gebaute Vektoren.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl std::ops::Index<usize> for KnotVector {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_build_has_expected_shape_for_all_valid_inputs() {
        for order in 2..=10 {
            for last_index in (order - 1)..20 {
                let knots = KnotVector::build(order, last_index).expect("gültige Parameter");
                let values = knots.as_slice();

                assert_eq!(values.len(), last_index + order + 1);
                assert!(values.windows(2).all(|w| w[0] <= w[1]), "nicht monoton");
                assert!(values[..order].iter().all(|&v| v == 0.0));
                assert!(values[values.len() - order..].iter().all(|&v| v == 1.0));
            }
        }
    }

    #[test]
    fn test_build_interior_spacing() {
        // k=3, m=5 → spacing = 1/4
        let knots = KnotVector::build(3, 5).unwrap();
        let expected = [0.0, 0.0, 0.0, 0.25, 0.5, 0.75, 1.0, 1.0, 1.0];
        for (value, expected) in knots.as_slice().iter().zip(expected) {
            assert_relative_eq!(*value, expected);
        }
    }

    #[test]
    fn test_build_minimal_point_count() {
        // m = k - 1: keine inneren Knoten
        let knots = KnotVector::build(4, 3).unwrap();
        assert_eq!(knots.as_slice(), &[0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
        assert_eq!(knots.domain(), (0.0, 1.0));
    }

    #[test]
    fn test_build_rejects_degenerate_spacing() {
        assert_eq!(
            KnotVector::build(4, 2),
            Err(SplineError::DegenerateKnotSpacing {
                order: 4,
                last_index: 2
            })
        );
    }

    #[test]
    fn test_build_rejects_order_below_two() {
        assert_eq!(
            KnotVector::build(1, 3),
            Err(SplineError::InvalidOrder { order: 1 })
        );
    }

    #[test]
    fn test_find_span_half_open() {
        // k=2, m=2 → [0, 0, 0.5, 1, 1]
        let knots = KnotVector::build(2, 2).unwrap();
        assert_eq!(knots.find_span(0.0), Some(1));
        assert_eq!(knots.find_span(0.49), Some(1));
        assert_eq!(knots.find_span(0.5), Some(2));
        assert_eq!(knots.find_span(1.0), None);
    }
}
