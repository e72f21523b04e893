//! Fehlertypen der numerischen Kurven-Auswertung.

use thiserror::Error;

/// Fehler beim Aufbau des Knotenvektors oder bei der Spline-Auswertung.
///
/// Alle Varianten sind lokal und behebbar: der Aufrufer unterdrückt die
/// Kurve für diesen Frame, statt den Fehler weiterzureichen.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SplineError {
    /// Ordnung kleiner als 2.
    #[error("Ungültige Ordnung k={order} (mindestens 2)")]
    InvalidOrder { order: usize },

    /// `m - k + 2 <= 0`: zu wenige Kontrollpunkte für die Ordnung.
    #[error("Degenerierter Knotenabstand: k={order}, m={last_index}")]
    DegenerateKnotSpacing { order: usize, last_index: usize },

    /// Zwei für die Blend-Gewichtung relevante Knoten fallen zusammen.
    #[error("Zusammenfallende Knoten in Spanne {span} (Knoten-Index {knot_index})")]
    CoincidentKnots { span: usize, knot_index: usize },

    /// Parameter liegt außerhalb von `[knots[k-1], knots[m+1])`.
    #[error("Parameter u={u} außerhalb des Definitionsbereichs [{start}, {end})")]
    ParameterOutOfDomain { u: f32, start: f32, end: f32 },

    /// Schrittweite nicht positiv oder nicht endlich.
    #[error("Ungültige Schrittweite {step}")]
    InvalidStep { step: f32 },

    /// Weniger Kontrollpunkte als die Auswertung benötigt.
    #[error("Zu wenige Kontrollpunkte: {available} vorhanden, {required} benötigt")]
    InsufficientControlPoints { required: usize, available: usize },
}
