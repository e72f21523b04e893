//! Numerischer Kern: Knotenvektor, De-Boor-Auswertung, Abtastung und das
//! Bearbeitungsmodell der Kontrollpunkte.

pub mod control_points;
pub mod editor;
pub mod error;
pub mod evaluator;
pub mod knots;
pub mod sampler;
pub mod selection;
pub mod viewport;

pub use control_points::{ControlPoint, ControlPointList};
pub use editor::{ControlPointEditor, DragState, EditOutcome, DEFAULT_POINT_COLOR};
pub use error::SplineError;
pub use evaluator::{evaluate, SplineEvaluator};
pub use knots::KnotVector;
pub use sampler::{sample, CurvePoint, CurveSamples, MAX_SAMPLES};
pub use selection::{PointerButton, SelectionState};
pub use viewport::ViewportTransform;
