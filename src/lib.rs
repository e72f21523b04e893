//! BSpline-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, CurveParams, CurveStatus};
pub use core::{
    sample, ControlPoint, ControlPointEditor, ControlPointList, CurvePoint, CurveSamples,
    DragState, EditOutcome, KnotVector, PointerButton, SplineError, SplineEvaluator,
    ViewportTransform,
};
pub use shared::{EditorOptions, RenderScene};
