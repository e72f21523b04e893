//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
mod intent_mapping;
pub mod render_scene;
/// Application State
///
/// Kontrollpunkte, Kurvenparameter, abgeleitete Kurve und Optionen.
pub mod state;
pub mod use_cases;

pub use command_log::{describe_command, CommandLog};
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, CurveParams, CurveState, CurveStatus};
