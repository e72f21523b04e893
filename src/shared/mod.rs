//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `render` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_request;
mod render_scene;

pub use options::EditorOptions;
pub use options::{MAX_ORDER, MIN_ORDER, STEP_FLOOR};
pub use render_request::{
    render_request_channel, RenderRequest, RenderRequestReceiver, RenderRequestSender,
};
pub use render_scene::RenderScene;
