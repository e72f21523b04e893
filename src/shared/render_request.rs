//! Aufträge vom App-Layer an den Renderer.
//!
//! Der Controller besitzt nur einen Sender; der Frame-Loop leert den
//! Kanal und reicht die Aufträge an den Renderer weiter.

use std::path::PathBuf;

/// Auftrag an den Renderer, außerhalb des normalen Szenen-Flusses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderRequest {
    /// Pipelines aus WGSL neu bauen (None = eingebetteter Shader)
    ReloadShaders { path: Option<PathBuf> },
}

/// Sendeseite für Render-Aufträge.
pub type RenderRequestSender = crossbeam_channel::Sender<RenderRequest>;
/// Empfangsseite für Render-Aufträge.
pub type RenderRequestReceiver = crossbeam_channel::Receiver<RenderRequest>;

/// Erstellt einen unbegrenzten Kanal für Render-Aufträge.
pub fn render_request_channel() -> (RenderRequestSender, RenderRequestReceiver) {
    crossbeam_channel::unbounded()
}
