//! Handler für Viewport, Kurvenparameter und Shader-Reload.

use crate::app::use_cases;
use crate::app::AppState;
use crate::shared::{RenderRequest, RenderRequestSender};

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}

/// Setzt die Ordnung k.
pub fn set_order(state: &mut AppState, order: usize) {
    use_cases::curve::set_order(state, order);
}

/// Setzt die Schrittweite der Abtastung.
pub fn set_sample_step(state: &mut AppState, step: f32) {
    use_cases::curve::set_sample_step(state, step);
}

/// Blendet die Kontrollpunkte ein/aus.
pub fn set_show_control_points(state: &mut AppState, visible: bool) {
    use_cases::curve::set_show_control_points(state, visible);
}

/// Blendet die Kurve ein/aus.
pub fn set_show_curve(state: &mut AppState, visible: bool) {
    use_cases::curve::set_show_curve(state, visible);
}

/// Schickt einen Reload-Auftrag an den Renderer.
///
/// Ohne angebundenen Renderer (z.B. in Tests) wird der Auftrag nur geloggt.
pub fn request_shader_reload(
    state: &mut AppState,
    render_requests: Option<&RenderRequestSender>,
) -> anyhow::Result<()> {
    let Some(sender) = render_requests else {
        log::warn!("Shader-Reload angefordert, aber kein Renderer angebunden");
        return Ok(());
    };
    let path = state.options.shader_path.clone();
    log::info!(
        "Shader-Reload angefordert ({})",
        path.as_ref()
            .map_or_else(|| "eingebettet".to_string(), |p| p.display().to_string())
    );
    sender
        .send(RenderRequest::ReloadShaders { path })
        .map_err(|e| anyhow::anyhow!("Renderer nicht erreichbar: {}", e))?;
    state.status_message = Some("Shader-Reload angefordert".to_string());
    Ok(())
}
