//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use crate::core::{ControlPoint, CurvePoint};
use std::sync::Arc;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kontrollpunkte in Spline-Reihenfolge (Kurvenraum)
    pub control_points: Arc<[ControlPoint]>,
    /// Abgetastete Kurve, als Line-Strip zu zeichnen
    pub curve: Arc<[CurvePoint]>,
    /// Kontrollpunkte zeichnen
    pub show_control_points: bool,
    /// Kurve zeichnen
    pub show_curve: bool,
    /// Index des hervorzuhebenden Punkts
    pub selected_index: Option<usize>,
    /// Farbe für den selektierten Punkt
    pub selected_point_color: [f32; 4],
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Kantenlänge der Punkt-Quadrate in Pixeln
    pub point_size_px: f32,
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
}

impl RenderScene {
    /// Gibt zurück, ob überhaupt etwas gezeichnet werden muss.
    pub fn has_geometry(&self) -> bool {
        (self.show_control_points && !self.control_points.is_empty())
            || (self.show_curve && self.curve.len() >= 2)
    }
}
