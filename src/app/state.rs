//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{ControlPointEditor, CurvePoint, SplineError};
use crate::shared::options::MIN_ORDER;
use crate::shared::EditorOptions;
use std::sync::Arc;

/// Vom Parameter-Panel gesteuerte Kurvenparameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Angeforderte Ordnung k (Grad + 1)
    pub order: usize,
    /// Schrittweite im Parameterraum
    pub step: f32,
    /// Kontrollpunkte zeichnen
    pub show_control_points: bool,
    /// Kurve zeichnen
    pub show_curve: bool,
}

impl CurveParams {
    /// Startwerte aus den Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            order: options.default_order.clamp(MIN_ORDER, options.max_order.max(MIN_ORDER)),
            step: options.default_step.clamp(options.min_step, options.max_step),
            show_control_points: true,
            show_curve: true,
        }
    }
}

impl Default for CurveParams {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Ergebnis der letzten Neuberechnung (für die Statusleiste).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveStatus {
    /// Weniger als 2 Kontrollpunkte
    Empty,
    /// Ordnung größer als Punktanzahl, Kurve unterdrückt
    InsufficientPoints { required: usize, available: usize },
    /// Kurve abgetastet
    Ready { samples: usize, skipped: usize },
    /// Numerischer Fehler, Kurve für diesen Stand unterdrückt
    Failed { error: SplineError },
}

/// Abgeleitete Kurvendaten, ersetzt bei jeder Neuberechnung komplett.
#[derive(Debug, Clone)]
pub struct CurveState {
    /// Abgetastete Punkte (Arc für O(1)-Clone in RenderScene)
    pub samples: Arc<[CurvePoint]>,
    /// Status der letzten Berechnung
    pub status: CurveStatus,
    /// Tatsächlich verwendete Ordnung (nach Klemmung), falls berechnet
    pub effective_order: Option<usize>,
    /// Kontrollpunkte oder Parameter haben sich seit der letzten Berechnung geändert
    pub dirty: bool,
}

impl Default for CurveState {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveState {
    /// Leere Kurve, Neuberechnung ausstehend.
    pub fn new() -> Self {
        Self {
            samples: Arc::from(Vec::new()),
            status: CurveStatus::Empty,
            effective_order: None,
            dirty: true,
        }
    }

    /// Markiert die Kurve zur Neuberechnung.
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kontrollpunkte, Selektion und Viewport
    pub editor: ControlPointEditor,
    /// Kurvenparameter aus dem Panel
    pub params: CurveParams,
    /// Abgetastete Kurve
    pub curve: CurveState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Grenzen)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Temporäre Statusnachricht (z.B. Ergebnis eines Shader-Reloads)
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den gegebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        let mut editor = ControlPointEditor::new();
        editor.set_point_color(options.control_point_color);
        Self {
            editor,
            params: CurveParams::from_options(&options),
            curve: CurveState::new(),
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            status_message: None,
            should_exit: false,
        }
    }

    /// Gibt die Anzahl der Kontrollpunkte zurück (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.editor.points().len()
    }

    /// Gibt die Anzahl der Kurvenpunkte zurück (für UI-Anzeige)
    pub fn sample_count(&self) -> usize {
        self.curve.samples.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
