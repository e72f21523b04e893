//! Zentrale Konfiguration für den B-Spline-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Interaktion ─────────────────────────────────────────────────────

/// Treffer-Schwelle für Kontrollpunkte in Screen-Pixeln (strikt kleiner).
pub const HIT_THRESHOLD_PX: f32 = 6.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Kantenlänge der Kontrollpunkt-Quadrate in Pixeln.
pub const POINT_SIZE_PX: f32 = 6.0;
/// Farbe unselektierter Kontrollpunkte (RGBA: Grün).
pub const CONTROL_POINT_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Farbe des selektierten Kontrollpunkts (RGBA: Magenta).
pub const SELECTED_POINT_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe der abgetasteten Kurve (RGBA: Orange-Gelb).
pub const CURVE_COLOR: [f32; 4] = [1.0, 0.75, 0.2, 1.0];
/// Hintergrundfarbe des Viewports.
pub const BACKGROUND_COLOR: [f32; 4] = [0.08, 0.08, 0.1, 1.0];

// ── Kurvenparameter ─────────────────────────────────────────────────

/// Kleinste zulässige Ordnung (linear).
pub const MIN_ORDER: usize = 2;
/// Obergrenze der Ordnung im Parameter-Panel.
pub const MAX_ORDER: usize = 10;
/// Start-Ordnung beim Programmstart.
pub const DEFAULT_ORDER: usize = 2;
/// Start-Schrittweite im Parameterraum.
pub const DEFAULT_STEP: f32 = 0.2;
/// Untere Grenze der Schrittweite.
pub const MIN_STEP: f32 = 0.001;
/// Absolute Untergrenze für `min_step`, auch bei von Hand editierter Konfiguration.
pub const STEP_FLOOR: f32 = 0.0001;
/// Obere Grenze der Schrittweite.
pub const MAX_STEP: f32 = 1.0;

/// Dateiname der Optionen-Datei neben der Binary.
pub const CONFIG_FILE_NAME: &str = "bspline_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bspline_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Interaktion ─────────────────────────────────────────────
    /// Treffer-Schwelle für Hit-Tests in Pixeln
    pub hit_threshold_px: f32,

    // ── Darstellung ─────────────────────────────────────────────
    /// Kantenlänge der Kontrollpunkte in Pixeln
    pub point_size_px: f32,
    /// Farbe unselektierter Kontrollpunkte
    pub control_point_color: [f32; 4],
    /// Farbe des selektierten Kontrollpunkts
    pub selected_point_color: [f32; 4],
    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Hintergrundfarbe
    pub background_color: [f32; 4],

    // ── Kurve ───────────────────────────────────────────────────
    /// Obergrenze der Ordnung k
    pub max_order: usize,
    /// Ordnung beim Start
    pub default_order: usize,
    /// Schrittweite beim Start
    pub default_step: f32,
    /// Kleinste einstellbare Schrittweite
    pub min_step: f32,
    /// Größte einstellbare Schrittweite
    pub max_step: f32,
    /// Ordnung bei zu wenigen Punkten auf die Punktanzahl begrenzen
    /// (sonst wird die Kurve unterdrückt)
    pub clamp_order_to_point_count: bool,

    // ── Shader ──────────────────────────────────────────────────
    /// Optionaler WGSL-Pfad für Hot-Reload (None = eingebetteter Shader)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shader_path: Option<PathBuf>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            hit_threshold_px: HIT_THRESHOLD_PX,

            point_size_px: POINT_SIZE_PX,
            control_point_color: CONTROL_POINT_COLOR,
            selected_point_color: SELECTED_POINT_COLOR,
            curve_color: CURVE_COLOR,
            background_color: BACKGROUND_COLOR,

            max_order: MAX_ORDER,
            default_order: DEFAULT_ORDER,
            default_step: DEFAULT_STEP,
            min_step: MIN_STEP,
            max_step: MAX_STEP,
            clamp_order_to_point_count: true,

            shader_path: None,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("bspline_editor"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Bringt von Hand editierte Werte in einen konsistenten Bereich.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if !(self.hit_threshold_px.is_finite() && self.hit_threshold_px > 0.0) {
            self.hit_threshold_px = defaults.hit_threshold_px;
        }
        if !(self.point_size_px.is_finite() && self.point_size_px > 0.0) {
            self.point_size_px = defaults.point_size_px;
        }
        self.max_order = self.max_order.max(MIN_ORDER);
        self.default_order = self.default_order.clamp(MIN_ORDER, self.max_order);
        if !(self.min_step.is_finite() && self.min_step > 0.0) {
            self.min_step = defaults.min_step;
        }
        self.min_step = self.min_step.max(STEP_FLOOR);
        if !(self.max_step.is_finite() && self.max_step >= self.min_step) {
            self.max_step = defaults.max_step.max(self.min_step);
        }
        self.default_step = if self.default_step.is_finite() {
            self.default_step.clamp(self.min_step, self.max_step)
        } else {
            defaults.default_step.clamp(self.min_step, self.max_step)
        };
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_round_trip_keeps_values() {
        let options = EditorOptions {
            hit_threshold_px: 9.0,
            max_order: 6,
            shader_path: Some(PathBuf::from("shaders/custom.wgsl")),
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&options).unwrap();
        let parsed: EditorOptions = toml::from_str(&text).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: EditorOptions = toml::from_str("hit_threshold_px = 4.0\n").unwrap();
        assert_eq!(parsed.hit_threshold_px, 4.0);
        assert_eq!(parsed.max_order, MAX_ORDER);
        assert_eq!(parsed.curve_color, CURVE_COLOR);
        assert!(parsed.clamp_order_to_point_count);
    }

    #[test]
    fn test_sanitized_repairs_inconsistent_values() {
        let options = EditorOptions {
            hit_threshold_px: -1.0,
            max_order: 1,
            default_order: 7,
            min_step: 0.0,
            default_step: 5.0,
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(options.hit_threshold_px, HIT_THRESHOLD_PX);
        assert_eq!(options.max_order, MIN_ORDER);
        assert_eq!(options.default_order, MIN_ORDER);
        assert_eq!(options.min_step, MIN_STEP);
        assert_eq!(options.default_step, MAX_STEP);
    }

    #[test]
    fn test_sanitized_floors_tiny_min_step() {
        let options = EditorOptions {
            min_step: 1e-20,
            default_step: 1e-20,
            ..EditorOptions::default()
        }
        .sanitized();
        assert_eq!(options.min_step, STEP_FLOOR);
        assert_eq!(options.default_step, STEP_FLOOR);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("bspline_editor_does_not_exist.toml");
        assert_eq!(EditorOptions::load_from_file(&path), EditorOptions::default());
    }
}
