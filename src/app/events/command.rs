use crate::core::PointerButton;
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Per-Frame-Flags zurücksetzen
    BeginFrame,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Hit-Test und Hinzufügen/Drag-Start/Löschen
    PressPointer {
        screen_pos: glam::Vec2,
        button: PointerButton,
        hit_threshold_px: f32,
    },
    /// Drag-Update
    MovePointer { screen_pos: glam::Vec2 },
    /// Drag beenden
    ReleasePointer { button: PointerButton },
    /// Selektierten Punkt löschen
    DeleteSelectedPoint,
    /// Alle Punkte entfernen
    ClearPoints,
    /// Ordnung k setzen (wird geklemmt)
    SetOrder { order: usize },
    /// Schrittweite setzen (wird geklemmt)
    SetSampleStep { step: f32 },
    /// Sichtbarkeit der Kontrollpunkte setzen
    SetShowControlPoints { visible: bool },
    /// Sichtbarkeit der Kurve setzen
    SetShowCurve { visible: bool },
    /// Shader-Reload beim Renderer anfordern
    RequestShaderReload,
    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schliessen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
