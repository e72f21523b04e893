use crate::core::PointerButton;
use crate::shared::EditorOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neuer Frame beginnt (setzt "gerade gedrückt"-Flags zurück)
    FrameStarted,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Zeigertaste im Viewport gedrückt (Pixel relativ zum Viewport)
    PointerPressed {
        screen_pos: glam::Vec2,
        button: PointerButton,
    },
    /// Zeiger im Viewport bewegt
    PointerMoved { screen_pos: glam::Vec2 },
    /// Zeigertaste losgelassen
    PointerReleased { button: PointerButton },
    /// Selektierten Kontrollpunkt löschen
    DeleteSelectedRequested,
    /// Alle Kontrollpunkte entfernen
    ClearRequested,
    /// Ordnung k ändern
    SetOrderRequested { order: usize },
    /// Schrittweite der Abtastung ändern
    SetSampleStepRequested { step: f32 },
    /// Kontrollpunkte ein-/ausblenden
    SetShowControlPointsRequested { visible: bool },
    /// Kurve ein-/ausblenden
    SetShowCurveRequested { visible: bool },
    /// Shader neu laden
    ReloadShadersRequested,
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
