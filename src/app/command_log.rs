//! Verlauf der Bearbeitungs-Commands für die Status-Bar.
//!
//! Per-Frame-Rauschen (Frame-Beginn, Mausbewegung, Resize) wird nicht
//! aufgezeichnet, sonst wäre der Verlauf nach Sekunden nur noch Rauschen.

use super::AppCommand;
use crate::core::PointerButton;
use std::collections::VecDeque;

/// Begrenzter Verlauf der zuletzt ausgeführten Bearbeitungs-Commands.
#[derive(Default)]
pub struct CommandLog {
    entries: VecDeque<AppCommand>,
    total: usize,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 256;

    /// Erstellt einen leeren Verlauf.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen ausgeführten Command auf, sofern er keine Per-Frame-Meldung ist.
    pub fn record(&mut self, command: &AppCommand) {
        if is_frame_noise(command) {
            return;
        }
        if self.entries.len() == Self::MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(command.clone());
        self.total += 1;
    }

    /// Anzahl der gehaltenen Einträge.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Anzahl aller jemals aufgezeichneten Commands (auch verdrängte).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Zuletzt aufgezeichneter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.back()
    }

    /// Die letzten `count` Commands, neueste zuerst.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &AppCommand> {
        self.entries.iter().rev().take(count)
    }
}

fn is_frame_noise(command: &AppCommand) -> bool {
    matches!(
        command,
        AppCommand::BeginFrame
            | AppCommand::MovePointer { .. }
            | AppCommand::SetViewportSize { .. }
    )
}

/// Kurzbeschreibung eines Commands für die Anzeige.
pub fn describe_command(command: &AppCommand) -> String {
    match command {
        AppCommand::BeginFrame => "Frame".to_string(),
        AppCommand::SetViewportSize { size } => {
            format!("Viewport {:.0}×{:.0}", size[0], size[1])
        }
        AppCommand::PressPointer {
            button: PointerButton::Primary,
            ..
        } => "Linksklick".to_string(),
        AppCommand::PressPointer {
            button: PointerButton::Secondary,
            ..
        } => "Rechtsklick".to_string(),
        AppCommand::MovePointer { .. } => "Ziehen".to_string(),
        AppCommand::ReleasePointer { .. } => "Loslassen".to_string(),
        AppCommand::DeleteSelectedPoint => "Punkt löschen".to_string(),
        AppCommand::ClearPoints => "Alle Punkte löschen".to_string(),
        AppCommand::SetOrder { order } => format!("Ordnung {}", order),
        AppCommand::SetSampleStep { step } => format!("Schritt {:.3}", step),
        AppCommand::SetShowControlPoints { visible } => {
            format!("Kontrollpunkte {}", if *visible { "ein" } else { "aus" })
        }
        AppCommand::SetShowCurve { visible } => {
            format!("Kurve {}", if *visible { "ein" } else { "aus" })
        }
        AppCommand::RequestShaderReload => "Shader neu laden".to_string(),
        AppCommand::OpenOptionsDialog => "Optionen öffnen".to_string(),
        AppCommand::CloseOptionsDialog => "Optionen schliessen".to_string(),
        AppCommand::ApplyOptions { .. } => "Optionen anwenden".to_string(),
        AppCommand::ResetOptions => "Optionen zurücksetzen".to_string(),
        AppCommand::RequestExit => "Beenden".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_noise_is_not_recorded() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::BeginFrame);
        log.record(&AppCommand::MovePointer {
            screen_pos: glam::Vec2::ZERO,
        });
        log.record(&AppCommand::SetViewportSize {
            size: [800.0, 600.0],
        });
        assert!(log.is_empty());
        assert_eq!(log.total(), 0);

        log.record(&AppCommand::ClearPoints);
        assert_eq!(log.len(), 1);
        assert!(matches!(log.last(), Some(AppCommand::ClearPoints)));
    }

    #[test]
    fn test_oldest_entry_is_evicted_when_full() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::SetOrder { order: 3 });
        for _ in 0..CommandLog::MAX_ENTRIES {
            log.record(&AppCommand::ClearPoints);
        }

        assert_eq!(log.len(), CommandLog::MAX_ENTRIES);
        assert_eq!(log.total(), CommandLog::MAX_ENTRIES + 1);
        assert!(log
            .recent(usize::MAX)
            .all(|command| matches!(command, AppCommand::ClearPoints)));
    }

    #[test]
    fn test_recent_lists_newest_first() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::SetOrder { order: 3 });
        log.record(&AppCommand::SetSampleStep { step: 0.05 });
        log.record(&AppCommand::DeleteSelectedPoint);

        let labels: Vec<String> = log.recent(2).map(describe_command).collect();
        assert_eq!(labels, vec!["Punkt löschen", "Schritt 0.050"]);
    }
}
