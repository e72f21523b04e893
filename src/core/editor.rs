//! Interaktives Bearbeitungsmodell: Hinzufügen, Ziehen und Löschen von
//! Kontrollpunkten.
//!
//! Der Editor kennt nur Pixel-Positionen (Ursprung oben links, y nach unten)
//! und rechnet sie über den [`ViewportTransform`] in den Kurvenraum um.

use super::{ControlPoint, ControlPointList, PointerButton, SelectionState, ViewportTransform};
use glam::Vec2;

/// Standard-Farbe neuer (unselektierter) Kontrollpunkte.
pub const DEFAULT_POINT_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

/// Zustand der Drag-Interaktion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// Kein Punkt wird gezogen
    #[default]
    Idle,
    /// Der selektierte Punkt folgt dem Zeiger
    Dragging,
}

/// Ergebnis einer Editor-Operation, für Logging und Neuberechnung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Keine Änderung
    Unchanged,
    /// Neuer Punkt am Ende angehängt
    Added { index: usize },
    /// Punkt entfernt, spätere Indizes verschoben
    Removed { index: usize },
    /// Drag auf bestehendem Punkt begonnen
    DragStarted { index: usize },
    /// Selektierter Punkt verschoben
    Moved { index: usize },
    /// Drag beendet, Selektion bleibt
    DragEnded { index: Option<usize> },
    /// Alle Punkte entfernt
    Cleared { removed: usize },
}

impl EditOutcome {
    /// Gibt `true` zurück, wenn sich die Kontrollpunkt-Sequenz geändert hat.
    pub fn changes_points(&self) -> bool {
        matches!(
            self,
            Self::Added { .. } | Self::Removed { .. } | Self::Moved { .. } | Self::Cleared { .. }
        )
    }
}

/// Besitzt die Kontrollpunkte und wendet Zeiger-Ereignisse darauf an.
#[derive(Debug, Clone)]
pub struct ControlPointEditor {
    points: ControlPointList,
    selection: SelectionState,
    drag: DragState,
    viewport: ViewportTransform,
    point_color: [f32; 4],
}

impl Default for ControlPointEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPointEditor {
    /// Leerer Editor mit Standard-Viewport.
    pub fn new() -> Self {
        Self {
            points: ControlPointList::new(),
            selection: SelectionState::new(),
            drag: DragState::Idle,
            viewport: ViewportTransform::default(),
            point_color: DEFAULT_POINT_COLOR,
        }
    }

    pub fn points(&self) -> &ControlPointList {
        &self.points
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn viewport(&self) -> &ViewportTransform {
        &self.viewport
    }

    /// Gültiger selektierter Index oder `None`.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.selected(self.points.len())
    }

    /// Farbe für neue und bestehende Punkte.
    pub fn set_point_color(&mut self, color: [f32; 4]) {
        self.point_color = color;
        self.points.recolor(color);
    }

    /// Übernimmt neue Viewport-Abmessungen (Resize).
    pub fn set_viewport_size(&mut self, size: Vec2) {
        self.viewport = ViewportTransform::new(size);
    }

    /// Frame-Beginn: "gerade gedrückt"-Flags zurücksetzen.
    pub fn begin_frame(&mut self) {
        self.selection.begin_frame();
    }

    /// Fügt einen Punkt direkt im Kurvenraum an (ohne Hit-Test).
    pub fn push_point(&mut self, position: Vec2) -> usize {
        self.points
            .push(ControlPoint::new(position, self.point_color))
    }

    /// Verarbeitet einen Tastendruck an `screen_pos`.
    ///
    /// Primär: Treffer → Drag beginnen, sonst neuen Punkt anhängen.
    /// Sekundär: Treffer → Punkt löschen, sonst nur Selektion aufheben.
    pub fn pointer_pressed(
        &mut self,
        screen_pos: Vec2,
        button: PointerButton,
        hit_threshold_px: f32,
    ) -> EditOutcome {
        self.selection.press(button);

        if !self.viewport.is_valid() {
            log::warn!(
                "Viewport ungültig ({:?}), Klick ignoriert",
                self.viewport.size
            );
            return EditOutcome::Unchanged;
        }

        let hit = self
            .points
            .hit_test(screen_pos, &self.viewport, hit_threshold_px);

        match (button, hit) {
            (PointerButton::Primary, Some(index)) => {
                self.selection.select(index);
                self.drag = DragState::Dragging;
                EditOutcome::DragStarted { index }
            }
            (PointerButton::Primary, None) => {
                self.selection.deselect();
                self.drag = DragState::Idle;
                let position = self.viewport.screen_to_curve(screen_pos);
                let index = self.push_point(position);
                EditOutcome::Added { index }
            }
            (PointerButton::Secondary, Some(index)) => self.remove_at(index),
            (PointerButton::Secondary, None) => {
                self.selection.deselect();
                EditOutcome::Unchanged
            }
        }
    }

    /// Zeigerbewegung: verschiebt den selektierten Punkt während eines Drags.
    ///
    /// Im Frame des Drucks selbst wird noch nicht verschoben, erst sobald die
    /// Taste aus einem vorherigen Frame gehalten wird.
    pub fn pointer_moved(&mut self, screen_pos: Vec2) -> EditOutcome {
        if self.drag != DragState::Dragging
            || !self.selection.is_held(PointerButton::Primary)
            || self.selection.just_pressed(PointerButton::Primary)
            || !self.viewport.is_valid()
        {
            return EditOutcome::Unchanged;
        }

        let Some(index) = self.selected_index() else {
            self.drag = DragState::Idle;
            return EditOutcome::Unchanged;
        };

        let position = self.viewport.screen_to_curve(screen_pos);
        if self.points.set_position(index, position) {
            EditOutcome::Moved { index }
        } else {
            EditOutcome::Unchanged
        }
    }

    /// Tastenfreigabe: beendet einen laufenden Drag.
    pub fn pointer_released(&mut self, button: PointerButton) -> EditOutcome {
        self.selection.release(button);
        if button == PointerButton::Primary && self.drag == DragState::Dragging {
            self.drag = DragState::Idle;
            return EditOutcome::DragEnded {
                index: self.selected_index(),
            };
        }
        EditOutcome::Unchanged
    }

    /// Löscht den selektierten Punkt (falls gültig).
    pub fn delete_selected(&mut self) -> EditOutcome {
        match self.selected_index() {
            Some(index) => self.remove_at(index),
            None => {
                self.selection.deselect();
                EditOutcome::Unchanged
            }
        }
    }

    /// Entfernt alle Punkte und setzt Selektion und Drag zurück.
    pub fn clear(&mut self) -> EditOutcome {
        let removed = self.points.len();
        self.points.clear();
        self.selection.deselect();
        self.drag = DragState::Idle;
        EditOutcome::Cleared { removed }
    }

    fn remove_at(&mut self, index: usize) -> EditOutcome {
        self.selection.deselect();
        self.drag = DragState::Idle;
        match self.points.remove(index) {
            Some(_) => EditOutcome::Removed { index },
            None => EditOutcome::Unchanged,
        }
    }
}
