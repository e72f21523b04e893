//! Auswahl- und Tastenzustand des Editors.

/// Zeigertaste, die für das Editieren relevant ist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Linke Taste: Punkt setzen oder ziehen
    Primary,
    /// Rechte Taste: Punkt löschen
    Secondary,
}

impl PointerButton {
    fn slot(self) -> usize {
        match self {
            Self::Primary => 0,
            Self::Secondary => 1,
        }
    }
}

/// Optionale Selektion plus Tastenflags pro Frame.
///
/// "Gedrückt in diesem Frame" wird zu Frame-Beginn über [`Self::begin_frame`]
/// zurückgesetzt; "gehalten" überlebt Frames bis zum Loslassen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
    pressed_this_frame: [bool; 2],
    held: [bool; 2],
}

impl SelectionState {
    /// Leerer Zustand: keine Selektion, keine Taste gedrückt.
    pub fn new() -> Self {
        Self::default()
    }

    /// Setzt die Flags "in diesem Frame gedrückt" zurück.
    pub fn begin_frame(&mut self) {
        self.pressed_this_frame = [false; 2];
    }

    /// Registriert einen Tastendruck.
    pub fn press(&mut self, button: PointerButton) {
        self.pressed_this_frame[button.slot()] = true;
        self.held[button.slot()] = true;
    }

    /// Registriert das Loslassen einer Taste.
    pub fn release(&mut self, button: PointerButton) {
        self.held[button.slot()] = false;
    }

    /// Wurde `button` in diesem Frame gedrückt?
    pub fn just_pressed(&self, button: PointerButton) -> bool {
        self.pressed_this_frame[button.slot()]
    }

    /// Ist `button` aktuell gehalten?
    pub fn is_held(&self, button: PointerButton) -> bool {
        self.held[button.slot()]
    }

    /// Selektierter Index, sofern er für eine Sequenz der Länge `len` gültig ist.
    ///
    /// Ein veralteter Index (z.B. nach `clear`) gilt als "keine Selektion".
    pub fn selected(&self, len: usize) -> Option<usize> {
        self.selected.filter(|&index| index < len)
    }

    /// Selektiert `index`.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Hebt die Selektion auf.
    pub fn deselect(&mut self) {
        self.selected = None;
    }
}
