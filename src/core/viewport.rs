//! Umrechnung zwischen Geräte-Koordinaten (Pixel, y nach unten) und
//! normiertem Kurvenraum ([-1, 1], y nach oben).

use glam::Vec2;

/// Viewport-Abmessungen und die daraus folgende Koordinaten-Transformation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportTransform {
    /// Breite/Höhe in denselben Einheiten wie die Pointer-Koordinaten
    pub size: Vec2,
}

impl ViewportTransform {
    /// Erstellt eine Transformation für die gegebene Viewport-Größe.
    pub fn new(size: Vec2) -> Self {
        Self { size }
    }

    /// Gibt `true` zurück, wenn beide Abmessungen endlich und positiv sind.
    pub fn is_valid(&self) -> bool {
        self.size.is_finite() && self.size.x > 0.0 && self.size.y > 0.0
    }

    /// Pixel → Kurvenraum.
    ///
    /// Der Pixel wird in seiner Mitte abgetastet (+0.5), auf [0, 1] skaliert,
    /// an der y-Achse gespiegelt und nach [-1, 1] verschoben.
    pub fn screen_to_curve(&self, screen_pos: Vec2) -> Vec2 {
        let unit = (screen_pos + Vec2::splat(0.5)) / self.size;
        let flipped = Vec2::new(unit.x, 1.0 - unit.y);
        2.0 * flipped - Vec2::ONE
    }

    /// Kurvenraum → Pixel, exakte Umkehrung von [`Self::screen_to_curve`]
    /// inkl. Halbpixel-Zentrierung.
    pub fn curve_to_screen(&self, curve_pos: Vec2) -> Vec2 {
        let unit = 0.5 * (curve_pos + Vec2::ONE);
        let flipped = Vec2::new(unit.x, 1.0 - unit.y);
        flipped * self.size - Vec2::splat(0.5)
    }
}

impl Default for ViewportTransform {
    fn default() -> Self {
        Self::new(Vec2::new(800.0, 800.0))
    }
}
