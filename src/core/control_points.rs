//! Geordnete Kontrollpunkt-Sequenz der Kurve.

use super::ViewportTransform;
use glam::Vec2;

/// Ein vom Benutzer platzierter Kontrollpunkt.
///
/// Die Identität ist der Index in der [`ControlPointList`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
    /// Position im Kurvenraum ([-1, 1])
    pub position: Vec2,
    /// RGBA-Anzeigefarbe
    pub color: [f32; 4],
}

impl ControlPoint {
    /// Erstellt einen neuen Kontrollpunkt.
    pub fn new(position: Vec2, color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Geordnete Kontrollpunkte; Index `i` steuert die Basisfunktion `i`.
///
/// Indizes sind immer lückenlos `0..len()`. Einfügen/Löschen invalidiert
/// alle dahinterliegenden Indizes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlPointList {
    points: Vec<ControlPoint>,
}

impl ControlPointList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Hängt einen Punkt an und gibt seinen Index zurück.
    pub fn push(&mut self, point: ControlPoint) -> usize {
        self.points.push(point);
        self.points.len() - 1
    }

    /// Entfernt den Punkt an `index`; alle späteren Indizes rücken um eins nach vorn.
    pub fn remove(&mut self, index: usize) -> Option<ControlPoint> {
        (index < self.points.len()).then(|| self.points.remove(index))
    }

    /// Überschreibt die Position des Punkts an `index`.
    ///
    /// Gibt `false` zurück, wenn der Index nicht (mehr) existiert.
    pub fn set_position(&mut self, index: usize, position: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) => {
                point.position = position;
                true
            }
            None => false,
        }
    }

    /// Setzt die Anzeigefarbe aller Punkte.
    pub fn recolor(&mut self, color: [f32; 4]) {
        for point in &mut self.points {
            point.color = color;
        }
    }

    /// Entfernt alle Punkte.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Punkt an `index`, falls vorhanden.
    pub fn get(&self, index: usize) -> Option<&ControlPoint> {
        self.points.get(index)
    }

    /// Anzahl der Punkte.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, wenn keine Punkte vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterator in Spline-Reihenfolge.
    pub fn iter(&self) -> std::slice::Iter<'_, ControlPoint> {
        self.points.iter()
    }

    /// Read-only Sicht auf alle Punkte.
    pub fn as_slice(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Positionen in Spline-Reihenfolge (Eingabe für den Sampler).
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Index des ersten Punkts, dessen Pixel-Abstand zu `screen_pos` kleiner
    /// als `threshold_px` ist.
    ///
    /// First-Match statt Nearest-Match: bei überlappenden Punkten gewinnt
    /// der niedrigste Index.
    pub fn hit_test(
        &self,
        screen_pos: Vec2,
        viewport: &ViewportTransform,
        threshold_px: f32,
    ) -> Option<usize> {
        self.points
            .iter()
            .position(|p| viewport.curve_to_screen(p.position).distance(screen_pos) < threshold_px)
    }
}

impl<'a> IntoIterator for &'a ControlPointList {
    type Item = &'a ControlPoint;
    type IntoIter = std::slice::Iter<'a, ControlPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];

    fn list_of(positions: &[(f32, f32)]) -> ControlPointList {
        let mut list = ControlPointList::new();
        for &(x, y) in positions {
            list.push(ControlPoint::new(Vec2::new(x, y), GREEN));
        }
        list
    }

    #[test]
    fn test_remove_shifts_following_indices() {
        let mut list = list_of(&[(0.0, 0.0), (0.1, 0.0), (0.2, 0.0), (0.3, 0.0)]);
        let removed = list.remove(1).unwrap();
        assert_eq!(removed.position, Vec2::new(0.1, 0.0));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1).unwrap().position, Vec2::new(0.2, 0.0));
        assert_eq!(list.get(2).unwrap().position, Vec2::new(0.3, 0.0));
    }

    #[test]
    fn test_out_of_range_access_is_not_a_fault() {
        let mut list = list_of(&[(0.0, 0.0)]);
        assert!(list.remove(5).is_none());
        assert!(!list.set_position(3, Vec2::ONE));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_hit_test_finds_point_placed_at_cursor() {
        let viewport = ViewportTransform::new(Vec2::new(800.0, 600.0));
        let cursor = Vec2::new(123.0, 456.0);
        let mut list = ControlPointList::new();
        list.push(ControlPoint::new(viewport.screen_to_curve(cursor), GREEN));

        for threshold in [0.01, 1.0, 6.0] {
            assert_eq!(list.hit_test(cursor, &viewport, threshold), Some(0));
        }
    }

    #[test]
    fn test_hit_test_none_when_far_away() {
        let viewport = ViewportTransform::new(Vec2::new(800.0, 600.0));
        let mut list = ControlPointList::new();
        list.push(ControlPoint::new(
            viewport.screen_to_curve(Vec2::new(100.0, 100.0)),
            GREEN,
        ));
        assert_eq!(
            list.hit_test(Vec2::new(107.0, 100.0), &viewport, 6.0),
            None
        );
        assert_eq!(
            list.hit_test(Vec2::new(105.0, 100.0), &viewport, 6.0),
            Some(0)
        );
    }

    #[test]
    fn test_hit_test_prefers_lowest_index() {
        let viewport = ViewportTransform::new(Vec2::new(800.0, 600.0));
        let mut list = ControlPointList::new();
        // Punkt 0 weiter weg als Punkt 1, beide innerhalb der Schwelle
        list.push(ControlPoint::new(
            viewport.screen_to_curve(Vec2::new(204.0, 200.0)),
            GREEN,
        ));
        list.push(ControlPoint::new(
            viewport.screen_to_curve(Vec2::new(200.0, 200.0)),
            GREEN,
        ));
        assert_eq!(
            list.hit_test(Vec2::new(200.0, 200.0), &viewport, 6.0),
            Some(0)
        );
    }
}
