//! Achsenparallele Bounding-Box in Weltkoordinaten.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Achsenparalleles Rechteck `min..=max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: DVec2,
    pub max: DVec2,
}

impl BoundingBox {
    /// Leere (invertierte) Box; jeder eingeschlossene Punkt macht sie gültig.
    pub const EMPTY: Self = Self {
        min: DVec2::splat(f64::INFINITY),
        max: DVec2::splat(f64::NEG_INFINITY),
    };

    /// Kleinste Box um alle Punkte.
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Self {
        points.into_iter().fold(Self::EMPTY, |mut bb, p| {
            bb.include_point(p);
            bb
        })
    }

    /// `true`, wenn mindestens ein Punkt eingeschlossen wurde.
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        if self.is_valid() {
            self.max.x - self.min.x
        } else {
            0.0
        }
    }

    pub fn height(&self) -> f64 {
        if self.is_valid() {
            self.max.y - self.min.y
        } else {
            0.0
        }
    }

    /// Mittelpunkt, `None` bei leerer Box.
    pub fn center(&self) -> Option<DVec2> {
        self.is_valid().then(|| (self.min + self.max) * 0.5)
    }

    /// Erweitert die Box um einen Punkt.
    pub fn include_point(&mut self, p: DVec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Erweitert die Box um eine andere Box.
    pub fn union(&mut self, other: &Self) {
        if other.is_valid() {
            self.min = self.min.min(other.min);
            self.max = self.max.max(other.max);
        }
    }

    /// Prüft ob `p` innerhalb liegt (Rand inklusive).
    pub fn contains(&self, p: DVec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Box um `margin` in alle Richtungen vergrößert.
    pub fn expanded(&self, margin: f64) -> Self {
        if !self.is_valid() {
            return *self;
        }
        Self {
            min: self.min - DVec2::splat(margin),
            max: self.max + DVec2::splat(margin),
        }
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leere_box_ist_ungueltig() {
        let bb = BoundingBox::EMPTY;
        assert!(!bb.is_valid());
        assert_eq!(bb.width(), 0.0);
        assert!(bb.center().is_none());
        assert!(!bb.contains(DVec2::ZERO));
    }

    #[test]
    fn from_points_umschliesst_alle() {
        let bb = BoundingBox::from_points([
            DVec2::new(1.0, 5.0),
            DVec2::new(-2.0, 3.0),
            DVec2::new(4.0, -1.0),
        ]);
        assert_eq!(bb.min, DVec2::new(-2.0, -1.0));
        assert_eq!(bb.max, DVec2::new(4.0, 5.0));
        assert_eq!(bb.width(), 6.0);
        assert_eq!(bb.height(), 6.0);
        assert_eq!(bb.center(), Some(DVec2::new(1.0, 2.0)));
    }

    #[test]
    fn union_ignoriert_leere_box() {
        let mut bb = BoundingBox::from_points([DVec2::ZERO, DVec2::ONE]);
        bb.union(&BoundingBox::EMPTY);
        assert_eq!(bb, BoundingBox::from_points([DVec2::ZERO, DVec2::ONE]));

        bb.union(&BoundingBox::from_points([DVec2::new(3.0, -1.0)]));
        assert_eq!(bb.max, DVec2::new(3.0, 1.0));
        assert_eq!(bb.min, DVec2::new(0.0, -1.0));
    }

    #[test]
    fn expanded_vergroessert_in_alle_richtungen() {
        let bb = BoundingBox::from_points([DVec2::ZERO, DVec2::new(2.0, 2.0)]).expanded(1.0);
        assert!(bb.contains(DVec2::new(-1.0, 3.0)));
        assert!(!bb.contains(DVec2::new(-1.5, 0.0)));
    }
}
