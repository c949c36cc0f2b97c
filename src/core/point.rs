//! Kontrollpunkt: 2D-Position mit optionaler Farbe.

use super::Rgba;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Ein Kontrollpunkt im Patch-Gitter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position in Weltkoordinaten
    pub position: DVec2,
    /// Farbe (nur bei Rand- und Eckpunkten gesetzt)
    pub color: Option<Rgba>,
}

impl Point {
    /// Erstellt einen ungefärbten Punkt.
    pub const fn new(position: DVec2) -> Self {
        Self {
            position,
            color: None,
        }
    }

    /// Erstellt einen gefärbten Punkt.
    pub const fn with_color(position: DVec2, color: Rgba) -> Self {
        Self {
            position,
            color: Some(color),
        }
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(DVec2::ZERO)
    }
}

/// Lineare Interpolation `a·(1-t) + b·t`, exakt an beiden Enden.
pub fn lerp(a: DVec2, b: DVec2, t: f64) -> DVec2 {
    a * (1.0 - t) + b * t
}

/// Bilineare Interpolation der vier Ecken (oben-links, oben-rechts, unten-rechts, unten-links).
pub fn bilinear(p00: DVec2, p10: DVec2, p11: DVec2, p01: DVec2, u: f64, v: f64) -> DVec2 {
    (1.0 - u) * (1.0 - v) * p00 + u * (1.0 - v) * p10 + u * v * p11 + (1.0 - u) * v * p01
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_ist_an_den_enden_exakt() {
        let a = DVec2::new(0.3, -7.1);
        let b = DVec2::new(12.9, 4.4);
        assert_eq!(lerp(a, b, 0.0), a);
        assert_eq!(lerp(a, b, 1.0), b);
    }

    #[test]
    fn bilinear_trifft_ecken() {
        let p00 = DVec2::new(0.0, 0.0);
        let p10 = DVec2::new(10.0, 0.0);
        let p11 = DVec2::new(10.0, 10.0);
        let p01 = DVec2::new(0.0, 10.0);
        assert_eq!(bilinear(p00, p10, p11, p01, 0.0, 0.0), p00);
        assert_eq!(bilinear(p00, p10, p11, p01, 1.0, 0.0), p10);
        assert_eq!(bilinear(p00, p10, p11, p01, 1.0, 1.0), p11);
        assert_eq!(bilinear(p00, p10, p11, p01, 0.0, 1.0), p01);
        assert_eq!(
            bilinear(p00, p10, p11, p01, 0.5, 0.5),
            DVec2::new(5.0, 5.0)
        );
    }
}
