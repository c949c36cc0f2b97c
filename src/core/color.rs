//! Lineare RGBA-Farbe für Patch-Ecken und Farbverläufe.

use serde::{Deserialize, Serialize};

/// RGBA-Farbe mit linearen Komponenten im Bereich `[0, 1]`.
///
/// Es findet keine Gamma-Korrektur statt, Alpha wird wie jeder andere Kanal interpoliert.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
    pub const YELLOW: Self = Self::new(1.0, 1.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Erstellt eine Farbe aus vier Komponenten.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Erstellt eine Farbe aus einem `[r, g, b, a]`-Array (Format der Optionen).
    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    /// Gibt die Komponenten als `[r, g, b, a]` zurück.
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Lineare Interpolation `self·(1-t) + other·t`.
    ///
    /// Die Form liefert bei `t = 0` bzw. `t = 1` exakt die Endfarben.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let s = 1.0 - t;
        Self {
            r: self.r * s + other.r * t,
            g: self.g * s + other.g * t,
            b: self.b * s + other.b * t,
            a: self.a * s + other.a * t,
        }
    }

    /// Bilineare Interpolation über vier Eckfarben (oben-links, oben-rechts, unten-links, unten-rechts).
    pub fn bilinear(
        top_left: Self,
        top_right: Self,
        bottom_left: Self,
        bottom_right: Self,
        u: f32,
        v: f32,
    ) -> Self {
        let top = top_left.lerp(top_right, u);
        let bottom = bottom_left.lerp(bottom_right, u);
        top.lerp(bottom, v)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl From<[f32; 4]> for Rgba {
    fn from(c: [f32; 4]) -> Self {
        Self::from_array(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_trifft_endpunkte_exakt() {
        let a = Rgba::new(0.1, 0.2, 0.3, 0.4);
        let b = Rgba::new(0.9, 0.7, 0.5, 1.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn alpha_wird_linear_interpoliert() {
        let mid = Rgba::TRANSPARENT.lerp(Rgba::WHITE, 0.5);
        assert!((mid.a - 0.5).abs() < 1e-6);
        assert!((mid.r - 0.5).abs() < 1e-6);
    }

    #[test]
    fn bilinear_mitte_ist_mittelwert() {
        let c = Rgba::bilinear(Rgba::RED, Rgba::GREEN, Rgba::YELLOW, Rgba::BLUE, 0.5, 0.5);
        assert!((c.r - 0.5).abs() < 1e-6);
        assert!((c.g - 0.5).abs() < 1e-6);
        assert!((c.b - 0.25).abs() < 1e-6);
        assert!((c.a - 1.0).abs() < 1e-6);
    }
}
