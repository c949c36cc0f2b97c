//! Kubische Bézier-Grundlagen: Bernstein-Basis, Auswertung, Ableitung.

use glam::DVec2;

/// Kubische Bernstein-Koeffizienten `[(1-t)³, 3t(1-t)², 3t²(1-t), t³]`.
pub fn bernstein(t: f64) -> [f64; 4] {
    let mt = 1.0 - t;
    [mt * mt * mt, 3.0 * t * mt * mt, 3.0 * t * t * mt, t * t * t]
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let b = bernstein(t);
    p0 * b[0] + p1 * b[1] + p2 * b[2] + p3 * b[3]
}

/// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
pub fn cubic_derivative(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let mt = 1.0 - t;
    3.0 * mt * mt * (p1 - p0) + 6.0 * mt * t * (p2 - p1) + 3.0 * t * t * (p3 - p2)
}

/// Parameterwerte in `(0, 1)`, an denen die Ableitung einer Koordinate verschwindet.
///
/// Die Ableitung einer kubischen Bézier-Koordinate ist das Polynom
/// `a·t² + b·t + c` mit
///
/// ```text
/// a = 3·(-p0 + 3·p1 - 3·p2 + p3)
/// b = 6·(p0 - 2·p1 + p2)
/// c = 3·(p1 - p0)
/// ```
pub fn derivative_roots(p0: f64, p1: f64, p2: f64, p3: f64) -> Vec<f64> {
    let a = 3.0 * (-p0 + 3.0 * p1 - 3.0 * p2 + p3);
    let b = 6.0 * (p0 - 2.0 * p1 + p2);
    let c = 3.0 * (p1 - p0);

    let mut roots = Vec::with_capacity(2);
    if a.abs() < 1e-12 {
        // Entartet zu linear
        if b.abs() > 1e-12 {
            roots.push(-c / b);
        }
    } else {
        let disc = b * b - 4.0 * a * c;
        if disc >= 0.0 {
            let sq = disc.sqrt();
            roots.push((-b + sq) / (2.0 * a));
            roots.push((-b - sq) / (2.0 * a));
        }
    }
    roots.retain(|t| *t > 0.0 && *t < 1.0);
    roots
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bernstein_summe_ist_eins() {
        for i in 0..=10 {
            let t = i as f64 / 10.0;
            let sum: f64 = bernstein(t).iter().sum();
            assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn bernstein_endpunkte_exakt() {
        assert_eq!(bernstein(0.0), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(bernstein(1.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cubic_bezier_symmetry() {
        // Symmetrische S-Kurve → Mittelpunkt bei (5, 5)
        let p0 = DVec2::new(0.0, 0.0);
        let p1 = DVec2::new(0.0, 10.0);
        let p2 = DVec2::new(10.0, 0.0);
        let p3 = DVec2::new(10.0, 10.0);

        let mid = cubic_bezier(p0, p1, p2, p3, 0.5);
        assert!((mid - DVec2::new(5.0, 5.0)).length() < 1e-12);
    }

    #[test]
    fn derivative_einer_geraden_zeigt_in_sehnenrichtung() {
        let p0 = DVec2::new(0.0, 0.0);
        let p3 = DVec2::new(9.0, 0.0);
        let d = cubic_derivative(p0, DVec2::new(3.0, 0.0), DVec2::new(6.0, 0.0), p3, 0.4);
        assert_relative_eq!(d.x, 9.0, epsilon = 1e-12);
        assert_relative_eq!(d.y, 0.0);
    }

    #[test]
    fn derivative_roots_findet_scheitel() {
        // y: 0, 10, 10, 0 → Maximum bei t = 0.5
        let roots = derivative_roots(0.0, 10.0, 10.0, 0.0);
        assert_eq!(roots.len(), 1);
        assert_relative_eq!(roots[0], 0.5, epsilon = 1e-12);
    }

    #[test]
    fn monotone_koordinate_hat_keine_wurzeln() {
        assert!(derivative_roots(0.0, 1.0, 2.0, 3.0).is_empty());
    }
}
