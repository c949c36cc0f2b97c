//! Tessellierung: Abtastung eines Patches auf einem regelmäßigen (u,v)-Raster.

use crate::core::{Rgba, SurfaceEvaluator, SurfacePatch};
use glam::DVec2;
use serde::Serialize;

/// Ein farbiges Viereck der abgetasteten Fläche.
///
/// Ecken in Zeichenreihenfolge: oben-links, oben-rechts, unten-rechts, unten-links.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShadedQuad {
    pub corners: [DVec2; 4],
    pub colors: [Rgba; 4],
}

impl ShadedQuad {
    /// Mittlere Farbe der vier Ecken (für Flat-Shading).
    pub fn mean_color(&self) -> Rgba {
        let sum = self.colors.iter().fold([0.0f32; 4], |mut acc, c| {
            for (a, v) in acc.iter_mut().zip(c.to_array()) {
                *a += v;
            }
            acc
        });
        Rgba::from_array(sum.map(|v| v / 4.0))
    }
}

/// Tastet `patch` mit `resolution × resolution` Vierecken ab und hängt sie an `out` an.
///
/// Jeder Rasterpunkt wird genau einmal ausgewertet. `resolution = 0` wird wie 1 behandelt.
pub fn tessellate_patch(
    patch: &SurfacePatch,
    resolution: usize,
    evaluator: SurfaceEvaluator,
    out: &mut Vec<ShadedQuad>,
) {
    let steps = resolution.max(1);
    let stride = steps + 1;
    let inv = 1.0 / steps as f64;

    let mut samples = Vec::with_capacity(stride * stride);
    for i in 0..stride {
        let v = i as f64 * inv;
        for j in 0..stride {
            let u = j as f64 * inv;
            samples.push((
                patch.evaluate_with(evaluator, u, v),
                patch.evaluate_color(u, v),
            ));
        }
    }

    out.reserve(steps * steps);
    for i in 0..steps {
        for j in 0..steps {
            let tl = samples[i * stride + j];
            let tr = samples[i * stride + j + 1];
            let br = samples[(i + 1) * stride + j + 1];
            let bl = samples[(i + 1) * stride + j];
            out.push(ShadedQuad {
                corners: [tl.0, tr.0, br.0, bl.0],
                colors: [tl.1, tr.1, br.1, bl.1],
            });
        }
    }
}
