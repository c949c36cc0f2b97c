//! Tessellierungs-Qualitätsstufen (shared zwischen App und Renderer).

use serde::{Deserialize, Serialize};

/// Qualitätsstufe für die Abtastung der Patch-Flächen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderQuality {
    /// Grobe Abtastung (schnellste Darstellung)
    Low,
    /// Mittlere Abtastung
    #[default]
    Medium,
    /// Feine Abtastung (beste Darstellung)
    High,
}

impl RenderQuality {
    /// Abtastschritte pro Patch-Achse.
    pub const fn resolution(self) -> usize {
        match self {
            RenderQuality::Low => 20,
            RenderQuality::Medium => 40,
            RenderQuality::High => 60,
        }
    }
}
