//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::MeshOptions;
use super::RenderQuality;
use crate::core::{InteractionState, PatchMesh, SurfaceEvaluator};
use glam::DVec2;
use serde::Serialize;
use std::sync::Arc;

/// Art eines gezeichneten Handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HandleKind {
    /// Geteilter Knoten (Patch-Ecke)
    Knot,
    /// Kanten-Kontrollpunkt eines Patches
    Boundary,
}

/// Ein zu zeichnender Handle mit seinem Interaktionszustand.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleMarker {
    pub position: DVec2,
    pub kind: HandleKind,
    pub state: InteractionState,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Das aktuelle Mesh (Arc für O(1)-Clone pro Frame)
    pub mesh: Option<Arc<PatchMesh>>,
    /// Auswerter für die Flächen-Abtastung
    pub evaluator: SurfaceEvaluator,
    /// Tessellierungs-Qualität
    pub render_quality: RenderQuality,
    /// Alle Handles (Knoten zuerst, dann Kanten-Kontrollpunkte)
    pub handles: Vec<HandleMarker>,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: MeshOptions,
}

impl RenderScene {
    /// Gibt zurück, ob ein Mesh für Rendering vorhanden ist.
    pub fn has_mesh(&self) -> bool {
        self.mesh.as_ref().is_some_and(|m| !m.is_empty())
    }
}
