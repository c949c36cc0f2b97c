//! Headless-Rendering: wandelt eine [`RenderScene`] in zeichenfertige Geometrie.
//!
//! Das eigentliche Zeichnen (Canvas, GPU) übernimmt ein externer Konsument.

mod tessellation;

pub use crate::shared::{HandleKind, HandleMarker, RenderQuality, RenderScene};
pub use tessellation::{tessellate_patch, ShadedQuad};

use crate::core::{BoundingBox, InteractionState, Rgba};
use glam::DVec2;
use serde::Serialize;

/// Ein Handle mit aufgelöster Größe und Farbe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandleSprite {
    pub position: DVec2,
    pub kind: HandleKind,
    pub state: InteractionState,
    /// Kantenlänge des Quadrats (Welteinheiten)
    pub size: f64,
    pub color: Rgba,
}

/// Zeichenfertige Geometrie eines Frames.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FrameGeometry {
    /// Alle Vierecke aller Patches, Patch für Patch in Arena-Reihenfolge
    pub quads: Vec<ShadedQuad>,
    /// Handles mit Größe und Farbe aus den Optionen
    pub handles: Vec<HandleSprite>,
    /// Bounding-Box über alle Kontrollpunkte
    pub bounds: Option<BoundingBox>,
}

/// Haupt-Renderer für Patch-Meshes.
///
/// Hält den Quad-Buffer zwischen Frames, damit bei gleichbleibender
/// Auflösung keine neue Allokation nötig ist.
#[derive(Debug, Default)]
pub struct Renderer {
    frame: FrameGeometry,
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tesselliert die komplette Szene und gibt die Frame-Geometrie zurück.
    pub fn render_scene(&mut self, scene: &RenderScene) -> &FrameGeometry {
        self.frame.quads.clear();
        self.frame.handles.clear();
        self.frame.bounds = None;

        let Some(mesh) = scene.mesh.as_deref() else {
            log::debug!("render_scene ohne Mesh");
            return &self.frame;
        };

        let resolution = scene.render_quality.resolution();
        for patch in mesh.patches() {
            tessellate_patch(patch, resolution, scene.evaluator, &mut self.frame.quads);
        }
        let size = scene.options.handle_size;
        self.frame
            .handles
            .extend(scene.handles.iter().map(|marker| HandleSprite {
                position: marker.position,
                kind: marker.kind,
                state: marker.state,
                size,
                color: scene.options.handle_color(marker.state),
            }));
        let bounds = mesh.control_bounds();
        self.frame.bounds = bounds.is_valid().then_some(bounds);

        log::debug!(
            "Frame tesselliert: {} Vierecke, {} Handles",
            self.frame.quads.len(),
            self.frame.handles.len()
        );
        &self.frame
    }
}
