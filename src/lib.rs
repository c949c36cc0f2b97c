//! Coons-Mesh-Editor Library.
//! Bikubische Patches, geteilte Knoten und Farbverläufe als Library für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, EditTarget, PatchManager};
pub use core::{
    BoundingBox, Corner, CornerPalette, CurvableRect, Curve, EdgeFollow, InteriorPolicy,
    KnotId, KnotPoint, PatchId, PatchMesh, PatchSettings, Rgba, SurfaceEvaluator, SurfacePatch,
};
pub use render::{FrameGeometry, HandleSprite, Renderer};
pub use shared::{MeshOptions, RenderQuality, RenderScene};
