//! Core-Domänentypen: Punkte, Farben, Patches, Knoten, Mesh, Kurven, Spatial-Index.

pub mod bezier;
pub mod bounds;
pub mod color;
pub mod curve;
pub mod knot;
/// Mesh aus Patches und geteilten Knoten
///
/// - PatchMesh: Arena für Patches und Knoten, Gitteraufbau
/// - Routing von Eck-Edits über den zuständigen Knoten
/// - Invarianten-Prüfung
pub mod mesh;
pub mod patch;
pub mod point;
pub mod spatial;

pub use bounds::BoundingBox;
pub use color::Rgba;
pub use curve::{CurvableRect, Curve, Handle, InteractionState, StateChange, StateSubject};
pub use knot::{KnotConnection, KnotId, KnotPoint, PatchId};
pub use mesh::PatchMesh;
pub use patch::{
    BoundaryHit, Corner, CornerPalette, EdgeFollow, InteriorPolicy, PatchSettings,
    SurfaceEvaluator, SurfacePatch, GRID_SIZE,
};
pub use point::Point;
pub use spatial::{KnotIndex, KnotMatch};
