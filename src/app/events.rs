//! AppIntent- und AppCommand-Enums für den Intent/Command-Datenfluss.

use crate::core::{EdgeFollow, InteriorPolicy, KnotId, PatchId, Rgba, SurfaceEvaluator};
use crate::shared::{MeshOptions, RenderQuality};
use glam::DVec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Zeiger gedrückt: Edit-Ziel unter dem Zeiger suchen und fokussieren
    PointerPressed { world_pos: DVec2 },
    /// Zeiger bewegt: fokussiertes Ziel ziehen oder Hover aktualisieren
    PointerMoved { world_pos: DVec2 },
    /// Zeiger losgelassen: Fokus lösen
    PointerReleased,

    /// Knoten programmatisch verschieben
    KnotMoveRequested { knot: KnotId, position: DVec2 },
    /// Randpunkt eines Patches programmatisch verschieben
    BoundaryPointMoveRequested {
        patch: PatchId,
        row: usize,
        col: usize,
        position: DVec2,
    },
    /// Knotenfarbe ändern
    KnotColorChangeRequested { knot: KnotId, color: Rgba },
    /// Eckfarbe eines Patches ändern
    CornerColorChangeRequested {
        patch: PatchId,
        row: usize,
        col: usize,
        color: Rgba,
    },

    /// Mesh mit neuer Gittergröße aus den Optionen neu aufbauen
    GridRebuildRequested { rows: usize, cols: usize },

    /// Innenpunkt-Strategie ändern
    InteriorPolicyChanged { policy: InteriorPolicy },
    /// Kanten-Nachführen ändern
    EdgeFollowChanged { edge_follow: EdgeFollow },
    /// Flächen-Auswerter für die Darstellung ändern
    SurfaceEvaluatorChanged { evaluator: SurfaceEvaluator },
    /// Tessellierungs-Qualität ändern
    RenderQualityChanged { quality: RenderQuality },

    /// Optionen wurden geändert (sofort anwenden und speichern)
    OptionsChanged { options: MeshOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,

    /// Undo: letzten Schritt rückgängig machen
    UndoRequested,
    /// Redo: rückgängig gemachten Schritt wiederherstellen
    RedoRequested,
}

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Treffertest an `world_pos`, Ergebnis wird exklusiver Fokus
    FocusEditTarget { world_pos: DVec2 },
    /// Fokussiertes Ziel an `world_pos` ziehen
    DragFocused { world_pos: DVec2 },
    /// Hover-Ziel an `world_pos` aktualisieren
    HoverAt { world_pos: DVec2 },
    /// Fokus lösen
    ReleaseFocus,

    /// Knoten verschieben
    MoveKnot { knot: KnotId, position: DVec2 },
    /// Randpunkt verschieben
    MoveBoundaryPoint {
        patch: PatchId,
        row: usize,
        col: usize,
        position: DVec2,
    },
    /// Knotenfarbe setzen
    SetKnotColor { knot: KnotId, color: Rgba },
    /// Eckfarbe setzen
    SetCornerColor {
        patch: PatchId,
        row: usize,
        col: usize,
        color: Rgba,
    },

    /// Mesh als neues Gitter aufbauen
    BuildGrid {
        origin: DVec2,
        patch_width: f64,
        patch_height: f64,
        rows: usize,
        cols: usize,
    },

    /// Innenpunkt-Strategie setzen
    SetInteriorPolicy { policy: InteriorPolicy },
    /// Kanten-Nachführen setzen
    SetEdgeFollow { edge_follow: EdgeFollow },
    /// Flächen-Auswerter setzen
    SetSurfaceEvaluator { evaluator: SurfaceEvaluator },
    /// Tessellierungs-Qualität setzen
    SetRenderQuality { quality: RenderQuality },

    /// Optionen anwenden und speichern
    ApplyOptions { options: MeshOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,

    /// Undo ausführen
    Undo,
    /// Redo ausführen
    Redo,
}
