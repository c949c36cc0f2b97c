//! Handler für Darstellung und Flächen-Einstellungen.

use crate::app::AppState;
use crate::core::{EdgeFollow, InteriorPolicy, SurfaceEvaluator};
use crate::shared::RenderQuality;

/// Setzt die Tessellierungs-Qualität.
pub fn set_render_quality(state: &mut AppState, quality: RenderQuality) {
    state.view.render_quality = quality;
    log::info!("Render-Qualität: {quality:?}");
}

/// Wechselt den Flächen-Auswerter der Darstellung.
pub fn set_surface_evaluator(state: &mut AppState, evaluator: SurfaceEvaluator) {
    state.view.evaluator = evaluator;
    log::info!("Flächen-Auswerter: {evaluator:?}");
}

/// Wechselt die Innenpunkt-Strategie; berechnet alle Innenpunkte neu.
pub fn set_interior_policy(state: &mut AppState, policy: InteriorPolicy) {
    if state.manager.mesh().settings().interior_policy == policy {
        return;
    }
    state.record_undo_snapshot();
    state.manager.mesh_mut().set_interior_policy(policy);
    log::info!("Innenpunkt-Strategie: {policy:?}");
}

/// Wechselt das Kanten-Nachführen für künftige Eckbewegungen.
pub fn set_edge_follow(state: &mut AppState, edge_follow: EdgeFollow) {
    if state.manager.mesh().settings().edge_follow == edge_follow {
        return;
    }
    state.record_undo_snapshot();
    state.manager.mesh_mut().set_edge_follow(edge_follow);
    log::info!("Kanten-Nachführen: {edge_follow:?}");
}
