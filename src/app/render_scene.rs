//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> RenderScene {
    RenderScene {
        mesh: Some(state.manager.mesh_arc()),
        evaluator: state.view.evaluator,
        render_quality: state.view.render_quality,
        handles: state.manager.handle_markers(),
        options: state.options.clone(),
    }
}
