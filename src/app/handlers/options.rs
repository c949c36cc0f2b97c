//! Handler für Laufzeit-Optionen.

use super::view;
use crate::app::AppState;
use crate::shared::MeshOptions;

/// Übernimmt neue Optionen und persistiert sie, falls ein Konfigurationspfad gesetzt ist.
///
/// Flächen-Einstellungen wirken sofort auf das bestehende Mesh, Gitter-Geometrie
/// und Palette erst beim nächsten `BuildGrid`.
pub fn apply_options(state: &mut AppState, options: MeshOptions) -> anyhow::Result<()> {
    view::set_interior_policy(state, options.interior_policy);
    view::set_edge_follow(state, options.edge_follow);
    view::set_surface_evaluator(state, options.surface_evaluator);
    view::set_render_quality(state, options.render_quality);
    state.manager.set_pick_radius(options.pick_radius);
    state.history.set_max_depth(options.history_depth);
    state.options = options;

    match &state.config_path {
        Some(path) => state.options.save_to_file(path),
        None => Ok(()),
    }
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    apply_options(state, MeshOptions::default())
}
