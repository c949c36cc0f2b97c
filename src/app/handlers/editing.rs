//! Handler für programmatische Mesh-Bearbeitung.
//!
//! Unbekannte Knoten/Patches sind Aufruferfehler und enden in `Err`,
//! Innenpunkte als Ziel werden nur protokolliert.

use crate::app::state::build_mesh_from_options;
use crate::app::AppState;
use crate::core::patch::is_boundary;
use crate::core::{Corner, KnotId, PatchId, Rgba};
use anyhow::bail;
use glam::DVec2;
use std::sync::Arc;

fn ensure_knot(state: &AppState, knot: KnotId) -> anyhow::Result<()> {
    if state.manager.mesh().knot(knot).is_none() {
        bail!("Unbekannter Knoten {}", knot.0);
    }
    Ok(())
}

/// Prüft das Patch und meldet, ob `(row, col)` ein Randpunkt ist.
fn check_boundary_slot(
    state: &AppState,
    patch: PatchId,
    row: usize,
    col: usize,
) -> anyhow::Result<bool> {
    if state.manager.mesh().patch(patch).is_none() {
        bail!("Unbekannter Patch {}", patch.0);
    }
    if !is_boundary(row, col) {
        log::warn!("({row}, {col}) ist kein Randpunkt von Patch {}, ignoriert", patch.0);
        return Ok(false);
    }
    Ok(true)
}

/// Verschiebt einen Knoten samt aller verbundenen Patch-Ecken.
pub fn move_knot(state: &mut AppState, knot: KnotId, position: DVec2) -> anyhow::Result<()> {
    ensure_knot(state, knot)?;
    state.record_undo_snapshot();
    state.manager.mesh_mut().set_knot_position(knot, position);
    log::info!(
        "Knoten {} nach ({:.1}, {:.1}) verschoben",
        knot.0,
        position.x,
        position.y
    );
    Ok(())
}

/// Verschiebt einen Randpunkt; knotengesteuerte Ecken laufen über den Knoten.
pub fn move_boundary_point(
    state: &mut AppState,
    patch: PatchId,
    row: usize,
    col: usize,
    position: DVec2,
) -> anyhow::Result<()> {
    if !check_boundary_slot(state, patch, row, col)? {
        return Ok(());
    }
    state.record_undo_snapshot();
    state
        .manager
        .mesh_mut()
        .set_boundary_point(patch, row, col, position);
    Ok(())
}

/// Färbt einen Knoten.
pub fn set_knot_color(state: &mut AppState, knot: KnotId, color: Rgba) -> anyhow::Result<()> {
    ensure_knot(state, knot)?;
    state.record_undo_snapshot();
    state.manager.mesh_mut().set_knot_color(knot, color);
    Ok(())
}

/// Färbt eine Patch-Ecke. Kanten-Randpunkte tragen keine Farbe.
pub fn set_corner_color(
    state: &mut AppState,
    patch: PatchId,
    row: usize,
    col: usize,
    color: Rgba,
) -> anyhow::Result<()> {
    if !check_boundary_slot(state, patch, row, col)? {
        return Ok(());
    }
    if Corner::from_index(row, col).is_none() {
        log::warn!("({row}, {col}) ist keine Ecke von Patch {}, ignoriert", patch.0);
        return Ok(());
    }
    state.record_undo_snapshot();
    state
        .manager
        .mesh_mut()
        .set_corner_color(patch, row, col, color);
    Ok(())
}

/// Ersetzt das Mesh durch ein neues Gitter.
pub fn build_grid(
    state: &mut AppState,
    origin: DVec2,
    patch_width: f64,
    patch_height: f64,
    rows: usize,
    cols: usize,
) {
    let mut options = state.options.clone();
    options.grid_origin = origin.to_array();
    options.grid_patch_width = patch_width;
    options.grid_patch_height = patch_height;

    let mesh = build_mesh_from_options(&options, rows, cols);
    state.record_undo_snapshot();
    state.manager.replace_mesh(Arc::new(mesh));
    state.edit_in_progress = false;
}
