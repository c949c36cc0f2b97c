//! Handler für Zeiger-Interaktion: Fokus, Drag, Hover.

use crate::app::AppState;
use glam::DVec2;

/// Fokussiert das Edit-Ziel unter `world_pos` (oder löst den Fokus bei Fehlgriff).
pub fn focus_at(state: &mut AppState, world_pos: DVec2) {
    state.edit_in_progress = false;
    match state.manager.resolve_edit_target(world_pos) {
        Some(target) => log::debug!("Fokus auf {target:?}"),
        None => log::debug!("Kein Edit-Ziel bei ({:.1}, {:.1})", world_pos.x, world_pos.y),
    }
}

/// Zieht das fokussierte Ziel. Der erste Drag-Schritt legt einen Undo-Snapshot ab.
pub fn drag_focused(state: &mut AppState, world_pos: DVec2) {
    if state.manager.focus().is_none() {
        return;
    }
    if !state.edit_in_progress {
        state.record_undo_snapshot();
        state.edit_in_progress = true;
    }
    state.manager.apply_drag(world_pos);
}

/// Aktualisiert das Hover-Ziel.
pub fn hover_at(state: &mut AppState, world_pos: DVec2) {
    state.manager.hover(world_pos);
}

/// Beendet die Interaktion.
pub fn release(state: &mut AppState) {
    state.manager.release();
    state.edit_in_progress = false;
}
