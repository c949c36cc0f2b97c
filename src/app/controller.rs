//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert Intents und Handler auf den AppState.
#[derive(Debug, Default)]
pub struct AppController;

impl AppController {
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }
        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Interaktion ===
            AppCommand::FocusEditTarget { world_pos } => {
                handlers::interaction::focus_at(state, world_pos)
            }
            AppCommand::DragFocused { world_pos } => {
                handlers::interaction::drag_focused(state, world_pos)
            }
            AppCommand::HoverAt { world_pos } => handlers::interaction::hover_at(state, world_pos),
            AppCommand::ReleaseFocus => handlers::interaction::release(state),

            // === Editing ===
            AppCommand::MoveKnot { knot, position } => {
                handlers::editing::move_knot(state, knot, position)?
            }
            AppCommand::MoveBoundaryPoint {
                patch,
                row,
                col,
                position,
            } => handlers::editing::move_boundary_point(state, patch, row, col, position)?,
            AppCommand::SetKnotColor { knot, color } => {
                handlers::editing::set_knot_color(state, knot, color)?
            }
            AppCommand::SetCornerColor {
                patch,
                row,
                col,
                color,
            } => handlers::editing::set_corner_color(state, patch, row, col, color)?,
            AppCommand::BuildGrid {
                origin,
                patch_width,
                patch_height,
                rows,
                cols,
            } => handlers::editing::build_grid(state, origin, patch_width, patch_height, rows, cols),

            // === Fläche & Darstellung ===
            AppCommand::SetInteriorPolicy { policy } => {
                handlers::view::set_interior_policy(state, policy)
            }
            AppCommand::SetEdgeFollow { edge_follow } => {
                handlers::view::set_edge_follow(state, edge_follow)
            }
            AppCommand::SetSurfaceEvaluator { evaluator } => {
                handlers::view::set_surface_evaluator(state, evaluator)
            }
            AppCommand::SetRenderQuality { quality } => {
                handlers::view::set_render_quality(state, quality)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => {
                handlers::options::apply_options(state, options)?
            }
            AppCommand::ResetOptions => handlers::options::reset_options(state)?,

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen State.
    pub fn build_render_scene(&self, state: &AppState) -> RenderScene {
        render_scene::build(state)
    }
}
