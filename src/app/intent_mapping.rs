//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerPressed { world_pos } => vec![AppCommand::FocusEditTarget { world_pos }],
        AppIntent::PointerMoved { world_pos } => {
            if state.manager.focus().is_some() {
                vec![AppCommand::DragFocused { world_pos }]
            } else {
                vec![AppCommand::HoverAt { world_pos }]
            }
        }
        AppIntent::PointerReleased => vec![AppCommand::ReleaseFocus],

        AppIntent::KnotMoveRequested { knot, position } => {
            vec![AppCommand::MoveKnot { knot, position }]
        }
        AppIntent::BoundaryPointMoveRequested {
            patch,
            row,
            col,
            position,
        } => vec![AppCommand::MoveBoundaryPoint {
            patch,
            row,
            col,
            position,
        }],
        AppIntent::KnotColorChangeRequested { knot, color } => {
            vec![AppCommand::SetKnotColor { knot, color }]
        }
        AppIntent::CornerColorChangeRequested {
            patch,
            row,
            col,
            color,
        } => vec![AppCommand::SetCornerColor {
            patch,
            row,
            col,
            color,
        }],

        AppIntent::GridRebuildRequested { rows, cols } => vec![
            AppCommand::ReleaseFocus,
            AppCommand::BuildGrid {
                origin: state.options.grid_origin(),
                patch_width: state.options.grid_patch_width,
                patch_height: state.options.grid_patch_height,
                rows,
                cols,
            },
        ],

        AppIntent::InteriorPolicyChanged { policy } => {
            vec![AppCommand::SetInteriorPolicy { policy }]
        }
        AppIntent::EdgeFollowChanged { edge_follow } => {
            vec![AppCommand::SetEdgeFollow { edge_follow }]
        }
        AppIntent::SurfaceEvaluatorChanged { evaluator } => {
            vec![AppCommand::SetSurfaceEvaluator { evaluator }]
        }
        AppIntent::RenderQualityChanged { quality } => {
            vec![AppCommand::SetRenderQuality { quality }]
        }

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
    }
}
