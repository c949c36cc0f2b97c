//! Application State: zentrale Datenhaltung.

use super::history::{EditHistory, Snapshot};
use super::{CommandLog, PatchManager};
use crate::core::{PatchMesh, SurfaceEvaluator};
use crate::shared::{MeshOptions, RenderQuality};
use std::path::PathBuf;

/// Darstellungsbezogener Anwendungszustand
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewState {
    /// Auswerter für die Tessellierung
    pub evaluator: SurfaceEvaluator,
    /// Tessellierungs-Qualität
    pub render_quality: RenderQuality,
}

impl ViewState {
    /// Übernimmt die Darstellungswerte aus den Optionen.
    pub fn from_options(options: &MeshOptions) -> Self {
        Self {
            evaluator: options.surface_evaluator,
            render_quality: options.render_quality,
        }
    }
}

/// Hauptzustand der Anwendung
#[derive(Debug)]
pub struct AppState {
    /// Mesh samt Edit-Fokus
    pub manager: PatchManager,
    /// View-State
    pub view: ViewState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: EditHistory,
    /// Laufzeit-Optionen
    pub options: MeshOptions,
    /// Ziel für `ApplyOptions`; `None` = nicht speichern
    pub config_path: Option<PathBuf>,
    /// Für den laufenden Drag wurde bereits ein Undo-Snapshot abgelegt
    pub edit_in_progress: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen, ohne Optionen zu speichern.
    pub fn new() -> Self {
        Self::with_options(MeshOptions::default())
    }

    /// Erstellt einen App-State und baut das Start-Gitter aus den Optionen.
    pub fn with_options(options: MeshOptions) -> Self {
        let mesh = build_mesh_from_options(&options, options.grid_rows, options.grid_cols);
        Self {
            manager: PatchManager::new(mesh, options.pick_radius),
            view: ViewState::from_options(&options),
            command_log: CommandLog::new(),
            history: EditHistory::new_with_capacity(options.history_depth),
            options,
            config_path: None,
            edit_in_progress: false,
        }
    }

    /// Legt den aktuellen Mesh-Stand als Undo-Schritt ab.
    pub fn record_undo_snapshot(&mut self) {
        let snapshot = Snapshot::from_state(self);
        self.history.record_snapshot(snapshot);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Baut ein Gitter mit Geometrie, Palette und Patch-Einstellungen aus den Optionen.
pub(crate) fn build_mesh_from_options(options: &MeshOptions, rows: usize, cols: usize) -> PatchMesh {
    PatchMesh::build_grid_with_palette(
        options.grid_origin(),
        options.grid_patch_width,
        options.grid_patch_height,
        rows,
        cols,
        &options.palette(),
        options.patch_settings(),
    )
}
