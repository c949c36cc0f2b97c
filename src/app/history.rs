use crate::core::PatchMesh;
use std::sync::Arc;

/// Snapshot des Meshes für Undo/Redo.
///
/// Nutzt Arc-Clone (Copy-on-Write): Ein Snapshot kostet O(1), der eigentliche
/// Mesh-Klon passiert erst beim nächsten `Arc::make_mut()` im Manager.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub mesh: Arc<PatchMesh>,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            mesh: state.manager.mesh_arc(),
        }
    }

    /// Stellt den Snapshot wieder her. Fokus und Hover werden dabei verworfen.
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.manager.replace_mesh(self.mesh);
        state.edit_in_progress = false;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Debug, Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Legt einen fertigen Snapshot ab und verwirft den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.max_depth == 0 {
            return;
        }
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Ändert die maximale Tiefe; überzählige alte Einträge fallen weg.
    pub fn set_max_depth(&mut self, max_depth: usize) {
        self.max_depth = max_depth;
        for stack in [&mut self.undo_stack, &mut self.redo_stack] {
            let excess = stack.len().saturating_sub(max_depth);
            stack.drain(..excess);
        }
    }

    /// Holt den letzten Undo-Eintrag und legt `current` auf den Redo-Stack.
    pub fn pop_undo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo_stack.pop()?;
        if self.redo_stack.len() >= self.max_depth {
            self.redo_stack.remove(0);
        }
        self.redo_stack.push(current);
        Some(prev)
    }

    /// Holt den letzten Redo-Eintrag und legt `current` auf den Undo-Stack.
    pub fn pop_redo_with_current(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(current);
        Some(next)
    }
}
