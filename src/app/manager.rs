//! PatchManager: löst Zeigerpositionen auf Edit-Ziele auf und führt Drags aus.
//!
//! Zustandsmaschine pro Sitzung: `Idle → Focused(target) → Idle`.
//! Es ist immer höchstens ein Ziel fokussiert, nichts überdauert ein `release()`.

use crate::core::{Corner, InteractionState, KnotId, PatchId, PatchMesh, SurfacePatch};
use crate::shared::{HandleKind, HandleMarker};
use glam::DVec2;
use std::sync::Arc;

/// Ein editierbares Ziel im Mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    /// Geteilter Knoten
    Knot(KnotId),
    /// Randpunkt eines einzelnen Patches
    Boundary { patch: PatchId, row: usize, col: usize },
}

/// Fokus-Zustand des Managers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Idle,
    Focused(EditTarget),
}

/// Verwaltet ein Mesh samt exklusivem Edit-Fokus.
///
/// Das Mesh liegt hinter einem `Arc`, damit Undo-Snapshots O(1) sind;
/// Mutationen klonen erst bei geteiltem Besitz (`Arc::make_mut`).
#[derive(Debug, Clone)]
pub struct PatchManager {
    mesh: Arc<PatchMesh>,
    focus: FocusState,
    hovered: Option<EditTarget>,
    pick_radius: f64,
}

impl PatchManager {
    pub fn new(mesh: PatchMesh, pick_radius: f64) -> Self {
        Self {
            mesh: Arc::new(mesh),
            focus: FocusState::Idle,
            hovered: None,
            pick_radius,
        }
    }

    pub fn mesh(&self) -> &PatchMesh {
        &self.mesh
    }

    /// O(1)-Klon des Mesh-Handles (für Snapshots und Render-Szenen).
    pub fn mesh_arc(&self) -> Arc<PatchMesh> {
        Arc::clone(&self.mesh)
    }

    /// Mutabler Zugriff; klont das Mesh nur, wenn ein Snapshot es noch teilt.
    pub fn mesh_mut(&mut self) -> &mut PatchMesh {
        Arc::make_mut(&mut self.mesh)
    }

    /// Ersetzt das Mesh (Undo/Redo, Neuaufbau) und setzt Fokus und Hover zurück.
    pub fn replace_mesh(&mut self, mesh: Arc<PatchMesh>) {
        self.mesh = mesh;
        self.focus = FocusState::Idle;
        self.hovered = None;
    }

    pub fn pick_radius(&self) -> f64 {
        self.pick_radius
    }

    pub fn set_pick_radius(&mut self, radius: f64) {
        self.pick_radius = radius;
    }

    pub fn focus_state(&self) -> FocusState {
        self.focus
    }

    /// Aktuell fokussiertes Ziel.
    pub fn focus(&self) -> Option<EditTarget> {
        match self.focus {
            FocusState::Idle => None,
            FocusState::Focused(target) => Some(target),
        }
    }

    pub fn hovered(&self) -> Option<EditTarget> {
        self.hovered
    }

    // ── Treffer ─────────────────────────────────────────────────

    /// Treffertest ohne Zustandsänderung.
    ///
    /// Priorität: Knoten im Radius, sonst der global nächste Randpunkt aller
    /// Patches. Bei gleicher Distanz gewinnt der erste Patch in Arena-Reihenfolge.
    pub fn hit_test(&self, position: DVec2) -> Option<EditTarget> {
        if let Some(hit) = self.mesh.nearest_knot(position, self.pick_radius) {
            return Some(EditTarget::Knot(hit.knot));
        }

        let mut best: Option<(EditTarget, f64)> = None;
        for (idx, patch) in self.mesh.patches().iter().enumerate() {
            let Some(hit) = patch.nearest_boundary_point(position, self.pick_radius) else {
                continue;
            };
            match best {
                Some((_, distance)) if hit.distance >= distance => {}
                _ => {
                    let target = EditTarget::Boundary {
                        patch: PatchId(idx),
                        row: hit.row,
                        col: hit.col,
                    };
                    best = Some((target, hit.distance));
                }
            }
        }
        best.map(|(target, _)| target)
    }

    /// Führt den Treffertest aus und setzt den exklusiven Fokus.
    ///
    /// Ohne Treffer ist der Manager danach `Idle`.
    pub fn resolve_edit_target(&mut self, position: DVec2) -> Option<EditTarget> {
        let target = self.hit_test(position);
        self.focus = match target {
            Some(t) => {
                log::debug!("Fokus auf {t:?}");
                FocusState::Focused(t)
            }
            None => FocusState::Idle,
        };
        target
    }

    /// Merkt das Ziel unter dem Zeiger für die Darstellung, ohne zu fokussieren.
    pub fn hover(&mut self, position: DVec2) -> Option<EditTarget> {
        self.hovered = self.hit_test(position);
        self.hovered
    }

    /// Verschiebt das fokussierte Ziel an `position`.
    ///
    /// Knoten laufen über `KnotPoint::set_position`, Randpunkte direkt über
    /// den Patch-Setter. Gibt `false` zurück, wenn nichts fokussiert ist.
    pub fn apply_drag(&mut self, position: DVec2) -> bool {
        match self.focus {
            FocusState::Idle => false,
            FocusState::Focused(EditTarget::Knot(knot)) => {
                self.mesh_mut().set_knot_position(knot, position)
            }
            FocusState::Focused(EditTarget::Boundary { patch, row, col }) => {
                self.mesh_mut().set_boundary_point(patch, row, col, position)
            }
        }
    }

    /// Löst den Fokus; mehrfacher Aufruf ist unschädlich.
    pub fn release(&mut self) {
        if let FocusState::Focused(target) = self.focus {
            log::debug!("Fokus gelöst: {target:?}");
        }
        self.focus = FocusState::Idle;
    }

    /// Aktuelle Position eines Ziels.
    pub fn target_position(&self, target: EditTarget) -> Option<DVec2> {
        match target {
            EditTarget::Knot(knot) => self.mesh.knot(knot).map(|k| k.position()),
            EditTarget::Boundary { patch, row, col } => self
                .mesh
                .patch(patch)
                .and_then(|p| p.control_point(row, col))
                .map(|p| p.position),
        }
    }

    // ── Darstellung ─────────────────────────────────────────────

    fn state_of(&self, target: EditTarget) -> InteractionState {
        if self.focus() == Some(target) {
            InteractionState::Selected
        } else if self.hovered == Some(target) {
            InteractionState::Hovered
        } else {
            InteractionState::Idle
        }
    }

    /// Alle Handles: Knoten, dann Kanten-Kontrollpunkte und Ecken ohne Knoten.
    pub fn handle_markers(&self) -> Vec<HandleMarker> {
        let capacity = self.mesh.knots().len() + self.mesh.patches().len() * 8;
        let mut markers = Vec::with_capacity(capacity);

        for (idx, knot) in self.mesh.knots().iter().enumerate() {
            markers.push(HandleMarker {
                position: knot.position(),
                kind: HandleKind::Knot,
                state: self.state_of(EditTarget::Knot(KnotId(idx))),
            });
        }

        for (idx, patch) in self.mesh.patches().iter().enumerate() {
            let patch_id = PatchId(idx);
            for (row, col) in SurfacePatch::boundary_slots() {
                let owned_by_knot = Corner::from_index(row, col)
                    .is_some_and(|c| self.mesh.knot_for_slot(patch_id, c).is_some());
                if owned_by_knot {
                    continue;
                }
                let Some(point) = patch.control_point(row, col) else {
                    continue;
                };
                markers.push(HandleMarker {
                    position: point.position,
                    kind: HandleKind::Boundary,
                    state: self.state_of(EditTarget::Boundary {
                        patch: patch_id,
                        row,
                        col,
                    }),
                });
            }
        }
        markers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PatchSettings;

    fn manager_2x2() -> PatchManager {
        let mesh = PatchMesh::build_grid(DVec2::ZERO, 100.0, 100.0, 2, 2, PatchSettings::default());
        PatchManager::new(mesh, 10.0)
    }

    #[test]
    fn knoten_hat_vorrang_vor_randpunkt() {
        let mut manager = manager_2x2();
        let target = manager.resolve_edit_target(DVec2::new(101.0, 99.0));

        assert_eq!(target, manager.mesh().knot_id_at(1, 1).map(EditTarget::Knot));
        assert_eq!(manager.focus(), target);
    }

    #[test]
    fn randpunkt_ohne_knoten_im_radius() {
        let mut manager = manager_2x2();
        // Kanten-Kontrollpunkt (0,1) von Patch 0 liegt bei (33.3, 0)
        let target = manager.resolve_edit_target(DVec2::new(33.0, 2.0));

        assert_eq!(
            target,
            Some(EditTarget::Boundary {
                patch: PatchId(0),
                row: 0,
                col: 1
            })
        );
    }

    #[test]
    fn kein_treffer_setzt_idle() {
        let mut manager = manager_2x2();
        manager.resolve_edit_target(DVec2::ZERO);
        assert!(manager.focus().is_some());

        assert!(manager.resolve_edit_target(DVec2::new(50.0, 50.0)).is_none());
        assert_eq!(manager.focus_state(), FocusState::Idle);
        assert!(!manager.apply_drag(DVec2::new(1.0, 1.0)));
    }

    #[test]
    fn drag_auf_knoten_bewegt_alle_patches() {
        let mut manager = manager_2x2();
        manager.resolve_edit_target(DVec2::new(100.0, 100.0));
        assert!(manager.apply_drag(DVec2::new(120.0, 130.0)));

        let mesh = manager.mesh();
        for (row, col, corner) in [
            (0, 0, Corner::BottomRight),
            (0, 1, Corner::BottomLeft),
            (1, 0, Corner::TopRight),
            (1, 1, Corner::TopLeft),
        ] {
            let patch = mesh.patch_at(row, col).expect("Patch erwartet");
            assert_eq!(patch.corner_position(corner), DVec2::new(120.0, 130.0));
        }
        mesh.validate().expect("Mesh sollte konsistent bleiben");
    }

    #[test]
    fn drag_auf_randpunkt_bewegt_nur_diesen() {
        let mut manager = manager_2x2();
        let target = manager
            .resolve_edit_target(DVec2::new(33.0, 0.0))
            .expect("Treffer erwartet");
        assert!(manager.apply_drag(DVec2::new(40.0, -20.0)));

        assert_eq!(
            manager.target_position(target),
            Some(DVec2::new(40.0, -20.0))
        );
    }

    #[test]
    fn release_ist_idempotent() {
        let mut manager = manager_2x2();
        manager.resolve_edit_target(DVec2::ZERO);
        manager.release();
        manager.release();

        assert_eq!(manager.focus_state(), FocusState::Idle);
        assert!(!manager.apply_drag(DVec2::new(5.0, 5.0)));
    }

    #[test]
    fn hover_fokussiert_nicht() {
        let mut manager = manager_2x2();
        let hovered = manager.hover(DVec2::new(200.0, 0.0));

        assert!(hovered.is_some());
        assert_eq!(manager.hovered(), hovered);
        assert!(manager.focus().is_none());
    }

    #[test]
    fn handle_markers_zeigen_zustand() {
        let mut manager = manager_2x2();
        manager.hover(DVec2::new(200.0, 200.0));
        manager.resolve_edit_target(DVec2::ZERO);

        let markers = manager.handle_markers();
        // 9 Knoten + 4 Patches × 8 Kanten-Kontrollpunkte
        assert_eq!(markers.len(), 9 + 32);
        assert_eq!(markers[0].state, InteractionState::Selected);
        assert_eq!(markers[8].state, InteractionState::Hovered);
        assert!(markers[9..].iter().all(|m| m.kind == HandleKind::Boundary));
    }

    #[test]
    fn nan_position_trifft_nichts() {
        let mut manager = manager_2x2();

        assert_eq!(manager.resolve_edit_target(DVec2::NAN), None);
        assert_eq!(manager.focus_state(), FocusState::Idle);
        assert_eq!(manager.hover(DVec2::new(f64::NAN, 0.0)), None);
    }

    #[test]
    fn snapshot_bleibt_bei_drag_unveraendert() {
        let mut manager = manager_2x2();
        let snapshot = manager.mesh_arc();

        manager.resolve_edit_target(DVec2::new(100.0, 100.0));
        manager.apply_drag(DVec2::new(150.0, 150.0));

        let knot = snapshot.knot_id_at(1, 1).expect("Knoten erwartet");
        assert_eq!(
            snapshot.knot(knot).map(|k| k.position()),
            Some(DVec2::new(100.0, 100.0))
        );
    }
}
