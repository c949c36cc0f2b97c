//! PatchMesh: Patch-Arena, Knoten-Arena und Aufbau regelmäßiger Patch-Gitter.

use super::{
    BoundingBox, Corner, CornerPalette, EdgeFollow, InteriorPolicy, KnotId, KnotIndex, KnotMatch,
    KnotPoint, PatchId, PatchSettings, Rgba, SurfacePatch,
};
use glam::DVec2;
use std::collections::HashSet;

/// Toleranz für den Positionsabgleich Knoten ↔ Patch-Ecke in [`PatchMesh::validate`].
const SYNC_TOLERANCE: f64 = 1e-9;

/// Container für alle Patches und Knoten eines Meshes.
///
/// Patches und Knoten werden gemeinsam aufgebaut und nur ganz verworfen,
/// einzelne Elemente werden nie gelöscht. `PatchId`/`KnotId` bleiben daher stabil.
#[derive(Debug, Clone, Default)]
pub struct PatchMesh {
    patches: Vec<SurfacePatch>,
    knots: Vec<KnotPoint>,
    /// Patch-Zeilen des Gitters
    rows: usize,
    /// Patch-Spalten des Gitters
    cols: usize,
    settings: PatchSettings,
    /// Persistenter Spatial-Index über alle Knoten
    knot_index: KnotIndex,
}

impl PatchMesh {
    /// Erstellt ein leeres Mesh.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Einzelner Patch mit vier eigenen Knoten (1×1-Gitter, Standard-Palette).
    pub fn new_patch(origin: DVec2, width: f64, height: f64) -> Self {
        Self::build_grid(origin, width, height, 1, 1, PatchSettings::default())
    }

    /// Baut ein `rows × cols` Gitter mit Standard-Palette.
    pub fn build_grid(
        origin: DVec2,
        patch_width: f64,
        patch_height: f64,
        rows: usize,
        cols: usize,
        settings: PatchSettings,
    ) -> Self {
        Self::build_grid_with_palette(
            origin,
            patch_width,
            patch_height,
            rows,
            cols,
            &CornerPalette::default(),
            settings,
        )
    }

    /// Baut ein `rows × cols` Gitter aus Patches auf einem regelmäßigen Raster.
    ///
    /// Jeder der `(rows+1)·(cols+1)` Gitterpunkte bekommt einen Knoten, verbunden
    /// mit den 1–4 Patches, deren Ecke dort liegt. Die Knotenfarben sind die
    /// bilineare Mischung der Palette über das ganze Gitter, sodass benachbarte
    /// Patches an geteilten Knoten von Anfang an übereinstimmen.
    pub fn build_grid_with_palette(
        origin: DVec2,
        patch_width: f64,
        patch_height: f64,
        rows: usize,
        cols: usize,
        palette: &CornerPalette,
        settings: PatchSettings,
    ) -> Self {
        if rows == 0 || cols == 0 {
            log::warn!("Leeres Patch-Gitter angefordert ({rows}×{cols})");
            return Self {
                settings,
                ..Self::default()
            };
        }

        let lattice_cols = cols + 1;
        let lattice_rows = rows + 1;

        // Gitterpunkte einmal berechnen, damit Knoten und Patch-Ecken bitgleich sind
        let mut knots = Vec::with_capacity(lattice_rows * lattice_cols);
        for kr in 0..lattice_rows {
            for kc in 0..lattice_cols {
                let position =
                    origin + DVec2::new(kc as f64 * patch_width, kr as f64 * patch_height);
                let color = palette.blend(kc as f32 / cols as f32, kr as f32 / rows as f32);
                knots.push(KnotPoint::new(position, color));
            }
        }

        let knot_at = |kr: usize, kc: usize| kr * lattice_cols + kc;
        let mut patches = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let patch_id = PatchId(patches.len());
                let corner_knots = [
                    knot_at(r, c),
                    knot_at(r, c + 1),
                    knot_at(r + 1, c),
                    knot_at(r + 1, c + 1),
                ];

                let corners = corner_knots.map(|k| knots[k].position());
                let patch_palette = CornerPalette {
                    top_left: knots[corner_knots[0]].color(),
                    top_right: knots[corner_knots[1]].color(),
                    bottom_left: knots[corner_knots[2]].color(),
                    bottom_right: knots[corner_knots[3]].color(),
                };
                patches.push(SurfacePatch::from_corners(corners, &patch_palette, settings));

                for (corner, k) in Corner::ALL.into_iter().zip(corner_knots) {
                    let (row, col) = corner.index();
                    knots[k].connect(patch_id, row, col);
                }
            }
        }

        log::info!(
            "Patch-Gitter aufgebaut: {} Patches, {} Knoten",
            patches.len(),
            knots.len()
        );

        let knot_index = KnotIndex::from_knots(&knots);
        Self {
            patches,
            knots,
            rows,
            cols,
            settings,
            knot_index,
        }
    }

    // ── Abfragen ────────────────────────────────────────────────

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn settings(&self) -> PatchSettings {
        self.settings
    }

    pub fn patches(&self) -> &[SurfacePatch] {
        &self.patches
    }

    pub fn knots(&self) -> &[KnotPoint] {
        &self.knots
    }

    pub fn patch(&self, id: PatchId) -> Option<&SurfacePatch> {
        self.patches.get(id.0)
    }

    pub fn knot(&self, id: KnotId) -> Option<&KnotPoint> {
        self.knots.get(id.0)
    }

    /// Patch-ID an Gitterposition `(row, col)`.
    pub fn patch_id_at(&self, row: usize, col: usize) -> Option<PatchId> {
        (row < self.rows && col < self.cols).then_some(PatchId(row * self.cols + col))
    }

    /// Patch an Gitterposition `(row, col)`.
    pub fn patch_at(&self, row: usize, col: usize) -> Option<&SurfacePatch> {
        self.patch_id_at(row, col).and_then(|id| self.patch(id))
    }

    /// Knoten am Gitterpunkt `(row, col)`, `row ∈ 0..=rows`, `col ∈ 0..=cols`.
    pub fn knot_id_at(&self, row: usize, col: usize) -> Option<KnotId> {
        if self.is_empty() || row > self.rows || col > self.cols {
            return None;
        }
        Some(KnotId(row * (self.cols + 1) + col))
    }

    /// Knoten, der die Ecke `corner` von `patch` steuert.
    pub fn knot_for_slot(&self, patch: PatchId, corner: Corner) -> Option<KnotId> {
        self.knots
            .iter()
            .position(|k| k.is_connected_to(patch, corner))
            .map(KnotId)
    }

    /// Nächster Knoten innerhalb von `radius`.
    pub fn nearest_knot(&self, position: DVec2, radius: f64) -> Option<KnotMatch> {
        self.knot_index
            .nearest(position)
            .filter(|m| m.distance <= radius)
    }

    /// Alle Knoten innerhalb von `radius`, aufsteigend nach Distanz.
    pub fn knots_within_radius(&self, position: DVec2, radius: f64) -> Vec<KnotMatch> {
        self.knot_index.within_radius(position, radius)
    }

    /// Achsenparalleles Rechteck um alle Kontrollpunkte aller Patches.
    pub fn control_bounds(&self) -> BoundingBox {
        self.patches
            .iter()
            .fold(BoundingBox::EMPTY, |mut bb, patch| {
                bb.union(&patch.control_bounds());
                bb
            })
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Verschiebt einen Knoten und schreibt die Position in alle verbundenen Patches.
    pub fn set_knot_position(&mut self, id: KnotId, position: DVec2) -> bool {
        let Some(knot) = self.knots.get_mut(id.0) else {
            log::warn!("Unbekannter Knoten {}", id.0);
            return false;
        };
        knot.set_position(position, &mut self.patches);
        self.rebuild_knot_index();
        true
    }

    /// Färbt einen Knoten und schreibt die Farbe in alle verbundenen Patches.
    pub fn set_knot_color(&mut self, id: KnotId, color: Rgba) -> bool {
        let Some(knot) = self.knots.get_mut(id.0) else {
            log::warn!("Unbekannter Knoten {}", id.0);
            return false;
        };
        knot.set_color(color, &mut self.patches);
        true
    }

    /// Verschiebt einen Randpunkt eines Patches.
    ///
    /// Ecken, die ein Knoten steuert, laufen über den Knoten, damit alle
    /// Nachbar-Patches mitgezogen werden.
    pub fn set_boundary_point(
        &mut self,
        patch: PatchId,
        row: usize,
        col: usize,
        position: DVec2,
    ) -> bool {
        if let Some(knot) = Corner::from_index(row, col).and_then(|c| self.knot_for_slot(patch, c))
        {
            return self.set_knot_position(knot, position);
        }
        match self.patches.get_mut(patch.0) {
            Some(p) => p.set_boundary_point(row, col, position),
            None => {
                log::warn!("Unbekannter Patch {}", patch.0);
                false
            }
        }
    }

    /// Setzt die Farbe einer Patch-Ecke; geteilte Ecken laufen über ihren Knoten.
    pub fn set_corner_color(
        &mut self,
        patch: PatchId,
        row: usize,
        col: usize,
        color: Rgba,
    ) -> bool {
        if let Some(knot) = Corner::from_index(row, col).and_then(|c| self.knot_for_slot(patch, c))
        {
            return self.set_knot_color(knot, color);
        }
        match self.patches.get_mut(patch.0) {
            Some(p) => p.set_corner_color(row, col, color),
            None => {
                log::warn!("Unbekannter Patch {}", patch.0);
                false
            }
        }
    }

    /// Wechselt die Innenpunkt-Strategie aller Patches.
    pub fn set_interior_policy(&mut self, policy: InteriorPolicy) {
        self.settings.interior_policy = policy;
        for patch in &mut self.patches {
            patch.set_interior_policy(policy);
        }
    }

    /// Wechselt das Kanten-Nachführen aller Patches.
    pub fn set_edge_follow(&mut self, edge_follow: EdgeFollow) {
        self.settings.edge_follow = edge_follow;
        for patch in &mut self.patches {
            patch.set_edge_follow(edge_follow);
        }
    }

    fn rebuild_knot_index(&mut self) {
        self.knot_index = KnotIndex::from_knots(&self.knots);
    }

    // ── Invarianten ─────────────────────────────────────────────

    /// Prüft die Knoten-Invarianten des Meshes.
    ///
    /// - jede Verbindung zeigt auf einen existierenden Patch
    /// - kein Slot wird von zwei Verbindungen belegt
    /// - Position und Farbe jeder verbundenen Ecke stimmen mit dem Knoten überein
    /// - der Spatial-Index kennt alle Knoten
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen = HashSet::new();
        for (knot_idx, knot) in self.knots.iter().enumerate() {
            for conn in knot.connections() {
                let Some(patch) = self.patches.get(conn.patch.0) else {
                    anyhow::bail!(
                        "Knoten {knot_idx} verweist auf unbekannten Patch {}",
                        conn.patch.0
                    );
                };
                if !seen.insert((conn.patch, conn.corner)) {
                    anyhow::bail!(
                        "Slot {:?} von Patch {} ist mehrfach verbunden",
                        conn.corner,
                        conn.patch.0
                    );
                }

                let corner_pos = patch.corner_position(conn.corner);
                if corner_pos.distance(knot.position()) > SYNC_TOLERANCE {
                    anyhow::bail!(
                        "Ecke {:?} von Patch {} liegt bei {corner_pos}, Knoten {knot_idx} bei {}",
                        conn.corner,
                        conn.patch.0,
                        knot.position()
                    );
                }
                if patch.corner_color(conn.corner) != knot.color() {
                    anyhow::bail!(
                        "Eckfarbe {:?} von Patch {} weicht von Knoten {knot_idx} ab",
                        conn.corner,
                        conn.patch.0
                    );
                }
            }
        }

        if self.knot_index.len() != self.knots.len() {
            anyhow::bail!(
                "Spatial-Index veraltet: {} Einträge, {} Knoten",
                self.knot_index.len(),
                self.knots.len()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
