//! Knoten: geteilte Eckpunkte, die Position und Farbe in alle verbundenen Patches schreiben.

use super::{Corner, Rgba, SurfacePatch};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Typisierter Index eines Patches in der Patch-Arena eines Meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PatchId(pub usize);

/// Typisierter Index eines Knotens im Mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KnotId(pub usize);

/// Verbindung eines Knotens zu genau einer Patch-Ecke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KnotConnection {
    pub patch: PatchId,
    pub corner: Corner,
}

impl KnotConnection {
    /// Gitterindex `(row, col)` der verbundenen Ecke.
    pub const fn slot(&self) -> (usize, usize) {
        self.corner.index()
    }
}

/// Ein geteilter Eckpunkt.
///
/// Der Knoten ist die maßgebliche Quelle für Position und Farbe; die Patches halten
/// eine Kopie, die bei jedem Schreibzugriff auf den Knoten aktualisiert wird.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotPoint {
    position: DVec2,
    color: Rgba,
    connections: Vec<KnotConnection>,
}

impl KnotPoint {
    /// Erstellt einen Knoten ohne Verbindungen.
    pub fn new(position: DVec2, color: Rgba) -> Self {
        Self {
            position,
            color,
            connections: Vec::new(),
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Alle Verbindungen in Einfüge-Reihenfolge.
    pub fn connections(&self) -> &[KnotConnection] {
        &self.connections
    }

    /// Prüft ob der Knoten die Ecke `corner` von `patch` steuert.
    pub fn is_connected_to(&self, patch: PatchId, corner: Corner) -> bool {
        self.connections
            .iter()
            .any(|c| c.patch == patch && c.corner == corner)
    }

    /// Verbindet den Knoten mit der Ecke `(row, col)` eines Patches.
    ///
    /// # Panics
    /// Wenn `(row, col)` keine Ecke ist oder der Slot bereits verbunden ist.
    /// Beides verletzt den Vertrag des Mesh-Aufbaus.
    pub fn connect(&mut self, patch: PatchId, row: usize, col: usize) {
        let Some(corner) = Corner::from_index(row, col) else {
            panic!(
                "Knoten-Verbindung auf Nicht-Ecke ({row},{col}) von Patch {}",
                patch.0
            );
        };
        assert!(
            !self.is_connected_to(patch, corner),
            "Slot ({row},{col}) von Patch {} ist bereits verbunden",
            patch.0
        );
        self.connections.push(KnotConnection { patch, corner });
    }

    /// Setzt die Position und schreibt sie in alle verbundenen Patch-Ecken.
    ///
    /// Das Nachführen der Kanten übernimmt ausschließlich der Patch selbst
    /// (gemäß seinem [`super::EdgeFollow`]), der Knoten verschiebt nichts zusätzlich.
    pub fn set_position(&mut self, position: DVec2, patches: &mut [SurfacePatch]) {
        self.position = position;
        for conn in &self.connections {
            let (row, col) = conn.slot();
            match patches.get_mut(conn.patch.0) {
                Some(patch) => {
                    patch.set_boundary_point(row, col, position);
                }
                None => log::warn!("Knoten verweist auf unbekannten Patch {}", conn.patch.0),
            }
        }
    }

    /// Setzt die Farbe und schreibt sie in alle verbundenen Patch-Ecken.
    ///
    /// Jeder Patch leitet seine Kantenfarben unabhängig neu ab.
    pub fn set_color(&mut self, color: Rgba, patches: &mut [SurfacePatch]) {
        self.color = color;
        for conn in &self.connections {
            let (row, col) = conn.slot();
            match patches.get_mut(conn.patch.0) {
                Some(patch) => {
                    patch.set_corner_color(row, col, color);
                }
                None => log::warn!("Knoten verweist auf unbekannten Patch {}", conn.patch.0),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_patches() -> Vec<SurfacePatch> {
        vec![
            SurfacePatch::new(DVec2::ZERO, 100.0, 100.0),
            SurfacePatch::new(DVec2::new(100.0, 0.0), 100.0, 100.0),
        ]
    }

    #[test]
    fn set_position_schreibt_in_alle_patches() {
        let mut patches = two_patches();
        let mut knot = KnotPoint::new(DVec2::new(100.0, 0.0), Rgba::GREEN);
        knot.connect(PatchId(0), 0, 3);
        knot.connect(PatchId(1), 0, 0);

        knot.set_position(DVec2::new(110.0, -5.0), &mut patches);

        assert_eq!(knot.position(), DVec2::new(110.0, -5.0));
        assert_eq!(
            patches[0].corner_position(Corner::TopRight),
            DVec2::new(110.0, -5.0)
        );
        assert_eq!(
            patches[1].corner_position(Corner::TopLeft),
            DVec2::new(110.0, -5.0)
        );
    }

    #[test]
    fn kanten_werden_genau_einmal_nachgefuehrt() {
        let mut patches = two_patches();
        let edge_before = patches[1].control_point(0, 1).unwrap().position;
        let mut knot = KnotPoint::new(DVec2::new(100.0, 0.0), Rgba::GREEN);
        knot.connect(PatchId(1), 0, 0);

        knot.set_position(DVec2::new(104.0, 2.0), &mut patches);

        // Standard: volles Delta, keine zusätzliche Verschiebung durch den Knoten
        let edge_after = patches[1].control_point(0, 1).unwrap().position;
        assert!((edge_after - edge_before).distance(DVec2::new(4.0, 2.0)) < 1e-9);
    }

    #[test]
    fn set_color_schreibt_in_alle_patches() {
        let mut patches = two_patches();
        let mut knot = KnotPoint::new(DVec2::new(100.0, 100.0), Rgba::BLUE);
        knot.connect(PatchId(0), 3, 3);
        knot.connect(PatchId(1), 3, 0);

        knot.set_color(Rgba::WHITE, &mut patches);

        assert_eq!(knot.color(), Rgba::WHITE);
        assert_eq!(patches[0].corner_color(Corner::BottomRight), Rgba::WHITE);
        assert_eq!(patches[1].corner_color(Corner::BottomLeft), Rgba::WHITE);
    }

    #[test]
    fn verbindungen_bleiben_in_reihenfolge() {
        let mut knot = KnotPoint::new(DVec2::ZERO, Rgba::RED);
        knot.connect(PatchId(3), 3, 3);
        knot.connect(PatchId(1), 0, 0);
        let patches: Vec<_> = knot.connections().iter().map(|c| c.patch).collect();
        assert_eq!(patches, vec![PatchId(3), PatchId(1)]);
        assert!(knot.is_connected_to(PatchId(1), Corner::TopLeft));
        assert!(!knot.is_connected_to(PatchId(1), Corner::TopRight));
    }

    #[test]
    #[should_panic(expected = "Nicht-Ecke")]
    fn connect_auf_kante_panikt() {
        let mut knot = KnotPoint::new(DVec2::ZERO, Rgba::RED);
        knot.connect(PatchId(0), 0, 1);
    }

    #[test]
    #[should_panic(expected = "bereits verbunden")]
    fn doppelter_slot_panikt() {
        let mut knot = KnotPoint::new(DVec2::ZERO, Rgba::RED);
        knot.connect(PatchId(0), 0, 0);
        knot.connect(PatchId(0), 0, 0);
    }
}
