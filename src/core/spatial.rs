//! Spatial-Index (KD-Tree) für schnelle Knoten-Abfragen.

use glam::DVec2;
use kiddo::{KdTree, SquaredEuclidean};
use std::collections::HashMap;

use super::{KnotId, KnotPoint};

/// Ergebnis einer Distanzabfrage gegen den Knoten-Index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnotMatch {
    /// ID des gefundenen Knotens
    pub knot: KnotId,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Read-only Spatial-Index über allen Knoten eines Meshes.
///
/// Der KD-Tree enthält jede Position nur einmal; ein Eintrag verweist auf die
/// Gruppe aller Knoten an genau dieser Position (aufsteigende IDs). Beliebig
/// viele deckungsgleiche Knoten sprengen so keinen Bucket.
#[derive(Debug, Clone)]
pub struct KnotIndex {
    tree: KdTree<f64, 2>,
    groups: Vec<Vec<KnotId>>,
    len: usize,
}

impl KnotIndex {
    /// Erstellt einen leeren Index.
    pub fn empty() -> Self {
        Self {
            tree: (&Vec::<[f64; 2]>::new()).into(),
            groups: Vec::new(),
            len: 0,
        }
    }

    /// Baut einen neuen Index aus den übergebenen Knoten.
    pub fn from_knots(knots: &[KnotPoint]) -> Self {
        let mut slots: HashMap<[u64; 2], usize> = HashMap::with_capacity(knots.len());
        let mut entries: Vec<[f64; 2]> = Vec::with_capacity(knots.len());
        let mut groups: Vec<Vec<KnotId>> = Vec::with_capacity(knots.len());

        for (idx, knot) in knots.iter().enumerate() {
            // +0.0 faltet -0.0 auf 0.0
            let point = [knot.position().x + 0.0, knot.position().y + 0.0];
            let key = [point[0].to_bits(), point[1].to_bits()];
            let slot = *slots.entry(key).or_insert_with(|| {
                entries.push(point);
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[slot].push(KnotId(idx));
        }

        if entries.len() < knots.len() {
            log::debug!(
                "Knoten-Index: {} Knoten auf {} Positionen",
                knots.len(),
                entries.len()
            );
        }

        Self {
            tree: (&entries).into(),
            groups,
            len: knots.len(),
        }
    }

    /// Gibt die Anzahl indexierter Knoten zurück.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Gibt `true` zurück, wenn keine Knoten im Index liegen.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Findet den nächsten Knoten zur gegebenen Position.
    pub fn nearest(&self, query: DVec2) -> Option<KnotMatch> {
        if self.is_empty() || !query.is_finite() {
            return None;
        }

        let result = self.tree.nearest_one::<SquaredEuclidean>(&[query.x, query.y]);
        let knot = *self.groups.get(result.item as usize)?.first()?;
        Some(KnotMatch {
            knot,
            distance: result.distance.sqrt(),
        })
    }

    /// Findet alle Knoten innerhalb eines Radius, aufsteigend nach Distanz sortiert.
    pub fn within_radius(&self, query: DVec2, radius: f64) -> Vec<KnotMatch> {
        if self.is_empty() || !query.is_finite() || !(radius >= 0.0) {
            return Vec::new();
        }

        let mut results = self
            .tree
            .within::<SquaredEuclidean>(&[query.x, query.y], radius * radius)
            .into_iter()
            .flat_map(|entry| {
                let distance = entry.distance.sqrt();
                self.groups
                    .get(entry.item as usize)
                    .into_iter()
                    .flatten()
                    .map(move |&knot| KnotMatch { knot, distance })
            })
            .collect::<Vec<_>>();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.knot.cmp(&b.knot)));
        results
    }
}

impl Default for KnotIndex {
    fn default() -> Self {
        Self::empty()
    }
}
