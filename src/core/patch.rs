//! Bikubischer Coons-/Bézier-Patch mit 4×4-Kontrollgitter.
//!
//! Gitter-Konventionen:
//! - Index `(row, col)`, `row` läuft von oben (0) nach unten (3), `col` von links (0) nach rechts (3)
//! - `u` läuft entlang `col`, `v` entlang `row`
//! - Ecken: (0,0), (0,3), (3,0), (3,3)
//! - Rand: jeder Index mit `row ∈ {0,3}` oder `col ∈ {0,3}`
//! - Innen: der 2×2-Block (1..=2, 1..=2), wird immer aus dem Rand abgeleitet

use super::bezier::{bernstein, cubic_bezier};
use super::point::{bilinear, lerp};
use super::{BoundingBox, Point, Rgba};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Seitenlänge des Kontrollgitters.
pub const GRID_SIZE: usize = 4;
/// Letzter Gitterindex.
const LAST: usize = GRID_SIZE - 1;

/// Parameter der beiden Zwischenpunkte einer Kante.
const EDGE_PARAMS: [f64; 2] = [1.0 / 3.0, 2.0 / 3.0];

/// Eine der vier Patch-Ecken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Alle Ecken in Row-Major-Reihenfolge.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// Gitterindex `(row, col)` der Ecke.
    pub const fn index(self) -> (usize, usize) {
        match self {
            Corner::TopLeft => (0, 0),
            Corner::TopRight => (0, LAST),
            Corner::BottomLeft => (LAST, 0),
            Corner::BottomRight => (LAST, LAST),
        }
    }

    /// Liefert die Ecke zu einem Gitterindex, `None` für Nicht-Ecken.
    pub const fn from_index(row: usize, col: usize) -> Option<Self> {
        match (row, col) {
            (0, 0) => Some(Corner::TopLeft),
            (0, LAST) => Some(Corner::TopRight),
            (LAST, 0) => Some(Corner::BottomLeft),
            (LAST, LAST) => Some(Corner::BottomRight),
            _ => None,
        }
    }

    /// Die beiden Kanten-Kontrollpunkte direkt neben der Ecke (horizontal, vertikal).
    pub const fn adjacent_edge_points(self) -> [(usize, usize); 2] {
        let (row, col) = self.index();
        let col_inner = if col == 0 { 1 } else { LAST - 1 };
        let row_inner = if row == 0 { 1 } else { LAST - 1 };
        [(row, col_inner), (row_inner, col)]
    }
}

/// Strategie zur Berechnung der inneren Kontrollpunkte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteriorPolicy {
    /// Coons-Formel: Rand-Lerp horizontal + vertikal minus bilineare Ecken
    #[default]
    Coons,
    /// Gewichtetes Mittel der vier nächsten Randpunkte (bleibt in der konvexen Hülle)
    WeightedAverage,
}

/// Wie stark die benachbarten Kanten-Kontrollpunkte einer verschobenen Ecke folgen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EdgeFollow {
    /// Kanten-Kontrollpunkte bleiben stehen
    Fixed,
    /// Folgen mit halbem Delta
    Half,
    /// Folgen mit vollem Delta (Tangente bleibt exakt erhalten)
    #[default]
    Full,
}

impl EdgeFollow {
    /// Faktor, mit dem das Eck-Delta auf die Nachbarn übertragen wird.
    pub const fn factor(self) -> f64 {
        match self {
            EdgeFollow::Fixed => 0.0,
            EdgeFollow::Half => 0.5,
            EdgeFollow::Full => 1.0,
        }
    }
}

/// Auswerter für die Patch-Fläche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SurfaceEvaluator {
    /// Bikubisches Tensorprodukt über alle 16 Kontrollpunkte (maßgeblich)
    #[default]
    TensorProduct,
    /// Coons-Blend der vier kubischen Randkurven mit bilinearer Eckkorrektur
    CoonsBoundary,
}

/// Verhaltens-Einstellungen eines Patches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatchSettings {
    pub interior_policy: InteriorPolicy,
    pub edge_follow: EdgeFollow,
}

/// Eckfarben eines neuen Patches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CornerPalette {
    pub top_left: Rgba,
    pub top_right: Rgba,
    pub bottom_left: Rgba,
    pub bottom_right: Rgba,
}

impl CornerPalette {
    /// Farbe einer Ecke.
    pub const fn color(&self, corner: Corner) -> Rgba {
        match corner {
            Corner::TopLeft => self.top_left,
            Corner::TopRight => self.top_right,
            Corner::BottomLeft => self.bottom_left,
            Corner::BottomRight => self.bottom_right,
        }
    }

    /// Bilineare Mischung der Palette an der Gitterposition `(u, v)`.
    pub fn blend(&self, u: f32, v: f32) -> Rgba {
        Rgba::bilinear(
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            u,
            v,
        )
    }
}

impl Default for CornerPalette {
    fn default() -> Self {
        Self {
            top_left: Rgba::RED,
            top_right: Rgba::GREEN,
            bottom_left: Rgba::YELLOW,
            bottom_right: Rgba::BLUE,
        }
    }
}

/// Treffer einer Randpunkt-Suche.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryHit {
    pub row: usize,
    pub col: usize,
    /// Euklidische Distanz zum Suchpunkt
    pub distance: f64,
}

/// Prüft ob `(row, col)` ein Randindex ist.
pub const fn is_boundary(row: usize, col: usize) -> bool {
    row < GRID_SIZE && col < GRID_SIZE && (row == 0 || row == LAST || col == 0 || col == LAST)
}

/// Ein Patch aus 4×4 Kontrollpunkten.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfacePatch {
    control_points: [[Point; GRID_SIZE]; GRID_SIZE],
    settings: PatchSettings,
}

impl SurfacePatch {
    /// Erstellt einen rechteckigen Patch mit Standard-Palette und -Einstellungen.
    pub fn new(origin: DVec2, width: f64, height: f64) -> Self {
        Self::with_settings(
            origin,
            width,
            height,
            &CornerPalette::default(),
            PatchSettings::default(),
        )
    }

    /// Erstellt einen rechteckigen Patch mit eigener Palette und Einstellungen.
    pub fn with_settings(
        origin: DVec2,
        width: f64,
        height: f64,
        palette: &CornerPalette,
        settings: PatchSettings,
    ) -> Self {
        let corners = [
            origin,
            origin + DVec2::new(width, 0.0),
            origin + DVec2::new(0.0, height),
            origin + DVec2::new(width, height),
        ];
        Self::from_corners(corners, palette, settings)
    }

    /// Erstellt einen Patch aus vier Eckpositionen in [`Corner::ALL`]-Reihenfolge.
    ///
    /// Kanten-Kontrollpunkte liegen gleichmäßig bei 1/3 und 2/3 der jeweiligen
    /// Kante, Kantenfarben und innere Punkte werden sofort abgeleitet.
    pub fn from_corners(
        corners: [DVec2; 4],
        palette: &CornerPalette,
        settings: PatchSettings,
    ) -> Self {
        let [tl, tr, bl, br] = corners;
        let mut control_points = [[Point::default(); GRID_SIZE]; GRID_SIZE];

        for (corner, position) in Corner::ALL.into_iter().zip(corners) {
            let (row, col) = corner.index();
            control_points[row][col] = Point::with_color(position, palette.color(corner));
        }
        for (k, t) in EDGE_PARAMS.into_iter().enumerate() {
            let idx = k + 1;
            control_points[0][idx].position = lerp(tl, tr, t);
            control_points[LAST][idx].position = lerp(bl, br, t);
            control_points[idx][0].position = lerp(tl, bl, t);
            control_points[idx][LAST].position = lerp(tr, br, t);
        }

        let mut patch = Self {
            control_points,
            settings,
        };
        patch.derive_edge_colors();
        patch.recompute_interior();
        patch
    }

    /// Aktuelle Einstellungen.
    pub fn settings(&self) -> PatchSettings {
        self.settings
    }

    /// Wechselt die Innenpunkt-Strategie und berechnet das Innere neu.
    pub fn set_interior_policy(&mut self, policy: InteriorPolicy) {
        self.settings.interior_policy = policy;
        self.recompute_interior();
    }

    /// Setzt das Nachführ-Verhalten der Kanten bei Eckbewegungen.
    pub fn set_edge_follow(&mut self, edge_follow: EdgeFollow) {
        self.settings.edge_follow = edge_follow;
    }

    /// Kontrollpunkt an `(row, col)`, `None` außerhalb des Gitters.
    pub fn control_point(&self, row: usize, col: usize) -> Option<&Point> {
        self.control_points.get(row)?.get(col)
    }

    /// Read-only Sicht auf das gesamte Gitter.
    pub fn control_points(&self) -> &[[Point; GRID_SIZE]; GRID_SIZE] {
        &self.control_points
    }

    /// Position einer Ecke.
    pub fn corner_position(&self, corner: Corner) -> DVec2 {
        let (row, col) = corner.index();
        self.control_points[row][col].position
    }

    /// Alle vier Eckpositionen in [`Corner::ALL`]-Reihenfolge.
    pub fn corner_positions(&self) -> [DVec2; 4] {
        Corner::ALL.map(|corner| self.corner_position(corner))
    }

    /// Farbe einer Ecke (Ecken sind immer gefärbt).
    pub fn corner_color(&self, corner: Corner) -> Rgba {
        let (row, col) = corner.index();
        self.control_points[row][col].color.unwrap_or_default()
    }

    /// Iterator über alle 12 Randindizes in Row-Major-Reihenfolge.
    pub fn boundary_slots() -> impl Iterator<Item = (usize, usize)> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| is_boundary(row, col))
    }

    // ── Auswertung ──────────────────────────────────────────────

    /// Wertet die Fläche an `(u, v)` als bikubisches Tensorprodukt aus.
    ///
    /// `u` und `v` werden auf `[0, 1]` geklemmt.
    pub fn evaluate_point(&self, u: f64, v: f64) -> DVec2 {
        let bu = bernstein(u.clamp(0.0, 1.0));
        let bv = bernstein(v.clamp(0.0, 1.0));

        let mut result = DVec2::ZERO;
        for (i, cells) in self.control_points.iter().enumerate() {
            for (j, cell) in cells.iter().enumerate() {
                result += cell.position * (bv[i] * bu[j]);
            }
        }
        result
    }

    /// Wertet die Fläche als Coons-Blend der vier kubischen Randkurven aus.
    ///
    /// `top·(1-v) + bottom·v + left·(1-u) + right·u − bilinear(ecken, u, v)`.
    /// Stimmt auf dem Rand mit [`Self::evaluate_point`] überein, im Inneren nicht.
    pub fn evaluate_point_coons(&self, u: f64, v: f64) -> DVec2 {
        let u = u.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let p = |row: usize, col: usize| self.control_points[row][col].position;

        let top = cubic_bezier(p(0, 0), p(0, 1), p(0, 2), p(0, 3), u);
        let bottom = cubic_bezier(p(3, 0), p(3, 1), p(3, 2), p(3, 3), u);
        let left = cubic_bezier(p(0, 0), p(1, 0), p(2, 0), p(3, 0), v);
        let right = cubic_bezier(p(0, 3), p(1, 3), p(2, 3), p(3, 3), v);
        let corners = bilinear(p(0, 0), p(0, 3), p(3, 3), p(3, 0), u, v);

        top * (1.0 - v) + bottom * v + left * (1.0 - u) + right * u - corners
    }

    /// Wertet die Fläche mit dem gewählten Auswerter aus.
    pub fn evaluate_with(&self, evaluator: SurfaceEvaluator, u: f64, v: f64) -> DVec2 {
        match evaluator {
            SurfaceEvaluator::TensorProduct => self.evaluate_point(u, v),
            SurfaceEvaluator::CoonsBoundary => self.evaluate_point_coons(u, v),
        }
    }

    /// Bilineare Interpolation der vier Eckfarben; Kantenfarben fließen nicht ein.
    pub fn evaluate_color(&self, u: f64, v: f64) -> Rgba {
        let u = u.clamp(0.0, 1.0) as f32;
        let v = v.clamp(0.0, 1.0) as f32;
        Rgba::bilinear(
            self.corner_color(Corner::TopLeft),
            self.corner_color(Corner::TopRight),
            self.corner_color(Corner::BottomLeft),
            self.corner_color(Corner::BottomRight),
            u,
            v,
        )
    }

    // ── Ableitung des Inneren ───────────────────────────────────

    /// Berechnet die vier inneren Kontrollpunkte aus den 12 Randpunkten neu.
    pub fn recompute_interior(&mut self) {
        for i in 1..LAST {
            for j in 1..LAST {
                let position = match self.settings.interior_policy {
                    InteriorPolicy::Coons => self.coons_interior(i, j),
                    InteriorPolicy::WeightedAverage => self.weighted_interior(i, j),
                };
                let u = j as f32 / LAST as f32;
                let v = i as f32 / LAST as f32;
                let color = Rgba::bilinear(
                    self.corner_color(Corner::TopLeft),
                    self.corner_color(Corner::TopRight),
                    self.corner_color(Corner::BottomLeft),
                    self.corner_color(Corner::BottomRight),
                    u,
                    v,
                );
                self.control_points[i][j] = Point::with_color(position, color);
            }
        }
    }

    fn coons_interior(&self, i: usize, j: usize) -> DVec2 {
        let u = j as f64 / LAST as f64;
        let v = i as f64 / LAST as f64;
        let p = |row: usize, col: usize| self.control_points[row][col].position;

        let horizontal = lerp(p(i, 0), p(i, LAST), u);
        let vertical = lerp(p(0, j), p(LAST, j), v);
        let corners = bilinear(p(0, 0), p(0, LAST), p(LAST, LAST), p(LAST, 0), u, v);
        horizontal + vertical - corners
    }

    fn weighted_interior(&self, i: usize, j: usize) -> DVec2 {
        let p = |row: usize, col: usize| self.control_points[row][col].position;
        let last = LAST as f64;
        let w_left = (last - j as f64) / last;
        let w_right = j as f64 / last;
        let w_top = (last - i as f64) / last;
        let w_bottom = i as f64 / last;

        let sum = p(i, 0) * w_left
            + p(i, LAST) * w_right
            + p(0, j) * w_top
            + p(LAST, j) * w_bottom;
        sum / (w_left + w_right + w_top + w_bottom)
    }

    /// Leitet die 8 Kantenfarben aus den Eckfarben ab (t = 1/3, 2/3).
    fn derive_edge_colors(&mut self) {
        let tl = self.corner_color(Corner::TopLeft);
        let tr = self.corner_color(Corner::TopRight);
        let bl = self.corner_color(Corner::BottomLeft);
        let br = self.corner_color(Corner::BottomRight);

        for (k, t) in EDGE_PARAMS.iter().enumerate() {
            let t = *t as f32;
            let idx = k + 1;
            self.control_points[0][idx].color = Some(tl.lerp(tr, t));
            self.control_points[LAST][idx].color = Some(bl.lerp(br, t));
            self.control_points[idx][0].color = Some(tl.lerp(bl, t));
            self.control_points[idx][LAST].color = Some(tr.lerp(br, t));
        }
    }

    // ── Mutation ────────────────────────────────────────────────

    /// Verschiebt einen Randpunkt und berechnet das Innere neu.
    ///
    /// Innere oder ungültige Indizes werden ignoriert (`false`). Bei Ecken folgen
    /// die beiden benachbarten Kanten-Kontrollpunkte gemäß [`EdgeFollow`].
    pub fn set_boundary_point(&mut self, row: usize, col: usize, position: DVec2) -> bool {
        if !is_boundary(row, col) {
            log::debug!("Innenpunkt ({row},{col}) ist nicht direkt editierbar");
            return false;
        }

        let delta = position - self.control_points[row][col].position;
        self.control_points[row][col].position = position;

        if let Some(corner) = Corner::from_index(row, col) {
            let factor = self.settings.edge_follow.factor();
            if factor > 0.0 {
                for (r, c) in corner.adjacent_edge_points() {
                    self.control_points[r][c].position += delta * factor;
                }
            }
        }

        self.recompute_interior();
        true
    }

    /// Setzt die Farbe einer Ecke und leitet alle Kantenfarben neu ab.
    ///
    /// Nicht-Ecken werden ignoriert (`false`).
    pub fn set_corner_color(&mut self, row: usize, col: usize, color: Rgba) -> bool {
        if Corner::from_index(row, col).is_none() {
            log::debug!("({row},{col}) ist keine Ecke, Farbe ignoriert");
            return false;
        }
        self.control_points[row][col].color = Some(color);
        self.derive_edge_colors();
        self.recompute_interior();
        true
    }

    // ── Abfragen ────────────────────────────────────────────────

    /// Findet den nächsten Randpunkt innerhalb von `radius`.
    ///
    /// Bei Gleichstand gewinnt der erste Treffer in Row-Major-Reihenfolge.
    pub fn nearest_boundary_point(&self, position: DVec2, radius: f64) -> Option<BoundaryHit> {
        let mut best: Option<BoundaryHit> = None;
        for (row, col) in Self::boundary_slots() {
            let distance = self.control_points[row][col].position.distance(position);
            // NaN-Distanzen fallen hier ebenfalls heraus
            if !(distance <= radius) {
                continue;
            }
            match best {
                Some(b) if distance >= b.distance => {}
                _ => best = Some(BoundaryHit { row, col, distance }),
            }
        }
        best
    }

    /// Achsenparalleles Rechteck um alle Kontrollpunkte.
    ///
    /// Die Bézier-Fläche liegt vollständig in der konvexen Hülle und damit auch in diesem Rechteck.
    pub fn control_bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.control_points.iter().flatten().map(|p| p.position))
    }
}
