//! Einzelnes kubisches Bézier-Segment mit Interaktionszustand.
//!
//! Unabhängig vom Patch-Mesh, nutzt aber dieselbe Auswertungs-Mathematik.
//! Zustandswechsel werden als [`StateChange`]-Werte zurückgegeben statt
//! über Callbacks gemeldet.

use super::bezier::{cubic_bezier, cubic_derivative, derivative_roots};
use super::BoundingBox;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Standard-Greifradius eines Handles (halbe Kantenlänge des Trefferquadrats).
pub const DEFAULT_HANDLE_RADIUS: f64 = 5.0;

/// Anzahl Segmente für den abgetasteten Kurven-Treffertest.
const HIT_TEST_SEGMENTS: usize = 32;

/// Interaktionszustand einer Kurve oder eines Handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionState {
    #[default]
    Idle,
    Hovered,
    Selected,
}

/// Wer seinen Zustand gewechselt hat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateSubject {
    /// Handle mit Index `0..4` (Start, Kontrolle 1, Kontrolle 2, Ende)
    Handle(usize),
    /// Die Kurve selbst
    Curve,
}

/// Ein vollzogener Zustandswechsel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub subject: StateSubject,
    pub from: InteractionState,
    pub to: InteractionState,
}

/// Greifbarer Punkt einer Kurve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Handle {
    position: DVec2,
    radius: f64,
    state: InteractionState,
    dragging: bool,
}

impl Handle {
    pub fn new(position: DVec2) -> Self {
        Self::with_radius(position, DEFAULT_HANDLE_RADIUS)
    }

    pub fn with_radius(position: DVec2, radius: f64) -> Self {
        Self {
            position,
            radius,
            state: InteractionState::Idle,
            dragging: false,
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Treffer, wenn `p` im achsenparallelen Quadrat um den Handle liegt.
    pub fn contains(&self, p: DVec2) -> bool {
        let d = (p - self.position).abs();
        d.x < self.radius && d.y < self.radius
    }

    pub fn move_to(&mut self, position: DVec2) {
        self.position = position;
    }

    /// Setzt den Zustand; `None`, wenn er sich nicht ändert.
    pub fn set_state(
        &mut self,
        state: InteractionState,
    ) -> Option<(InteractionState, InteractionState)> {
        let from = self.state;
        if from == state {
            return None;
        }
        self.state = state;
        Some((from, state))
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn start_drag(&mut self) {
        self.dragging = true;
    }

    pub fn stop_drag(&mut self) {
        self.dragging = false;
    }
}

/// Kubisches Bézier-Segment aus vier Handles.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    handles: [Handle; 4],
    state: InteractionState,
}

impl Curve {
    pub fn new(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2) -> Self {
        Self {
            handles: [p0, p1, p2, p3].map(Handle::new),
            state: InteractionState::Idle,
        }
    }

    /// Positionen `[start, kontrolle1, kontrolle2, ende]`.
    pub fn points(&self) -> [DVec2; 4] {
        self.handles.map(|h| h.position)
    }

    pub fn handles(&self) -> &[Handle; 4] {
        &self.handles
    }

    pub fn handle(&self, index: usize) -> Option<&Handle> {
        self.handles.get(index)
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn start_point(&self) -> DVec2 {
        self.handles[0].position
    }

    pub fn control_point1(&self) -> DVec2 {
        self.handles[1].position
    }

    pub fn control_point2(&self) -> DVec2 {
        self.handles[2].position
    }

    pub fn end_point(&self) -> DVec2 {
        self.handles[3].position
    }

    pub fn set_start_point(&mut self, p: DVec2) {
        self.handles[0].move_to(p);
    }

    pub fn set_control_point1(&mut self, p: DVec2) {
        self.handles[1].move_to(p);
    }

    pub fn set_control_point2(&mut self, p: DVec2) {
        self.handles[2].move_to(p);
    }

    pub fn set_end_point(&mut self, p: DVec2) {
        self.handles[3].move_to(p);
    }

    // ── Auswertung ──────────────────────────────────────────────

    /// Punkt auf der Kurve, `t` wird auf `[0, 1]` geklemmt.
    pub fn evaluate(&self, t: f64) -> DVec2 {
        let [p0, p1, p2, p3] = self.points();
        cubic_bezier(p0, p1, p2, p3, t.clamp(0.0, 1.0))
    }

    /// Tangentenvektor an `t`.
    pub fn derivative(&self, t: f64) -> DVec2 {
        let [p0, p1, p2, p3] = self.points();
        cubic_derivative(p0, p1, p2, p3, t.clamp(0.0, 1.0))
    }

    /// Enge Bounding-Box: Endpunkte plus alle Extrema je Achse.
    pub fn bounding_box(&self) -> BoundingBox {
        let [p0, p1, p2, p3] = self.points();
        let mut bb = BoundingBox::from_points([p0, p3]);

        let roots_x = derivative_roots(p0.x, p1.x, p2.x, p3.x);
        let roots_y = derivative_roots(p0.y, p1.y, p2.y, p3.y);
        for t in roots_x.into_iter().chain(roots_y) {
            bb.include_point(self.evaluate(t));
        }
        bb
    }

    /// Abstand von `p` zur abgetasteten Kurve.
    pub fn distance_to(&self, p: DVec2) -> f64 {
        let mut prev = self.evaluate(0.0);
        let mut best = prev.distance(p);
        for i in 1..=HIT_TEST_SEGMENTS {
            let next = self.evaluate(i as f64 / HIT_TEST_SEGMENTS as f64);
            best = best.min(distance_to_segment(p, prev, next));
            prev = next;
        }
        best
    }

    /// Prüft ob `p` höchstens `tolerance` von der Kurve entfernt liegt.
    pub fn hit_test(&self, p: DVec2, tolerance: f64) -> bool {
        self.bounding_box().expanded(tolerance).contains(p) && self.distance_to(p) <= tolerance
    }

    /// Index des ersten Handles, das `p` trifft.
    pub fn pick_handle(&self, p: DVec2) -> Option<usize> {
        self.handles.iter().position(|h| h.contains(p))
    }

    // ── Interaktion ─────────────────────────────────────────────

    /// Setzt den Kurvenzustand direkt.
    pub fn set_state(&mut self, state: InteractionState) -> Option<StateChange> {
        let from = self.state;
        if from == state {
            return None;
        }
        self.state = state;
        Some(StateChange {
            subject: StateSubject::Curve,
            from,
            to: state,
        })
    }

    /// Setzt den Zustand eines Handles; die Kurve übernimmt ihn.
    ///
    /// Gibt alle vollzogenen Wechsel zurück (Handle zuerst, dann Kurve).
    /// Ein ungültiger Index liefert eine leere Liste.
    pub fn set_handle_state(&mut self, index: usize, state: InteractionState) -> Vec<StateChange> {
        let Some(handle) = self.handles.get_mut(index) else {
            log::debug!("Handle {index} existiert nicht");
            return Vec::new();
        };

        let mut changes = Vec::with_capacity(2);
        if let Some((from, to)) = handle.set_state(state) {
            changes.push(StateChange {
                subject: StateSubject::Handle(index),
                from,
                to,
            });
        }
        changes.extend(self.set_state(state));
        changes
    }

    /// Bewegt sich der Zeiger über die Kurve: getroffenes Handle wird `Hovered`,
    /// alle anderen nicht ausgewählten Handles `Idle`.
    pub fn hover_at(&mut self, p: DVec2) -> Vec<StateChange> {
        let hit = self.pick_handle(p);
        let mut changes = Vec::new();
        for index in 0..self.handles.len() {
            if self.handles[index].state == InteractionState::Selected {
                continue;
            }
            let target = if Some(index) == hit {
                InteractionState::Hovered
            } else {
                InteractionState::Idle
            };
            if let Some((from, to)) = self.handles[index].set_state(target) {
                changes.push(StateChange {
                    subject: StateSubject::Handle(index),
                    from,
                    to,
                });
            }
        }

        let curve_target = if self
            .handles
            .iter()
            .any(|h| h.state == InteractionState::Selected)
        {
            InteractionState::Selected
        } else if hit.is_some() {
            InteractionState::Hovered
        } else {
            InteractionState::Idle
        };
        changes.extend(self.set_state(curve_target));
        changes
    }

    /// Index des Handles, das gerade gezogen wird.
    pub fn dragging_handle(&self) -> Option<usize> {
        self.handles.iter().position(Handle::is_dragging)
    }

    /// Zeiger gedrückt: das getroffene Handle wird ausgewählt und gezogen.
    pub fn press_at(&mut self, p: DVec2) -> Vec<StateChange> {
        let Some(index) = self.pick_handle(p) else {
            return Vec::new();
        };
        self.handles[index].start_drag();
        self.set_handle_state(index, InteractionState::Selected)
    }

    /// Bewegt das gezogene Handle nach `p`; `false`, wenn nichts gezogen wird.
    pub fn drag_to(&mut self, p: DVec2) -> bool {
        match self.dragging_handle() {
            Some(index) => {
                self.handles[index].move_to(p);
                true
            }
            None => false,
        }
    }

    /// Zeiger losgelassen: das gezogene Handle bleibt unter dem Zeiger `Hovered`.
    pub fn release(&mut self) -> Vec<StateChange> {
        let Some(index) = self.dragging_handle() else {
            return Vec::new();
        };
        self.handles[index].stop_drag();
        self.set_handle_state(index, InteractionState::Hovered)
    }
}

fn distance_to_segment(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Rechteck aus vier Kurven im Uhrzeigersinn (oben, rechts, unten, links).
///
/// Die Kontrollpunkte liegen bei 0.3 und 0.7 der jeweiligen Seite.
#[derive(Debug, Clone, PartialEq)]
pub struct CurvableRect {
    origin: DVec2,
    width: f64,
    height: f64,
    curves: [Curve; 4],
}

impl CurvableRect {
    pub fn new(origin: DVec2, width: f64, height: f64) -> Self {
        let at = |fx: f64, fy: f64| origin + DVec2::new(width * fx, height * fy);
        let curves = [
            Curve::new(at(0.0, 0.0), at(0.3, 0.0), at(0.7, 0.0), at(1.0, 0.0)),
            Curve::new(at(1.0, 0.0), at(1.0, 0.3), at(1.0, 0.7), at(1.0, 1.0)),
            Curve::new(at(1.0, 1.0), at(0.7, 1.0), at(0.3, 1.0), at(0.0, 1.0)),
            Curve::new(at(0.0, 1.0), at(0.0, 0.7), at(0.0, 0.3), at(0.0, 0.0)),
        ];
        Self {
            origin,
            width,
            height,
            curves,
        }
    }

    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    pub fn curves(&self) -> &[Curve; 4] {
        &self.curves
    }

    pub fn curve_mut(&mut self, index: usize) -> Option<&mut Curve> {
        self.curves.get_mut(index)
    }

    /// Vereinigte Bounding-Box aller vier Kurven.
    pub fn bounding_box(&self) -> BoundingBox {
        self.curves.iter().fold(BoundingBox::EMPTY, |mut bb, c| {
            bb.union(&c.bounding_box());
            bb
        })
    }
}
