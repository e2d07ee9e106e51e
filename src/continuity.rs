//! Joining a spline's segments smoothly.
//!
//! All algorithms walk the joins from the first to the last segment and only
//! ever move control points of the later segment of a join. Edits therefore
//! propagate along the spline: the adjusted segment is the reference for the
//! next join.

use nalgebra::Vector3;

use crate::cubic::CubicCurve;
use crate::spline::Spline;

/// Kinds of smoothness at the joins between segments
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Continuity {
    /// Segments touch
    C0,

    /// Segments touch and their first derivatives agree
    C1,

    /// Segments touch and their first and second derivatives agree
    C2,

    /// Segments touch, same as [`Continuity::C0`]
    G0,

    /// Segments touch and their tangents point in the same direction
    G1,

    /// Curvature agrees at the joins.
    ///
    /// *Not implemented, enforcing it changes nothing!*
    G2,
}

impl Spline {
    /// Enforce a kind of continuity at every join
    pub fn enforce(&mut self, continuity: Continuity) {
        match continuity {
            Continuity::C0 => self.enforce_c0(),
            Continuity::C1 => self.enforce_c1(),
            Continuity::C2 => self.enforce_c2(),
            Continuity::G0 => self.enforce_g0(),
            Continuity::G1 => self.enforce_g1(),
            Continuity::G2 => self.enforce_g2(),
        }
    }

    /// Checks whether every segment starts exactly where the previous one ends.
    ///
    /// No tolerance is applied. Splines with less than two segments are always continuous.
    pub fn is_c0_continuous(&self) -> bool {
        self.curves
            .windows(2)
            .all(|pair| pair[0].control_points().column(3) == pair[1].control_points().column(0))
    }

    /// Calls `join` with the control points of the previous segment and the next segment
    /// for every join, then writes the next segment's returned points back.
    fn adjust_joins<F>(&mut self, mut join: F)
    where
        F: FnMut(usize, [Vector3<f64>; 4], [Vector3<f64>; 4]) -> [Vector3<f64>; 3],
    {
        if self.curves.len() <= 1 {
            return;
        }
        for i in 1..self.curves.len() {
            let previous = points_of(&self.curves[i - 1]);
            let next = points_of(&self.curves[i]);
            let adjusted = join(i, previous, next);
            log::trace!("Adjusting join {} to {:?}", i, adjusted);
            for (index, point) in adjusted.into_iter().enumerate() {
                self.curves[i].replace_control_point(index, point);
            }
        }
        self.resample();
    }

    /// Moves each segment's start onto the previous segment's end
    pub fn enforce_c0(&mut self) {
        self.adjust_joins(|_, [_, _, _, p3], [_, q1, q2, _]| [p3, q1, q2]);
    }

    /// Additionally mirrors each previous segment's last control point across the join.
    ///
    /// Afterwards `Q1 - Q0 == P3 - P2`, so the first derivatives agree.
    pub fn enforce_c1(&mut self) {
        self.adjust_joins(|_, [_, _, p2, p3], [_, _, q2, _]| {
            let exit = p3 - p2;
            [p3, p3 + exit, q2]
        });
    }

    /// Additionally places each next segment's third control point so the second derivatives agree.
    ///
    /// With `Q0 = P3` and `Q1 = P3 + (P3 - P2)` matching second derivatives
    /// `P1 - 2 P2 + P3 = Q0 - 2 Q1 + Q2` yields `Q2 = P1 + 4 (P3 - P2)`.
    pub fn enforce_c2(&mut self) {
        self.adjust_joins(|_, [_, p1, p2, p3], _| {
            let exit = p3 - p2;
            [p3, p3 + exit, p1 + exit * 4.0]
        });
    }

    /// Same as [`enforce_c0`](Spline::enforce_c0)
    pub fn enforce_g0(&mut self) {
        self.enforce_c0();
    }

    /// Additionally aligns each next segment's start tangent with the previous segment's end tangent.
    ///
    /// The next segment keeps the length of its own start tangent `Q1 - Q0`,
    /// only its direction changes.
    /// If the previous segment's end tangent `P3 - P2` has no direction,
    /// the next segment is only moved onto the join as a whole (i.e. `Q1` is shifted
    /// along with `Q0`).
    pub fn enforce_g1(&mut self) {
        self.adjust_joins(|i, [_, _, p2, p3], [q0, q1, q2, _]| {
            let length = (q1 - q0).norm();
            match (p3 - p2).try_normalize(f64::EPSILON) {
                Some(direction) => [p3, p3 + direction * length, q2],
                None => {
                    log::warn!(
                        "Segment {} ends without a tangent direction, keeping the direction of segment {}",
                        i - 1,
                        i
                    );
                    [p3, p3 + (q1 - q0), q2]
                }
            }
        });
    }

    /// Does nothing.
    ///
    /// Geometric curvature continuity is not implemented.
    pub fn enforce_g2(&mut self) {
        log::debug!("G2 continuity is not implemented, leaving spline unchanged");
    }
}

fn points_of(curve: &CubicCurve) -> [Vector3<f64>; 4] {
    let m = curve.control_points();
    [0, 1, 2, 3].map(|i| m.column(i).clone_owned())
}
