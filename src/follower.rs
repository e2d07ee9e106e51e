//! Moving something (usually a camera) along a spline over time.

use nalgebra::Vector3;
use std::time::Duration;

use crate::error::SplineError;
use crate::spline::Spline;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Tracks how far along a spline an animated object is.
///
/// The whole spline is traversed once per `duration`, then the traversal starts over.
/// The follower doesn't own the spline, so the path can be edited while following it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PathFollower {
    duration: Duration,
    elapsed: Duration,
    paused: bool,
}

impl PathFollower {
    /// Constructs a follower at the start of the path, which takes `duration` to traverse it
    pub fn new(duration: Duration) -> Self {
        PathFollower {
            duration,
            elapsed: Duration::ZERO,
            paused: false,
        }
    }

    /// Move forward in time, unless paused
    pub fn advance(&mut self, delta: Duration) {
        if self.paused {
            return;
        }
        if self.duration.is_zero() {
            self.elapsed = Duration::ZERO;
            return;
        }
        // u128 nanoseconds can't overflow for the sum of two durations
        let nanos = (self.elapsed.as_nanos() + delta.as_nanos()) % self.duration.as_nanos();
        self.elapsed = Duration::new(
            (nanos / NANOS_PER_SEC) as u64,
            (nanos % NANOS_PER_SEC) as u32,
        );
    }

    /// Position along the path in `[0, 1)`
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            0.0
        } else {
            self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
        }
    }

    /// Current point on the spline
    pub fn position(&self, spline: &Spline) -> Result<Vector3<f64>, SplineError> {
        spline.point_at(self.progress())
    }

    /// Point to look at from the current [`position`](PathFollower::position)
    pub fn look_at(&self, spline: &Spline) -> Result<Vector3<f64>, SplineError> {
        spline.point_plus_tangent_at(self.progress())
    }

    /// Go back to the start of the path
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Stop moving on [`advance`](PathFollower::advance)
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Continue moving on [`advance`](PathFollower::advance)
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Switch between paused and moving
    pub fn toggle(&mut self) {
        self.paused = !self.paused;
    }

    /// Whether [`advance`](PathFollower::advance) is currently ignored
    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CubicCurve;
    use approx::assert_relative_eq;

    #[test]
    fn wraps_around() {
        let mut follower = PathFollower::new(Duration::from_secs(10));
        follower.advance(Duration::from_millis(2500));
        assert_relative_eq!(follower.progress(), 0.25, epsilon = 1e-9);
        follower.advance(Duration::from_secs(10));
        assert_relative_eq!(follower.progress(), 0.25, epsilon = 1e-9);
        follower.advance(Duration::from_millis(7500));
        assert_relative_eq!(follower.progress(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn pausing() {
        let mut follower = PathFollower::new(Duration::from_secs(4));
        follower.pause();
        follower.advance(Duration::from_secs(1));
        assert_eq!(follower.progress(), 0.0);
        assert!(follower.is_paused());

        follower.toggle();
        assert!(!follower.is_paused());
        follower.advance(Duration::from_secs(1));
        assert_relative_eq!(follower.progress(), 0.25, epsilon = 1e-9);

        follower.toggle();
        follower.resume();
        follower.advance(Duration::from_secs(1));
        assert_relative_eq!(follower.progress(), 0.5, epsilon = 1e-9);

        follower.reset();
        assert_eq!(follower.progress(), 0.0);
    }

    #[test]
    fn huge_steps() {
        let mut follower = PathFollower::new(Duration::from_secs(10));
        follower.advance(Duration::from_secs(5));
        follower.advance(Duration::MAX);
        // u64::MAX seconds end in a 5, which brings 5 seconds back to 0
        assert_eq!(
            follower.progress(),
            Duration::new(0, 999_999_999).as_secs_f64() / 10.0
        );
    }

    #[test]
    fn exact_wrapping() {
        let mut follower = PathFollower::new(Duration::from_millis(3));
        for _ in 0..1000 {
            follower.advance(Duration::from_nanos(1_000_001));
        }
        // 1_000_001_000 ns are 1_001_000 ns past a multiple of 3 ms
        follower.advance(Duration::from_nanos(1_999_000));
        assert_eq!(follower.progress(), 0.0);
    }

    #[test]
    fn zero_duration() {
        let mut follower = PathFollower::new(Duration::ZERO);
        follower.advance(Duration::from_secs(3));
        assert_eq!(follower.progress(), 0.0);
    }

    #[test]
    fn follows_spline() {
        let mut spline = Spline::new(8);
        assert_eq!(
            PathFollower::new(Duration::from_secs(1)).position(&spline),
            Err(SplineError::NoSegments)
        );

        spline.add_curve(CubicCurve::new(
            Vector3::new(-1.0, 0.9, 0.0),
            Vector3::new(0.0, 1.0, 1.0),
            Vector3::new(0.0, 1.0, 1.0),
            Vector3::new(1.0, 0.9, 0.0),
        ));
        let mut follower = PathFollower::new(Duration::from_secs(10));
        assert_eq!(follower.position(&spline), Ok(Vector3::new(-1.0, 0.9, 0.0)));
        assert_eq!(follower.look_at(&spline), spline.point_plus_tangent_at(0.0));

        follower.advance(Duration::from_secs(5));
        let curve = spline.curve(0).unwrap();
        assert_relative_eq!(
            follower.position(&spline).unwrap(),
            curve.evaluate_point(0.5),
            epsilon = 1e-9
        );
        assert_relative_eq!(
            follower.look_at(&spline).unwrap(),
            curve.evaluate_point_plus_tangent(0.5),
            epsilon = 1e-9
        );
    }
}
