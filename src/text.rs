//! Plain text archive of a spline's control points.
//!
//! Every control point is written as an obj style vertex line `v x y z`,
//! four lines per segment in segment order. Reading ignores every line
//! that isn't such a vertex.

use nalgebra::Vector3;
use smallvec::SmallVec;
use std::convert::Infallible;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::cubic::CubicCurve;
use crate::spline::Spline;

impl Display for Spline {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for point in self.curves().iter().flat_map(|curve| curve.points()) {
            writeln!(f, "v {} {} {}", point.x, point.y, point.z)?;
        }
        Ok(())
    }
}

/// Parses a line of the form `v x y z`
fn parse_vertex(line: &str) -> Option<Vector3<f64>> {
    let tokens: SmallVec<[&str; 4]> = line.split_whitespace().take(5).collect();
    match tokens.as_slice() {
        ["v", x, y, z] => Some(Vector3::new(x.parse().ok()?, y.parse().ok()?, z.parse().ok()?)),
        _ => None,
    }
}

impl Spline {
    /// Writes all control points as `v x y z` lines.
    ///
    /// The sample cache is not part of the text.
    pub fn to_text(&self) -> String {
        self.to_string()
    }

    /// Reads a spline written by [`to_text`](Spline::to_text).
    ///
    /// Vertices are grouped into segments of four in the order they appear.
    /// Lines which aren't vertices are skipped, as are left over vertices which
    /// don't fill a whole segment. The returned spline is not sampled yet.
    pub fn from_text(text: &str, samples_per_curve: usize) -> Spline {
        let mut spline = Spline::new(samples_per_curve);
        let mut group: SmallVec<[Vector3<f64>; 4]> = SmallVec::new();
        let mut skipped = 0;

        for line in text.lines() {
            if !line.starts_with('v') {
                continue;
            }
            let Some(point) = parse_vertex(line) else {
                skipped += 1;
                continue;
            };
            group.push(point);
            if let Ok(points) = <[Vector3<f64>; 4]>::try_from(group.as_slice()) {
                spline.add_curve(CubicCurve::from(points));
                group.clear();
            }
        }

        log::debug!(
            "Read {} segments, skipped {} malformed vertex lines and {} trailing vertices",
            spline.len(),
            skipped,
            group.len()
        );
        spline
    }
}

impl FromStr for Spline {
    type Err = Infallible;

    /// Same as [`Spline::from_text`] using the default number of samples
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Ok(Spline::from_text(text, crate::DEFAULT_SAMPLES_PER_CURVE))
    }
}
