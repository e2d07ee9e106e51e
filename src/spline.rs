//! Sequences of cubic bezier curves joined into one parametric path.

use nalgebra::Vector3;

use crate::cubic::CubicCurve;
use crate::error::SplineError;

/// Number of samples per segment used when nothing else is specified
pub const DEFAULT_SAMPLES_PER_CURVE: usize = 128;

/// Ordered sequence of [`CubicCurve`]s traversed by a single parameter in `[0, 1)`.
///
/// Besides its segments a spline caches a dense sampling of its points.
/// This cache is refreshed by [`resample`], by the editing methods
/// (which only refresh the edited segment) and by the continuity methods.
/// Appending curves through [`add_curve`] leaves it stale.
///
/// [`resample`]: Spline::resample
/// [`add_curve`]: Spline::add_curve
#[derive(Clone, Debug, PartialEq)]
pub struct Spline {
    pub(crate) curves: Vec<CubicCurve>,
    samples_per_curve: usize,
    samples: Vec<Vector3<f64>>,
}

impl Default for Spline {
    fn default() -> Self {
        Spline::new(DEFAULT_SAMPLES_PER_CURVE)
    }
}

impl Spline {
    /// Constructs an empty spline which samples each segment `samples_per_curve` times
    pub fn new(samples_per_curve: usize) -> Self {
        Spline {
            curves: Vec::new(),
            samples_per_curve,
            samples: Vec::new(),
        }
    }

    /// Appends a segment to the end.
    ///
    /// The new segment isn't joined to the previous one, see [`enforce`](Spline::enforce).
    pub fn add_curve(&mut self, curve: CubicCurve) {
        self.curves.push(curve);
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Checks whether there are no segments
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Get the segment at `index`, if there is one
    pub fn curve(&self, index: usize) -> Option<&CubicCurve> {
        self.curves.get(index)
    }

    /// All segments in order
    pub fn curves(&self) -> &[CubicCurve] {
        &self.curves
    }

    /// The sample cache as of the last resampling
    pub fn samples(&self) -> &[Vector3<f64>] {
        &self.samples
    }

    /// Number of samples generated for each segment
    pub fn samples_per_curve(&self) -> usize {
        self.samples_per_curve
    }

    /// Maps a global parameter onto a segment and its local parameter.
    ///
    /// The sign of `t` is dropped before wrapping it into `[0, 1)`,
    /// so `-0.25` lands on the same point as `0.25` (not on `0.75`).
    fn locate(&self, t: f64) -> Result<(&CubicCurve, f64), SplineError> {
        if self.curves.is_empty() {
            return Err(SplineError::NoSegments);
        }
        let scaled = (t.abs() % 1.0) * self.curves.len() as f64;
        let index = (scaled.floor() as usize).min(self.curves.len() - 1);
        Ok((&self.curves[index], scaled - index as f64))
    }

    /// Get the point at global position `t`
    pub fn point_at(&self, t: f64) -> Result<Vector3<f64>, SplineError> {
        let (curve, t) = self.locate(t)?;
        Ok(curve.evaluate_point(t))
    }

    /// Get the tangent at global position `t`
    ///
    /// The tangent is taken in the segment's own parameter and is not normalized.
    pub fn tangent_at(&self, t: f64) -> Result<Vector3<f64>, SplineError> {
        let (curve, t) = self.locate(t)?;
        Ok(curve.evaluate_tangent(t))
    }

    /// Get the point at global position `t` moved by the tangent there
    pub fn point_plus_tangent_at(&self, t: f64) -> Result<Vector3<f64>, SplineError> {
        let (curve, t) = self.locate(t)?;
        Ok(curve.evaluate_point_plus_tangent(t))
    }

    /// Samples a single segment.
    ///
    /// The last sample is always taken at exactly `t = 1`.
    fn sample_curve(curve: &CubicCurve, count: usize, out: &mut [Vector3<f64>]) {
        let step = 1.0 / count as f64;
        for (i, sample) in out.iter_mut().enumerate() {
            *sample = curve.evaluate_point(i as f64 * step);
        }
        if let Some(last) = out.last_mut() {
            *last = curve.evaluate_point(1.0);
        }
    }

    /// Recompute the whole sample cache
    pub fn resample(&mut self) {
        let count = self.samples_per_curve;
        self.samples.clear();
        self.samples.resize(count * self.curves.len(), Vector3::zeros());
        if count > 0 {
            for (curve, out) in self.curves.iter().zip(self.samples.chunks_mut(count)) {
                Spline::sample_curve(curve, count, out);
            }
        }
        log::debug!(
            "Resampled {} segments with {} samples each",
            self.curves.len(),
            count
        );
    }

    /// Change the number of samples per segment and recompute the sample cache
    pub fn resample_with(&mut self, samples_per_curve: usize) {
        self.samples_per_curve = samples_per_curve;
        self.resample();
    }

    /// Recompute the samples of a single segment.
    ///
    /// Falls back to a full resample if the cache doesn't match the segments.
    fn resample_curve(&mut self, index: usize) {
        let count = self.samples_per_curve;
        if self.samples.len() != count * self.curves.len() {
            self.resample();
            return;
        }
        log::trace!("Resampling segment {}", index);
        let out = &mut self.samples[index * count..(index + 1) * count];
        Spline::sample_curve(&self.curves[index], count, out);
    }

    /// Replace the segment at `index` and refresh its samples.
    ///
    /// Returns `false` without changing anything if there is no such segment.
    pub fn replace_curve(&mut self, index: usize, curve: CubicCurve) -> bool {
        match self.curves.get_mut(index) {
            Some(old) => *old = curve,
            None => return false,
        }
        self.resample_curve(index);
        true
    }

    /// Edit the segment at `index` and write it back.
    ///
    /// `edit` receives a copy of the segment, which replaces the original
    /// through [`replace_curve`](Spline::replace_curve) once `edit` returns.
    pub fn modify_curve<F>(&mut self, index: usize, edit: F) -> bool
    where
        F: FnOnce(&mut CubicCurve),
    {
        let Some(mut curve) = self.curves.get(index).cloned() else {
            return false;
        };
        edit(&mut curve);
        self.replace_curve(index, curve)
    }

    /// Replace a control point addressed by its flat index `4 * segment + point`.
    ///
    /// Returns `false` if there is no such control point.
    pub fn replace_control_point(&mut self, flat_index: usize, point: Vector3<f64>) -> bool {
        let (segment, index) = (flat_index / 4, flat_index % 4);
        self.modify_curve(segment, |curve| {
            curve.replace_control_point(index, point);
        })
    }

    /// Get a control point by its flat index `4 * segment + point`
    pub fn control_point(&self, flat_index: usize) -> Option<Vector3<f64>> {
        self.curve(flat_index / 4)?.control_point(flat_index % 4)
    }

    /// Finds a control point at most `radius` away from `query` and returns its flat index.
    ///
    /// Segments are searched from last to first, so on overlapping hits
    /// the most recently added segment wins.
    pub fn find_control_point_near(&self, query: &Vector3<f64>, radius: f64) -> Option<usize> {
        for (segment, curve) in self.curves.iter().enumerate().rev() {
            // Skip segments which can't contain a hit
            if !curve.bounding_box().inflate(radius).contains(query) {
                continue;
            }
            if let Some(index) = curve.points().position(|p| (p - query).norm() <= radius) {
                return Some(segment * 4 + index);
            }
        }
        None
    }

    /// Appends a segment continuing the last one in a straight line.
    ///
    /// The new segment starts at the last segment's end and its control points
    /// are spaced by the last segment's exit vector `P3 - P2`.
    /// Returns `false` if there is no segment to continue.
    pub fn extend_straight(&mut self) -> bool {
        let Some(last) = self.curves.last() else {
            return false;
        };
        let points = last.control_points();
        let start = points.column(3).clone_owned();
        let step = start - points.column(2);
        self.curves.push(CubicCurve::new(
            start,
            start + step,
            start + step * 2.0,
            start + step * 3.0,
        ));
        self.resample();
        true
    }
}
