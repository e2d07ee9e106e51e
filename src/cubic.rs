//! A single cubic bezier segment in 3D space.

use nalgebra::{Const, Matrix3x4, Vector3};

use crate::bounding_box::BoundingBox;
use crate::npolynomial::{monomial_basis, CubicPolynomial, Polynomial, QuadraticPolynomial};

/// Cubic bezier curve defined by 4 control points.
///
/// The control points are stored as the columns of a matrix.
/// The curve's polynomial and its derivative are cached and recomputed
/// whenever a control point changes, which is why the points can only be
/// changed through [`replace_control_point`].
///
/// [`replace_control_point`]: CubicCurve::replace_control_point
#[derive(Clone, Debug, PartialEq)]
pub struct CubicCurve {
    control_points: Matrix3x4<f64>,
    coefficients: CubicPolynomial,
    derivative: QuadraticPolynomial,
}

impl CubicCurve {
    /// Constructs a curve starting at `p0` and ending at `p3`.
    ///
    /// Points may coincide, a curve collapsed into a single point is still valid.
    pub fn new(p0: Vector3<f64>, p1: Vector3<f64>, p2: Vector3<f64>, p3: Vector3<f64>) -> Self {
        Self::from(Matrix3x4::from_columns(&[p0, p1, p2, p3]))
    }

    /// Recompute the cached polynomials from the current control points
    fn update_coefficients(&mut self) {
        self.coefficients = Polynomial(self.control_points * monomial_basis::<f64, _>(Const::<4>));
        self.derivative = self.coefficients.derive();
    }

    /// Get the point on the curve at position `t`.
    ///
    /// `t` isn't clamped, values outside of `[0, 1]` extrapolate the cubic.
    pub fn evaluate_point(&self, t: f64) -> Vector3<f64> {
        self.coefficients.evaluate(t)
    }

    /// Computes the curve's tangent vector at `t`
    ///
    /// *The resulting vector is not normalized!*
    pub fn evaluate_tangent(&self, t: f64) -> Vector3<f64> {
        self.derivative.evaluate(t)
    }

    /// Computes the curve's second derivative at `t`
    pub fn evaluate_acceleration(&self, t: f64) -> Vector3<f64> {
        self.derivative.derive().evaluate(t)
    }

    /// Point on the curve at `t` moved by the tangent at `t`.
    ///
    /// This is not a point on the curve, but a target to look at when moving along it.
    pub fn evaluate_point_plus_tangent(&self, t: f64) -> Vector3<f64> {
        self.evaluate_point(t) + self.evaluate_tangent(t)
    }

    /// Replace the control point at `index` and recompute the curve's polynomial.
    ///
    /// Returns `false` without changing anything if `index` is not in `0..4`.
    pub fn replace_control_point(&mut self, index: usize, point: Vector3<f64>) -> bool {
        if index >= self.control_points.ncols() {
            return false;
        }
        self.control_points.set_column(index, &point);
        self.update_coefficients();
        true
    }

    /// Get the control point at `index`, if there is one
    pub fn control_point(&self, index: usize) -> Option<Vector3<f64>> {
        (index < self.control_points.ncols())
            .then(|| self.control_points.column(index).clone_owned())
    }

    /// The control points as matrix columns
    pub fn control_points(&self) -> &Matrix3x4<f64> {
        &self.control_points
    }

    /// Iterate over the control points in order
    pub fn points(&self) -> impl Iterator<Item = Vector3<f64>> + '_ {
        self.control_points.column_iter().map(|p| p.clone_owned())
    }

    /// The curve's polynomial
    ///
    /// Column `k` is the coefficient of `t^k`.
    pub fn coefficients(&self) -> &CubicPolynomial {
        &self.coefficients
    }

    /// The curve's polynomial's derivative
    pub fn derivative(&self) -> &QuadraticPolynomial {
        &self.derivative
    }

    /// Constructs an axis aligned bounding box containing all control points.
    ///
    /// This box will also contain the curve between `t = 0` and `t = 1`,
    /// but can highly overestimate it.
    pub fn bounding_box(&self) -> BoundingBox {
        let first = self.control_points.column(0).clone_owned();
        self.points().skip(1).fold(BoundingBox::around(first), BoundingBox::including)
    }
}

impl From<Matrix3x4<f64>> for CubicCurve {
    /// Use the matrix' columns as control points
    fn from(control_points: Matrix3x4<f64>) -> Self {
        let mut curve = CubicCurve {
            control_points,
            coefficients: Polynomial(Matrix3x4::zeros()),
            derivative: Polynomial(nalgebra::Matrix3::zeros()),
        };
        curve.update_coefficients();
        curve
    }
}

impl From<[Vector3<f64>; 4]> for CubicCurve {
    fn from([p0, p1, p2, p3]: [Vector3<f64>; 4]) -> Self {
        CubicCurve::new(p0, p1, p2, p3)
    }
}
