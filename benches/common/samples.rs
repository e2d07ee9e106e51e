use nalgebra::Vector3;
use nspline::{CubicCurve, Spline};
use once_cell::sync::Lazy;

/// Points generated randomly
/// ```python
/// from random import random
/// for i in range(10):
///     print(f"Vector3::new({(random()-0.5)*i}, {(random()-0.5)*i}, {(random()-0.5)*i})")
/// ```
pub static POINTS: [[f64; 3]; 10] = [
    [ 0.0,      0.0,      0.0    ],
    [-0.29734,  0.44984,  0.12840],
    [-0.52560,  0.42885, -0.61003],
    [ 1.42777, -0.02652,  0.95120],
    [ 1.98032, -0.67824, -1.37455],
    [ 0.44863, -0.91328,  2.02716],
    [-2.51139, -0.79100, -0.30671],
    [-3.10479, -0.59318,  1.88232],
    [-1.16022, -2.95591, -3.41007],
    [-1.07946,  0.78888,  2.64120],
];

fn curve(indices: [usize; 4]) -> CubicCurve {
    CubicCurve::from(indices.map(|i| Vector3::from(POINTS[i])))
}

pub static CURVES: Lazy<Vec<CubicCurve>> = Lazy::new(|| {
    vec![
        curve([0, 1, 2, 3]),
        curve([2, 3, 4, 5]),
        curve([4, 5, 6, 7]),
        curve([6, 7, 8, 9]),
        curve([8, 9, 0, 1]),
        curve([0, 4, 2, 6]),
        curve([1, 5, 3, 7]),
        curve([2, 6, 4, 8]),
        curve([3, 7, 5, 9]),
        curve([4, 8, 6, 0]),
    ]
});

/// Spline made of all [`CURVES`] without any continuity
pub static SPLINE: Lazy<Spline> = Lazy::new(|| {
    let mut spline = Spline::default();
    for curve in CURVES.iter() {
        spline.add_curve(curve.clone());
    }
    spline
});
