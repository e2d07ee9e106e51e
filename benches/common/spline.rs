use criterion::{black_box, Criterion};
use nalgebra::Vector3;
use nspline::{Continuity, Spline};
use crate::common::samples::{CURVES, SPLINE};

pub fn eval(c: &mut Criterion) {
    c.bench_function("eval", |b| {
        for curve in CURVES.iter() {
            b.iter(|| black_box(curve.evaluate_point(0.5)))
        }
    });
}

pub fn tangent(c: &mut Criterion) {
    c.bench_function("tangent", |b| {
        for curve in CURVES.iter() {
            b.iter(|| black_box(curve.evaluate_tangent(0.5)))
        }
    });
}

pub fn resample(c: &mut Criterion) {
    c.bench_function("resample", |b| {
        let mut spline = Spline::clone(&SPLINE);
        b.iter(|| {
            spline.resample();
            black_box(spline.samples().len())
        })
    });
}

pub fn continuity(c: &mut Criterion) {
    for continuity in [Continuity::C1, Continuity::C2, Continuity::G1] {
        c.bench_function(&format!("enforce {:?}", continuity), |b| {
            b.iter(|| {
                let mut spline = Spline::clone(&SPLINE);
                spline.enforce(continuity);
                black_box(spline)
            })
        });
    }
}

pub fn pick(c: &mut Criterion) {
    c.bench_function("pick", |b| {
        let query = Vector3::new(-1.0, 0.5, 2.6);
        b.iter(|| black_box(SPLINE.find_control_point_near(&query, 0.1)))
    });
}

pub fn all(c: &mut Criterion) {
    eval(c);
    tangent(c);
    resample(c);
    continuity(c);
    pick(c);
}
