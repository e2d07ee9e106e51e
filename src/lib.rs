#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod bounding_box;
pub mod continuity;
pub mod cubic;
pub mod error;
pub mod follower;
pub mod npolynomial;
pub mod spline;
mod text;

pub use crate::continuity::Continuity;
pub use crate::cubic::CubicCurve;
pub use crate::error::SplineError;
pub use crate::follower::PathFollower;
pub use crate::spline::{Spline, DEFAULT_SAMPLES_PER_CURVE};
