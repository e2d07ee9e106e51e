//! Errors returned when a spline can't answer a query.

/// Failure evaluating a [`Spline`](crate::Spline)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SplineError {
    /// The spline has no segments, so there is no point to evaluate
    #[error("spline has no segments")]
    NoSegments,
}
