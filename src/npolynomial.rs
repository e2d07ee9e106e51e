//! A wrapper around [`nalgebra::Matrix`] interpreting it as a polynomial.

use nalgebra::allocator::Allocator;
use nalgebra::dimension::{Const, Dim, DimDiff, DimName, DimSub, U1, U3, U4};
use nalgebra::storage::{RawStorage, Storage, StorageMut};
use nalgebra::{DefaultAllocator, Field, Matrix, OMatrix, OVector, Owned, RealField, Scalar};
use num::integer::binomial;
use std::fmt;

/// Wrapper around [`nalgebra::Matrix`] interpreting it as a polynomial:
/// $p: \R \to \R^r $ where $r$ is the number of rows i.e. the generic `R` parameter
///
/// Rows are the polynomials for each coordinate
/// and column `k` holds the coefficients of `t^k`.
pub struct Polynomial<T, R, C, S>(pub Matrix<T, R, C, S>);

/// Polynomial owning its coefficients.
pub type OPolynomial<T, R, C> = Polynomial<T, R, C, Owned<T, R, C>>;

/// Cubic polynomial with 3D vectors as coefficients.
pub type CubicPolynomial = OPolynomial<f64, U3, U4>;

/// Quadratic polynomial with 3D vectors as coefficients, i.e. a cubic's derivative.
pub type QuadraticPolynomial = OPolynomial<f64, U3, DimDiff<U4, U1>>;

impl<T: Scalar, R: DimName, C: Dim, S: Storage<T, R, C>> Polynomial<T, R, C, S> {
    /// Evaluate `self` at position `x` and store the result into `out`.
    ///
    /// Uses horner's scheme, so no powers of `x` are computed.
    pub fn evaluate_to<S2>(&self, x: T, out: &mut Matrix<T, R, U1, S2>)
    where
        T: Field,
        S2: StorageMut<T, R, U1>,
    {
        out.fill(T::zero());
        let ncols = self.0.ncols();
        if ncols == 0 {
            return;
        }
        for power in (1..ncols).rev() {
            *out += self.0.column(power);
            *out *= x.clone();
        }
        *out += self.0.column(0);
    }

    /// Evaluate `self` at position `x`.
    pub fn evaluate(&self, x: T) -> OVector<T, R>
    where
        T: Field,
        DefaultAllocator: Allocator<T, R>,
    {
        let mut out = OVector::from_element(T::zero());
        self.evaluate_to(x, &mut out);
        out
    }

    /// Calculate `self`'s derivative and store the result into `out`.
    pub fn derive_to<S2>(&self, out: &mut Matrix<T, R, DimDiff<C, U1>, S2>)
    where
        T: Field,
        C: DimSub<U1>,
        S2: StorageMut<T, R, DimDiff<C, U1>>,
    {
        let mut exponent = T::one();
        for power in 1..self.0.ncols() {
            let mut column = out.column_mut(power - 1);
            column.copy_from(&self.0.column(power));
            column *= exponent.clone();
            exponent += T::one();
        }
    }

    /// Calculate `self`'s derivative.
    pub fn derive(&self) -> OPolynomial<T, R, DimDiff<C, U1>>
    where
        T: Field,
        C: DimSub<U1>,
        DefaultAllocator: Allocator<T, R, DimDiff<C, U1>>,
    {
        let (rows, cols) = self.0.shape_generic();
        let mut out = OMatrix::zeros_generic(rows, cols.sub(Const::<1>));
        self.derive_to(&mut out);
        Polynomial(out)
    }

    /// Get the polynomial's degree
    pub fn degree(&self) -> usize {
        self.0.ncols().saturating_sub(1)
    }
}

/// Computes the matrix converting bezier control points into polynomial coefficients.
///
/// Row `i` is the `i`-th bernstein polynomial of degree `cols - 1` written in the
/// monomial basis, so multiplying a matrix of control points (stored as columns)
/// with it yields the curve's polynomial.
///
/// For a cubic curve this is:
/// ```text
///  1 -3  3 -1
///  0  3 -6  3
///  0  0  3 -3
///  0  0  0  1
/// ```
pub fn monomial_basis<T: RealField, C: Dim>(cols: C) -> OMatrix<T, C, C>
where
    DefaultAllocator: Allocator<T, C, C>,
{
    let mut basis = OMatrix::zeros_generic(cols, cols);
    let Some(degree) = cols.value().checked_sub(1) else {
        return basis;
    };

    // (n choose k)(k choose i) with alternating signs
    for i in 0..=degree {
        for k in i..=degree {
            let magnitude = binomial(degree, k) * binomial(k, i);
            let entry: T = nalgebra::convert(magnitude as f64);
            basis[(i, k)] = if (k - i) % 2 == 1 { -entry } else { entry };
        }
    }

    basis
}

/* Common traits */
impl<T: Clone, R: Clone, C: Clone, S: Clone> Clone for Polynomial<T, R, C, S> {
    fn clone(&self) -> Self {
        Polynomial(self.0.clone())
    }
}
impl<T: Scalar, R: Dim, R2: Dim, C: Dim, C2: Dim, S, S2> PartialEq<Polynomial<T, R2, C2, S2>>
    for Polynomial<T, R, C, S>
where
    S: RawStorage<T, R, C>,
    S2: RawStorage<T, R2, C2>,
{
    #[inline]
    fn eq(&self, rhs: &Polynomial<T, R2, C2, S2>) -> bool {
        self.0 == rhs.0
    }
}
impl<T, R, C, S: fmt::Debug> fmt::Debug for Polynomial<T, R, C, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        self.0.data.fmt(formatter)
    }
}
