//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::{approx_zero, ApproxEq};
use crate::traits::Number;
use crate::Vector;

use super::Matrix;

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[row][col]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[row][col]
    }
}

// More general `PartialEq` impl than what the derive generates.
impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0.eq(&other.0)
    }
}

impl<T, const R: usize, const C: usize> Eq for Matrix<T, R, C> where T: Eq {}

impl<T, U, const R: usize, const C: usize> PartialEq<[[U; C]; R]> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[[U; C]; R]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for [[T; C]; R]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        *self == other.0
    }
}

impl<T, const R: usize, const C: usize> ApproxEq for Matrix<T, R, C>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg,
{
    type Output = Matrix<T::Output, R, C>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> Add<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn add(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] + rhs[(row, col)])
    }
}

/// Element-wise addition.
impl<T, const R: usize, const C: usize> AddAssign<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Number,
{
    fn add_assign(&mut self, rhs: Matrix<T, R, C>) {
        *self = *self + rhs;
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> Sub<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn sub(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Matrix::from_fn(|row, col| self[(row, col)] - rhs[(row, col)])
    }
}

/// Element-wise subtraction.
impl<T, const R: usize, const C: usize> SubAssign<Matrix<T, R, C>> for Matrix<T, R, C>
where
    T: Number,
{
    fn sub_assign(&mut self, rhs: Matrix<T, R, C>) {
        *self = *self - rhs;
    }
}

/// Row Vector * Matrix.
///
/// This is how vectors are transformed by a matrix: the vector goes on the *left* of the `*`.
impl<T, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Vector<T, N>
where
    T: Number,
{
    type Output = Vector<T, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Vector::from_fn(|col| (0..N).fold(T::ZERO, |acc, row| acc + self[row] * rhs[(row, col)]))
    }
}

/// Matrix * Matrix.
impl<T, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>> for Matrix<T, M, N>
where
    T: Number,
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Self::Output {
        Matrix::from_fn(|i, j| (0..N).fold(T::ZERO, |acc, k| acc + self[(i, k)] * rhs[(k, j)]))
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Number,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: T) -> Self::Output {
        self.map(|elem| elem * rhs)
    }
}

/// Matrix * Scalar.
impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Number,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Matrix / Scalar.
///
/// # Panics
///
/// Panics if `rhs` is approximately zero.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Number + ApproxEq,
{
    type Output = Matrix<T, R, C>;

    fn div(self, rhs: T) -> Self::Output {
        assert!(!approx_zero(&rhs), "attempt to divide a matrix by zero");
        self.map(|elem| elem / rhs)
    }
}

/// Matrix / Scalar.
///
/// # Panics
///
/// Panics if `rhs` is approximately zero.
impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Number + ApproxEq,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// The orphan rules prevent a single generic `impl Mul<Matrix<T, R, C>> for T`, so scalar-on-the-left
// multiplication is provided per primitive scalar type.
macro_rules! scalar_mul_impls {
    ($($scalar:ty),+) => {
        $(
            /// Scalar-Matrix multiplication (scaling).
            impl<const R: usize, const C: usize> Mul<Matrix<$scalar, R, C>> for $scalar {
                type Output = Matrix<$scalar, R, C>;

                fn mul(self, rhs: Matrix<$scalar, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_mul_impls!(f32, f64, i8, i16, i32, i64, i128);
