//! Implementations of `std::ops` and the `approx` traits.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{Number, Vector};

use super::Matrix;

/// Element access by `(row, column)`.
///
/// # Panics
///
/// Panics if the row or column is out of bounds. Use [`Matrix::get`] for checked access.
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

/// Row access.
///
/// # Panics
///
/// Panics if `row >= R`.
impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = Vector<T, C>;

    #[inline]
    fn index(&self, row: usize) -> &Self::Output {
        &self.0[row]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        &mut self.0[row]
    }
}

impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.0 == other.0
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> AbsDiffEq for Matrix<T, R, C>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const R: usize, const C: usize> RelativeEq for Matrix<T, R, C>
where
    T: RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const R: usize, const C: usize> UlpsEq for Matrix<T, R, C>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(&other.0)
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

impl<T, const R: usize, const C: usize> Neg for Matrix<T, R, C>
where
    T: Neg<Output = T>,
{
    type Output = Self;

    fn neg(self) -> Self {
        self.map(T::neg)
    }
}

// Element-wise matrix-matrix addition and subtraction. Element-wise multiplication is left out,
// since `*` between matrices is the matrix product.
macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident;)+) => {
        $(
            impl<T, const R: usize, const C: usize> $op for Matrix<T, R, C>
            where
                T: $op<Output = T> + Copy,
            {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self {
                    Matrix::from_fn(|row, col| self.0[row][col].$method(rhs.0[row][col]))
                }
            }

            impl<T, const R: usize, const C: usize> $assign for Matrix<T, R, C>
            where
                T: $op<Output = T> + Copy,
            {
                fn $assign_method(&mut self, rhs: Self) {
                    *self = (*self).$method(rhs);
                }
            }
        )+
    };
}
elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
}

/// Matrix-Scalar multiplication.
impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C>
where
    T: Mul<Output = T> + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Matrix-Scalar division.
impl<T, const R: usize, const C: usize> Div<T> for Matrix<T, R, C>
where
    T: Div<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const R: usize, const C: usize> DivAssign<T> for Matrix<T, R, C>
where
    T: Div<Output = T> + Copy,
{
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_lhs_mul {
    ($($scalar:ty),+) => {
        $(
            /// Scalar-Matrix multiplication.
            impl<const R: usize, const C: usize> Mul<Matrix<$scalar, R, C>> for $scalar {
                type Output = Matrix<$scalar, R, C>;

                fn mul(self, rhs: Matrix<$scalar, R, C>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(i8, i16, i32, i64, isize, f32, f64);

/// Matrix-Matrix multiplication.
///
/// Element `(i, j)` of the result is the dot product of row `i` of `self` and column `j` of `rhs`.
impl<T: Number, const R: usize, const C: usize, const P: usize> Mul<Matrix<T, C, P>>
    for Matrix<T, R, C>
{
    type Output = Matrix<T, R, P>;

    fn mul(self, rhs: Matrix<T, C, P>) -> Self::Output {
        Matrix::from_fn(|row, col| self.0[row].dot(rhs.col(col)))
    }
}

impl<T: Number, const R: usize, const C: usize> MulAssign<Matrix<T, C, C>> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: Matrix<T, C, C>) {
        *self = *self * rhs;
    }
}

/// Row-Vector-Matrix multiplication.
///
/// The vector is treated as a `1xR` matrix; the result has one element per matrix column.
impl<T: Number, const R: usize, const C: usize> Mul<Matrix<T, R, C>> for Vector<T, R> {
    type Output = Vector<T, C>;

    fn mul(self, rhs: Matrix<T, R, C>) -> Self::Output {
        Vector::from_fn(|col| self.dot(rhs.col(col)))
    }
}

impl<T: Number, const N: usize> MulAssign<Matrix<T, N, N>> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: Matrix<T, N, N>) {
        *self = *self * rhs;
    }
}
