//! Implementations of `std::ops` and the `approx` traits.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use super::Vector;

/// Element access.
///
/// # Panics
///
/// Panics if `index >= N`. Use [`Vector::get`] or [`Vector::at`] for checked access.
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
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

impl<T, const N: usize> RelativeEq for Vector<T, N>
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

impl<T, const N: usize> UlpsEq for Vector<T, N>
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

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// Element-wise vector-vector operators, plus the compound assignment forms.
macro_rules! elementwise {
    ($($op:ident::$method:ident, $assign:ident::$assign_method:ident;)+) => {
        $(
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op<Output = T> + Copy,
            {
                type Output = Self;

                fn $method(self, rhs: Vector<T, N>) -> Self {
                    self.zip(rhs).map(|(l, r)| l.$method(r))
                }
            }

            impl<T, const N: usize> $assign<Vector<T, N>> for Vector<T, N>
            where
                T: $op<Output = T> + Copy,
            {
                fn $assign_method(&mut self, rhs: Vector<T, N>) {
                    *self = (*self).$method(rhs);
                }
            }
        )+
    };
}
elementwise! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

// NB: supporting both element-wise vector-vector and vector-scalar multiplication rules out a
// more generic `Mul<U> for Vector<T, N> where T: Mul<U>`.

/// Vector-Scalar multiplication (scaling).
impl<T, const N: usize> Mul<T> for Vector<T, N>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|elem| elem * rhs)
    }
}

impl<T, const N: usize> MulAssign<T> for Vector<T, N>
where
    T: Mul<Output = T> + Copy,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

/// Vector-Scalar division.
impl<T, const N: usize> Div<T> for Vector<T, N>
where
    T: Div<Output = T> + Copy,
{
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map(|elem| elem / rhs)
    }
}

impl<T, const N: usize> DivAssign<T> for Vector<T, N>
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
            /// Scalar-Vector multiplication (scaling).
            impl<const N: usize> Mul<Vector<$scalar, N>> for $scalar {
                type Output = Vector<$scalar, N>;

                fn mul(self, rhs: Vector<$scalar, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(i8, i16, i32, i64, isize, f32, f64);

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{vec2, vec3, Vec3f};

    #[test]
    fn arithmetic() {
        let a = vec3(1, 2, 3);
        let b = vec3(4, 5, 6);
        assert_eq!(a + b, vec3(5, 7, 9));
        assert_eq!(b - a, vec3(3, 3, 3));
        assert_eq!(a * b, vec3(4, 10, 18));
        assert_eq!(b / a, vec3(4, 2, 2));
        assert_eq!(a * 2, vec3(2, 4, 6));
        assert_eq!(2 * a, vec3(2, 4, 6));
        assert_eq!(b / 2, vec3(2, 2, 3));
        assert_eq!(-a, vec3(-1, -2, -3));
    }

    #[test]
    fn assign() {
        let mut v = vec2(1.0, 2.0);
        v += vec2(1.0, 1.0);
        v -= vec2(0.5, 0.5);
        v *= vec2(2.0, 4.0);
        v /= vec2(1.0, 2.0);
        assert_eq!(v, vec2(3.0, 5.0));
        v *= 2.0;
        v /= 4.0;
        assert_eq!(v, [1.5, 2.5]);
    }

    #[test]
    fn approx_eq() {
        assert_relative_eq!(Vec3f::X * 0.1 * 3.0, vec3(0.3, 0.0, 0.0));
        assert!(!approx::relative_eq!(Vec3f::X, Vec3f::Y));
        approx::assert_ulps_eq!(0.5f32 * Vec3f::Y, vec3(0.0, 0.5, 0.0));
    }
}
