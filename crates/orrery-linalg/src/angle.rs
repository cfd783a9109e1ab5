//! Angles tagged with their unit.

use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    rng::{Rng, SampleUniform},
    vec2, Real, UnitVec, Vec2, Zero,
};

/// A unit of measurement for angles.
pub trait AngleUnit: Copy + Default + fmt::Debug + 'static {
    /// Human-readable name of the unit.
    const NAME: &'static str;
    /// Appended to the value by the [`fmt::Display`] impl of [`Angle`].
    const SUFFIX: &'static str;

    /// The size of one of this unit, in radians.
    fn radians_per_unit<T: Real>() -> T;
}

/// Radians, the unit accepted by all trigonometric functions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rad;

/// Degrees. A full turn is 360°.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Deg;

impl AngleUnit for Rad {
    const NAME: &'static str = "radians";
    const SUFFIX: &'static str = " rad";

    fn radians_per_unit<T: Real>() -> T {
        T::ONE
    }
}

impl AngleUnit for Deg {
    const NAME: &'static str = "degrees";
    const SUFFIX: &'static str = "°";

    fn radians_per_unit<T: Real>() -> T {
        T::PI / T::from_f64(180.0)
    }
}

/// An angle of type `T`, measured in unit `U`.
///
/// Angles of different units don't mix: adding [`Degrees`] to [`Radians`] is a type error.
/// Converting between units is explicit, via [`Angle::to_unit`] or the [`From`] impls.
///
/// # Examples
///
/// ```
/// # use orrery_linalg::*;
/// let right = Degrees::new(90.0f32);
/// let rad: Radians = right.into();
/// approx::assert_relative_eq!(rad.get(), std::f32::consts::FRAC_PI_2);
/// approx::assert_relative_eq!(rad.sin(), 1.0);
/// ```
#[repr(transparent)]
pub struct Angle<U, T = f32> {
    value: T,
    unit: PhantomData<U>,
}

/// An angle in radians.
pub type Radians<T = f32> = Angle<Rad, T>;
/// An angle in degrees.
pub type Degrees<T = f32> = Angle<Deg, T>;

impl<U, T> Angle<U, T> {
    /// Creates an angle of `value` units.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }

    /// Returns the value of this angle, in its own unit.
    #[inline]
    pub fn get(self) -> T {
        self.value
    }
}

impl<U, T: Zero> Angle<U, T> {
    pub const ZERO: Self = Self::new(T::ZERO);
}

impl<U: AngleUnit, T: Real> Angle<U, T> {
    /// Converts this angle to unit `V`.
    pub fn to_unit<V: AngleUnit>(self) -> Angle<V, T> {
        Angle::new(self.value * U::radians_per_unit::<T>() / V::radians_per_unit::<T>())
    }

    pub fn to_radians(self) -> Radians<T> {
        self.to_unit()
    }

    pub fn to_degrees(self) -> Degrees<T> {
        self.to_unit()
    }
}

impl<T: Real> From<Degrees<T>> for Radians<T> {
    fn from(deg: Degrees<T>) -> Self {
        deg.to_unit()
    }
}

impl<T: Real> From<Radians<T>> for Degrees<T> {
    fn from(rad: Radians<T>) -> Self {
        rad.to_unit()
    }
}

impl<T: Real> Radians<T> {
    pub fn cos(self) -> T {
        self.value.cos()
    }

    pub fn sin(self) -> T {
        self.value.sin()
    }

    pub fn tan(self) -> T {
        self.value.tan()
    }

    /// Computes the sine and the cosine of this angle, in that order.
    pub fn sin_cos(self) -> (T, T) {
        self.value.sin_cos()
    }

    /// Computes the arccosine of `x`, in `[0, π]`.
    pub fn acos(x: T) -> Self {
        Self::new(x.acos())
    }

    /// Computes the arcsine of `y`, in `[-π/2, π/2]`.
    pub fn asin(y: T) -> Self {
        Self::new(y.asin())
    }

    /// Computes the four-quadrant arctangent of `y / x`, in `[-π, π]`.
    pub fn atan2(y: T, x: T) -> Self {
        Self::new(y.atan2(x))
    }

    /// Returns the direction of `v`, measured counterclockwise from the X axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let angle = Radians::from_vector(vec2(0.0, 2.0));
    /// approx::assert_relative_eq!(angle.get(), std::f32::consts::FRAC_PI_2);
    /// ```
    pub fn from_vector(v: Vec2<T>) -> Self {
        Self::atan2(v.y(), v.x())
    }

    /// Returns the unit vector at this angle, measured *clockwise* from the X axis.
    ///
    /// This is `(cos(-self), sin(-self))`. The rotation direction is opposite to
    /// [`Radians::from_vector`], so `Radians::from_vector(r.to_vector())` is `-r` for angles in
    /// `(-π, π)`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = Degrees::new(90.0).to_radians().to_vector();
    /// approx::assert_abs_diff_eq!(v, vec2(0.0, -1.0), epsilon = 1e-6);
    /// ```
    pub fn to_vector(self) -> Vec2<T> {
        let (sin, cos) = (-self).sin_cos();
        vec2(cos, sin)
    }

    /// Like [`Radians::to_vector`], but returns a [`UnitVec`].
    pub fn to_unit_vector(self) -> UnitVec<T, 2> {
        UnitVec::new_unchecked(self.to_vector())
    }

    /// Draws an angle uniformly from `[-π, π)`.
    pub fn random(rng: &mut Rng) -> Self
    where
        T: SampleUniform,
    {
        Self::new(rng.range(-T::PI, T::PI))
    }
}

/// Draws a uniformly distributed 2D direction.
pub fn random_unit_vec2<T: Real + SampleUniform>(rng: &mut Rng) -> UnitVec<T, 2> {
    Radians::random(rng).to_unit_vector()
}

impl<U, T: Clone> Clone for Angle<U, T> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<U, T: Copy> Copy for Angle<U, T> {}

impl<U, T: Default> Default for Angle<U, T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<U, T: PartialEq> PartialEq for Angle<U, T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<U, T: Eq> Eq for Angle<U, T> {}

impl<U, T: PartialOrd> PartialOrd for Angle<U, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<U, T: Ord> Ord for Angle<U, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<U, T: Hash> Hash for Angle<U, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<U: AngleUnit, T: fmt::Debug> fmt::Debug for Angle<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)?;
        f.write_str(U::SUFFIX)
    }
}

impl<U: AngleUnit, T: fmt::Display> fmt::Display for Angle<U, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)?;
        f.write_str(U::SUFFIX)
    }
}

impl<U, T: Neg<Output = T>> Neg for Angle<U, T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.value)
    }
}

impl<U, T: Add<Output = T>> Add for Angle<U, T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value)
    }
}

impl<U, T: Sub<Output = T>> Sub for Angle<U, T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value)
    }
}

impl<U, T: Mul<Output = T>> Mul<T> for Angle<U, T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self::new(self.value * rhs)
    }
}

impl<U, T: Div<Output = T>> Div<T> for Angle<U, T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self::new(self.value / rhs)
    }
}

/// The ratio of two angles of the same unit.
impl<U, T: Div<Output = T>> Div for Angle<U, T> {
    type Output = T;

    fn div(self, rhs: Self) -> T {
        self.value / rhs.value
    }
}

impl<U, T: Add<Output = T> + Copy> AddAssign for Angle<U, T> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U, T: Sub<Output = T> + Copy> SubAssign for Angle<U, T> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U, T: Mul<Output = T> + Copy> MulAssign<T> for Angle<U, T> {
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<U, T: Div<Output = T> + Copy> DivAssign<T> for Angle<U, T> {
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! scalar_lhs_mul {
    ($($scalar:ty),+) => {
        $(
            impl<U> Mul<Angle<U, $scalar>> for $scalar {
                type Output = Angle<U, $scalar>;

                fn mul(self, rhs: Angle<U, $scalar>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(f32, f64);

impl<U, T: AbsDiffEq> AbsDiffEq for Angle<U, T> {
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.value.abs_diff_eq(&other.value, epsilon)
    }
}

impl<U, T: RelativeEq> RelativeEq for Angle<U, T> {
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.value.relative_eq(&other.value, epsilon, max_relative)
    }
}

impl<U, T: UlpsEq> UlpsEq for Angle<U, T> {
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.value.ulps_eq(&other.value, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    #[test]
    fn unit_conversion() {
        assert_relative_eq!(Degrees::new(180.0f32).to_radians(), Radians::new(PI));
        assert_relative_eq!(Radians::new(FRAC_PI_4).to_degrees(), Degrees::new(45.0));
        let rad: Radians<f64> = Degrees::new(90.0).into();
        assert_relative_eq!(rad.get(), std::f64::consts::FRAC_PI_2);
        assert_eq!(Radians::new(1.5f32).to_unit::<Rad>(), Radians::new(1.5));
    }

    #[test]
    fn arithmetic() {
        let a = Degrees::new(30.0f32);
        let b = Degrees::new(60.0);
        assert_eq!(a + b, Degrees::new(90.0));
        assert_eq!(b - a, a);
        assert_eq!(a * 2.0, b);
        assert_eq!(2.0 * a, b);
        assert_eq!(b / 2.0, a);
        assert_eq!(b / a, 2.0);
        assert_eq!(-a, Degrees::new(-30.0));
        assert!(a < b);

        let mut c = a;
        c += b;
        c -= a;
        c *= 3.0;
        c /= 2.0;
        assert_eq!(c, Degrees::new(90.0));
        assert_eq!(Degrees::<f32>::ZERO, Degrees::default());
    }

    #[test]
    fn trig() {
        let r = Radians::new(FRAC_PI_2);
        assert_relative_eq!(r.sin(), 1.0);
        assert_abs_diff_eq!(r.cos(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(Radians::new(FRAC_PI_4).tan(), 1.0);
        assert_relative_eq!(Radians::acos(0.0f32), r);
        assert_relative_eq!(Radians::asin(1.0f32), r);
        assert_relative_eq!(Radians::atan2(1.0f32, 0.0), r);
    }

    #[test]
    fn vector_conversion() {
        assert_relative_eq!(Radians::from_vector(vec2(0.0f32, 1.0)), Radians::new(FRAC_PI_2));
        assert_relative_eq!(Radians::from_vector(vec2(-1.0f32, 0.0)), Radians::new(PI));
        assert_abs_diff_eq!(
            Radians::new(FRAC_PI_2).to_vector(),
            vec2(0.0, -1.0),
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Radians::new(0.0f32).to_unit_vector().get(),
            vec2(1.0, 0.0)
        );

        // The two conversions rotate in opposite directions.
        let r = Radians::new(1.0f32);
        assert_abs_diff_eq!(Radians::from_vector(r.to_vector()), -r, epsilon = 1e-6);
        assert_abs_diff_eq!(Radians::from_vector((-r).to_vector()), r, epsilon = 1e-6);
    }

    #[test]
    fn random() {
        let mut rng = Rng::with_seed(1);
        for _ in 0..1000 {
            let r = Radians::<f32>::random(&mut rng);
            assert!(r >= Radians::new(-PI) && r < Radians::new(PI));
            let u = random_unit_vec2::<f64>(&mut rng);
            assert_abs_diff_eq!(u.length(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn fmt() {
        assert_eq!(Degrees::new(90.0f32).to_string(), "90°");
        assert_eq!(format!("{:.1}", Radians::new(0.5f32)), "0.5 rad");
        assert_eq!(format!("{:?}", Radians::new(0.5f32)), "0.5 rad");
        assert_eq!(Deg::NAME, "degrees");
    }
}
