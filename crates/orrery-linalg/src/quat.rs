use std::{
    fmt,
    ops::{Mul, MulAssign},
};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    angle::Radians,
    error::{Error, Result},
    vec4, Number, One, Real, UnitVec, Vec3, Vec4, Vector, Zero,
};

/// A quaternion, made up of a vector part `v` and a scalar part `s`.
///
/// Unit-length quaternions ("*versors*") represent rotations in 3D space. Products of unit
/// quaternions are *not* renormalized automatically, so rounding errors accumulate over long
/// chains of multiplications. Use [`Quat::normalized`] to correct them when needed.
///
/// # Examples
///
/// ```
/// # use orrery_linalg::*;
/// let q = Quat::from_axis_angle(UnitVec::up(), Degrees::new(90.0f32));
/// approx::assert_abs_diff_eq!(Vec3f::X.rotated(q), Vec3f::Y, epsilon = 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quat<T> {
    v: Vec3<T>,
    s: T,
}

impl<T: Zero + One> Quat<T> {
    /// The multiplicative identity, representing no rotation.
    pub const IDENTITY: Self = Self {
        v: Vector::ZERO,
        s: T::ONE,
    };
}

impl<T> Quat<T> {
    /// Creates a quaternion from its vector part `v` and scalar part `s`.
    #[inline]
    pub const fn new(v: Vec3<T>, s: T) -> Self {
        Self { v, s }
    }

    /// Creates a quaternion from its components.
    ///
    /// `x`, `y` and `z` are the `i`, `j` and `k` imaginary parts, `w` is the real part.
    pub fn from_components(x: T, y: T, z: T, w: T) -> Self {
        Self::new([x, y, z].into(), w)
    }

    /// Creates a quaternion from a 4-dimensional [`Vector`] laid out as `(x, y, z, w)`.
    pub fn from_vec4(vec: Vec4<T>) -> Self {
        let [x, y, z, w] = vec.into_array();
        Self::from_components(x, y, z, w)
    }

    /// Returns the components as a 4-dimensional [`Vector`] laid out as `(x, y, z, w)`.
    pub fn to_vec4(self) -> Vec4<T> {
        let [x, y, z] = self.v.into_array();
        vec4(x, y, z, self.s)
    }

    #[inline]
    pub fn vector(&self) -> Vec3<T>
    where
        T: Copy,
    {
        self.v
    }

    #[inline]
    pub fn scalar(&self) -> T
    where
        T: Copy,
    {
        self.s
    }
}

impl<T: Copy> Quat<T> {
    pub fn x(&self) -> T {
        self.v.x()
    }

    pub fn y(&self) -> T {
        self.v.y()
    }

    pub fn z(&self) -> T {
        self.v.z()
    }

    pub fn w(&self) -> T {
        self.s
    }
}

impl<T: Number> Quat<T> {
    /// Returns the conjugate `(-v, s)`.
    ///
    /// For unit quaternions, this is the inverse rotation. It is not the general inverse of a
    /// quaternion of any other length.
    pub fn conjugate(self) -> Self {
        Self::new(-self.v, self.s)
    }

    /// Replaces `self` with its [conjugate][Quat::conjugate].
    pub fn invert(&mut self) {
        *self = self.conjugate();
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the length is not one, rotating a vector with this quaternion scales it as well.
    pub fn length2(&self) -> T {
        self.v.length2() + self.s * self.s
    }

    /// Rotates `p` by this quaternion, computed as `q * (p, 0) * q⁻¹`.
    ///
    /// `self` is assumed to be of unit length.
    pub fn rotate_vector(&self, p: Vec3<T>) -> Vec3<T> {
        (*self * Self::new(p, T::ZERO) * self.conjugate()).v
    }
}

impl<T: Real> Quat<T> {
    /// Creates a rotation by `angle` around `axis`.
    ///
    /// Positive angles rotate counterclockwise when looking against the direction of `axis`.
    pub fn from_axis_angle(axis: UnitVec<T, 3>, angle: impl Into<Radians<T>>) -> Self {
        let half = angle.into() / (T::ONE + T::ONE);
        let (sin, cos) = half.sin_cos();
        Self::new(axis.get() * sin, cos)
    }

    /// Creates a rotation around the X ([forward][UnitVec::forward]) axis.
    pub fn from_rotation_x(angle: impl Into<Radians<T>>) -> Self {
        Self::from_axis_angle(UnitVec::forward(), angle)
    }

    /// Creates a rotation around the Y ([right][UnitVec::right]) axis.
    pub fn from_rotation_y(angle: impl Into<Radians<T>>) -> Self {
        Self::from_axis_angle(UnitVec::right(), angle)
    }

    /// Creates a rotation around the Z ([up][UnitVec::up]) axis.
    pub fn from_rotation_z(angle: impl Into<Radians<T>>) -> Self {
        Self::from_axis_angle(UnitVec::up(), angle)
    }

    #[doc(alias = "norm", alias = "magnitude")]
    pub fn length(&self) -> T {
        self.length2().sqrt()
    }

    /// Returns a copy of this quaternion scaled to unit length.
    ///
    /// Returns [`None`] if the squared length is below [`SMALL_NUMBER`][crate::SMALL_NUMBER].
    pub fn try_normalized(self) -> Option<Self> {
        self.to_vec4().try_unit().map(|unit| Self::from_vec4(unit.get()))
    }

    /// Returns a copy of this quaternion scaled to unit length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if the squared length is below
    /// [`SMALL_NUMBER`][crate::SMALL_NUMBER].
    pub fn normalized(self) -> Result<Self> {
        self.try_normalized().ok_or(Error::DivideByZero)
    }
}

impl<T: Zero + One> Default for Quat<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The Hamilton product.
///
/// `a * b` represents the rotation `b` followed by the rotation `a`.
impl<T: Number> Mul for Quat<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            rhs.v * self.s + self.v * rhs.s + self.v.cross(rhs.v),
            self.s * rhs.s - self.v.dot(rhs.v),
        )
    }
}

impl<T: Number> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Number> Vec3<T> {
    /// Returns this vector rotated by `q`. See [`Quat::rotate_vector`].
    pub fn rotated(self, q: Quat<T>) -> Self {
        q.rotate_vector(self)
    }

    /// Rotates this vector by `q` in place.
    pub fn rotate(&mut self, q: Quat<T>) {
        *self = q.rotate_vector(*self);
    }
}

impl<T: fmt::Display> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.v, f)?;
        f.write_str(" ")?;
        fmt::Display::fmt(&self.s, f)
    }
}

impl<T> AbsDiffEq for Quat<T>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.v.abs_diff_eq(&other.v, epsilon) && self.s.abs_diff_eq(&other.s, epsilon)
    }
}

impl<T> RelativeEq for Quat<T>
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
        self.v.relative_eq(&other.v, epsilon, max_relative)
            && self.s.relative_eq(&other.s, epsilon, max_relative)
    }
}

impl<T> UlpsEq for Quat<T>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.v.ulps_eq(&other.v, epsilon, max_ulps) && self.s.ulps_eq(&other.s, epsilon, max_ulps)
    }
}
