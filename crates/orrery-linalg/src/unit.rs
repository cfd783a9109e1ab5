//! Vectors that are known to have unit length.

use std::{fmt, ops::Deref, ops::Neg};

use approx::{AbsDiffEq, RelativeEq, UlpsEq};

use crate::{
    error::{Error, Result},
    rng::Rng,
    Number, One, Real, Vector, Zero,
};

/// A [`Vector`] of (approximately) unit length.
///
/// A [`UnitVec`] can only be obtained from operations that guarantee unit length:
///
/// - [`Vector::unit`] and [`Vector::try_unit`] normalize a vector, failing if it is too close to
///   zero length.
/// - [`UnitVec::axis`] and the named directions [`UnitVec::forward`], [`UnitVec::up`] and so on.
/// - [`UnitVec::random`] draws a uniformly distributed direction.
/// - Negating a [`UnitVec`] yields another [`UnitVec`].
///
/// The wrapped vector can be read through [`Deref`], but not modified in place. To change it,
/// use [`UnitVec::map_vector`], which re-validates the result.
///
/// # Examples
///
/// ```
/// # use orrery_linalg::*;
/// let u = vec2(3.0, 4.0).unit().unwrap();
/// approx::assert_relative_eq!(u.get(), vec2(0.6, 0.8));
/// assert_eq!(u.x(), 0.6);
///
/// assert_eq!(Vec2f::ZERO.unit(), Err(Error::DivideByZero));
/// assert!(Vec2f::ZERO.try_unit().is_none());
/// ```
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct UnitVec<T, const N: usize>(Vector<T, N>);

/// A 2-dimensional unit vector.
pub type UnitVec2<T = f32> = UnitVec<T, 2>;
/// A 3-dimensional unit vector.
pub type UnitVec3<T = f32> = UnitVec<T, 3>;

impl<T, const N: usize> UnitVec<T, N> {
    /// Wraps `vec` without checking its length.
    ///
    /// Callers must guarantee that `vec` has unit length.
    pub(crate) const fn new_unchecked(vec: Vector<T, N>) -> Self {
        Self(vec)
    }

    #[inline]
    pub fn as_vector(&self) -> &Vector<T, N> {
        &self.0
    }

    #[inline]
    pub fn into_vector(self) -> Vector<T, N> {
        self.0
    }

    /// Returns a copy of the wrapped vector.
    #[inline]
    pub fn get(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        self.0
    }

    /// Applies `f` to the wrapped vector and normalizes the result.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DivideByZero`] if the vector returned by `f` can not be normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let u = UnitVec3::<f32>::up().map_vector(|v| v + Vec3f::X).unwrap();
    /// approx::assert_relative_eq!(u.length(), 1.0);
    ///
    /// let err = UnitVec3::<f32>::up().map_vector(|v| v - v);
    /// assert_eq!(err, Err(Error::DivideByZero));
    /// ```
    pub fn map_vector<F>(self, f: F) -> Result<Self>
    where
        T: Real,
        F: FnOnce(Vector<T, N>) -> Vector<T, N>,
    {
        f(self.0).unit()
    }
}

impl<T: Zero + One, const N: usize> UnitVec<T, N> {
    /// Returns the unit vector pointing along axis `index`, or [`None`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(UnitVec::<f32, 4>::axis(3).unwrap().get(), Vec4f::W);
    /// assert!(UnitVec::<f32, 4>::axis(4).is_none());
    /// ```
    pub fn axis(index: usize) -> Option<Self> {
        (index < N).then(|| Self(Vector::from_fn(|i| if i == index { T::ONE } else { T::ZERO })))
    }
}

/// Named directions.
///
/// Forward is +X, right is +Y, and up is +Z.
impl<T: Number> UnitVec<T, 3> {
    pub fn forward() -> Self {
        Self(Vector::<T, 3>::X)
    }

    pub fn back() -> Self {
        Self(-Vector::<T, 3>::X)
    }

    pub fn right() -> Self {
        Self(Vector::<T, 3>::Y)
    }

    pub fn left() -> Self {
        Self(-Vector::<T, 3>::Y)
    }

    pub fn up() -> Self {
        Self(Vector::<T, 3>::Z)
    }

    pub fn down() -> Self {
        Self(-Vector::<T, 3>::Z)
    }
}

struct AssertNonEmpty<const N: usize>;

impl<const N: usize> AssertNonEmpty<N> {
    const OK: () = assert!(N > 0, "a zero-dimensional vector has no unit length");
}

impl<T: Real, const N: usize> UnitVec<T, N> {
    /// Draws a uniformly distributed direction.
    ///
    /// Each element is drawn from a standard normal distribution and the result is normalized.
    /// Draws that are too close to zero length are rejected and redrawn.
    pub fn random(rng: &mut Rng) -> Self {
        let () = AssertNonEmpty::<N>::OK;
        loop {
            let vec = Vector::<T, N>::from_fn(|_| rng.standard_normal());
            if let Some(unit) = vec.try_unit() {
                return unit;
            }
            log::trace!("rejected near-zero direction sample {vec:?}");
        }
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Normalizes a copy of this vector, if its squared length is at least `tolerance`.
    pub fn try_unit_with(&self, tolerance: T) -> Option<UnitVec<T, N>> {
        let mut vec = *self;
        vec.try_normalize_with(tolerance).then_some(UnitVec(vec))
    }

    /// Normalizes a copy of this vector.
    ///
    /// Returns [`None`] if its squared length is below [`SMALL_NUMBER`][crate::SMALL_NUMBER].
    pub fn try_unit(&self) -> Option<UnitVec<T, N>> {
        self.try_unit_with(T::SMALL_NUMBER)
    }

    /// Like [`Vector::try_unit_with`], but returns an error on failure.
    pub fn unit_with(&self, tolerance: T) -> Result<UnitVec<T, N>> {
        self.try_unit_with(tolerance).ok_or(Error::DivideByZero)
    }

    /// Normalizes a copy of this vector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] if its squared length is below
    /// [`SMALL_NUMBER`][crate::SMALL_NUMBER].
    pub fn unit(&self) -> Result<UnitVec<T, N>> {
        self.unit_with(T::SMALL_NUMBER)
    }
}

impl<T, const N: usize> Deref for UnitVec<T, N> {
    type Target = Vector<T, N>;

    #[inline]
    fn deref(&self) -> &Vector<T, N> {
        &self.0
    }
}

impl<T, const N: usize> AsRef<Vector<T, N>> for UnitVec<T, N> {
    #[inline]
    fn as_ref(&self) -> &Vector<T, N> {
        &self.0
    }
}

impl<T, const N: usize> From<UnitVec<T, N>> for Vector<T, N> {
    #[inline]
    fn from(unit: UnitVec<T, N>) -> Self {
        unit.0
    }
}

impl<T: Neg<Output = T>, const N: usize> Neg for UnitVec<T, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl<T: PartialEq, const N: usize> PartialEq<Vector<T, N>> for UnitVec<T, N> {
    fn eq(&self, other: &Vector<T, N>) -> bool {
        self.0 == *other
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for UnitVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for UnitVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T, const N: usize> AbsDiffEq for UnitVec<T, N>
where
    T: AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0.abs_diff_eq(&other.0, epsilon)
    }
}

impl<T, const N: usize> RelativeEq for UnitVec<T, N>
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
        self.0.relative_eq(&other.0, epsilon, max_relative)
    }
}

impl<T, const N: usize> UlpsEq for UnitVec<T, N>
where
    T: UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 {
        T::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0.ulps_eq(&other.0, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::{vec2, vec3, Vec2f, Vec3f, KINDA_SMALL_NUMBER};

    use super::*;

    #[test]
    fn unit_from_vector() {
        let u = vec2(3.0f32, 4.0).unit().unwrap();
        assert_relative_eq!(u.get(), vec2(0.6, 0.8));
        assert_relative_eq!(u.length(), 1.0);

        assert_eq!(vec2(0.0f32, 1e-5).unit(), Err(Error::DivideByZero));
        assert_eq!(vec2(0.0f32, 1e-5).try_unit(), None);
        assert!(vec2(0.0f32, 1e-5).try_unit_with(1e-12).is_some());
        assert!(vec2(1.0f32, 0.0).unit_with(2.0).is_err());
    }

    #[test]
    fn unit_of_huge_vector() {
        let u = vec3(1e20f32, 0.0, 0.0).unit().unwrap();
        assert_eq!(u, UnitVec3::<f32>::forward());

        let u = vec3(1e200f64, 1e200, 0.0).unit().unwrap();
        assert_relative_eq!(u.length(), 1.0);
        assert_relative_eq!(u.x(), std::f64::consts::FRAC_1_SQRT_2);

        let u = vec3(f32::MAX, -f32::MAX, f32::MAX).unit().unwrap();
        assert_relative_eq!(u.length(), 1.0);
        assert!(u.x() > 0.0 && u.y() < 0.0);
    }

    #[test]
    fn unit_rejects_zero_and_non_finite() {
        assert_eq!(Vec3f::ZERO.try_unit_with(0.0), None);
        assert_eq!(Vec3f::ZERO.try_unit_with(-1.0), None);
        assert_eq!(Vec3f::ZERO.unit_with(-1.0), Err(Error::DivideByZero));
        assert_eq!(vec3(f32::NAN, 1.0, 0.0).try_unit(), None);
        assert_eq!(vec3(f32::INFINITY, 0.0, 0.0).try_unit(), None);

        // A permissive tolerance still normalizes tiny vectors.
        let u = vec3(1e-30f32, 0.0, 0.0).try_unit_with(0.0).unwrap();
        assert_eq!(u, UnitVec3::<f32>::forward());
        assert!(vec2(0.0f32, 1e-5).try_unit_with(-1.0).is_some());
    }

    #[test]
    fn directions() {
        assert_eq!(UnitVec3::<f32>::forward(), Vec3f::X);
        assert_eq!(UnitVec3::<f32>::back(), -Vec3f::X);
        assert_eq!(UnitVec3::<f32>::right(), Vec3f::Y);
        assert_eq!(UnitVec3::<f32>::left(), -Vec3f::Y);
        assert_eq!(UnitVec3::<f32>::up(), Vec3f::Z);
        assert_eq!(UnitVec3::<f32>::down(), -Vec3f::Z);
        assert_eq!(
            UnitVec3::<f32>::forward().cross(UnitVec3::<f32>::right().get()),
            UnitVec3::<f32>::up().get()
        );
        assert_eq!(UnitVec2::<f32>::axis(1).map(|u| u.get()), Some(Vec2f::Y));
        assert_eq!(-UnitVec3::<f32>::up(), UnitVec3::<f32>::down());
    }

    #[test]
    fn random_is_unit() {
        let mut rng = Rng::with_seed(0x5eed);
        for _ in 0..1000 {
            let u = UnitVec::<f64, 3>::random(&mut rng);
            assert_abs_diff_eq!(u.length(), 1.0, epsilon = 1e-9);
            let u = UnitVec::<f32, 2>::random(&mut rng);
            assert_abs_diff_eq!(u.length(), 1.0, epsilon = KINDA_SMALL_NUMBER);
        }
    }

    #[test]
    fn map_vector_revalidates() {
        let u = UnitVec3::<f32>::forward()
            .map_vector(|v| v * 10.0)
            .unwrap();
        assert_eq!(u, UnitVec3::<f32>::forward());
        assert!(UnitVec3::<f32>::forward().map_vector(|_| Vec3f::ZERO).is_err());
        let back: Vec3f = u.into();
        assert_eq!(back, vec3(1.0, 0.0, 0.0));
    }
}
