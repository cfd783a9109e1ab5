use std::{array, slice};

use crate::{
    angle::Radians,
    error::{Error, Result},
    rng::{Rng, SampleUniform},
    scalar, AsReal, Cast, MinMax, Number, One, Real, Sqrt, Zero,
};

mod access;
mod cursor;
mod fmt;
mod ops;

pub use cursor::{DrainCursor, FillCursor};

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// # Construction
///
/// There is a variety of ways to create a [`Vector`]:
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] creates a vector by copying the given value into each element.
/// - [`Vector::from_fn`] creates a vector by invoking a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation.
/// - The [`Default`] implementation of [`Vector`] initializes each element with its default value.
/// - [`Vector::ZERO`] and [`Vector::ONE`] contain all-zeroes and all-ones.
/// - For vectors with up to 4 dimensions, `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` can
///   be used to obtain unit vectors pointing in the given direction.
/// - Vectors of other lengths or element types are converted with [`Vector::resize`],
///   [`Vector::cast`], [`Vector::convert`] and [`Vector::with_tail`].
///
/// # Element Access
///
/// - For vectors with 2 to 4 dimensions, elements can be read with the `x()`, `y()`, `z()` and
///   `w()` methods, and written with `set_x()`, `x_mut()` and so on.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays. They panic when the
///   index is out of bounds.
/// - [`Vector::get`] and [`Vector::at`] are the checked alternatives.
/// - [`Vector::fill`], [`Vector::drain`] and [`Vector::assign_at`] provide cursors for writing or
///   reading several elements in sequence.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented to allow safe transmutation when
///   the element type `T` also allows this.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: One, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 1.
    pub const ONE: Self = Self([T::ONE; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = vec3(1, 2, 3).zip(vec3("1", "2", "3"));
    /// assert_eq!(v, vec3((1, "1"), (2, "2"), (3, "3")));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N>
    where
        T: Copy,
        U: Copy,
    {
        Vector::from_fn(|i| (self.0[i], other.0[i]))
    }

    /// Converts this vector to one with `M` elements.
    ///
    /// Excess elements are dropped, missing elements are initialized with their [`Default`]
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).resize::<2>(), vec2(1, 2));
    /// assert_eq!(vec2(1, 2).resize::<4>(), vec4(1, 2, 0, 0));
    /// ```
    pub fn resize<const M: usize>(self) -> Vector<T, M>
    where
        T: Default,
    {
        let mut elems = self.0.into_iter();
        Vector::from_fn(|_| elems.next().unwrap_or_default())
    }

    /// Converts each element to `U`, with the semantics of an `as` cast.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(vec2(1.7f32, -2.2).cast::<i32>(), vec2(1, -2));
    /// ```
    pub fn cast<U>(self) -> Vector<U, N>
    where
        T: Cast<U>,
    {
        self.map(Cast::cast)
    }

    /// Casts each element to `U`, then resizes the result to `M` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).convert::<f32, 2>(), vec2(1.0, 2.0));
    /// ```
    pub fn convert<U, const M: usize>(self) -> Vector<U, M>
    where
        T: Cast<U>,
        U: Default,
    {
        self.cast().resize()
    }

    /// Creates a vector from a shorter vector followed by `tail`.
    ///
    /// Elements not covered by `head` or `tail` are initialized with their [`Default`] value.
    /// Passing more elements than fit is a compile-time error.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(Vec4::with_tail(vec2(1, 2), [3, 4]), vec4(1, 2, 3, 4));
    /// assert_eq!(Vec4::with_tail(vec2(1, 2), [3]), vec4(1, 2, 3, 0));
    /// ```
    pub fn with_tail<const M: usize, const K: usize>(head: Vector<T, M>, tail: [T; K]) -> Self
    where
        T: Default,
    {
        let () = AssertFits::<M, K, N>::OK;
        let mut elems = head.0.into_iter().chain(tail);
        Self::from_fn(|_| elems.next().unwrap_or_default())
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).as_array(), &[1, 2, 3]);
    /// ```
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(vec3(1, 2, 3).into_array(), [1, 2, 3]);
    /// ```
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns an iterator over the elements.
    ///
    /// The iterator is double-ended, so `.rev()` traverses the elements back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = vec3(1, 2, 3);
    /// assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.0.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.0.iter_mut()
    }

    /// Returns a reference to the element at `index`, or [`None`] if it is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.0.get_mut(index)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = vec2(5, 6);
    /// assert_eq!(v.at(1), Ok(6));
    /// assert_eq!(v.at(2), Err(Error::OutOfRange { index: 2, len: 2 }));
    /// ```
    pub fn at(&self, index: usize) -> Result<T>
    where
        T: Copy,
    {
        self.0
            .get(index)
            .copied()
            .ok_or(Error::OutOfRange { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `index >= N`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.0
            .get_mut(index)
            .ok_or(Error::OutOfRange { index, len: N })
    }

    /// Creates a vector with each element drawn from `min[i]` to `max[i]`.
    ///
    /// See [`Rng::range`] for how the bounds are treated.
    pub fn random_in(rng: &mut Rng, min: Self, max: Self) -> Self
    where
        T: SampleUniform + Copy,
    {
        Self::from_fn(|i| rng.range(min.0[i], max.0[i]))
    }
}

impl<T: Number, const N: usize> Vector<T, N> {
    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3);
    /// ```
    pub fn dot(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T {
        self.dot(*self)
    }

    /// Returns the length of this [`Vector`].
    ///
    /// Integer vectors have an [`f32`] length. The sum of squares is computed in that type, so
    /// it does not overflow the integer type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(vec2(3, 4).length(), 5.0f32);
    /// assert_eq!(Vec3::<f64>::Z.length(), 1.0f64);
    /// ```
    pub fn length(&self) -> T::Real
    where
        T: AsReal,
    {
        self.0
            .iter()
            .map(|elem| elem.as_real())
            .fold(<T::Real as Zero>::ZERO, |acc, elem| acc + elem * elem)
            .sqrt()
    }

    /// Returns the squared distance between `self` and `other`.
    pub fn distance2(&self, other: Self) -> T {
        (*self - other).length2()
    }

    pub fn distance(&self, other: Self) -> T::Real
    where
        T: AsReal,
    {
        (*self - other).length()
    }

    /// Linearly interpolates between `self` and `other`.
    ///
    /// `alpha` is not clamped, so values outside of `[0, 1]` extrapolate.
    pub fn lerp(self, other: Self, alpha: T) -> Self {
        self + (other - self) * alpha
    }

    /// Returns whether every element's absolute value is strictly less than `tolerance`.
    pub fn is_nearly_zero(&self, tolerance: T) -> bool {
        self.0.iter().all(|&e| scalar::is_nearly_zero(e, tolerance))
    }

    /// Returns whether every element differs from the one in `other` by strictly less than
    /// `tolerance`.
    pub fn is_nearly_equal(&self, other: Self, tolerance: T) -> bool {
        self.zip(other)
            .0
            .iter()
            .all(|&(a, b)| scalar::is_nearly_equal(a, b, tolerance))
    }
}

impl<T: Real, const N: usize> Vector<T, N> {
    /// Divides this vector by its length in place, if its squared length is at least `tolerance`.
    ///
    /// Returns whether the vector was normalized. On failure, `self` is left unchanged. Zero
    /// vectors and vectors with infinite or NaN elements are always rejected, whatever the
    /// `tolerance`.
    ///
    /// The length is computed from a rescaled copy, so vectors whose squared length does not fit
    /// in `T` can still be normalized:
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let mut v = vec2(1e30f32, 0.0);
    /// assert!(v.try_normalize_with(1e-8));
    /// assert_eq!(v, Vec2f::X);
    ///
    /// assert!(!Vec2f::ZERO.try_normalize_with(0.0));
    /// ```
    pub fn try_normalize_with(&mut self, tolerance: T) -> bool {
        let len2 = self.length2();
        // Also rejects NaN. An overflowing `len2` is `inf` and passes, an underflowing one is
        // checked against the largest element below.
        if !(len2 >= tolerance) {
            return false;
        }
        let largest = self
            .0
            .iter()
            .fold(T::ZERO, |acc, &elem| MinMax::max(acc, elem.abs()));
        if !(largest > T::ZERO && largest.is_finite()) {
            return false;
        }
        let scaled = *self / largest;
        let unit = scaled / scaled.length2().sqrt();
        if !unit.0.iter().all(|elem| elem.is_finite()) {
            return false;
        }
        *self = unit;
        true
    }

    /// Divides this vector by its length in place.
    ///
    /// Returns `false` and leaves the vector unchanged if its squared length is below
    /// [`SMALL_NUMBER`][crate::SMALL_NUMBER].
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// assert!(v.try_normalize());
    /// assert_eq!(v, vec3(0.0, 0.0, 1.0));
    ///
    /// let mut zero = Vec3f::ZERO;
    /// assert!(!zero.try_normalize());
    /// assert_eq!(zero, Vec3f::ZERO);
    /// ```
    pub fn try_normalize(&mut self) -> bool {
        self.try_normalize_with(T::SMALL_NUMBER)
    }

    /// Like [`Vector::try_normalize_with`], but returns an error on failure.
    pub fn normalize_with(&mut self, tolerance: T) -> Result<()> {
        if self.try_normalize_with(tolerance) {
            Ok(())
        } else {
            Err(Error::DivideByZero)
        }
    }

    /// Divides this vector by its length in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivideByZero`] and leaves the vector unchanged if its squared length is
    /// below [`SMALL_NUMBER`][crate::SMALL_NUMBER].
    pub fn normalize(&mut self) -> Result<()> {
        self.normalize_with(T::SMALL_NUMBER)
    }

    /// Computes the smallest positive angle between `self` and `other`.
    ///
    /// Both `self` and `other` must have non-zero length for the result to be meaningful.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// approx::assert_relative_eq!(Vec3f::Y.abs_angle_to(Vec3f::X).get(), FRAC_PI_2);
    /// ```
    pub fn abs_angle_to(self, other: Self) -> Radians<T> {
        let cos = self.dot(other) / (self.length2() * other.length2()).sqrt();
        Radians::acos(scalar::clamp(cos, -T::ONE, T::ONE))
    }
}

impl<T: MinMax + Copy, const N: usize> Vector<T, N> {
    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let a = vec3(-1.0, 2.0, f32::NAN);
    /// let b = vec3(3.0, f32::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, f32::NEG_INFINITY, 0.0));
    /// ```
    pub fn min(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i].min(other.0[i]))
    }

    /// Element-wise maximum between `self` and `other`.
    pub fn max(self, other: Self) -> Self {
        Self::from_fn(|i| self.0[i].max(other.0[i]))
    }

    /// Element-wise clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = vec3(-5, 1, 9).clamp(Vector::splat(0), Vector::splat(3));
    /// assert_eq!(v, vec3(0, 1, 3));
    /// ```
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| self.0[i].clamp(min.0[i], max.0[i]))
    }
}

impl<T> Vector<T, 2> {
    /// Appends another value to the vector, yielding a vector with 3 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.0;
        Vector([x, y, value])
    }
}

impl<T: Real> Vector<T, 2> {
    /// Rotates `self` clockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = Vec2f::Y.rotate_clockwise(Degrees::new(90.0));
    /// approx::assert_abs_diff_eq!(v, Vec2f::X, epsilon = 1e-6);
    /// ```
    pub fn rotate_clockwise(self, angle: impl Into<Radians<T>>) -> Self {
        let (sin, cos) = angle.into().sin_cos();
        let [x, y] = self.0;
        Vector([x * cos + y * sin, y * cos - x * sin])
    }

    /// Rotates `self` counterclockwise in the 2D plane.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    pub fn rotate_counterclockwise(self, angle: impl Into<Radians<T>>) -> Self {
        let angle: Radians<T> = angle.into();
        self.rotate_clockwise(-angle)
    }

    /// Computes the (signed) clockwise rotation needed to align `self` with `other`.
    ///
    /// This operation assumes that the Y axis points up, and the X axis points to the right.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// use std::f32::consts::FRAC_PI_2;
    ///
    /// approx::assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::X).get(), FRAC_PI_2);
    /// approx::assert_relative_eq!(Vec2f::X.signed_angle_to(Vec2f::Y).get(), -FRAC_PI_2);
    /// ```
    pub fn signed_angle_to(self, other: Self) -> Radians<T> {
        -Radians::atan2(self.perp_dot(other), self.dot(other))
    }
}

impl<T: Number> Vector<T, 2> {
    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of `self` and `other` extended with Z=0.
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    pub fn perp_dot(self, other: Self) -> T {
        let [ax, ay] = self.0;
        let [bx, by] = other.0;
        ax * by - ay * bx
    }
}

impl<T> Vector<T, 3> {
    /// Removes the last element of this vector, yielding a vector with 2 elements.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Appends another value to the vector, yielding a vector with 4 dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// assert_eq!(v.truncate(), vec3(-1.0, 2.0, 3.5));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }
}

impl<T: Number> Vector<T, 3> {
    /// Computes the right-handed cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments negates it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 4> {
    /// Removes the last element of this vector, yielding a vector with 3 elements.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }
}

struct AssertFits<const M: usize, const K: usize, const N: usize>;

impl<const M: usize, const K: usize, const N: usize> AssertFits<M, K, N> {
    const OK: () = assert!(M + K <= N, "too many elements for the target vector");
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut Vector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter_mut()
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::Degrees;

    use super::*;

    #[test]
    fn access() {
        assert_eq!(Vec3f::X[0], 1.0);
        assert_eq!(Vec3f::X[1], 0.0);
        assert_eq!(Vec3f::X.get(2), Some(&0.0));
        assert_eq!(Vec3f::X.get(3), None);
        assert_eq!(
            Vec3f::X.at(3),
            Err(Error::OutOfRange { index: 3, len: 3 })
        );

        let mut v = vec2(0, 1);
        *v.at_mut(0).unwrap() = 777;
        assert_eq!(v, [777, 1]);
        assert!(v.at_mut(2).is_err());
    }

    #[test]
    #[should_panic]
    fn index_out_of_range_panics() {
        let v = vec3(1, 2, 3);
        let _ = v[3];
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3, 4).length(), 5.0f32);
        assert_eq!(vec2(3.0f64, 4.0).length(), 5.0f64);
        assert_eq!(vec3(1, 2, 2).distance(Vec3::ZERO), 3.0f32);
        assert_eq!(vec3(1, 2, 2).distance2(vec3(1, 2, 0)), 4);

        // The squared length would overflow `i32`.
        assert_relative_eq!(vec2(50_000i32, 50_000).length(), 70_710.68f32);
        assert_relative_eq!(vec3(i32::MAX, 0, 0).length(), i32::MAX as f32);
    }

    #[test]
    fn normalize() {
        let mut v = vec2(3.0f32, 4.0);
        v.normalize().unwrap();
        assert_relative_eq!(v, vec2(0.6, 0.8));

        let mut tiny = vec2(1e-5f32, 0.0);
        assert_eq!(tiny.normalize(), Err(Error::DivideByZero));
        assert_eq!(tiny, vec2(1e-5, 0.0));
        assert!(tiny.try_normalize_with(1e-12));
        assert_relative_eq!(tiny, Vec2f::X);

        let mut nan = vec2(f32::NAN, 0.0);
        assert!(!nan.try_normalize());
    }

    #[test]
    fn conversions() {
        assert_eq!(vec4(1, 2, 3, 4).resize::<2>(), vec2(1, 2));
        assert_eq!(vec2(1, 2).resize::<3>(), vec3(1, 2, 0));
        assert_eq!(vec2(1.5f32, 2.5).cast::<i64>(), vec2(1i64, 2));
        assert_eq!(vec2(1u8, 2).convert::<f64, 3>(), vec3(1.0, 2.0, 0.0));
        assert_eq!(Vec3::with_tail(vec2(1, 2), [3]), vec3(1, 2, 3));
        assert_eq!(Vec4::with_tail(vec2(1, 2), []), vec4(1, 2, 0, 0));
        assert_eq!(vec3(1, 2, 3).extend(4).truncate(), vec3(1, 2, 3));
    }

    #[test]
    fn iteration() {
        let mut v = vec3(1, 2, 3);
        for e in &mut v {
            *e *= 2;
        }
        assert_eq!(v.iter().sum::<i32>(), 12);
        assert_eq!(v.iter().rev().copied().collect::<Vec<_>>(), [6, 4, 2]);
        assert_eq!(v.into_iter().nth(1), Some(4));
    }

    #[test]
    fn rotate() {
        assert_abs_diff_eq!(
            Vec2f::Y.rotate_clockwise(Degrees::new(90.0)),
            Vec2f::X,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Vec2f::Y.rotate_clockwise(Radians::new(PI)),
            -Vec2f::Y,
            epsilon = 1e-6
        );
        assert_abs_diff_eq!(
            Vec2f::X.rotate_counterclockwise(Radians::new(FRAC_PI_2)),
            Vec2f::Y,
            epsilon = 1e-6
        );
    }

    #[test]
    fn dot_and_cross() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3);
        assert_eq!(vec3(1, 3, -5).length2(), 35);
        assert_eq!(vec3(1, 0, 0).cross(vec3(0, 1, 0)), vec3(0, 0, 1));
        assert_eq!(vec2(1, 0).perp_dot(vec2(0, 1)), 1);
        assert_eq!(vec2(0, 1).perp_dot(vec2(1, 0)), -1);
    }

    #[test]
    fn angles() {
        assert_relative_eq!(Vec3f::Y.abs_angle_to(Vec3f::X).get(), FRAC_PI_2);
        assert_relative_eq!(Vec3f::Y.abs_angle_to(-Vec3f::Y).get(), PI);
        assert_abs_diff_eq!(Vec3f::Y.abs_angle_to(Vec3f::Y).get(), 0.0);
        assert_relative_eq!(vec2(1.0, 1.0).abs_angle_to(vec2(1.0, -1.0)).get(), FRAC_PI_2);

        assert_relative_eq!(Vec2f::Y.signed_angle_to(Vec2f::X).get(), FRAC_PI_2);
        assert_relative_eq!(Vec2f::X.signed_angle_to(Vec2f::Y).get(), -FRAC_PI_2);
        assert_relative_eq!(
            Vec2f::Y
                .rotate_counterclockwise(Degrees::new(100.0))
                .signed_angle_to(Vec2f::Y)
                .get(),
            100.0f32.to_radians(),
            max_relative = 1e-5
        );
    }

    #[test]
    fn elementwise_helpers() {
        let a = vec3(1.0, 5.0, -2.0);
        let b = vec3(3.0, 1.0, -2.0);
        assert_eq!(a.min(b), vec3(1.0, 1.0, -2.0));
        assert_eq!(a.max(b), vec3(3.0, 5.0, -2.0));
        assert_eq!(a.lerp(b, 0.5), vec3(2.0, 3.0, -2.0));
        assert!(vec2(1e-9, -1e-9).is_nearly_zero(1e-8));
        assert!(!vec2(1e-9, -1e-7).is_nearly_zero(1e-8));
        assert!(a.is_nearly_equal(a + Vector::splat(1e-6), 1e-4));
    }

    #[test]
    fn random_in() {
        let mut rng = Rng::with_seed(5);
        for _ in 0..100 {
            let v = Vector::random_in(&mut rng, vec3(0, -10, 5), vec3(1, 10, 5));
            assert!((0..=1).contains(&v.x()));
            assert!((-10..=10).contains(&v.y()));
            assert_eq!(v.z(), 5);
        }
    }
}
