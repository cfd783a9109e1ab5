//! Scalar helper functions.
//!
//! These are free functions rather than methods so that they work on any type meeting their
//! bounds, including the primitive integer and float types.
//!
//! ```
//! use orrery_linalg::scalar;
//!
//! assert_eq!(scalar::clamp(5, 0, 3), 3);
//! assert_eq!(scalar::range_pct(0.0, 10.0, 5.0), 0.5);
//! ```

use crate::{Number, Real, Vec2};

/// Returns the smaller of `a` and `b`, preferring `a` if they are equal or unordered.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

/// Returns the larger of `a` and `b`, preferring `a` if they are equal or unordered.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}

/// Clamps `v` to `[lo, hi]`, computed as `max(min(v, hi), lo)`.
///
/// Unlike [`f32::clamp`], this does not panic when `lo > hi`; `lo` wins instead.
#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    max(min(v, hi), lo)
}

#[inline]
pub fn abs<T: Number>(a: T) -> T {
    if a >= T::ZERO {
        a
    } else {
        -a
    }
}

/// Returns whether `a` and `b` differ by strictly less than `tolerance`.
#[inline]
pub fn is_nearly_equal<T: Number>(a: T, b: T, tolerance: T) -> bool {
    abs(a - b) < tolerance
}

/// Returns whether `|a|` is strictly less than `tolerance`.
#[inline]
pub fn is_nearly_zero<T: Number>(a: T, tolerance: T) -> bool {
    is_nearly_equal(a, T::ZERO, tolerance)
}

/// Linearly interpolates from `a` to `b`; `alpha` is not clamped.
#[inline]
pub fn lerp<T: Number>(a: T, b: T, alpha: T) -> T {
    a + alpha * (b - a)
}

/// Computes where `val` lies in the range `[min, max]`, as a fraction.
///
/// The result is not clamped. If `max - min` is nearly zero, returns 1 when `val >= max` and 0
/// otherwise.
pub fn range_pct<T: Real>(min: T, max: T, val: T) -> T {
    let divisor = max - min;
    if is_nearly_zero(divisor, T::SMALL_NUMBER) {
        if val >= max {
            T::ONE
        } else {
            T::ZERO
        }
    } else {
        (val - min) / divisor
    }
}

/// Inverse of [`range_pct`]: returns the value at `pct` along `[min, max]`.
#[inline]
pub fn range_value<T: Real>(min: T, max: T, pct: T) -> T {
    lerp(min, max, pct)
}

/// Ranges stored as `(min, max)` pairs.
impl<T: Real> Vec2<T> {
    /// Computes where `val` lies in the range `self`. See [`range_pct`].
    pub fn range_pct(&self, val: T) -> T {
        range_pct(self.x(), self.y(), val)
    }

    /// Returns the value at `pct` along the range `self`. See [`range_value`].
    pub fn range_value(&self, pct: T) -> T {
        range_value(self.x(), self.y(), pct)
    }

    /// Maps `val` from the range `self` to the range `out`.
    ///
    /// ```
    /// # use orrery_linalg::*;
    /// assert_eq!(vec2(0.0, 10.0).map_range(vec2(100.0, 200.0), 2.5), 125.0);
    /// ```
    pub fn map_range(&self, out: Vec2<T>, val: T) -> T {
        out.range_value(self.range_pct(val))
    }

    /// Like [`Vec2::map_range`], but limits the result to the range `out`.
    pub fn map_range_clamped(&self, out: Vec2<T>, val: T) -> T {
        out.range_value(clamp(self.range_pct(val), T::ZERO, T::ONE))
    }
}

#[cfg(test)]
mod tests {
    use crate::vec2;

    use super::*;

    #[test]
    fn clamp_composition() {
        assert_eq!(clamp(5, 0, 3), 3);
        assert_eq!(clamp(-1, 0, 3), 0);
        assert_eq!(clamp(2, 0, 3), 2);
        assert_eq!(clamp(1.0, 2.0, 0.0), 2.0);
    }

    #[test]
    fn min_max() {
        assert_eq!(min(1, 2), 1);
        assert_eq!(max(1, 2), 2);
        assert!(min(f32::NAN, 1.0).is_nan());
        assert_eq!(abs(-3), 3);
        assert_eq!(abs(2.5), 2.5);
    }

    #[test]
    fn tolerance_is_strict() {
        assert!(is_nearly_zero(0.5, 1.0));
        assert!(!is_nearly_zero(1.0, 1.0));
        assert!(is_nearly_equal(1.0, 1.00001, 1e-4));
        assert!(!is_nearly_equal(1.0, 1.1, 1e-4));
    }

    #[test]
    fn range_pct_values() {
        assert_eq!(range_pct(0.0, 10.0, 5.0), 0.5);
        assert_eq!(range_pct(0.0, 10.0, 20.0), 2.0);
        assert_eq!(range_pct(5.0, 5.0, 5.0), 1.0);
        assert_eq!(range_pct(5.0, 5.0, 4.0), 0.0);
        assert_eq!(vec2(0.0, 10.0).range_pct(5.0), 0.5);
        assert_eq!(vec2(5.0, 5.0).range_pct(5.0), 1.0);
    }

    #[test]
    fn map_range() {
        let input = vec2(0.0f32, 1.0);
        let output = vec2(10.0, 20.0);
        assert_eq!(input.map_range(output, 0.5), 15.0);
        assert_eq!(input.map_range(output, 2.0), 30.0);
        assert_eq!(input.map_range_clamped(output, 2.0), 20.0);
        assert_eq!(input.map_range_clamped(output, -1.0), 10.0);
        assert_eq!(lerp(2.0, 4.0, 0.25), 2.5);
    }
}
