use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for signed numeric types that support basic arithmetic and ordering.
///
/// Unsigned integers are deliberately excluded, since vectors and matrices over them can't be
/// negated.
pub trait Number:
    Zero
    + One
    + ops::Neg<Output = Self>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + PartialOrd
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Neg<Output = Self>
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + PartialOrd
        + Copy
{
}

/// Types that support the trigonometric functions.
pub trait Trig: Sized {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
    /// Computes the tangent of the angle `self` (in radians).
    fn tan(self) -> Self;
    /// Computes sine and cosine at once.
    fn sin_cos(self) -> (Self, Self);
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Types that support a `min` and `max` operation.
///
/// [`f32`] and [`f64`] implement this trait in terms of [`f32::min`] and [`f32::max`]
/// ([`f64::min`] and [`f64::max`] respectively). Built-in integer types use [`Ord`].
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Clamps `self` to the range `[min, max]`.
    ///
    /// The upper bound is applied first, so if `min > max` the result is `min`.
    fn clamp(self, min: Self, max: Self) -> Self {
        self.min(max).max(min)
    }
}

/// Floating-point scalars.
///
/// Operations that need a square root, trigonometry or a tolerance (normalization, angles,
/// quaternions) are restricted to these types.
pub trait Real: Number + Sqrt + Trig + MinMax + fmt::Debug + fmt::Display {
    /// Archimedes' constant (π).
    const PI: Self;
    /// Tolerance below which a squared length counts as zero.
    ///
    /// See [`SMALL_NUMBER`][crate::SMALL_NUMBER].
    const SMALL_NUMBER: Self;
    /// Tolerance for "nearly equal" comparisons.
    ///
    /// See [`KINDA_SMALL_NUMBER`][crate::KINDA_SMALL_NUMBER].
    const KINDA_SMALL_NUMBER: Self;

    fn abs(self) -> Self;

    /// Returns `true` if this is neither infinite nor NaN.
    fn is_finite(self) -> bool;

    /// Converts an [`f64`] to this type, rounding if necessary.
    fn from_f64(value: f64) -> Self;
}

/// Scalars whose length is measured in some [`Real`] type.
///
/// The length of an integer vector is an [`f32`], the length of an [`f64`] vector is an [`f64`].
pub trait AsReal: Copy {
    type Real: Real;

    fn as_real(self) -> Self::Real;
}

/// Lossy numeric conversion with the semantics of an `as` cast.
pub trait Cast<U> {
    fn cast(self) -> U;
}

macro_rules! impl_identities {
    ($zero:literal, $one:literal => $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
impl_identities!(0, 1 => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_identities!(0.0, 1.0 => f32, f64);

macro_rules! ord_min_max {
    ($($types:ty),+) => {
        $(
            impl MinMax for $types {
                fn min(self, other: Self) -> Self {
                    Ord::min(self, other)
                }

                fn max(self, other: Self) -> Self {
                    Ord::max(self, other)
                }
            }
        )+
    };
}
ord_min_max!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! integer_as_real {
    ($($types:ty),+) => {
        $(
            impl AsReal for $types {
                type Real = f32;

                #[inline]
                fn as_real(self) -> f32 {
                    self as f32
                }
            }
        )+
    };
}
integer_as_real!(i8, i16, i32, i64, i128, isize);

macro_rules! float_impls {
    ($($float:ident),+) => {
        $(
            impl MinMax for $float {
                fn min(self, other: Self) -> Self {
                    self.min(other)
                }

                fn max(self, other: Self) -> Self {
                    self.max(other)
                }
            }

            impl Sqrt for $float {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl Trig for $float {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }

                fn tan(self) -> Self {
                    self.tan()
                }

                fn sin_cos(self) -> (Self, Self) {
                    self.sin_cos()
                }

                fn asin(self) -> Self {
                    self.asin()
                }

                fn acos(self) -> Self {
                    self.acos()
                }

                fn atan2(self, other: Self) -> Self {
                    self.atan2(other)
                }
            }

            impl Real for $float {
                const PI: Self = std::$float::consts::PI;
                const SMALL_NUMBER: Self = 1e-8;
                const KINDA_SMALL_NUMBER: Self = 1e-4;

                fn abs(self) -> Self {
                    self.abs()
                }

                fn is_finite(self) -> bool {
                    self.is_finite()
                }

                fn from_f64(value: f64) -> Self {
                    value as $float
                }
            }

            impl AsReal for $float {
                type Real = $float;

                #[inline]
                fn as_real(self) -> $float {
                    self
                }
            }
        )+
    };
}
float_impls!(f32, f64);

macro_rules! cast_impls {
    ($($types:ty),+) => {
        cast_impls!(@each [$($types),+] [$($types),+]);
    };
    (@each [$($from:ty),+] $to:tt) => {
        $( cast_impls!(@from $from => $to); )+
    };
    (@from $from:ty => [$($to:ty),+]) => {
        $(
            impl Cast<$to> for $from {
                #[inline]
                fn cast(self) -> $to {
                    self as $to
                }
            }
        )+
    };
}
cast_impls!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_applies_upper_bound_first() {
        assert_eq!(MinMax::clamp(5i32, 0, 3), 3);
        assert_eq!(MinMax::clamp(-1i32, 0, 3), 0);
        // Inverted bounds resolve to the lower one.
        assert_eq!(MinMax::clamp(2i32, 3, 0), 3);
        assert_eq!(MinMax::clamp(2.5f32, 0.0, 1.0), 1.0);
    }

    #[test]
    fn as_real() {
        assert_eq!(7i32.as_real(), 7.0f32);
        assert_eq!((-2i64).as_real(), -2.0f32);
        assert_eq!(0.25f64.as_real(), 0.25f64);
    }

    #[test]
    fn cast() {
        let x: f32 = 3i32.cast();
        assert_eq!(x, 3.0);
        let y: i32 = 2.9f64.cast();
        assert_eq!(y, 2);
        let z: u8 = 300i32.cast();
        assert_eq!(z, 44);
    }
}
