//! Numeric tolerances shared by the whole crate.
//!
//! The same values are available generically as [`Real::SMALL_NUMBER`] and
//! [`Real::KINDA_SMALL_NUMBER`].
//!
//! [`Real::SMALL_NUMBER`]: crate::Real::SMALL_NUMBER
//! [`Real::KINDA_SMALL_NUMBER`]: crate::Real::KINDA_SMALL_NUMBER

/// Squared lengths below this value can not be normalized.
pub const SMALL_NUMBER: f32 = 1e-8;

/// Default tolerance for "nearly equal" and "nearly zero" checks.
pub const KINDA_SMALL_NUMBER: f32 = 1e-4;
