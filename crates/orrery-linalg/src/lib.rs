//! A small, dimension-generic linear algebra kernel for games and simulations.
//!
//! # Motivation
//!
//! Game and simulation code mostly needs a handful of small, fixed-size types: 2, 3 and 4
//! dimensional vectors, the matrices that transform them, quaternions for orientation, and angles
//! that don't get radians and degrees mixed up. This library provides exactly that, with an API that
//! stays out of the way.
//!
//! # Goals & Non-Goals
//!
//! - Don't support dynamically-sized vectors and matrices. Dimensions are const generics, so
//!   mismatched shapes are rejected at compile time.
//! - Support a single, row-major, unpadded data layout for matrices. Vectors are *row vectors*
//!   that multiply matrices from the left, and transforms keep their translation in the last row.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - Encode invariants in types: a [`UnitVec`] is always normalized, and an [`Angle`] always
//!   knows whether it holds radians or degrees.
//! - Report recoverable failures (normalizing a zero vector, out-of-range access, parse errors)
//!   through [`Error`] instead of producing NaNs.
//!
//! # Examples
//!
//! ```
//! use approx::assert_relative_eq;
//! use orrery_linalg::*;
//!
//! let dir = vec3(3.0f32, 0.0, 4.0).unit()?;
//! assert_relative_eq!(dir.length(), 1.0);
//!
//! let quarter = Quat::from_axis_angle(UnitVec3::up(), Degrees::new(90.0f32));
//! assert_relative_eq!(Vec3f::X.rotated(quarter), Vec3f::Y, epsilon = 1e-6);
//! assert_relative_eq!(
//!     Mat4::rotation(quarter).transform_vector(Vec3f::X),
//!     Vec3f::Y,
//!     epsilon = 1e-6
//! );
//!
//! assert_eq!(orrery_linalg::scalar::clamp(5, 0, 3), 3);
//! # Ok::<_, Error>(())
//! ```
//!
//! # Environment Variables
//!
//! - `ORRERY_SEED`: a `u64` seed for the per-thread random number generator used by
//!   [`rng::rand`] and [`rng::with_thread_rng`]. Each thread that uses the generator gets a
//!   deterministic sequence when this is set. Invalid values are logged and ignored.

pub mod angle;
pub mod config;
mod consts;
pub mod error;
mod matrix;
mod quat;
pub mod rng;
pub mod scalar;
mod traits;
mod unit;
mod vector;

pub use angle::{random_unit_vec2, Angle, AngleUnit, Deg, Degrees, Rad, Radians};
pub use consts::*;
pub use error::Error;
pub use matrix::*;
pub use quat::Quat;
pub use rng::{Rng, SampleUniform};
pub use traits::*;
pub use unit::{UnitVec, UnitVec2, UnitVec3};
pub use vector::*;
