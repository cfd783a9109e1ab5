//! Random number generation.
//!
//! Everything that needs randomness takes an explicit [`Rng`]. For convenience, every thread also
//! has a lazily created default generator, accessible through [`with_thread_rng`] and [`rand`].
//! If the `ORRERY_SEED` environment variable is set, these default generators are seeded from it.

use std::cell::RefCell;

use crate::{config::Config, Real};

/// A seedable pseudo-random number generator.
///
/// Two generators created with the same seed produce the same sequence of values.
#[derive(Debug, Clone)]
pub struct Rng {
    inner: fastrand::Rng,
}

impl Rng {
    /// Creates a generator seeded from entropy.
    pub fn new() -> Self {
        Self {
            inner: fastrand::Rng::new(),
        }
    }

    /// Creates a deterministic generator from a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            inner: fastrand::Rng::with_seed(seed),
        }
    }

    /// Creates a generator as described by a [`Config`].
    pub fn from_config(config: &Config) -> Self {
        match config.seed() {
            Some(seed) => {
                log::debug!("seeding generator with {seed}");
                Self::with_seed(seed)
            }
            None => Self::new(),
        }
    }

    /// Creates a new generator seeded from this one.
    pub fn fork(&mut self) -> Self {
        Self {
            inner: self.inner.fork(),
        }
    }

    /// Draws a value from `min` to `max`.
    ///
    /// For integers, both bounds are inclusive. For floats, the range is half-open (the upper bound
    /// is never returned unless `min == max`), and infinite or NaN bounds return `min`. Bounds may
    /// be given in either order.
    pub fn range<T: SampleUniform>(&mut self, min: T, max: T) -> T {
        T::sample(&mut self.inner, min, max)
    }

    /// Draws a value from the standard normal distribution (mean 0, standard deviation 1).
    pub fn standard_normal<T: Real>(&mut self) -> T {
        // Box-Muller transform. `u1` must be non-zero for the logarithm.
        let u1 = 1.0 - self.inner.f64();
        let u2 = self.inner.f64();
        let r = (-2.0 * u1.ln()).sqrt();
        T::from_f64(r * (std::f64::consts::TAU * u2).cos())
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

/// Scalar types that [`Rng::range`] can draw.
pub trait SampleUniform: Sized {
    #[doc(hidden)]
    fn sample(rng: &mut fastrand::Rng, min: Self, max: Self) -> Self;
}

macro_rules! sample_int {
    ($($int:ident),+) => {
        $(
            impl SampleUniform for $int {
                fn sample(rng: &mut fastrand::Rng, min: Self, max: Self) -> Self {
                    if min <= max {
                        rng.$int(min..=max)
                    } else {
                        rng.$int(max..=min)
                    }
                }
            }
        )+
    };
}
sample_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

macro_rules! sample_float {
    ($($float:ident),+) => {
        $(
            impl SampleUniform for $float {
                fn sample(rng: &mut fastrand::Rng, min: Self, max: Self) -> Self {
                    let (lo, hi) = if max < min { (max, min) } else { (min, max) };
                    if !(lo < hi && lo.is_finite() && hi.is_finite()) {
                        return min;
                    }
                    loop {
                        let u = rng.$float();
                        // Interpolating avoids computing `hi - lo`, which can overflow.
                        let value = lo * (1.0 - u) + hi * u;
                        // Rounding can land exactly on `hi`; draw again in that case.
                        if value < hi {
                            return value.max(lo);
                        }
                    }
                }
            }
        )+
    };
}
sample_float!(f32, f64);

thread_local! {
    static THREAD_RNG: RefCell<Rng> = RefCell::new(Rng::from_config(crate::config::get()));
}

/// Runs `f` with this thread's default generator.
///
/// # Panics
///
/// Panics if called again from within `f`.
pub fn with_thread_rng<R>(f: impl FnOnce(&mut Rng) -> R) -> R {
    THREAD_RNG.with(|rng| f(&mut rng.borrow_mut()))
}

/// Draws a value from `min` to `max` using this thread's default generator.
///
/// See [`Rng::range`] for how the bounds are treated.
pub fn rand<T: SampleUniform>(min: T, max: T) -> T {
    with_thread_rng(|rng| rng.range(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_generators_agree() {
        let mut a = Rng::with_seed(123);
        let mut b = Rng::with_seed(123);
        for _ in 0..100 {
            assert_eq!(a.range(0u64, 1000), b.range(0u64, 1000));
        }
    }

    #[test]
    fn integer_range_is_inclusive() {
        let mut rng = Rng::with_seed(7);
        let (mut saw_min, mut saw_max) = (false, false);
        for _ in 0..1000 {
            let v = rng.range(-2i32, 2);
            assert!((-2..=2).contains(&v));
            saw_min |= v == -2;
            saw_max |= v == 2;
        }
        assert!(saw_min && saw_max);

        assert_eq!(rng.range(5i32, 5), 5);
        let v = rng.range(3i32, 1);
        assert!((1..=3).contains(&v));
    }

    #[test]
    fn float_range_is_half_open() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..1000 {
            let v = rng.range(-1.0f32, 1.0);
            assert!((-1.0..1.0).contains(&v));
        }
        assert_eq!(rng.range(2.0f64, 2.0), 2.0);

        for _ in 0..100 {
            let v = rng.range(1.0f64, -1.0);
            assert!((-1.0..1.0).contains(&v));
        }
    }

    #[test]
    fn float_range_spanning_whole_type() {
        let mut rng = Rng::with_seed(1);
        for _ in 0..1000 {
            let v = rng.range(f32::MIN, f32::MAX);
            assert!(v.is_finite() && v < f32::MAX, "v={v}");
            let v = rng.range(f64::MIN, f64::MAX);
            assert!(v.is_finite() && v < f64::MAX, "v={v}");
        }
        assert_eq!(rng.range(f32::NEG_INFINITY, 0.0), f32::NEG_INFINITY);
        assert!(rng.range(f32::NAN, 1.0).is_nan());
    }

    #[test]
    fn standard_normal_moments() {
        let mut rng = Rng::with_seed(99);
        let n = 10_000;
        let samples: Vec<f64> = (0..n).map(|_| rng.standard_normal()).collect();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let var = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n as f64;
        assert!(mean.abs() < 0.05, "mean={mean}");
        assert!((var - 1.0).abs() < 0.1, "var={var}");
        assert!(samples.iter().all(|x| x.is_finite()));
    }

    #[test]
    fn thread_rng() {
        let v = rand(10u8, 20);
        assert!((10..=20).contains(&v));
        let f = with_thread_rng(|rng| rng.range(0.0f32, 1.0));
        assert!((0.0..1.0).contains(&f));
    }
}
