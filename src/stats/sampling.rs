//! Random sampling by CDF inversion (`rand` feature).
//!
//! Each draw pushes a uniform variate through the closed-form quantile,
//! so sampling costs about one `quantile` call.

use rand::distr::{Distribution, StandardUniform};
use rand::Rng;

use crate::FloatScalar;
use super::{CrystalBall, DoubleCrystalBall};

/// Push uniform draws through `invert` until the result is finite.
///
/// `StandardUniform` yields [0, 1): an exact zero maps to −∞, and the top
/// few values can round onto +∞ when a tail is heavy.
fn sample_by_inversion<T, R>(rng: &mut R, invert: impl Fn(T) -> T) -> T
where
    T: FloatScalar,
    R: Rng + ?Sized,
    StandardUniform: Distribution<T>,
{
    loop {
        let u: T = rng.random();
        if u > T::zero() {
            let x = invert(u);
            if x.is_finite() {
                return x;
            }
        }
    }
}

impl<T> Distribution<T> for CrystalBall<T>
where
    T: FloatScalar,
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        sample_by_inversion(rng, |u| self.invert(u))
    }
}

impl<T> Distribution<T> for DoubleCrystalBall<T>
where
    T: FloatScalar,
    StandardUniform: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        sample_by_inversion(rng, |u| self.invert(u))
    }
}

/// Draw `n` samples from `dist`.
///
/// # Example
///
/// ```
/// use hepdist::stats::{sample_n, CrystalBall};
/// use rand::SeedableRng;
///
/// let cb = CrystalBall::new(0.0_f64, 1.0, 1.0, 3.0).unwrap();
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let xs = sample_n(&cb, &mut rng, 100);
/// assert_eq!(xs.len(), 100);
/// assert!(xs.iter().all(|x| x.is_finite()));
/// ```
#[cfg(feature = "alloc")]
pub fn sample_n<T, D, R>(dist: &D, rng: &mut R, n: usize) -> alloc::vec::Vec<T>
where
    D: Distribution<T> + ?Sized,
    R: Rng + ?Sized,
{
    (0..n).map(|_| dist.sample(rng)).collect()
}
