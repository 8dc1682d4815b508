//! Crystal Ball line shapes: a Gaussian core with power-law tails.
//!
//! Both distributions implement [`ContinuousDistribution`] and are immutable
//! once built: every derived constant (normalization, tail shape) is
//! computed by the constructor and reused by each query.
//!
//! | Distribution | Parameters | Support |
//! |---|---|---|
//! | [`CrystalBall`] | μ, σ, α, n (left tail) | (−∞, ∞) |
//! | [`DoubleCrystalBall`] | μ, σ, αL, nL, αR, nR | (−∞, ∞) |
//!
//! In standardized units x̂ = (x − μ)/σ the density is Gaussian for
//! −α < x̂ and follows A·(B − x̂)^(−n) beyond the junction, with A and B
//! fixed so that value and slope are continuous there.
//!
//! # Example
//!
//! ```
//! use hepdist::stats::{CrystalBall, ContinuousDistribution};
//!
//! let cb = CrystalBall::new(0.0_f64, 1.0, 1.0, 1.6).unwrap();
//! let x = cb.quantile(0.25).unwrap();
//! assert!((cb.cdf(x) - 0.25).abs() < 1e-12);
//! assert_eq!(cb.minimum(), f64::NEG_INFINITY);
//! ```

mod crystal_ball;
mod double_crystal_ball;
#[cfg(feature = "rand")]
mod sampling;
mod tail;


pub use crystal_ball::CrystalBall;
pub use double_crystal_ball::DoubleCrystalBall;
#[cfg(all(feature = "rand", feature = "alloc"))]
pub use sampling::sample_n;

use crate::FloatScalar;

/// √(π/2), the integral of e^{−t²/2} over a half line.
pub(crate) const SQRT_FRAC_PI_2: f64 = 1.253_314_137_315_500_3;

/// Errors from distribution construction and quantile evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatsError {
    /// A constructor parameter violates its constraint.
    InvalidParameter {
        /// Parameter name as it appears in the constructor signature.
        name: &'static str,
        /// The violated constraint.
        reason: &'static str,
    },
    /// A probability outside `[0, 1]` was passed to `quantile`.
    InvalidProbability(f64),
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidParameter { name, reason } => {
                write!(f, "invalid parameter `{name}`: {reason}")
            }
            StatsError::InvalidProbability(p) => {
                write!(f, "probability {p} outside [0, 1]")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Trait for continuous probability distributions.
pub trait ContinuousDistribution<T> {
    /// Probability density function.
    fn pdf(&self, x: T) -> T;
    /// Natural log of the probability density function.
    fn ln_pdf(&self, x: T) -> T;
    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: T) -> T;
    /// Quantile function (inverse CDF). Returns x such that P(X ≤ x) = p.
    ///
    /// `p = 0` and `p = 1` map to the support bounds; any other `p`
    /// outside `[0, 1]` is an error.
    fn quantile(&self, p: T) -> Result<T, StatsError>;
    /// Lower bound of the support.
    fn minimum(&self) -> T;
    /// Upper bound of the support.
    fn maximum(&self) -> T;
    /// Expected value E\[X\].
    fn mean(&self) -> T;
    /// Variance Var(X).
    fn variance(&self) -> T;
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Build (and log) a parameter rejection.
pub(crate) fn invalid_parameter<T: FloatScalar>(
    name: &'static str,
    value: T,
    reason: &'static str,
) -> StatsError {
    log::debug!("rejected {name} = {value:?}: {reason}");
    StatsError::InvalidParameter { name, reason }
}

/// Validate the location/scale pair shared by every distribution here.
pub(crate) fn check_location_scale<T: FloatScalar>(mu: T, sigma: T) -> Result<(), StatsError> {
    if !mu.is_finite() {
        return Err(invalid_parameter("mu", mu, "must be finite"));
    }
    if !(sigma.is_finite() && sigma > T::zero()) {
        return Err(invalid_parameter("sigma", sigma, "must be positive and finite"));
    }
    Ok(())
}

/// Reject probabilities outside `[0, 1]` (NaN included).
pub(crate) fn check_probability<T: FloatScalar>(p: T) -> Result<(), StatsError> {
    if p >= T::zero() && p <= T::one() {
        Ok(())
    } else {
        Err(StatsError::InvalidProbability(p.to_f64().unwrap_or(f64::NAN)))
    }
}

/// Invert the Gaussian core: the x̂ with
/// `erf(x̂/√2) = p_core / √(π/2) − erf(α_lo/√2)`, where `p_core` is the
/// normalized probability accumulated since the lower junction.
///
/// Rounding can push the erfinv argument a hair outside [−1, 1] for
/// probabilities next to the upper end; it is clamped there.
pub(crate) fn core_quantile<T: FloatScalar>(p_core: T, erf_lower: T) -> T {
    let one = T::one();
    let arg = p_core / T::from(SQRT_FRAC_PI_2).unwrap() - erf_lower;
    let arg = arg.max(-one).min(one);
    T::from(core::f64::consts::SQRT_2).unwrap() * crate::special::erfinv(arg)
}
