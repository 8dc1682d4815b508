use crate::FloatScalar;
use crate::special::erf;
use super::tail::PowerLawTail;
use super::{
    check_location_scale, check_probability, core_quantile, ContinuousDistribution, StatsError,
    SQRT_FRAC_PI_2,
};

/// Crystal Ball distribution: Gaussian core with a power-law left tail.
///
/// With x̂ = (x − μ)/σ the density is
///
/// ```text
/// f(x) = N/σ · exp(−x̂²/2)        for x̂ > −α
/// f(x) = N/σ · A·(B − x̂)^(−n)    for x̂ ≤ −α
/// ```
///
/// where `A = (n/α)^n·exp(−α²/2)` and `B = n/α − α` make the density and
/// its slope continuous at x̂ = −α, and N normalizes the total to one.
///
/// # Example
///
/// ```
/// use hepdist::stats::{CrystalBall, ContinuousDistribution};
///
/// let cb = CrystalBall::new(0.0_f64, 1.0, 1.0, 1.6).unwrap();
///
/// // The core is an unnormalized unit Gaussian
/// assert!((cb.pdf(0.5) / cb.pdf(0.0) - (-0.125_f64).exp()).abs() < 1e-15);
///
/// // Heavy left tail: far more mass below −5 than a Gaussian would have
/// assert!(cb.cdf(-5.0) > 0.1);
///
/// let x = cb.quantile(0.9).unwrap();
/// assert!((cb.cdf(x) - 0.9).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CrystalBall<T> {
    mu: T,
    sigma: T,
    tail: PowerLawTail<T>,
    norm: T,
    /// erf(α/√2)
    erf_alpha: T,
    /// CDF at the junction, N·C
    cdf_alpha: T,
}

impl<T: FloatScalar> CrystalBall<T> {
    /// Create a Crystal Ball distribution.
    ///
    /// Requires finite `mu`, `sigma > 0`, `alpha > 0` and `n > 1`
    /// (all finite); otherwise returns [`StatsError::InvalidParameter`]
    /// naming the first offending parameter.
    pub fn new(mu: T, sigma: T, alpha: T, n: T) -> Result<Self, StatsError> {
        check_location_scale(mu, sigma)?;
        let tail = PowerLawTail::new(alpha, n, "alpha", "n")?;

        let one = T::one();
        let erf_alpha = erf(alpha / T::from(core::f64::consts::SQRT_2).unwrap());
        let core = T::from(SQRT_FRAC_PI_2).unwrap() * (one + erf_alpha);
        let norm = one / (tail.c() + core);

        log::trace!(
            "CrystalBall(mu={mu:?}, sigma={sigma:?}, alpha={alpha:?}, n={n:?}): \
             N={norm:?} A={:?} B={:?} C={:?}",
            tail.a(),
            tail.b(),
            tail.c()
        );

        Ok(Self {
            mu,
            sigma,
            tail,
            norm,
            erf_alpha,
            cdf_alpha: norm * tail.c(),
        })
    }

    /// Location μ (peak of the core).
    pub fn mu(&self) -> T {
        self.mu
    }

    /// Scale σ of the core.
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Junction distance α, in units of σ below the mean.
    pub fn alpha(&self) -> T {
        self.tail.alpha()
    }

    /// Tail exponent n.
    pub fn n(&self) -> T {
        self.tail.n()
    }

    /// Normalization constant N.
    pub fn norm(&self) -> T {
        self.norm
    }

    /// Tail amplitude A = (n/α)^n·exp(−α²/2).
    pub fn a(&self) -> T {
        self.tail.a()
    }

    /// Tail offset B = n/α − α.
    pub fn b(&self) -> T {
        self.tail.b()
    }

    fn standardize(&self, x: T) -> T {
        (x - self.mu) / self.sigma
    }

    /// Inverse CDF without the domain check; `p` must lie in `[0, 1]`.
    pub(crate) fn invert(&self, p: T) -> T {
        if p <= T::zero() {
            return T::neg_infinity();
        }
        if p >= T::one() {
            return T::infinity();
        }
        let z = if p <= self.cdf_alpha {
            -self.tail.outward_quantile(p / self.norm)
        } else {
            core_quantile((p - self.cdf_alpha) / self.norm, self.erf_alpha)
        };
        self.mu + self.sigma * z
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for CrystalBall<T> {
    fn pdf(&self, x: T) -> T {
        let two = T::one() + T::one();
        let z = self.standardize(x);
        let shape = if z > -self.tail.alpha() {
            (-(z * z) / two).exp()
        } else {
            self.tail.density(-z)
        };
        self.norm * shape / self.sigma
    }

    fn ln_pdf(&self, x: T) -> T {
        let two = T::one() + T::one();
        let z = self.standardize(x);
        let ln_shape = if z > -self.tail.alpha() {
            -(z * z) / two
        } else {
            self.tail.ln_density(-z)
        };
        self.norm.ln() + ln_shape - self.sigma.ln()
    }

    fn cdf(&self, x: T) -> T {
        let z = self.standardize(x);
        if z <= -self.tail.alpha() {
            return self.norm * self.tail.mass_beyond(-z);
        }
        let sqrt2 = T::from(core::f64::consts::SQRT_2).unwrap();
        let core = T::from(SQRT_FRAC_PI_2).unwrap() * (erf(z / sqrt2) + self.erf_alpha);
        let p = self.cdf_alpha + self.norm * core;
        if p > T::one() { T::one() } else { p }
    }

    fn quantile(&self, p: T) -> Result<T, StatsError> {
        check_probability(p)?;
        Ok(self.invert(p))
    }

    fn minimum(&self) -> T {
        T::neg_infinity()
    }

    fn maximum(&self) -> T {
        T::infinity()
    }

    /// Finite for `n > 2`; the tail makes it `−∞` otherwise.
    fn mean(&self) -> T {
        let tail = &self.tail;
        if tail.n() <= T::from(2.0).unwrap() {
            return T::neg_infinity();
        }
        // ∫_{−α}^∞ t·e^{−t²/2} dt = e^{−α²/2}
        let m1 = self.norm * (tail.junction_density() - tail.first_moment());
        self.mu + self.sigma * m1
    }

    /// Finite for `n > 3`, `+∞` otherwise.
    fn variance(&self) -> T {
        let tail = &self.tail;
        if tail.n() <= T::from(3.0).unwrap() {
            return T::infinity();
        }
        let one = T::one();
        let e = tail.junction_density();
        let m1 = self.norm * (e - tail.first_moment());
        // ∫_{−α}^∞ t²·e^{−t²/2} dt = √(π/2)·(1 + erf(α/√2)) − α·e^{−α²/2}
        let core = T::from(SQRT_FRAC_PI_2).unwrap() * (one + self.erf_alpha) - tail.alpha() * e;
        let m2 = self.norm * (core + tail.second_moment());
        self.sigma * self.sigma * (m2 - m1 * m1)
    }
}
