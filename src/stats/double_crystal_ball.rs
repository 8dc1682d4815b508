use crate::FloatScalar;
use crate::special::erf;
use super::tail::PowerLawTail;
use super::{
    check_location_scale, check_probability, core_quantile, ContinuousDistribution, StatsError,
    SQRT_FRAC_PI_2,
};

/// Double-sided Crystal Ball: Gaussian core with independent power-law
/// tails on both sides.
///
/// With x̂ = (x − μ)/σ:
///
/// ```text
/// f(x) = N/σ · AL·(BL − x̂)^(−nL)   for x̂ < −αL
/// f(x) = N/σ · exp(−x̂²/2)          for −αL ≤ x̂ < αR
/// f(x) = N/σ · AR·(BR + x̂)^(−nR)   for x̂ ≥ αR
/// ```
///
/// Each tail's `A`, `B` follow the single-sided construction, so the density
/// and its slope are continuous at both junctions.
///
/// # Example
///
/// ```
/// use hepdist::stats::{DoubleCrystalBall, ContinuousDistribution};
///
/// let dcb = DoubleCrystalBall::new(0.0_f64, 1.0, 1.5, 2.0, 2.0, 3.0).unwrap();
///
/// for &x in &[-2.0, 0.5, 3.0] {
///     let back = dcb.quantile(dcb.cdf(x)).unwrap();
///     assert!((back - x).abs() < 1e-9);
/// }
///
/// // Symmetric tails give a symmetric density
/// let sym = DoubleCrystalBall::new(1.0_f64, 0.5, 1.2, 4.0, 1.2, 4.0).unwrap();
/// assert!((sym.cdf(0.0) + sym.cdf(2.0) - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DoubleCrystalBall<T> {
    mu: T,
    sigma: T,
    left: PowerLawTail<T>,
    right: PowerLawTail<T>,
    norm: T,
    /// erf(αL/√2)
    erf_left: T,
    /// erf(αR/√2)
    erf_right: T,
    /// CDF at x̂ = −αL
    cdf_left: T,
    /// CDF at x̂ = αR
    cdf_right: T,
}

impl<T: FloatScalar> DoubleCrystalBall<T> {
    /// Create a double-sided Crystal Ball distribution.
    ///
    /// Requires finite `mu`, `sigma > 0`, and for each side `alpha > 0`,
    /// `n > 1` (all finite). The error names the first offending parameter.
    pub fn new(
        mu: T,
        sigma: T,
        alpha_left: T,
        n_left: T,
        alpha_right: T,
        n_right: T,
    ) -> Result<Self, StatsError> {
        check_location_scale(mu, sigma)?;
        let left = PowerLawTail::new(alpha_left, n_left, "alpha_left", "n_left")?;
        let right = PowerLawTail::new(alpha_right, n_right, "alpha_right", "n_right")?;

        let sqrt2 = T::from(core::f64::consts::SQRT_2).unwrap();
        let sqrt_half_pi = T::from(SQRT_FRAC_PI_2).unwrap();
        let erf_left = erf(alpha_left / sqrt2);
        let erf_right = erf(alpha_right / sqrt2);
        let core = sqrt_half_pi * (erf_right + erf_left);
        let norm = T::one() / (left.c() + right.c() + core);

        log::trace!(
            "DoubleCrystalBall(mu={mu:?}, sigma={sigma:?}): N={norm:?} \
             AL={:?} BL={:?} CL={:?} AR={:?} BR={:?} CR={:?}",
            left.a(),
            left.b(),
            left.c(),
            right.a(),
            right.b(),
            right.c()
        );

        let cdf_left = norm * left.c();
        Ok(Self {
            mu,
            sigma,
            left,
            right,
            norm,
            erf_left,
            erf_right,
            cdf_left,
            cdf_right: cdf_left + norm * core,
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

    /// Left junction distance αL (junction at x̂ = −αL).
    pub fn alpha_left(&self) -> T {
        self.left.alpha()
    }

    /// Left tail exponent nL.
    pub fn n_left(&self) -> T {
        self.left.n()
    }

    /// Right junction distance αR (junction at x̂ = αR).
    pub fn alpha_right(&self) -> T {
        self.right.alpha()
    }

    /// Right tail exponent nR.
    pub fn n_right(&self) -> T {
        self.right.n()
    }

    /// Normalization constant N.
    pub fn norm(&self) -> T {
        self.norm
    }

    /// Left tail constants `(AL, BL)`.
    pub fn left_tail(&self) -> (T, T) {
        (self.left.a(), self.left.b())
    }

    /// Right tail constants `(AR, BR)`.
    pub fn right_tail(&self) -> (T, T) {
        (self.right.a(), self.right.b())
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
        let z = if p <= self.cdf_left {
            -self.left.outward_quantile(p / self.norm)
        } else if p < self.cdf_right {
            core_quantile((p - self.cdf_left) / self.norm, self.erf_left)
        } else {
            let beyond = self.right.c() - (p - self.cdf_right) / self.norm;
            self.right.outward_quantile(beyond)
        };
        self.mu + self.sigma * z
    }
}

impl<T: FloatScalar> ContinuousDistribution<T> for DoubleCrystalBall<T> {
    fn pdf(&self, x: T) -> T {
        let two = T::one() + T::one();
        let z = self.standardize(x);
        let shape = if z < -self.left.alpha() {
            self.left.density(-z)
        } else if z < self.right.alpha() {
            (-(z * z) / two).exp()
        } else {
            self.right.density(z)
        };
        self.norm * shape / self.sigma
    }

    fn ln_pdf(&self, x: T) -> T {
        let two = T::one() + T::one();
        let z = self.standardize(x);
        let ln_shape = if z < -self.left.alpha() {
            self.left.ln_density(-z)
        } else if z < self.right.alpha() {
            -(z * z) / two
        } else {
            self.right.ln_density(z)
        };
        self.norm.ln() + ln_shape - self.sigma.ln()
    }

    fn cdf(&self, x: T) -> T {
        let z = self.standardize(x);
        if z <= -self.left.alpha() {
            return self.norm * self.left.mass_beyond(-z);
        }
        let p = if z < self.right.alpha() {
            let sqrt2 = T::from(core::f64::consts::SQRT_2).unwrap();
            let core = T::from(SQRT_FRAC_PI_2).unwrap() * (erf(z / sqrt2) + self.erf_left);
            self.cdf_left + self.norm * core
        } else {
            self.cdf_right + self.norm * (self.right.c() - self.right.mass_beyond(z))
        };
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

    /// `−∞`/`+∞` when only the left/right tail has `n ≤ 2`, NaN when both do.
    fn mean(&self) -> T {
        let two = T::from(2.0).unwrap();
        match (self.left.n() <= two, self.right.n() <= two) {
            (true, true) => T::nan(),
            (true, false) => T::neg_infinity(),
            (false, true) => T::infinity(),
            (false, false) => self.mu + self.sigma * self.standard_mean(),
        }
    }

    /// `+∞` when either tail has `n ≤ 3` (NaN if the mean is undefined).
    fn variance(&self) -> T {
        let three = T::from(3.0).unwrap();
        let m1 = self.mean();
        if m1.is_nan() {
            return m1;
        }
        if self.left.n() <= three || self.right.n() <= three {
            return T::infinity();
        }
        let m1 = self.standard_mean();
        let (el, er) = (self.left.junction_density(), self.right.junction_density());
        // ∫_{−αL}^{αR} t²·e^{−t²/2} dt
        let core = T::from(SQRT_FRAC_PI_2).unwrap() * (self.erf_right + self.erf_left)
            - self.left.alpha() * el
            - self.right.alpha() * er;
        let m2 = self.norm * (core + self.left.second_moment() + self.right.second_moment());
        self.sigma * self.sigma * (m2 - m1 * m1)
    }
}

impl<T: FloatScalar> DoubleCrystalBall<T> {
    /// E\[x̂\]; both tails must have `n > 2`.
    fn standard_mean(&self) -> T {
        // ∫_{−αL}^{αR} t·e^{−t²/2} dt = e^{−αL²/2} − e^{−αR²/2}
        let core = self.left.junction_density() - self.right.junction_density();
        self.norm * (core - self.left.first_moment() + self.right.first_moment())
    }
}
