//! Power-law tail attached to a unit Gaussian core.
//!
//! Works in the outward coordinate `s` (distance from the mean in σ units,
//! measured away from the core): `s = −x̂` for a left tail, `s = x̂` for a
//! right tail. The tail is defined for `s ≥ α`.

use crate::FloatScalar;
use super::{invalid_parameter, StatsError};

/// Shape constants of one tail, unnormalized (the caller multiplies by N).
///
/// * `A = (n/α)^n · e^{−α²/2}`, `B = n/α − α`: the unique pair making
///   `A·(B + s)^{−n}` meet `e^{−s²/2}` with equal value and slope at `s = α`.
/// * `C = n/(α(n−1)) · e^{−α²/2}`: mass of the tail beyond the junction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PowerLawTail<T> {
    alpha: T,
    n: T,
    a: T,
    b: T,
    c: T,
    /// e^{−α²/2}, the core density at the junction.
    e: T,
    /// n/α = B + α
    u0: T,
}

impl<T: FloatScalar> PowerLawTail<T> {
    /// Validate `(alpha, n)` and derive the tail constants.
    ///
    /// `alpha_name` and `n_name` identify the parameters in the error.
    pub(crate) fn new(
        alpha: T,
        n: T,
        alpha_name: &'static str,
        n_name: &'static str,
    ) -> Result<Self, StatsError> {
        let one = T::one();
        if !(alpha.is_finite() && alpha > T::zero()) {
            return Err(invalid_parameter(alpha_name, alpha, "must be positive and finite"));
        }
        if !(n.is_finite() && n > one) {
            return Err(invalid_parameter(n_name, n, "must be finite and greater than 1"));
        }

        let half = T::from(0.5).unwrap();
        let e = (-half * alpha * alpha).exp();
        let u0 = n / alpha;
        Ok(Self {
            alpha,
            n,
            a: u0.powf(n) * e,
            b: u0 - alpha,
            c: u0 / (n - one) * e,
            e,
            u0,
        })
    }

    pub(crate) fn alpha(&self) -> T {
        self.alpha
    }

    pub(crate) fn n(&self) -> T {
        self.n
    }

    pub(crate) fn a(&self) -> T {
        self.a
    }

    pub(crate) fn b(&self) -> T {
        self.b
    }

    pub(crate) fn c(&self) -> T {
        self.c
    }

    /// e^{−α²/2}
    pub(crate) fn junction_density(&self) -> T {
        self.e
    }

    /// `A·(B + s)^{−n}`, evaluated as `e^{−α²/2}·(u₀/(B + s))^n` so that
    /// `(n/α)^n` never has to be formed on its own.
    pub(crate) fn density(&self, s: T) -> T {
        self.e * self.ratio(s).powf(self.n)
    }

    pub(crate) fn ln_density(&self, s: T) -> T {
        let half = T::from(0.5).unwrap();
        -half * self.alpha * self.alpha + self.n * self.ratio(s).ln()
    }

    /// `∫ₛ^∞ A·(B + t)^{−n} dt = A/(n−1)·(B + s)^{1−n}`.
    pub(crate) fn mass_beyond(&self, s: T) -> T {
        self.c * self.ratio(s).powf(self.n - T::one())
    }

    /// Inverse of [`mass_beyond`](Self::mass_beyond). Non-positive mass
    /// maps to `+∞`.
    pub(crate) fn outward_quantile(&self, mass: T) -> T {
        if mass <= T::zero() {
            return T::infinity();
        }
        let one = T::one();
        self.u0 * (mass / self.c).powf(one / (one - self.n)) - self.b
    }

    /// `∫_α^∞ s·A·(B + s)^{−n} ds`; infinite for `n ≤ 2`.
    pub(crate) fn first_moment(&self) -> T {
        let one = T::one();
        let two = one + one;
        if self.n <= two {
            return T::infinity();
        }
        let u0 = self.u0;
        self.e * (u0 * u0 / (self.n - two) - self.b * u0 / (self.n - one))
    }

    /// `∫_α^∞ s²·A·(B + s)^{−n} ds`; infinite for `n ≤ 3`.
    pub(crate) fn second_moment(&self) -> T {
        let one = T::one();
        let two = one + one;
        let three = two + one;
        if self.n <= three {
            return T::infinity();
        }
        let (u0, b) = (self.u0, self.b);
        self.e
            * (u0 * u0 * u0 / (self.n - three) - two * b * u0 * u0 / (self.n - two)
                + b * b * u0 / (self.n - one))
    }

    /// u₀/(B + s) ∈ (0, 1] on the tail.
    fn ratio(&self, s: T) -> T {
        self.u0 / (self.b + s)
    }
}
