//! # hepdist
//!
//! Crystal Ball line-shape distributions for fitting detector-smeared peaks,
//! no-std compatible. Generic over `f32` and `f64`; no heap allocation on
//! any evaluation path.
//!
//! ## Quick start
//!
//! ```
//! use hepdist::{ContinuousDistribution, CrystalBall, DoubleCrystalBall};
//!
//! // Peak at 91.2 with σ = 2.5 and a radiative tail on the low side
//! let cb = CrystalBall::new(91.2_f64, 2.5, 1.4, 3.0).unwrap();
//! let p = cb.cdf(88.0);
//! let x = cb.quantile(p).unwrap();
//! assert!((x - 88.0).abs() < 1e-9);
//!
//! // Independent tails on both sides
//! let dcb = DoubleCrystalBall::new(0.0_f64, 1.0, 1.5, 2.0, 2.0, 3.0).unwrap();
//! assert!(dcb.pdf(0.0) > dcb.pdf(3.0));
//! ```
//!
//! ## Modules
//!
//! - [`stats`]: [`CrystalBall`] (left power-law tail) and
//!   [`DoubleCrystalBall`] (independent tails on both sides). Both implement
//!   [`ContinuousDistribution`]: `pdf`, `ln_pdf`, `cdf`, `quantile`, support
//!   bounds, `mean` and `variance`, all in closed form.
//!
//! - [`special`]: the error function family, [`special::erf`],
//!   [`special::erfc`] and the inverse [`special::erfinv`]. `erfc` keeps
//!   relative accuracy deep in the tail.
//!
//! - [`traits`]: [`FloatScalar`], the float bound every generic item uses.
//!
//! ## Cargo features
//!
//! | Feature | Default  | Description |
//! |---------|----------|-------------|
//! | `std`   | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` |
//! | `alloc` | via std  | `stats::sample_n` (with `rand`) |
//! | `rand`  | no       | `rand::distr::Distribution` impls, sampling by inversion |
//! | `all`   | no       | All features: `std` + `rand` |
//!
//! Without `std`, float math falls back to the pure-Rust `libm` through
//! `num-traits`; that backend is always compiled in.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod special;
pub mod stats;
pub mod traits;

pub use stats::{ContinuousDistribution, CrystalBall, DoubleCrystalBall, StatsError};
pub use traits::FloatScalar;
