//! Special mathematical functions.
//!
//! The error-function family needed to evaluate and invert a Gaussian core.
//! All functions are generic over [`FloatScalar`](crate::FloatScalar)
//! (f32/f64), no-std compatible, and total: out-of-domain input yields NaN
//! rather than an error.
//!
//! # Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`erf`] | Error function |
//! | [`erfc`] | Complementary error function 1−erf(x) |
//! | [`erfinv`] | Inverse error function on [−1, 1] |
//!
//! # Example
//!
//! ```
//! use hepdist::special::{erf, erfc, erfinv};
//!
//! // erf(0) = 0
//! assert!(erf(0.0_f64).abs() < 1e-16);
//!
//! // erf + erfc = 1
//! assert!((erf(0.7_f64) + erfc(0.7) - 1.0).abs() < 1e-15);
//!
//! // erfinv undoes erf
//! assert!((erfinv(erf(1.3_f64)) - 1.3).abs() < 1e-13);
//! ```

mod erf_fn;


pub use erf_fn::{erf, erfc, erfinv};
