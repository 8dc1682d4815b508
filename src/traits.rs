use core::fmt::Debug;
use num_traits::Float;

/// Trait for the floating-point types every distribution is generic over.
///
/// Blanket-implemented for all types satisfying the bounds, which in
/// practice means `f32` and `f64`.
pub trait FloatScalar: Float + Copy + Debug {}

impl<T: Float + Copy + Debug> FloatScalar for T {}
