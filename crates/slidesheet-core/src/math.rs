/// Fast mathematical operations using SIMD-accelerated `glam` types.
///
/// Gesture translations and container sizes travel through the sheet as
/// [`Vec2`]. Only the 2D subset is re-exported since the sheet never leaves
/// the plane.
///
/// ```
/// use slidesheet_core::math::Vec2;
///
/// let translation = Vec2::new(0.0, -99.0);
/// assert_eq!(translation.y, -99.0);
/// ```
pub mod fast {
    pub use glam::{Vec2, vec2};
}

pub use fast::*;

/// Linear interpolation between `a` and `b`.
///
/// Exact at both endpoints: `t == 0.0` yields `a` and `t == 1.0` yields `b`.
/// `t` is not clamped; callers that need a bounded result clamp first.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Inverse of [`lerp`]: where `value` falls between `a` and `b`.
///
/// Returns 0.0 for a degenerate range.
#[inline]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    let span = b - a;
    if span.abs() <= f32::EPSILON {
        0.0
    } else {
        (value - a) / span
    }
}
