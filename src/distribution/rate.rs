//! Per-day rate conversion.

/// Converts a per-day rate into the quantity moved over `delta_time`
/// (in days).
///
/// # Example
/// ```
/// use u_transload::distribution::rate_to_value;
///
/// assert!((rate_to_value(240.0, 0.5) - 120.0).abs() < 1e-6);
/// ```
#[inline]
pub fn rate_to_value(rate_per_day: f32, delta_time: f32) -> f32 {
    rate_per_day * delta_time
}
