//! Rate coercion
//!
//! Rates are percentages in `[0, 100]`. Every rate that enters the crate goes
//! through [`clamp_rate`] (numbers) or [`coerce_rate`] (text) so downstream
//! code never sees an out-of-range or non-finite value.

/// Lowest representable rate
pub const MIN_RATE: f64 = 0.0;

/// Highest representable rate
pub const MAX_RATE: f64 = 100.0;

/// Clamp a numeric rate into `[0, 100]`.
///
/// NaN collapses to `0`; infinities saturate to the nearest bound.
pub fn clamp_rate(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_RATE;
    }
    value.clamp(MIN_RATE, MAX_RATE)
}

/// Coerce free-form text into a clamped rate.
///
/// Blank input reads as `0`. Text that is not a number also reads as `0`.
pub fn coerce_rate(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return MIN_RATE;
    }
    clamp_rate(trimmed.parse::<f64>().unwrap_or(f64::NAN))
}

/// Round to one decimal place, half away from zero.
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Normalize an animation speed (rate units per second).
///
/// Returns `None` for zero, negative or non-finite speeds, which all mean
/// "jump to the target without animating".
pub fn normalize_speed(speed: f64) -> Option<f64> {
    if speed.is_finite() && speed > 0.0 {
        Some(speed)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_rate(-5.0), 0.0);
        assert_eq!(clamp_rate(150.0), 100.0);
        assert_eq!(clamp_rate(42.5), 42.5);
        assert_eq!(clamp_rate(f64::INFINITY), 100.0);
        assert_eq!(clamp_rate(f64::NEG_INFINITY), 0.0);
        assert_eq!(clamp_rate(f64::NAN), 0.0);
    }

    #[test]
    fn coerce_text() {
        assert_eq!(coerce_rate("60"), 60.0);
        assert_eq!(coerce_rate(" 12.5 "), 12.5);
        assert_eq!(coerce_rate("250"), 100.0);
        assert_eq!(coerce_rate(""), 0.0);
        assert_eq!(coerce_rate("abc"), 0.0);
    }

    #[test]
    fn rounding() {
        assert_eq!(round_tenth(29.96), 30.0);
        assert_eq!(round_tenth(12.34), 12.3);
        assert_eq!(round_tenth(12.36), 12.4);
    }

    #[test]
    fn speed_normalization() {
        assert_eq!(normalize_speed(100.0), Some(100.0));
        assert_eq!(normalize_speed(0.0), None);
        assert_eq!(normalize_speed(-1.0), None);
        assert_eq!(normalize_speed(f64::NAN), None);
        assert_eq!(normalize_speed(f64::INFINITY), None);
    }
}
