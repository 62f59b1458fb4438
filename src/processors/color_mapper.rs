//! Continuous green-to-red gradient over `[0, 10]`.
//!
//! Marker fills and legend swatches both come from [`color_for`], so the
//! legend can never drift from what is drawn on the map.

use crate::models::Rgb;
use crate::utils::constants::{
    GRADIENT_HIGH, GRADIENT_LOW, GRADIENT_MAX_VALUE, MISSING_VALUE_COLOR,
};

/// Map a measurement to its gradient color.
///
/// Values at or below 0 are pure green, at or above 10 pure red, and each
/// channel is interpolated linearly in between, rounding half up. NaN has no
/// place on the gradient and maps to [`MISSING_VALUE_COLOR`].
pub fn color_for(value: f64) -> Rgb {
    if value.is_nan() {
        return Rgb::from_array(MISSING_VALUE_COLOR);
    }

    let ratio = (value / GRADIENT_MAX_VALUE).clamp(0.0, 1.0);

    Rgb::new(
        interpolate(GRADIENT_LOW[0], GRADIENT_HIGH[0], ratio),
        interpolate(GRADIENT_LOW[1], GRADIENT_HIGH[1], ratio),
        interpolate(GRADIENT_LOW[2], GRADIENT_HIGH[2], ratio),
    )
}

/// Color for a parsed record value; a missing value gets the neutral swatch.
pub fn color_for_record_value(value: Option<f64>) -> Rgb {
    value.map_or(Rgb::from_array(MISSING_VALUE_COLOR), color_for)
}

fn interpolate(from: u8, to: u8, ratio: f64) -> u8 {
    let from = f64::from(from);
    let to = f64::from(to);
    // ratio is within [0, 1], so the result stays within u8 range
    (from + ratio * (to - from)).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const GREEN: Rgb = Rgb::new(0, 255, 0);
    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn test_saturates_below_zero() {
        for v in [0.0, -0.001, -1.0, -1e12, f64::NEG_INFINITY] {
            assert_eq!(color_for(v), GREEN, "value {}", v);
        }
    }

    #[test]
    fn test_saturates_above_ten() {
        for v in [10.0, 10.001, 12.0, 1e12, f64::INFINITY] {
            assert_eq!(color_for(v), RED, "value {}", v);
        }
    }

    #[test]
    fn test_midpoint_rounds_half_up() {
        assert_eq!(color_for(5.0), Rgb::new(128, 128, 0));
    }

    #[test]
    fn test_legend_swatches() {
        assert_eq!(color_for(1.0), Rgb::new(26, 230, 0));
        assert_eq!(color_for(3.0), Rgb::new(77, 179, 0));
        assert_eq!(color_for(9.0), Rgb::new(230, 26, 0));
    }

    #[test]
    fn test_monotonic_per_channel() {
        let mut previous = color_for(0.0);
        for step in 1..=1000 {
            let v = step as f64 / 100.0;
            let color = color_for(v);
            assert!(color.r >= previous.r, "red decreased at {}", v);
            assert!(color.g <= previous.g, "green increased at {}", v);
            assert_eq!(color.b, 0);
            previous = color;
        }
    }

    #[test]
    fn test_deterministic() {
        for v in [0.3, 4.44, 7.0, 9.99] {
            assert_eq!(color_for(v), color_for(v));
        }
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(color_for(f64::NAN), Rgb::new(128, 128, 128));
        assert_eq!(color_for_record_value(None), Rgb::new(128, 128, 128));
        assert_eq!(color_for_record_value(Some(12.0)), RED);
    }
}
