//! Numeric formatting for values handed back to a presentation layer.

use serde::{Deserialize, Serialize};

use crate::Float;

/// Decimal places used by [`FormatMode::default`].
pub const DISPLAY_DECIMALS: u8 = 3;

/// Beyond this magnitude an `f64` has no fractional digits left to round.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// How a value is rendered for a cell.
///
/// Serializes as `{"mode": "full"}` or `{"mode": "display", "decimals": 3}`
/// so hosts can keep it in their own configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FormatMode {
    /// Shortest text that parses back to the identical value.
    Full,
    /// Rounded half-up to `decimals` places, for people to read.
    Display {
        #[serde(default = "default_decimals")]
        decimals: u8,
    },
}

fn default_decimals() -> u8 {
    DISPLAY_DECIMALS
}

impl Default for FormatMode {
    fn default() -> Self {
        Self::Display {
            decimals: DISPLAY_DECIMALS,
        }
    }
}

/// Render a single value.
///
/// In display mode, a value too large to scale by `10^decimals` without
/// overflow or loss is written unrounded.
///
/// ```
/// # use echelon_core::adapter::{FormatMode, format_value};
/// assert_eq!(format_value(2.0_f64 / 3.0, FormatMode::default()), "0.667");
/// assert_eq!(format_value(0.1_f64, FormatMode::Full), "0.1");
/// ```
pub fn format_value<T: Float>(value: T, mode: FormatMode) -> String {
    match mode {
        FormatMode::Full => value.to_string(),
        FormatMode::Display { decimals } => {
            let factor = 10_f64.powi(i32::from(decimals));
            let scaled = value.to_f64() * factor;
            if !scaled.is_finite() || scaled.abs() >= EXACT_INTEGER_LIMIT {
                return value.to_string();
            }
            // Half-up, then `+ 0.0` so that -0.0 prints as "0".
            let rounded = (scaled + 0.5).floor() / factor + 0.0;
            rounded.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DISPLAY: FormatMode = FormatMode::Display { decimals: 3 };

    #[test]
    fn test_display_rounding() {
        assert_eq!(format_value(0.6, DISPLAY), "0.6");
        assert_eq!(format_value(1.0 / 3.0, DISPLAY), "0.333");
        assert_eq!(format_value(-2.0 / 3.0, DISPLAY), "-0.667");
        assert_eq!(format_value(12.0, DISPLAY), "12");
    }

    #[test]
    fn test_display_half_up() {
        assert_eq!(format_value(0.5, FormatMode::Display { decimals: 0 }), "1");
        assert_eq!(format_value(-0.5, FormatMode::Display { decimals: 0 }), "0");
    }

    #[test]
    fn test_display_negative_zero() {
        assert_eq!(format_value(-0.0, DISPLAY), "0");
        assert_eq!(format_value(-0.0001, DISPLAY), "0");
    }

    #[test]
    fn test_display_large_values_stay_finite() {
        assert_eq!(format_value(1e306_f64, DISPLAY), 1e306_f64.to_string());
        assert_eq!(format_value(-1e306_f64, DISPLAY), (-1e306_f64).to_string());
        assert_eq!(format_value(f64::MAX, DISPLAY), f64::MAX.to_string());
        assert_eq!(format_value(1e20, DISPLAY), "100000000000000000000");
    }

    #[test]
    fn test_display_many_decimals() {
        let wide = FormatMode::Display { decimals: 200 };
        assert_eq!(format_value(0.125, wide), "0.125");
        assert_eq!(format_value(1e150_f64, wide), 1e150_f64.to_string());
        assert_eq!(format_value(2.5, FormatMode::Display { decimals: 20 }), "2.5");
    }

    #[test]
    fn test_full_round_trips() {
        for v in [0.1_f64, 1.0 / 3.0, -123.456_789, 1e-12, 5.0] {
            let text = format_value(v, FormatMode::Full);
            assert_eq!(text.parse::<f64>().unwrap().to_bits(), v.to_bits());
        }
    }

    #[test]
    fn test_f32_full() {
        assert_eq!(format_value(0.1_f32, FormatMode::Full), "0.1");
    }

    #[test]
    fn test_mode_serde() {
        let full: FormatMode = serde_json::from_str(r#"{"mode":"full"}"#).unwrap();
        assert_eq!(full, FormatMode::Full);

        let display: FormatMode = serde_json::from_str(r#"{"mode":"display"}"#).unwrap();
        assert_eq!(display, FormatMode::default());

        let json = serde_json::to_string(&FormatMode::Display { decimals: 5 }).unwrap();
        assert_eq!(json, r#"{"mode":"display","decimals":5}"#);
    }
}
