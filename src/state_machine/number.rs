//! Conversions between entry text and `f64`

/// Results are rounded to this many decimal places
const ROUNDING_SCALE: f64 = 100_000_000.0;

/// Parse an entry or operand. Empty, non-numeric and non-finite text is `None`.
pub fn parse_operand(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Round to 8 decimal places, halves toward positive infinity.
///
/// Adding `f64::EPSILON` first pushes values like `1.005` that sit just
/// below a half over it. Values too large to scale are returned unchanged;
/// they carry no fractional digits at that magnitude anyway.
pub fn round8(value: f64) -> f64 {
    let scaled = (value + f64::EPSILON) * ROUNDING_SCALE;
    if !scaled.is_finite() {
        return value;
    }
    (scaled + 0.5).floor() / ROUNDING_SCALE
}

/// Shortest decimal text that reads back as `value`. Never uses exponents.
pub fn format_number(value: f64) -> String {
    // -0 displays as 0
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
