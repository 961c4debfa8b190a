//! Conversion between display text and `f64` operands.
//!
//! Operands live as text so that user formatting (a trailing decimal point,
//! for instance) survives until the moment of evaluation.

/// Parse display text into an operand.
///
/// Malformed text yields `NaN`, which then propagates through arithmetic
/// instead of being rejected.
pub fn parse_operand(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a computed value as display text.
///
/// Whole numbers print without a fractional part, negative zero prints as
/// `"0"`, and non-finite values use the `Infinity`/`NaN` spellings, which
/// [`parse_operand`] accepts back.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}
