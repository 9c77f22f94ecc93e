//! Lenient number coercion for disclosure fields
//!
//! Field values come straight from user-supplied text, so parsing never
//! fails: blank values coerce to zero and anything unparseable becomes NaN.
//! Callers decide whether a non-finite result is an issue or a skip.

/// Coerce a raw field value to a number
///
/// Blank input yields `0.0`; input that is not a number yields `NaN`.
pub fn coerce_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Coerce a field value after removing thousands separators
pub fn parse_field_number(raw: &str) -> f64 {
    coerce_number(&raw.replace(',', ""))
}

/// Format a number the way it is shown in issue messages
///
/// Integral values print without a fractional part.
pub fn format_number(value: f64) -> String {
    format!("{}", value)
}
