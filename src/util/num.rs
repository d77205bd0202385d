/// Renders an evaluation result for display.
///
/// Finite values use the shortest decimal form that round-trips, always with
/// a fractional part or an exponent, so whole numbers print as `3.0`.
/// Non-finite values print as `Infinity`, `-Infinity` or `NaN`.
///
/// # Example
/// ```
/// use shunt::util::num::format_result;
///
/// assert_eq!(format_result(-7.0), "-7.0");
/// assert_eq!(format_result(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_result(10.0 / 0.0), "Infinity");
/// assert_eq!(format_result(0.0 / 0.0), "NaN");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() && value.is_sign_positive() {
        "Infinity".to_string()
    } else if value.is_infinite() {
        "-Infinity".to_string()
    } else {
        format!("{value:?}")
    }
}
