use super::{ABSENT, DisplayConfig};

/// Formats a gear ratio as `"N:1"` or `"1:N"`.
///
/// Ratios of one or more render as `"N:1"`; ratios between zero and one are
/// inverted and render as `"1:N"`. `N` has at most three decimals, with
/// trailing zeros removed.
///
/// Absent, negative and non-finite ratios render as `"-"`; zero renders as
/// `"0:1"`.
///
/// # Example
///
/// ```
/// use drivetrain_models::support::drivetrain::format_ratio;
///
/// assert_eq!(format_ratio(Some(2.0)), "2:1");
/// assert_eq!(format_ratio(Some(2.0 / 3.0)), "1:1.5");
/// assert_eq!(format_ratio(None), "-");
/// ```
#[must_use]
pub fn format_ratio(ratio: Option<f64>) -> String {
    format_ratio_with(ratio, &DisplayConfig::default())
}

/// Formats a gear ratio like [`format_ratio`] using the given precision.
#[must_use]
pub fn format_ratio_with(ratio: Option<f64>, config: &DisplayConfig) -> String {
    match ratio {
        Some(r) if !r.is_finite() || r < 0.0 => ABSENT.to_string(),
        Some(r) if r == 0.0 => "0:1".to_string(),
        Some(r) if r >= 1.0 => format!("{}:1", config.trimmed(r)),
        Some(r) => format!("1:{}", config.trimmed(1.0 / r)),
        None => ABSENT.to_string(),
    }
}

/// Reads a ratio written as `"a:b"` or as a plain number.
///
/// Returns `None` for blank or malformed text, a zero right-hand side, or a
/// non-finite result.
///
/// # Example
///
/// ```
/// use drivetrain_models::support::drivetrain::parse_ratio;
///
/// assert_eq!(parse_ratio("3:1"), Some(3.0));
/// assert_eq!(parse_ratio("1:4"), Some(0.25));
/// assert_eq!(parse_ratio("0.5"), Some(0.5));
/// assert_eq!(parse_ratio("-"), None);
/// ```
#[must_use]
pub fn parse_ratio(text: &str) -> Option<f64> {
    let text = text.trim();
    let value = match text.split_once(':') {
        Some((lhs, rhs)) => {
            let lhs: f64 = lhs.trim().parse().ok()?;
            let rhs: f64 = rhs.trim().parse().ok()?;
            if rhs == 0.0 {
                return None;
            }
            lhs / rhs
        }
        None => text.parse().ok()?,
    };
    value.is_finite().then_some(value)
}
