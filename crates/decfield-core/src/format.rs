//! Pure rendering and parsing helpers for decimal field values.
//!
//! These functions never fail: callers are responsible for guarding
//! non-numeric input before asking for a rendering (see [`parse_num`]).

/// Remove every whitespace character from `s`.
///
/// Grouping spaces are display-only; this is the normalization applied
/// before both grammar checks and numeric parsing.
pub fn without_spaces(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Parse a field value into a number, grouping spaces ignored.
///
/// An empty (or whitespace-only) value parses as zero, matching the host
/// `Number('')` convention the field was specified against. Non-finite
/// results count as unparseable and yield `None`.
pub fn parse_num(s: &str) -> Option<f64> {
    let cleaned = without_spaces(s);
    if cleaned.is_empty() {
        return Some(0.0);
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Round `n` to `decimals` fractional digits, half away from zero, and
/// render it as a fixed-point string with exactly `decimals` digits after
/// the point.
///
/// A tiny epsilon is added to the magnitude before rounding so values that
/// sit just under a half step due to binary representation error (e.g.
/// `1.005` stored as `1.00499…`) still round up.
pub fn rounded_num(n: f64, decimals: usize) -> String {
    let factor = 10f64.powi(decimals as i32);
    let magnitude = ((n.abs() + f64::EPSILON) * factor).round() / factor;
    let rounded = if n < 0.0 { -magnitude } else { magnitude };
    // Collapse -0.0 so "-0.00" never renders.
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}

/// Render `n` in the field's canonical on-screen form: integer digits in
/// groups of three separated by spaces, a literal `.` as the decimal
/// separator, and at least two fraction digits. `10000.9` → `"10 000.90"`.
///
/// Rounding happens first (via [`rounded_num`]) so grouping is applied to an
/// already-settled string.
pub fn pretty_number(n: f64) -> String {
    let fixed = rounded_num(n, 2);
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, f),
        None => (fixed.as_str(), ""),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + frac_part.len() + 2);
    grouped.push_str(sign);
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
