//! Admission grammar for decimal input strings.

use crate::format::without_spaces;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// Optional minus, 0-6 integer digits, optional dot plus 0-2 fraction digits.
// Grouping whitespace is stripped before matching, so "12 345.6" passes.
static DECIMAL_NUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d{0,6}(\.\d{0,2})?$").expect("decimal grammar pattern"));

/// Returns `true` if `candidate` is an acceptable partial or complete decimal
/// string. Pure predicate: no state, never panics on any input.
///
/// The empty string, a lone `-`, and a trailing dot (`"12."`) are all
/// accepted so the grammar never blocks a keystroke the user still needs to
/// finish a number. Commas are not accepted here; callers normalize them to
/// dots before validating.
pub fn is_valid_decimal_num_string(candidate: &str) -> bool {
    DECIMAL_NUM.is_match(&without_spaces(candidate))
}

/// Validity rules applied when a value settles.
///
/// `Amount` is the stricter currency-shaped variant: besides the shared
/// grammar it rejects zero at commit time and caps the field at fewer
/// characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    #[default]
    Decimal,
    Amount,
}

impl ValidationMode {
    /// Maximum character count for a field in this mode, sized to bound
    /// `-234 678.01`-shaped strings including grouping spaces.
    pub fn max_len(self) -> usize {
        match self {
            ValidationMode::Amount => 11,
            ValidationMode::Decimal => 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_partial_and_complete_decimals() {
        for ok in ["", "-", "1", "-1", "123456", "0.5", "12.34", "12.", ".5", "-0.99"] {
            assert!(is_valid_decimal_num_string(ok), "expected valid: {ok:?}");
        }
    }

    #[test]
    fn grouping_whitespace_is_ignored() {
        assert!(is_valid_decimal_num_string("12 345.67"));
        assert!(is_valid_decimal_num_string("234 678.01"));
        assert!(is_valid_decimal_num_string(" -1 "));
    }

    #[test]
    fn rejects_out_of_grammar_strings() {
        for bad in [
            "1234567",   // seven integer digits
            "12.345",    // three fraction digits
            "--1",       // double sign
            "1-",        // sign not leading
            "1e3",       // exponent notation
            "12,5",      // comma must be normalized upstream
            "abc",
            "1.2.3",
        ] {
            assert!(!is_valid_decimal_num_string(bad), "expected invalid: {bad:?}");
        }
    }

    #[test]
    fn digit_budget_counts_after_space_stripping() {
        // Six digits spread across groups is still six digits.
        assert!(is_valid_decimal_num_string("123 456"));
        assert!(!is_valid_decimal_num_string("1 234 567"));
    }

    #[test]
    fn mode_length_caps() {
        assert_eq!(ValidationMode::Amount.max_len(), 11);
        assert_eq!(ValidationMode::Decimal.max_len(), 16);
    }
}
