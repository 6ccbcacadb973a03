//! # decfield-core
//!
//! UI-agnostic core of a decimal-constrained input field.
//!
//! A `DecimalField` wraps a single-line edit buffer and guarantees that the
//! committed value is always either empty or a syntactically valid,
//! space-grouped decimal string, while leaving interim typing free:
//!
//! - [`validator`]: the admission grammar (optional minus, up to six integer
//!   digits, up to two fraction digits, grouping whitespace ignored)
//! - [`format`]: pure rounding and rendering helpers (`10000.9` → `"10 000.90"`)
//! - [`editor`]: a UTF-8-safe value/caret/selection buffer
//! - [`field`]: the controller that snapshots, admits or reverts edits, and
//!   settles the value through a debounced reformat pass
//!
//! The crate performs no I/O and owns no timers: the debounce clock is an
//! `Instant` supplied by the caller, so every transition is directly
//! testable without a live UI surface.

pub mod editor;
pub mod field;
pub mod format;
pub mod validator;

pub use editor::FieldState;
pub use field::{DecimalField, FieldConfig, FieldKey, KeyDisposition, DEFAULT_DEBOUNCE_MS};
pub use format::{parse_num, pretty_number, rounded_num, without_spaces};
pub use validator::{is_valid_decimal_num_string, ValidationMode};
