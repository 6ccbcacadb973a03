//! The field controller: admission gate, revert snapshot, and the debounced
//! commit/reformat cycle.

use crate::editor::FieldState;
use crate::format::{parse_num, pretty_number};
use crate::validator::{is_valid_decimal_num_string, ValidationMode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Delay between a commit and the reformat pass it schedules. Rapid commits
/// inside this window collapse into a single pass.
pub const DEFAULT_DEBOUNCE_MS: u64 = 30;

/// Immutable construction parameters for one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldConfig {
    /// Semantic class of the field, shown as its label.
    pub label: String,
    /// Identifier composing the field's full id (`"{label}{id}"` shaped).
    pub id: String,
    /// Value the field is seeded with.
    #[serde(default)]
    pub initial: String,
    #[serde(default)]
    pub mode: ValidationMode,
    /// When false, settled values render as the raw number (`7`) instead of
    /// the grouped form (`7.00`).
    #[serde(default = "default_prettify")]
    pub prettify: bool,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_prettify() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            id: String::new(),
            initial: String::new(),
            mode: ValidationMode::Decimal,
            prettify: true,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl FieldConfig {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_initial(mut self, initial: impl Into<String>) -> Self {
        self.initial = initial.into();
        self
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_prettify(mut self, prettify: bool) -> Self {
        self.prettify = prettify;
        self
    }
}

/// Keys the controller claims ahead of text insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Space,
    Escape,
}

/// Whether a key event was claimed by [`DecimalField::handle_key`]. An
/// ignored key is the caller's to act on (e.g. Escape closing a form).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Consumed,
    Ignored,
}

/// A single decimal-constrained input field.
///
/// The controller owns the [`FieldState`] exclusively. Every interactive
/// edit runs snapshot → mutate → normalize → admit, reverting the whole
/// state when the candidate fails the grammar. Commits arm a debounce
/// deadline; [`DecimalField::poll_at`] runs the reformat pass once the
/// deadline elapses.
///
/// All clock-dependent transitions take `now: Instant` so the debounce laws
/// are testable without sleeping.
pub struct DecimalField {
    config: FieldConfig,
    state: FieldState,
    prev: FieldState,
    validate: Box<dyn Fn(&str) -> bool + Send + Sync>,
    reformat_due: Option<Instant>,
}

impl fmt::Debug for DecimalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecimalField")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("reformat_due", &self.reformat_due)
            .finish_non_exhaustive()
    }
}

impl DecimalField {
    /// Create a field seeded with the config's initial value.
    pub fn new(config: FieldConfig) -> Self {
        let state = FieldState::new(config.initial.clone());
        Self::adopt(state, config)
    }

    /// Wrap a pre-existing field state instead of creating one. The adopted
    /// value stands as-is until the first settle point.
    pub fn adopt(state: FieldState, config: FieldConfig) -> Self {
        Self {
            config,
            prev: state.clone(),
            state,
            validate: Box::new(|s| is_valid_decimal_num_string(s)),
            reformat_due: None,
        }
    }

    /// Substitute the admission predicate. The default is the built-in
    /// decimal grammar; any `Fn(&str) -> bool` with the same meaning works.
    pub fn with_validator<F>(mut self, validate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.validate = Box::new(validate);
        self
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn label(&self) -> &str {
        &self.config.label
    }

    pub fn value(&self) -> &str {
        self.state.value()
    }

    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// Maximum character count admitted into this field.
    pub fn max_len(&self) -> usize {
        self.config.mode.max_len()
    }

    /// The armed reformat deadline, if a commit is pending.
    pub fn pending_reformat(&self) -> Option<Instant> {
        self.reformat_due
    }

    /// Whole-field-select shortcut: Space, or Escape while non-empty,
    /// selects the entire value and claims the key.
    pub fn handle_key(&mut self, key: FieldKey) -> KeyDisposition {
        let claim = match key {
            FieldKey::Space => true,
            FieldKey::Escape => !self.state.is_empty(),
        };
        if claim {
            self.state.select_all();
            KeyDisposition::Consumed
        } else {
            KeyDisposition::Ignored
        }
    }

    /// Type one character into the field. The edit carries data, so it is
    /// subject to the admission gate and reverts if rejected.
    pub fn insert_char(&mut self, c: char) {
        self.snapshot();
        self.state.insert_char(c);
        self.admit(true);
    }

    /// Paste text at the caret. Gated like a typed edit.
    pub fn insert_str(&mut self, s: &str) {
        self.snapshot();
        self.state.insert_str(s);
        self.admit(true);
    }

    /// Delete backwards. Deletions carry no data and bypass the gate.
    pub fn backspace(&mut self) {
        self.snapshot();
        self.state.backspace();
        self.admit(false);
    }

    /// Delete forwards. Deletions carry no data and bypass the gate.
    pub fn delete_forward(&mut self) {
        self.snapshot();
        self.state.delete_forward();
        self.admit(false);
    }

    /// Caret movement, delegated to the edit buffer.
    pub fn move_left(&mut self, selecting: bool) {
        self.state.move_left(selecting);
    }

    pub fn move_right(&mut self, selecting: bool) {
        self.state.move_right(selecting);
    }

    pub fn move_home(&mut self, selecting: bool) {
        self.state.move_home(selecting);
    }

    pub fn move_end(&mut self, selecting: bool) {
        self.state.move_end(selecting);
    }

    /// Programmatic assignment. Not an interactive edit: the value stands
    /// even if invalid, and a commit is scheduled so the next reformat pass
    /// resolves it.
    pub fn assign(&mut self, value: impl Into<String>, now: Instant) {
        self.state.set_value(value);
        self.commit_at(now);
    }

    /// Commit point (focus loss or assignment): supersede any pending
    /// reformat and arm a fresh deadline one debounce window from `now`.
    pub fn commit_at(&mut self, now: Instant) {
        self.reformat_due = Some(now + Duration::from_millis(self.config.debounce_ms));
    }

    /// Run the reformat pass if its deadline has elapsed. Returns `true`
    /// when the pass ran. At most one pass runs per armed commit.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.reformat_due {
            Some(due) if now >= due => {
                self.reformat_due = None;
                self.reformat();
                true
            }
            _ => false,
        }
    }

    /// Run any armed reformat immediately, as if the window had elapsed.
    pub fn flush(&mut self) -> bool {
        if self.reformat_due.take().is_some() {
            self.reformat();
            true
        } else {
            false
        }
    }

    // Edit-start: capture the state an invalid edit reverts to.
    fn snapshot(&mut self) {
        self.prev = self.state.clone();
    }

    // Edit-validate: normalize the first comma to a dot, then gate edits
    // that entered data against the length cap and the validator.
    fn admit(&mut self, entered_data: bool) {
        let value = self.state.value();
        if value.contains(',') {
            let fixed = value.replacen(',', ".", 1);
            self.state.set_value_keeping_caret(fixed);
        }
        if !entered_data {
            return;
        }
        let value = self.state.value();
        if value.chars().count() > self.max_len() || !(self.validate)(value) {
            self.state = self.prev.clone();
        }
    }

    // The settle pass: parse the cleaned value, then replace the field with
    // its canonical rendering, or with the empty string when invalid.
    fn reformat(&mut self) {
        let cleaned = parse_num(self.state.value());
        let valid = match self.config.mode {
            ValidationMode::Amount => cleaned.is_some_and(|n| n != 0.0),
            ValidationMode::Decimal => cleaned.is_some(),
        };

        let replacement = if valid {
            let n = cleaned.unwrap_or_default();
            if self.config.prettify {
                pretty_number(n)
            } else {
                format!("{}", n)
            }
        } else {
            String::new()
        };

        // Skip the write when nothing changes, so the caret and selection
        // survive a no-op settle.
        if self.state.value() != replacement {
            self.state.set_value(replacement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(mode: ValidationMode) -> DecimalField {
        DecimalField::new(FieldConfig::new("montant", "1").with_mode(mode))
    }

    fn type_str(f: &mut DecimalField, s: &str) {
        for c in s.chars() {
            f.insert_char(c);
        }
    }

    #[test]
    fn typing_a_valid_number_sticks() {
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "10000.9");
        assert_eq!(f.value(), "10000.9");
    }

    #[test]
    fn blur_settles_to_pretty_form() {
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "10000.9");
        let t0 = Instant::now();
        f.commit_at(t0);
        assert!(f.poll_at(t0 + Duration::from_millis(DEFAULT_DEBOUNCE_MS)));
        assert_eq!(f.value(), "10 000.90");
    }

    #[test]
    fn invalid_keystroke_reverts_to_previous_value() {
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "12.34");
        f.insert_char('1'); // would make 12.341, three fraction digits
        assert_eq!(f.value(), "12.34");
    }

    #[test]
    fn revert_restores_caret_too() {
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "12.34");
        let caret_before = f.state().caret();
        f.insert_char('9');
        assert_eq!(f.state().caret(), caret_before);
    }

    #[test]
    fn comma_is_normalized_to_dot_before_validation() {
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "12,5");
        assert_eq!(f.value(), "12.5");
    }

    #[test]
    fn deletions_bypass_the_gate() {
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "12.3");
        f.backspace();
        f.backspace();
        assert_eq!(f.value(), "12");
    }

    #[test]
    fn length_cap_depends_on_mode() {
        let mut generic = field(ValidationMode::Decimal);
        type_str(&mut generic, "123456.78");
        assert_eq!(generic.value(), "123456.78");

        // "-234 678.01" is grammar-valid at exactly 11 chars; one more
        // grouping space pushes it over the amount cap and reverts.
        let mut amount = field(ValidationMode::Amount);
        amount.insert_str("-234 678.01");
        assert_eq!(amount.value(), "-234 678.01");
        amount.insert_char(' ');
        assert_eq!(amount.value(), "-234 678.01");
    }

    #[test]
    fn zero_is_invalid_in_amount_mode() {
        let mut f = field(ValidationMode::Amount);
        type_str(&mut f, "0");
        let t0 = Instant::now();
        f.commit_at(t0);
        f.flush();
        assert_eq!(f.value(), "");
    }

    #[test]
    fn empty_generic_field_settles_to_zero() {
        let mut f = field(ValidationMode::Decimal);
        f.commit_at(Instant::now());
        f.flush();
        assert_eq!(f.value(), "0.00");
    }

    #[test]
    fn prettify_disabled_settles_to_raw_number() {
        let mut f = DecimalField::new(
            FieldConfig::new("qty", "2").with_prettify(false),
        );
        type_str(&mut f, "7");
        f.commit_at(Instant::now());
        f.flush();
        assert_eq!(f.value(), "7");
    }

    #[test]
    fn unparseable_commit_settles_to_empty() {
        let t0 = Instant::now();
        let mut f = field(ValidationMode::Decimal);
        f.assign("garbage", t0);
        assert_eq!(f.value(), "garbage"); // stands until the pass runs
        assert!(f.poll_at(t0 + Duration::from_millis(DEFAULT_DEBOUNCE_MS)));
        assert_eq!(f.value(), "");
    }

    #[test]
    fn debounce_collapses_rapid_commits_into_one_pass() {
        let t0 = Instant::now();
        let step = Duration::from_millis(10);
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "5");

        f.commit_at(t0);
        f.commit_at(t0 + step);
        f.assign("1000", t0 + 2 * step);

        // The first deadline (t0 + 30ms) was superseded twice; nothing fires
        // until 30ms after the last commit.
        assert!(!f.poll_at(t0 + Duration::from_millis(35)));
        assert_eq!(f.value(), "1000");

        assert!(f.poll_at(t0 + Duration::from_millis(50)));
        assert_eq!(f.value(), "1 000.00");

        // Exactly once: the deadline is disarmed after firing.
        assert!(!f.poll_at(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn settle_is_idempotent() {
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "10000.9");
        f.commit_at(Instant::now());
        f.flush();
        let settled = f.value().to_string();

        f.commit_at(Instant::now());
        f.flush();
        assert_eq!(f.value(), settled);
    }

    #[test]
    fn space_selects_all() {
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "12.34");
        assert_eq!(f.handle_key(FieldKey::Space), KeyDisposition::Consumed);
        let sel = f.state().selection().unwrap();
        assert_eq!((sel.start, sel.end), (0, 5));
    }

    #[test]
    fn escape_selects_all_only_when_non_empty() {
        let mut f = field(ValidationMode::Decimal);
        assert_eq!(f.handle_key(FieldKey::Escape), KeyDisposition::Ignored);
        type_str(&mut f, "9");
        assert_eq!(f.handle_key(FieldKey::Escape), KeyDisposition::Consumed);
    }

    #[test]
    fn select_all_then_type_replaces_value() {
        let mut f = field(ValidationMode::Decimal);
        type_str(&mut f, "12.34");
        f.handle_key(FieldKey::Space);
        f.insert_char('7');
        assert_eq!(f.value(), "7");
    }

    #[test]
    fn adopted_state_stands_until_first_settle() {
        let t0 = Instant::now();
        let state = FieldState::new("not a number");
        let mut f = DecimalField::adopt(state, FieldConfig::new("price", "3"));
        assert_eq!(f.value(), "not a number");
        f.commit_at(t0);
        f.poll_at(t0 + Duration::from_millis(DEFAULT_DEBOUNCE_MS));
        assert_eq!(f.value(), "");
    }

    #[test]
    fn custom_validator_is_honored() {
        let mut f = DecimalField::new(FieldConfig::new("digits", "4"))
            .with_validator(|s| s.chars().all(|c| c.is_ascii_digit()));
        type_str(&mut f, "123");
        f.insert_char('.');
        assert_eq!(f.value(), "123");
    }

    #[test]
    fn paste_is_gated_like_typing() {
        let mut f = field(ValidationMode::Decimal);
        f.insert_str("10 000.90");
        assert_eq!(f.value(), "10 000.90");
        f.insert_str("junk");
        assert_eq!(f.value(), "10 000.90");
    }

    #[test]
    fn config_survives_a_toml_round_trip() {
        let config = FieldConfig::new("montant", "7")
            .with_mode(ValidationMode::Amount)
            .with_initial("5.00");
        let text = toml::to_string(&config).unwrap();
        let back: FieldConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, config);
    }
}
