//! Single-line edit buffer: value, caret, and selection.
//!
//! This layer knows nothing about decimal grammar or debouncing; it only
//! guarantees UTF-8 correctness of the buffer. The controller in
//! [`crate::field`] snapshots and reverts whole `FieldState`s, so every
//! mutation here must leave the state internally consistent.

/// A resolved selection, `start < end`, both on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

/// The text-entry state the controller owns: the displayed value, the caret
/// byte offset, and an optional selection anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    value: String,
    caret: usize,
    selection_anchor: Option<usize>,
}

impl FieldState {
    /// Create a state seeded with `initial`, caret at the end.
    pub fn new(initial: impl Into<String>) -> Self {
        let value = initial.into();
        let caret = value.len();
        Self {
            value,
            caret,
            selection_anchor: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The current selection, if the anchor and caret span any text.
    pub fn selection(&self) -> Option<SelectionRange> {
        let anchor = self.selection_anchor?;
        if anchor == self.caret {
            return None;
        }
        Some(SelectionRange {
            start: anchor.min(self.caret),
            end: anchor.max(self.caret),
        })
    }

    /// Overwrite the value; caret moves to the end and selection clears.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.caret = self.value.len();
        self.selection_anchor = None;
    }

    /// Overwrite the value while keeping the caret where it was (clamped to
    /// the nearest char boundary). Used for in-place normalization such as
    /// comma-to-dot replacement.
    pub fn set_value_keeping_caret(&mut self, value: impl Into<String>) {
        let caret = self.caret;
        self.value = value.into();
        self.caret = clamp_to_char_boundary(&self.value, caret);
        if let Some(a) = self.selection_anchor {
            self.selection_anchor = Some(clamp_to_char_boundary(&self.value, a));
        }
    }

    /// Insert a character at the caret, replacing any selection.
    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    /// Insert text at the caret, replacing any selection. Newlines and other
    /// control characters are dropped; the buffer is single-line.
    pub fn insert_str(&mut self, s: &str) {
        let filtered: String = s.chars().filter(|c| !c.is_control()).collect();
        self.delete_selection_if_any();
        if filtered.is_empty() {
            return;
        }
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        self.value.insert_str(caret, &filtered);
        self.caret = caret + filtered.len();
    }

    /// Delete the character before the caret, or the selection if one exists.
    pub fn backspace(&mut self) {
        if self.delete_selection_if_any() {
            return;
        }
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        if caret == 0 {
            return;
        }
        let prev = prev_boundary(&self.value, caret);
        self.value.drain(prev..caret);
        self.caret = prev;
    }

    /// Delete the character after the caret, or the selection if one exists.
    pub fn delete_forward(&mut self) {
        if self.delete_selection_if_any() {
            return;
        }
        let caret = clamp_to_char_boundary(&self.value, self.caret);
        if caret >= self.value.len() {
            return;
        }
        let next = next_boundary(&self.value, caret);
        self.value.drain(caret..next);
        self.caret = caret;
    }

    /// Move the caret one char left; extends the selection when `selecting`.
    pub fn move_left(&mut self, selecting: bool) {
        if selecting {
            self.anchor_if_needed();
            self.caret = prev_boundary(&self.value, self.caret);
            self.drop_collapsed_anchor();
            return;
        }
        // A plain move collapses any selection to its start.
        if let Some(sel) = self.selection() {
            self.caret = sel.start;
        } else {
            self.caret = prev_boundary(&self.value, self.caret);
        }
        self.selection_anchor = None;
    }

    /// Move the caret one char right; extends the selection when `selecting`.
    pub fn move_right(&mut self, selecting: bool) {
        if selecting {
            self.anchor_if_needed();
            self.caret = next_boundary(&self.value, self.caret);
            self.drop_collapsed_anchor();
            return;
        }
        if let Some(sel) = self.selection() {
            self.caret = sel.end;
        } else {
            self.caret = next_boundary(&self.value, self.caret);
        }
        self.selection_anchor = None;
    }

    /// Move the caret to the start of the value.
    pub fn move_home(&mut self, selecting: bool) {
        if selecting {
            self.anchor_if_needed();
        } else {
            self.selection_anchor = None;
        }
        self.caret = 0;
        self.drop_collapsed_anchor();
    }

    /// Move the caret to the end of the value.
    pub fn move_end(&mut self, selecting: bool) {
        if selecting {
            self.anchor_if_needed();
        } else {
            self.selection_anchor = None;
        }
        self.caret = self.value.len();
        self.drop_collapsed_anchor();
    }

    /// Select the entire value, caret at the end.
    pub fn select_all(&mut self) {
        if self.value.is_empty() {
            self.selection_anchor = None;
            self.caret = 0;
            return;
        }
        self.selection_anchor = Some(0);
        self.caret = self.value.len();
    }

    pub fn clear_selection(&mut self) {
        self.selection_anchor = None;
    }

    fn anchor_if_needed(&mut self) {
        if self.selection_anchor.is_none() {
            self.selection_anchor = Some(self.caret);
        }
    }

    fn drop_collapsed_anchor(&mut self) {
        if self.selection_anchor == Some(self.caret) {
            self.selection_anchor = None;
        }
    }

    fn delete_selection_if_any(&mut self) -> bool {
        let Some(sel) = self.selection() else {
            self.selection_anchor = None;
            self.caret = clamp_to_char_boundary(&self.value, self.caret);
            return false;
        };
        self.value.drain(sel.start..sel.end);
        self.caret = sel.start;
        self.selection_anchor = None;
        true
    }
}

fn clamp_to_char_boundary(s: &str, i: usize) -> usize {
    let mut i = i.min(s.len());
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn prev_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i].char_indices().next_back().map(|(j, _)| j).unwrap_or(0)
}

fn next_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..].chars().next().map(|c| i + c.len_utf8()).unwrap_or(s.len())
}
