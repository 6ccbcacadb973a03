//! Form state and key dispatch: one focused field at a time, focus changes
//! act as the commit point (the blur of the original widget).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use decfield_core::{DecimalField, FieldKey, KeyDisposition};
use std::time::Instant;

pub struct FormApp {
    pub fields: Vec<DecimalField>,
    pub focused: usize,
}

impl FormApp {
    pub fn new(fields: Vec<DecimalField>) -> Self {
        Self { fields, focused: 0 }
    }

    /// Dispatch one key event. Returns `true` when the form should close.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return matches!(key.code, KeyCode::Char('c'));
        }
        if self.fields.is_empty() {
            return true;
        }

        let selecting = key.modifiers.contains(KeyModifiers::SHIFT);
        let field = &mut self.fields[self.focused];

        match key.code {
            // Focus changes are the commit point.
            KeyCode::Tab | KeyCode::Enter => {
                field.commit_at(now);
                self.focused = (self.focused + 1) % self.fields.len();
            }
            KeyCode::BackTab => {
                field.commit_at(now);
                self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
            }
            // Escape selects all on a non-empty field; on an empty one it
            // falls through and closes the form.
            KeyCode::Esc => {
                if field.handle_key(FieldKey::Escape) == KeyDisposition::Ignored {
                    return true;
                }
            }
            KeyCode::Char(' ') => {
                field.handle_key(FieldKey::Space);
            }
            KeyCode::Char(c) => field.insert_char(c),
            KeyCode::Backspace => field.backspace(),
            KeyCode::Delete => field.delete_forward(),
            KeyCode::Left => field.move_left(selecting),
            KeyCode::Right => field.move_right(selecting),
            KeyCode::Home => field.move_home(selecting),
            KeyCode::End => field.move_end(selecting),
            _ => {}
        }
        false
    }

    pub fn paste(&mut self, text: &str) {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.insert_str(text);
        }
    }

    /// Fire any reformat whose debounce window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        for field in &mut self.fields {
            field.poll_at(now);
        }
    }

    /// Close the form: blur the focused field and settle everything so the
    /// returned values honor the at-rest invariant.
    pub fn finish(&mut self, now: Instant) -> Vec<(String, String)> {
        if let Some(field) = self.fields.get_mut(self.focused) {
            field.commit_at(now);
        }
        for field in &mut self.fields {
            field.flush();
        }
        self.fields
            .iter()
            .map(|f| (f.label().to_string(), f.value().to_string()))
            .collect()
    }
}
