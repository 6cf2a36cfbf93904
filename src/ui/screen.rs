//! In-memory model of everything the panel shows.

use super::{DisplaySink, Field};
use crate::money::FieldText;

/// Latest text and caption emphasis for each field, plus a dirty flag
/// so the renderer only flushes the panel after a change.
#[derive(Clone, Debug, Default)]
pub struct Screen {
    texts: [FieldText; 4],
    emphasis: [bool; 4],
    dirty: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: Field) -> &str {
        self.texts[field.index()].as_str()
    }

    pub fn is_emphasized(&self, field: Field) -> bool {
        self.emphasis[field.index()]
    }

    /// Returns `true` once after any change, then clears the flag.
    pub fn take_dirty(&mut self) -> bool {
        core::mem::replace(&mut self.dirty, false)
    }
}

impl DisplaySink for Screen {
    fn set_text(&mut self, field: Field, text: &str) {
        let slot = &mut self.texts[field.index()];
        if slot.as_str() == text {
            return;
        }
        slot.clear();
        // Truncate rather than drop text that does not fit.
        for c in text.chars() {
            if slot.push(c).is_err() {
                break;
            }
        }
        self.dirty = true;
    }

    fn set_emphasis(&mut self, field: Field, emphasized: bool) {
        let slot = &mut self.emphasis[field.index()];
        if *slot != emphasized {
            *slot = emphasized;
            self.dirty = true;
        }
    }
}
