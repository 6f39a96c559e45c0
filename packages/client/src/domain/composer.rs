//! Composer: buffers the outgoing message text.

use super::{
    entity::OutgoingMessage,
    identity::IdentityGate,
    value_object::{MESSAGE_TEXT_MAX_CHARS, MessageText},
};

/// Key gesture coming from a single-line input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyGesture {
    /// Plain Enter: submits.
    Confirm,
    /// Shift+Enter: never submits.
    Newline,
}

impl KeyGesture {
    pub fn submits(self) -> bool {
        matches!(self, Self::Confirm)
    }
}

/// Holds the draft text. Cleared only after a successful send.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Composer {
    draft: String,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the draft. Input beyond 500 characters is cut off.
    pub fn set_draft(&mut self, text: &str) {
        self.draft = cap_input(text, MESSAGE_TEXT_MAX_CHARS);
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Build the message to send, if submitting is allowed right now.
    ///
    /// Returns `None` when the trimmed draft is empty or nobody is
    /// identified yet.
    pub fn submission(&self, identity: &IdentityGate) -> Option<OutgoingMessage> {
        let author = identity.display_name()?.clone();
        let text = MessageText::new(self.draft.clone()).ok()?;
        Some(OutgoingMessage::new(author, text))
    }
}

/// Cut `text` to at most `max_chars` characters, like an input field's
/// length limit.
pub fn cap_input(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
