//! Core domain models for the chat client.

use super::value_object::{AvatarColor, DisplayName, MessageId, MessageText, Timestamp};

/// A chat message as held by the remote store.
///
/// Created by the remote store on a successful send and never mutated by
/// the client. `id` is the only identity key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Identifier assigned by the remote store
    pub id: MessageId,
    /// Display name of the sender
    pub author: String,
    /// Message body
    pub text: String,
    /// Creation time, if the remote store reported a readable one
    pub created_at: Option<Timestamp>,
    /// Display colour tag
    pub color: AvatarColor,
}

impl Message {
    /// Create a new message
    pub fn new(
        id: MessageId,
        author: String,
        text: String,
        created_at: Option<Timestamp>,
        color: AvatarColor,
    ) -> Self {
        Self {
            id,
            author,
            text,
            created_at,
            color,
        }
    }

    /// Whether `name` authored this message (plain string equality).
    pub fn is_authored_by(&self, name: &DisplayName) -> bool {
        self.author == name.as_str()
    }
}

/// A message about to be written to the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub author: DisplayName,
    pub text: MessageText,
}

impl OutgoingMessage {
    pub fn new(author: DisplayName, text: MessageText) -> Self {
        Self { author, text }
    }
}
