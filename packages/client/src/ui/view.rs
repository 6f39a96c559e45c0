//! Chat view model.
//!
//! A pure function of the message store and the local display name.

use chrono::FixedOffset;

use crate::domain::{DisplayName, MessageId, MessageStore};

/// What the session shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Nobody is identified yet; only the name entry is visible
    NameEntry { name_input: String },
    /// The identified chat
    Chat(ChatView),
}

/// Header of the chat: who is talking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatHeader {
    pub display_name: String,
    pub initial: String,
}

/// One rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub id: MessageId,
    pub author: String,
    /// First letter of the author, upper-cased, for the avatar
    pub initial: String,
    pub text: String,
    /// `HH:MM`, empty when the store sent no readable timestamp
    pub time_label: String,
    pub color: String,
    /// Authored by the local display name (exact string match)
    pub is_own: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatView {
    pub header: ChatHeader,
    pub entries: Vec<ChatEntry>,
    /// Store revision this view was rendered from
    pub revision: u64,
}

impl ChatView {
    /// Render the store for `me`, with clock labels in `offset`.
    ///
    /// Two participants using the same name are indistinguishable here:
    /// both see the other's messages as their own.
    pub fn render(store: &MessageStore, me: &DisplayName, offset: &FixedOffset) -> Self {
        let entries = store
            .messages()
            .iter()
            .map(|message| ChatEntry {
                id: message.id,
                author: message.author.clone(),
                initial: initial_of(&message.author),
                text: message.text.clone(),
                time_label: message
                    .created_at
                    .map(|ts| ts.clock_label(offset))
                    .unwrap_or_default(),
                color: message.color.as_str().to_string(),
                is_own: message.is_authored_by(me),
            })
            .collect();

        Self {
            header: ChatHeader {
                display_name: me.as_str().to_string(),
                initial: initial_of(me.as_str()),
            },
            entries,
            revision: store.revision(),
        }
    }

    /// No messages yet: show the placeholder instead of a list.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// First character of `name`, upper-cased.
pub fn initial_of(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
