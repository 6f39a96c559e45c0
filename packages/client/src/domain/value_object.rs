//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};
use marathon_chat_shared::time::{format_clock_label, parse_wire_timestamp};

use super::error::ValueObjectError;

/// Maximum length of a display name, in characters
pub const DISPLAY_NAME_MAX_CHARS: usize = 20;

/// Maximum length of a message text, in characters
pub const MESSAGE_TEXT_MAX_CHARS: usize = 500;

/// Display name value object.
///
/// The name a participant chose for the session. Always trimmed and
/// between 1 and 20 characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DisplayName(String);

impl DisplayName {
    /// Create a new DisplayName.
    ///
    /// # Arguments
    ///
    /// * `name` - The raw name as typed; surrounding whitespace is removed
    ///
    /// # Returns
    ///
    /// A Result containing the DisplayName or an error if validation fails
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::DisplayNameEmpty);
        }
        let len = trimmed.chars().count();
        if len > DISPLAY_NAME_MAX_CHARS {
            return Err(ValueObjectError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX_CHARS,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message text value object.
///
/// Outgoing message body, trimmed and between 1 and 500 characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageText(String);

impl MessageText {
    /// Create a new MessageText.
    ///
    /// # Arguments
    ///
    /// * `text` - The raw draft; surrounding whitespace is removed
    ///
    /// # Returns
    ///
    /// A Result containing the MessageText or an error if validation fails
    pub fn new(text: String) -> Result<Self, ValueObjectError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValueObjectError::MessageTextEmpty);
        }
        let len = trimmed.chars().count();
        if len > MESSAGE_TEXT_MAX_CHARS {
            return Err(ValueObjectError::MessageTextTooLong {
                max: MESSAGE_TEXT_MAX_CHARS,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MessageText {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Message identifier assigned by the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(i64);

impl MessageId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

/// Timestamp value object.
///
/// Creation time of a message as reported by the remote store, in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Parse the remote store's wire representation.
    ///
    /// Returns `None` when the value cannot be interpreted.
    pub fn parse_wire(raw: &str) -> Option<Self> {
        parse_wire_timestamp(raw).map(Self)
    }

    /// `HH:MM` label in the given offset.
    pub fn clock_label(&self, offset: &FixedOffset) -> String {
        format_clock_label(&self.0, offset)
    }
}

/// Display colour tag attached to a message by the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarColor(String);

impl AvatarColor {
    /// Colour used when the remote store sends none.
    pub const FALLBACK: &'static str = "#0EA5E9";

    pub fn new(value: String) -> Self {
        if value.trim().is_empty() {
            return Self::default();
        }
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AvatarColor {
    fn default() -> Self {
        Self(Self::FALLBACK.to_string())
    }
}
