//! HTTP request/response DTOs for the remote message store.

use serde::{Deserialize, Serialize};

use crate::domain::{AvatarColor, Message, MessageId, OutgoingMessage, Timestamp};

/// Body of `GET <endpoint>`
///
/// A missing or null `messages` field means "no messages".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageListDto {
    #[serde(default)]
    pub messages: Option<Vec<MessageDto>>,
}

impl MessageListDto {
    pub fn into_domain(self) -> Vec<Message> {
        self.messages
            .unwrap_or_default()
            .into_iter()
            .map(Message::from)
            .collect()
    }
}

/// One message as stored remotely
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: i64,
    pub username: String,
    pub text: String,
    #[serde(default)]
    pub timestamp: Option<String>, // ISO 8601
    #[serde(default)]
    pub avatar_color: Option<String>,
}

impl From<MessageDto> for Message {
    fn from(dto: MessageDto) -> Self {
        Message::new(
            MessageId::new(dto.id),
            dto.username,
            dto.text,
            dto.timestamp.as_deref().and_then(Timestamp::parse_wire),
            dto.avatar_color.map(AvatarColor::new).unwrap_or_default(),
        )
    }
}

/// Body of `POST <endpoint>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMessageDto {
    pub username: String,
    pub text: String,
}

impl From<&OutgoingMessage> for PostMessageDto {
    fn from(message: &OutgoingMessage) -> Self {
        Self {
            username: message.author.as_str().to_string(),
            text: message.text.as_str().to_string(),
        }
    }
}
