//! Domain layer for the chat client.
//!
//! This module contains the session's state logic (identity gate, message
//! cache, composer) independent of HTTP DTOs and the async runtime.

pub mod composer;
pub mod entity;
pub mod error;
pub mod identity;
pub mod message_store;
pub mod repository;
pub mod value_object;

pub use composer::{Composer, KeyGesture};
pub use entity::{Message, OutgoingMessage};
pub use error::{FetchFailure, IdentityError, SendFailure, ValueObjectError};
pub use identity::IdentityGate;
pub use message_store::MessageStore;
pub use repository::RemoteMessageStore;
pub use value_object::{AvatarColor, DisplayName, MessageId, MessageText, Timestamp};
