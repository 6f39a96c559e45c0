//! Port to the remote message store.
//!
//! The domain only knows this trait; the HTTP adapter lives in the
//! infrastructure layer (dependency inversion).

use async_trait::async_trait;

use super::{
    entity::{Message, OutgoingMessage},
    error::{FetchFailure, SendFailure},
};

/// The external store holding the authoritative message list.
///
/// Full-list semantics only: every fetch returns the complete current set.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteMessageStore: Send + Sync {
    /// Fetch the complete current message list, in the store's order.
    async fn fetch_messages(&self) -> Result<Vec<Message>, FetchFailure>;

    /// Write one message. Any 2xx answer counts as success.
    async fn post_message(&self, message: &OutgoingMessage) -> Result<(), SendFailure>;
}
