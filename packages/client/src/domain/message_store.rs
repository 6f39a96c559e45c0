//! Client-side cache of the messages received from the remote store.

use std::collections::HashSet;

use super::{entity::Message, value_object::MessageId};

/// Ordered message cache, deduplicated by id.
///
/// Contents are only ever replaced by a full snapshot from the remote
/// store. `revision` increases every time the visible sequence changes and
/// is what the view layer watches to re-render and scroll.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStore {
    messages: Vec<Message>,
    revision: u64,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with `snapshot`, keeping the server's order.
    ///
    /// Repeated ids inside the snapshot keep their first occurrence only.
    /// Returns `true` if the stored sequence changed; applying the same
    /// snapshot twice changes nothing the second time.
    pub fn replace_with_snapshot(&mut self, snapshot: Vec<Message>) -> bool {
        let received = snapshot.len();
        let mut seen = HashSet::with_capacity(received);
        let deduped: Vec<Message> = snapshot
            .into_iter()
            .filter(|message| seen.insert(message.id))
            .collect();

        if deduped.len() != received {
            tracing::warn!(
                "Snapshot contained {} duplicate message id(s); keeping first occurrences",
                received - deduped.len()
            );
        }

        if deduped == self.messages {
            return false;
        }
        self.messages = deduped;
        self.revision += 1;
        true
    }

    /// Messages in server order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn ids(&self) -> Vec<MessageId> {
        self.messages.iter().map(|message| message.id).collect()
    }

    pub fn latest(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}
