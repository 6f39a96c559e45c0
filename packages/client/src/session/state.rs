//! Session state and its shared handle.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{
    Composer, IdentityGate, MessageStore, composer::cap_input, value_object::DISPLAY_NAME_MAX_CHARS,
};

/// Everything one chat session owns.
///
/// All mutation goes through the single mutex in [`SharedSessionState`].
#[derive(Debug, Default)]
pub struct SessionState {
    /// Identity gate
    pub identity: IdentityGate,
    /// Messages received from the remote store
    pub store: MessageStore,
    /// Outgoing draft
    pub composer: Composer,
    /// Name typed on the name-entry screen, not yet confirmed
    name_input: String,
    /// Bumped when polling is stopped; fetches started under an older
    /// epoch must not write to the store
    epoch: u64,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the name-entry buffer. Input beyond 20 characters is cut off.
    pub fn set_name_input(&mut self, text: &str) {
        self.name_input = cap_input(text, DISPLAY_NAME_MAX_CHARS);
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Reject every write from fetches started before this call.
    pub fn invalidate_epoch(&mut self) {
        self.epoch += 1;
    }

    /// Whether a fetch started under `epoch` may still write.
    pub fn accepts_writes_from(&self, epoch: u64) -> bool {
        self.epoch == epoch && self.identity.is_identified()
    }
}

/// Shared handle to the session state
pub type SharedSessionState = Arc<Mutex<SessionState>>;
