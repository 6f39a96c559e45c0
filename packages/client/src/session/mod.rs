//! Chat session: one mounted chat component and everything it owns.
//!
//! The session is created when the chat is entered and torn down when it is
//! left. Identity, message cache and draft live only as long as it does.

pub mod state;

use std::{sync::Arc, time::Duration};

use chrono::FixedOffset;
use tokio::sync::{Mutex, watch};

use crate::{
    domain::{
        DisplayName, IdentityError, KeyGesture, MessageStore, RemoteMessageStore, SendFailure,
    },
    polling::PollingEngine,
    ui::{ChatView, Screen},
    usecase::{FetchMessagesUseCase, SendMessageUseCase, SendOutcome},
};

use self::state::{SessionState, SharedSessionState};

/// Result of a key gesture, for the front end to react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The gesture does not submit anything
    Ignored,
    IdentityConfirmed(DisplayName),
    IdentityRejected(IdentityError),
    Sent,
    /// Nothing to send (blank draft)
    SendSkipped,
    /// The draft is kept for a retry
    SendFailed(SendFailure),
}

pub struct ChatSession {
    state: SharedSessionState,
    fetch: Arc<FetchMessagesUseCase>,
    send: SendMessageUseCase,
    poll_interval: Duration,
    engine: Option<PollingEngine>,
    updates: watch::Sender<u64>,
}

impl ChatSession {
    /// Mount a new session in the `Anonymous` state. Nothing is fetched yet.
    pub fn new(repository: Arc<dyn RemoteMessageStore>, poll_interval: Duration) -> Self {
        let state: SharedSessionState = Arc::new(Mutex::new(SessionState::new()));
        let (updates, _) = watch::channel(0);
        let fetch = Arc::new(FetchMessagesUseCase::new(
            repository.clone(),
            state.clone(),
            updates.clone(),
        ));
        let send = SendMessageUseCase::new(repository, state.clone());
        Self {
            state,
            fetch,
            send,
            poll_interval,
            engine: None,
            updates,
        }
    }

    /// Confirm the display name and start polling.
    ///
    /// # Errors
    ///
    /// Returns `IdentityError` if the trimmed name is empty or too long, or
    /// if a name was already confirmed. The session stays as it was.
    pub async fn confirm_identity(&mut self, input: &str) -> Result<DisplayName, IdentityError> {
        let (name, epoch) = {
            let mut state = self.state.lock().await;
            let name = state.identity.confirm(input).inspect_err(|e| {
                tracing::warn!("Rejected display name: {}", e);
            })?;
            (name, state.epoch())
        };
        tracing::info!("Joined the chat as '{}'", name);

        self.engine = Some(PollingEngine::start(
            self.fetch.clone(),
            self.state.clone(),
            epoch,
            self.poll_interval,
        ));
        // Let subscribers draw the (possibly empty) chat right away.
        self.updates.send_modify(|_| {});
        Ok(name)
    }

    /// Replace the name-entry buffer (capped at 20 characters).
    pub async fn set_name_input(&self, text: &str) {
        self.state.lock().await.set_name_input(text);
    }

    /// Replace the draft (capped at 500 characters).
    pub async fn set_draft(&self, text: &str) {
        self.state.lock().await.composer.set_draft(text);
    }

    pub async fn draft(&self) -> String {
        self.state.lock().await.composer.draft().to_string()
    }

    /// React to a key gesture from the current input field.
    ///
    /// Confirm submits the name while anonymous and the draft afterwards.
    /// Newline never submits.
    pub async fn handle_key(&mut self, gesture: KeyGesture) -> KeyOutcome {
        if !gesture.submits() {
            return KeyOutcome::Ignored;
        }

        let pending_name = {
            let state = self.state.lock().await;
            (!state.identity.is_identified()).then(|| state.name_input().to_string())
        };
        if let Some(name) = pending_name {
            return match self.confirm_identity(&name).await {
                Ok(name) => KeyOutcome::IdentityConfirmed(name),
                Err(e) => KeyOutcome::IdentityRejected(e),
            };
        }

        match self.submit().await {
            Ok(SendOutcome::Sent) => KeyOutcome::Sent,
            Ok(SendOutcome::Skipped) => KeyOutcome::SendSkipped,
            Err(e) => KeyOutcome::SendFailed(e),
        }
    }

    /// Send the draft.
    ///
    /// On success the draft is cleared and one out-of-cycle fetch is
    /// requested so the message shows up without waiting for the timer.
    pub async fn submit(&self) -> Result<SendOutcome, SendFailure> {
        let outcome = self.send.execute().await?;
        if outcome == SendOutcome::Sent {
            self.poll_now();
        }
        Ok(outcome)
    }

    /// Request an out-of-cycle fetch. No-op before the identity is confirmed.
    pub fn poll_now(&self) {
        if let Some(engine) = &self.engine {
            engine.poll_now();
        }
    }

    /// What to show right now, with clock labels in `offset`.
    pub async fn screen(&self, offset: &FixedOffset) -> Screen {
        let state = self.state.lock().await;
        match state.identity.display_name() {
            Some(me) => Screen::Chat(ChatView::render(&state.store, me, offset)),
            None => Screen::NameEntry {
                name_input: state.name_input().to_string(),
            },
        }
    }

    /// Receiver that changes whenever the store's revision does.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.updates.subscribe()
    }

    /// Copy of the current message store.
    pub async fn messages(&self) -> MessageStore {
        self.state.lock().await.store.clone()
    }

    pub async fn display_name(&self) -> Option<DisplayName> {
        self.state.lock().await.identity.display_name().cloned()
    }

    pub fn is_polling(&self) -> bool {
        self.engine.as_ref().is_some_and(PollingEngine::is_running)
    }

    /// Tear the session down: stop the timer and reject late responses.
    pub async fn shutdown(&mut self) {
        if let Some(engine) = self.engine.take() {
            engine.stop().await;
        }
    }
}
