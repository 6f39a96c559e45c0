//! Polling engine: keeps the message store in step with the remote store.
//!
//! One background task per identified session. It fetches immediately,
//! then on every tick of a fixed interval, plus whenever [`PollingEngine::poll_now`]
//! is called. Each fetch runs as its own task so a slow request never holds
//! the timer back; whichever response lands last wins, which is safe because
//! every write is a full snapshot.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::Notify,
    task::{JoinHandle, JoinSet},
    time::MissedTickBehavior,
};

use crate::{session::state::SharedSessionState, usecase::FetchMessagesUseCase};

/// Handle to a running polling task, bound to the session's lifetime.
///
/// Dropping the handle cancels the timer and every in-flight fetch.
pub struct PollingEngine {
    task: JoinHandle<()>,
    trigger: Arc<Notify>,
    state: SharedSessionState,
    stopped: bool,
}

impl PollingEngine {
    /// Start polling on behalf of the session epoch `epoch`.
    pub fn start(
        fetch: Arc<FetchMessagesUseCase>,
        state: SharedSessionState,
        epoch: u64,
        interval: Duration,
    ) -> Self {
        let trigger = Arc::new(Notify::new());
        let task = tokio::spawn(run(fetch, epoch, interval, trigger.clone()));
        tracing::info!("Polling started (every {:?})", interval);
        Self {
            task,
            trigger,
            state,
            stopped: false,
        }
    }

    /// Request one fetch outside the regular schedule.
    ///
    /// The timer keeps its own cadence.
    pub fn poll_now(&self) {
        self.trigger.notify_one();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop polling.
    ///
    /// Once this returns no fetch started by this engine can write to the
    /// store anymore, even if its response is already on the wire.
    pub async fn stop(mut self) {
        self.state.lock().await.invalidate_epoch();
        self.task.abort();
        self.stopped = true;
        tracing::info!("Polling stopped");
    }
}

/// Dropping without [`PollingEngine::stop`] invalidates the epoch only if the
/// state lock is free right now. Otherwise it relies on abort alone: the
/// timer task and its in-flight fetches are cancelled at their next await
/// point and never get to write.
impl Drop for PollingEngine {
    fn drop(&mut self) {
        if self.stopped {
            return;
        }
        if let Ok(mut state) = self.state.try_lock() {
            state.invalidate_epoch();
        }
        self.task.abort();
        tracing::info!("Polling dropped");
    }
}

async fn run(
    fetch: Arc<FetchMessagesUseCase>,
    epoch: u64,
    period: Duration,
    trigger: Arc<Notify>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // Dropped with this task, which aborts the fetches still running.
    let mut in_flight = JoinSet::new();

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = trigger.notified() => {
                tracing::debug!("Out-of-cycle poll requested");
            }
            Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                if let Err(e) = joined
                    && e.is_panic()
                {
                    tracing::error!("Fetch task panicked: {}", e);
                }
                continue;
            }
        }

        let fetch = fetch.clone();
        in_flight.spawn(async move {
            // Failures are logged by the use case; the schedule carries on.
            let _ = fetch.execute(epoch).await;
        });
    }
}
