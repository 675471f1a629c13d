use crate::AppCommand;

use std::{collections::HashMap, time::Duration};

use swing_review_core::{RecordingId, media::DurationTimer};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

/// Single-shot duration timers as sleeping tokio tasks.
///
/// Expiry is reported as [`AppCommand::DurationElapsed`]. Cancelling aborts
/// the task; a firing already queued in the channel is left for the session
/// to ignore.
pub(crate) struct TokioTimer {
    command_tx: mpsc::Sender<AppCommand>,
    pending: HashMap<RecordingId, JoinHandle<()>>,
}

impl TokioTimer {
    pub(crate) fn new(command_tx: mpsc::Sender<AppCommand>) -> Self {
        Self {
            command_tx,
            pending: HashMap::new(),
        }
    }

    /// Timers armed and not yet fired or cancelled.
    pub(crate) fn pending(&self) -> usize {
        self.pending.values().filter(|task| !task.is_finished()).count()
    }
}

impl DurationTimer for TokioTimer {
    fn schedule(&mut self, recording: RecordingId, after: Duration) {
        self.pending.retain(|_, task| !task.is_finished());

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(e) => {
                warn!(error = %e, recording_id = %recording, "No async runtime, timer not armed");
                return;
            }
        };

        let command_tx = self.command_tx.clone();
        let task = handle.spawn(async move {
            tokio::time::sleep(after).await;
            if command_tx
                .send(AppCommand::DurationElapsed { recording })
                .await
                .is_err()
            {
                debug!(recording_id = %recording, "Timer fired after shutdown");
            }
        });

        if let Some(previous) = self.pending.insert(recording, task) {
            previous.abort();
        }

        debug!(
            recording_id = %recording,
            after_ms = after.as_millis() as u64,
            pending = self.pending(),
            "Timer armed"
        );
    }

    fn cancel(&mut self, recording: RecordingId) {
        if let Some(task) = self.pending.remove(&recording) {
            task.abort();
            debug!(recording_id = %recording, "Timer cancelled");
        }
    }
}
