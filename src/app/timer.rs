//! Deferred "processing" transitions.
//!
//! Each transition is a tokio task that sleeps for the configured delay and
//! then posts [`AppEvent::TransitionDue`]. What the transition does lives in
//! `AppState::pending_transitions`; the task only carries the id. An id that
//! is no longer pending when its event arrives is ignored.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

use crate::app::event::{AppEvent, TimerId};
use crate::auth::session::Registration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Start the candidate session for an accepted registration.
    FinishRegistration(Registration),
    /// Promote the pending staff user after the password change.
    FinishFirstLogin,
    /// Close the forgot-password dialog.
    FinishRecovery,
}

pub struct TransitionScheduler {
    event_tx: UnboundedSender<AppEvent>,
    tasks: HashMap<TimerId, JoinHandle<()>>,
}

impl TransitionScheduler {
    pub fn new(event_tx: UnboundedSender<AppEvent>) -> Self {
        Self {
            event_tx,
            tasks: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, id: TimerId, delay: Duration) {
        self.tasks.retain(|_, handle| !handle.is_finished());
        let tx = self.event_tx.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(AppEvent::TransitionDue { id });
        });
        tracing::debug!(id, delay_ms = delay.as_millis() as u64, "transition scheduled");
        self.tasks.insert(id, handle);
    }

    pub fn cancel(&mut self, id: TimerId) {
        if let Some(handle) = self.tasks.remove(&id) {
            handle.abort();
            tracing::debug!(id, "transition cancelled");
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    #[tokio::test]
    async fn test_due_event_fires_after_delay() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TransitionScheduler::new(tx);
        scheduler.schedule(7, Duration::from_millis(10));
        match rx.recv().await {
            Some(AppEvent::TransitionDue { id }) => assert_eq!(id, 7),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancelled_transition_never_fires() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut scheduler = TransitionScheduler::new(tx);
        scheduler.schedule(1, Duration::from_millis(20));
        scheduler.schedule(2, Duration::from_millis(40));
        scheduler.cancel(1);
        match rx.recv().await {
            Some(AppEvent::TransitionDue { id }) => assert_eq!(id, 2),
            other => panic!("unexpected event: {:?}", other),
        }
        scheduler.cancel_all();
        assert!(scheduler.tasks.is_empty());
    }
}
