//! Change notifications for consumers of the tracking data.
//!
//! Notifications carry no data. A subscriber that receives one re-reads
//! whatever it displays.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::{RecvError, TryRecvError};

/// What kind of write produced a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeEvent {
    /// The dataset was saved (including appends)
    Saved,
    /// The dataset was replaced from a backup
    Restored,
    /// Legacy data was moved into the current store
    Migrated,
}

/// Broadcasts change events to every live subscription.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        // Create channel with buffer of 16 messages
        let (sender, _) = broadcast::channel(16);
        Self { sender }
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            receiver: self.sender.subscribe(),
        }
    }

    /// Returns how many subscriptions were notified.
    pub fn notify(&self, event: ChangeEvent) -> usize {
        match self.sender.send(event) {
            Ok(receivers) => receivers,
            Err(_) => {
                tracing::trace!("No subscribers for {:?}", event);
                0
            }
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

/// A consumer's registration for change events.
///
/// Dropping it (or calling [`Subscription::unsubscribe`]) ends the
/// subscription.
#[derive(Debug)]
pub struct Subscription {
    receiver: broadcast::Receiver<ChangeEvent>,
}

impl Subscription {
    /// Waits for the next change. Returns `None` once the notifier is gone.
    pub async fn changed(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.receiver.recv().await {
                Ok(event) => return Some(event),
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!("Subscriber lagged, {} change event(s) collapsed", skipped);
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Returns a pending change without waiting.
    pub fn try_changed(&mut self) -> Option<ChangeEvent> {
        loop {
            match self.receiver.try_recv() {
                Ok(event) => return Some(event),
                Err(TryRecvError::Lagged(_)) => continue,
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => return None,
            }
        }
    }

    pub fn unsubscribe(self) {}
}
