use ph_core::Notification;

use tokio::sync::broadcast;

/// Fire-and-forget fan-out of operator notifications.
///
/// There is no return value: a notification nobody receives is simply gone.
pub trait Broadcaster: Send + Sync {
    fn broadcast(&self, notification: Notification);
}

/// Process-wide notification channel shared by every connected observer.
#[derive(Clone)]
pub struct OperationsBroadcaster {
    sender: broadcast::Sender<Notification>,
}

impl OperationsBroadcaster {
    /// A capacity of zero is raised to one.
    pub fn new(channel_capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(channel_capacity.max(1));
        Self { sender }
    }

    /// Subscribe to all notifications sent from now on
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        let receiver = self.sender.subscribe();

        log::debug!(
            "Observer subscribed to notifications ({} total observers)",
            self.sender.receiver_count()
        );

        receiver
    }

    pub fn observer_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Broadcaster for OperationsBroadcaster {
    fn broadcast(&self, notification: Notification) {
        let severity = notification.severity;

        match self.sender.send(notification) {
            Ok(receiver_count) => {
                log::debug!(
                    "Broadcast {} notification ({} receivers)",
                    severity,
                    receiver_count
                );
            }
            Err(_) => {
                // No active receivers
                log::debug!("Broadcast {} notification had no active receivers", severity);
            }
        }
    }
}
