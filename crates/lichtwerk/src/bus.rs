use tokio::sync::broadcast;

use crate::event::SiteEvent;

/// Fan-out channel for cross-view signals.
#[derive(Clone)]
pub struct Bus {
    sender: broadcast::Sender<SiteEvent>,
}

impl Bus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
        self.sender.subscribe()
    }

    /// Publish a signal to all current subscribers.
    ///
    /// Returns the number of subscribers reached; a signal with nobody
    /// listening is dropped, not an error.
    pub fn publish(&self, event: SiteEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}

impl Default for Bus {
    fn default() -> Self {
        Bus::new(16)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Duration};

    #[tokio::test]
    async fn publish_and_receive_signal() {
        let bus = Bus::new(8);
        let mut rx = bus.subscribe();

        assert_eq!(bus.publish(SiteEvent::ConsentChanged), 1);

        let received = timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("timeout")
            .expect("recv");
        assert_eq!(received, SiteEvent::ConsentChanged);
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_signal() {
        let bus = Bus::new(8);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        assert_eq!(bus.publish(SiteEvent::ConsentChanged), 2);

        assert_eq!(rx1.recv().await.expect("recv1"), SiteEvent::ConsentChanged);
        assert_eq!(rx2.recv().await.expect("recv2"), SiteEvent::ConsentChanged);
    }

    #[test]
    fn publish_without_subscribers_is_dropped() {
        let bus = Bus::new(8);
        assert_eq!(bus.publish(SiteEvent::ConsentChanged), 0);
    }
}
