//! Event Publisher Implementation
//!
//! 基于 tokio broadcast 的批处理事件推送

use std::sync::Arc;
use tokio::sync::broadcast;

use crate::application::ports::{BatchEvent, BatchEventPublisherPort};

const DEFAULT_CAPACITY: usize = 256;

/// 事件发布器
pub struct EventPublisher {
    channel: broadcast::Sender<BatchEvent>,
}

impl EventPublisher {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { channel: tx }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 订阅之后发布的事件
    pub fn subscribe(&self) -> broadcast::Receiver<BatchEvent> {
        self.channel.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.channel.receiver_count()
    }
}

impl BatchEventPublisherPort for EventPublisher {
    fn publish(&self, event: BatchEvent) {
        let batch_id = event.batch_id();
        if let Err(e) = self.channel.send(event) {
            tracing::debug!(
                batch_id = %batch_id,
                error = %e,
                "Failed to publish batch event (no receivers)"
            );
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_subscriber_receives_events_in_order() {
        let publisher = EventPublisher::new();
        let mut rx = publisher.subscribe();
        let batch_id = Uuid::new_v4();

        publisher.publish(BatchEvent::BatchStarted {
            batch_id,
            total_files: 1,
        });
        publisher.publish(BatchEvent::BatchCompleted {
            batch_id,
            total_files: 1,
            total_splits: 4,
            message: "Successfully split all 1 files.".to_string(),
        });

        let first = rx.recv().await.unwrap();
        assert!(matches!(first, BatchEvent::BatchStarted { total_files: 1, .. }));
        let second = rx.recv().await.unwrap();
        assert!(second.is_terminal());
        assert_eq!(second.batch_id(), batch_id);
    }

    #[test]
    fn test_publish_without_receivers_is_silent() {
        let publisher = EventPublisher::new();
        assert_eq!(publisher.receiver_count(), 0);
        publisher.publish(BatchEvent::BatchStarted {
            batch_id: Uuid::new_v4(),
            total_files: 3,
        });
    }
}
