use shared_types::ChatEvent;
use tokio::sync::broadcast;

/// Buffered events per subscriber before the oldest are dropped.
const EVENT_BUFFER: usize = 64;

/// Fan-out point between the realtime channel and the pages consuming it.
///
/// The listener coroutine publishes every event it pulls off the wire;
/// each mounted page holds a [`Subscription`] and merges what it receives
/// into its own state. Subscriptions are owned handles: subscribe on
/// mount, drop on unmount — there is no registration flag to forget.
#[derive(Clone)]
pub struct EventHub {
    tx: broadcast::Sender<ChatEvent>,
}

impl Default for EventHub {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(EVENT_BUFFER);
        Self { tx }
    }

    /// Deliver an event to every live subscription. Returns the number of
    /// subscribers that received it (zero when no page is mounted — the
    /// event is simply dropped, there is no offline queue).
    pub fn publish(&self, event: ChatEvent) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.tx.subscribe(),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

/// An owned handle on the event stream. Dropping it unsubscribes.
pub struct Subscription {
    rx: broadcast::Receiver<ChatEvent>,
}

impl Subscription {
    /// Next event, or `None` once the hub is gone. A slow consumer that
    /// lagged past the buffer skips ahead to the oldest retained event
    /// rather than erroring out.
    pub async fn next(&mut self) -> Option<ChatEvent> {
        loop {
            match self.rx.recv().await {
                Ok(event) => return Some(event),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "subscription lagged, skipping ahead");
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }

    /// Drain whatever is immediately available without waiting.
    pub fn drain(&mut self) -> Vec<ChatEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "subscription lagged, skipping ahead");
                }
                Err(_) => break,
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::ChatRoom;

    fn room_event(id: i64) -> ChatEvent {
        ChatEvent::RoomUpdated {
            room: ChatRoom {
                id,
                name: format!("room-{id}"),
                topic: String::new(),
                school_id: None,
                member_count: 0,
                latest_message: None,
            },
        }
    }

    #[test]
    fn publish_without_subscribers_is_a_no_op() {
        let hub = EventHub::new();
        assert_eq!(hub.publish(room_event(1)), 0);
    }

    #[test]
    fn each_subscription_receives_every_event() {
        let hub = EventHub::new();
        let mut a = hub.subscribe();
        let mut b = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 2);

        assert_eq!(hub.publish(room_event(1)), 2);
        assert_eq!(hub.publish(room_event(2)), 2);

        assert_eq!(a.drain().len(), 2);
        assert_eq!(b.drain().len(), 2);
    }

    #[test]
    fn dropping_the_handle_unsubscribes() {
        let hub = EventHub::new();
        let sub = hub.subscribe();
        assert_eq!(hub.subscriber_count(), 1);
        drop(sub);
        assert_eq!(hub.subscriber_count(), 0);
        assert_eq!(hub.publish(room_event(1)), 0);
    }

    #[tokio::test]
    async fn next_yields_published_events_in_order() {
        let hub = EventHub::new();
        let mut sub = hub.subscribe();
        hub.publish(room_event(1));
        hub.publish(room_event(2));

        let first = sub.next().await.unwrap();
        let second = sub.next().await.unwrap();
        match (first, second) {
            (ChatEvent::RoomUpdated { room: r1 }, ChatEvent::RoomUpdated { room: r2 }) => {
                assert_eq!(r1.id, 1);
                assert_eq!(r2.id, 2);
            }
            other => panic!("unexpected events: {:?}", other),
        }
    }
}
