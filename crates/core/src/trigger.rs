//! Synchronous in-process trigger source.

use mapshelf_plugin::{SubscriptionId, TriggerEvent, TriggerHandler, TriggerSource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

/// Calls subscribers in subscription order on the emitting thread
#[derive(Default)]
pub struct EventBus {
    next_id: AtomicU64,
    handlers: Mutex<Vec<(SubscriptionId, TriggerHandler)>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: TriggerEvent) {
        // Handlers may subscribe or unsubscribe while running
        let handlers: Vec<TriggerHandler> = self
            .handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        debug!("Emitting {:?} to {} subscribers", event, handlers.len());
        for handler in handlers {
            handler(event);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl TriggerSource for EventBus {
    fn subscribe(&self, handler: TriggerHandler) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, handler));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.lock().unwrap_or_else(PoisonError::into_inner);
        let before = handlers.len();
        handlers.retain(|(existing, _)| *existing != id);
        handlers.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_emit_in_subscription_order() {
        let bus = EventBus::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second"] {
            let seen = seen.clone();
            bus.subscribe(Arc::new(move |event: TriggerEvent| {
                seen.lock().unwrap().push((tag, event));
            }));
        }

        bus.emit(TriggerEvent::SettingsChanged);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                ("first", TriggerEvent::SettingsChanged),
                ("second", TriggerEvent::SettingsChanged)
            ]
        );
    }

    #[test]
    fn test_unsubscribe() {
        let bus = EventBus::new();
        let id = bus.subscribe(Arc::new(|_: TriggerEvent| {}));

        assert_eq!(bus.subscriber_count(), 1);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        assert_eq!(bus.subscriber_count(), 0);
    }
}
