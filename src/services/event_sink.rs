use crate::models::WebhookEvent;
use std::sync::Mutex;

/// Destination for received webhook events.
pub trait EventSink: Send + Sync {
    fn record(&self, event: &WebhookEvent);
}

/// Writes each event to the tracing subscriber as a single record.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn record(&self, event: &WebhookEvent) {
        let event_type = event.event_type();
        let event_type = event_type.as_deref().unwrap_or("unknown");
        let content_type = event.content_type.as_deref().unwrap_or("-");
        let received_at = event.received_at.to_rfc3339();
        let data = event.body_text();

        match event.charge_summary() {
            Some(charge) => tracing::info!(
                event_type,
                content_type,
                bytes = event.body.len(),
                %received_at,
                payment_id = %charge.id,
                amount = %charge.amount,
                currency = %charge.currency,
                status = %charge.status,
                %data,
                "Received webhook data"
            ),
            None => tracing::info!(
                event_type,
                content_type,
                bytes = event.body.len(),
                %received_at,
                %data,
                "Received webhook data"
            ),
        }
    }
}

/// Keeps events in memory, mostly useful for tests.
#[derive(Debug, Default)]
pub struct MemoryEventSink {
    events: Mutex<Vec<WebhookEvent>>,
}

impl MemoryEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<WebhookEvent> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<WebhookEvent>> {
        self.events.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl EventSink for MemoryEventSink {
    fn record(&self, event: &WebhookEvent) {
        self.lock().push(event.clone());
    }
}
