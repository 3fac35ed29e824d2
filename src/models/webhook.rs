use axum::body::Bytes;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// A provider callback exactly as it arrived.
#[derive(Debug, Clone)]
pub struct WebhookEvent {
    pub body: Bytes,
    pub content_type: Option<String>,
    pub received_at: DateTime<Utc>,
}

/// Payment details of a `charge.success` callback, rendered for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeSummary {
    pub id: String,
    pub amount: String,
    pub currency: String,
    pub status: String,
}

impl WebhookEvent {
    pub fn new(body: Bytes, content_type: Option<String>) -> Self {
        Self {
            body,
            content_type,
            received_at: Utc::now(),
        }
    }

    /// Raw body as text, with invalid UTF-8 replaced.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The top-level `"event"` field, if the body is a JSON object carrying one.
    pub fn event_type(&self) -> Option<String> {
        let value = self.json()?;
        value.get("event")?.as_str().map(str::to_owned)
    }

    pub fn charge_summary(&self) -> Option<ChargeSummary> {
        let value = self.json()?;
        if value.get("event")?.as_str()? != "charge.success" {
            return None;
        }
        let data = value.get("data")?;
        let field = |name: &str| match data.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "-".to_string(),
            Some(other) => other.to_string(),
        };

        Some(ChargeSummary {
            id: field("id"),
            amount: field("amount"),
            currency: field("currency"),
            status: field("status"),
        })
    }

    fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }
}
