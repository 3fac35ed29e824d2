use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Envelope every provider endpoint answers with.
///
/// Top-level fields beyond `status`, `message` and `data` (Paystack's `meta`,
/// for instance) are carried in `extra` so the body re-serializes unchanged.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProviderResponse<T> {
    pub status: bool,
    pub message: String,
    pub data: T,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WebhookAck {
    pub status: String,
}

impl WebhookAck {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum VerifyPaymentResponse {
    Settled {
        status_of_payment: String,
        message: String,
    },
    Pending {
        status: String,
        message: String,
    },
}
