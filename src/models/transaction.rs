use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the caller wants charged. Each provider client turns it into its own wire body.
///
/// `amount` is in the minor currency unit (kobo, cents, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub amount: u64,
    pub email: String,
    pub currency: Option<String>,
    pub reference: Option<String>,
    pub customer_name: Option<String>,
}

impl TransactionRequest {
    pub fn new(amount: u64, email: impl Into<String>) -> Self {
        Self {
            amount,
            email: email.into(),
            currency: None,
            reference: None,
            customer_name: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn with_customer_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name = Some(name.into());
        self
    }
}

/// `data` of an initialize response. Fields other than `reference` are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitializeData {
    pub reference: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl InitializeData {
    /// Checkout page; Paystack calls it `authorization_url`, KoraPay `checkout_url`.
    pub fn authorization_url(&self) -> Option<&str> {
        self.str_field("authorization_url")
            .or_else(|| self.str_field("checkout_url"))
    }

    pub fn access_code(&self) -> Option<&str> {
        self.str_field("access_code")
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.extra.get(name).and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationData {
    pub status: String,
    pub reference: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl VerificationData {
    /// A transaction is settled once the provider reports anything but pending.
    pub fn is_settled(&self) -> bool {
        !matches!(self.status.as_str(), "" | "pending" | "processing")
    }

    pub fn amount(&self) -> Option<&Value> {
        self.extra.get("amount")
    }

    pub fn currency(&self) -> Option<&str> {
        self.extra.get("currency").and_then(Value::as_str)
    }
}
