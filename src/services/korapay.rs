use crate::{
    config::Config,
    error::GatewayError,
    models::{InitializeData, ProviderResponse, TransactionRequest, VerificationData},
    services::{
        gateway::{check_reference, endpoint, parse_response, PaymentGateway},
        generate_reference,
    },
};
use async_trait::async_trait;
use serde::Serialize;

/// KoraPay checkout client.
///
/// KoraPay expects the amount in major units, a currency and a merchant
/// reference on every charge, so those are filled in when the request lacks them.
#[derive(Debug, Clone)]
pub struct KoraPayClient {
    client: reqwest::Client,
    base_url: String,
    secret_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ChargeBody<'a> {
    amount: f64,
    currency: &'a str,
    reference: String,
    customer: Customer<'a>,
}

#[derive(Debug, Serialize)]
struct Customer<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    email: &'a str,
}

impl<'a> From<&'a TransactionRequest> for ChargeBody<'a> {
    fn from(request: &'a TransactionRequest) -> Self {
        Self {
            amount: request.amount as f64 / 100.0,
            currency: request
                .currency
                .as_deref()
                .unwrap_or(KoraPayClient::DEFAULT_CURRENCY),
            reference: request
                .reference
                .clone()
                .unwrap_or_else(|| generate_reference("korapay")),
            customer: Customer {
                name: request.customer_name.as_deref(),
                email: &request.email,
            },
        }
    }
}

impl KoraPayClient {
    const SECRET_KEY_VAR: &'static str = "KORAPAY_SECRET_KEY";
    const DEFAULT_CURRENCY: &'static str = "NGN";

    pub fn new(base_url: impl Into<String>, secret_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            secret_key,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone(), config.secret_key.clone())
    }

    fn secret_key(&self) -> Result<&str, GatewayError> {
        self.secret_key
            .as_deref()
            .ok_or(GatewayError::MissingSecretKey(Self::SECRET_KEY_VAR))
    }
}

#[async_trait]
impl PaymentGateway for KoraPayClient {
    async fn initialize_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<ProviderResponse<InitializeData>, GatewayError> {
        let secret_key = self.secret_key()?;
        let url = endpoint(&self.base_url, ["charges", "initialize"])?;
        let body = ChargeBody::from(request);
        tracing::debug!(
            %url,
            amount = body.amount,
            currency = body.currency,
            reference = %body.reference,
            "KoraPay charge initialize request"
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(secret_key)
            .json(&body)
            .send()
            .await?;
        let response: ProviderResponse<InitializeData> = parse_response(response).await?;

        tracing::debug!(
            reference = %response.data.reference,
            message = %response.message,
            "KoraPay charge initialized"
        );
        Ok(response)
    }

    async fn verify_transaction(
        &self,
        reference: &str,
    ) -> Result<ProviderResponse<VerificationData>, GatewayError> {
        let secret_key = self.secret_key()?;
        let reference = check_reference(reference)?;
        let url = endpoint(&self.base_url, ["charges", reference])?;
        tracing::debug!(%url, "KoraPay charge query request");

        let response = self
            .client
            .get(url)
            .bearer_auth(secret_key)
            .send()
            .await?;
        let response: ProviderResponse<VerificationData> = parse_response(response).await?;

        tracing::info!(
            %reference,
            status = %response.data.status,
            "Verified KoraPay payment"
        );
        Ok(response)
    }
}
