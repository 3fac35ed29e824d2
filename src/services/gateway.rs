use crate::{
    config::{Config, Provider},
    error::GatewayError,
    models::{InitializeData, ProviderResponse, TransactionRequest, VerificationData},
    services::{KoraPayClient, PaystackClient},
};
use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Outbound calls to the payment provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn initialize_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<ProviderResponse<InitializeData>, GatewayError>;

    async fn verify_transaction(
        &self,
        reference: &str,
    ) -> Result<ProviderResponse<VerificationData>, GatewayError>;
}

/// The client for whichever provider the configuration selects.
pub fn gateway_from_config(config: &Config) -> Arc<dyn PaymentGateway> {
    match config.provider {
        Provider::Paystack => Arc::new(PaystackClient::from_config(config)),
        Provider::KoraPay => Arc::new(KoraPayClient::from_config(config)),
    }
}

/// Appends `segments` to `base_url`, percent-encoding each one so it stays a
/// single path segment.
pub(crate) fn endpoint<'a, I>(base_url: &str, segments: I) -> Result<Url, GatewayError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url =
        Url::parse(base_url).map_err(|e| GatewayError::InvalidUrl(format!("{base_url}: {e}")))?;
    url.path_segments_mut()
        .map_err(|_| GatewayError::InvalidUrl(base_url.to_string()))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Rejects references that cannot be sent as a path segment.
pub(crate) fn check_reference(reference: &str) -> Result<&str, GatewayError> {
    match reference {
        "" | "." | ".." => Err(GatewayError::InvalidReference(reference.to_string())),
        _ => Ok(reference),
    }
}

pub(crate) async fn parse_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    let body = response.error_for_status()?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
