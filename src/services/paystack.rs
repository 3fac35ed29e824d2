use crate::{
    config::Config,
    error::GatewayError,
    models::{InitializeData, ProviderResponse, TransactionRequest, VerificationData},
    services::gateway::{check_reference, endpoint, parse_response, PaymentGateway},
};
use async_trait::async_trait;
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct PaystackClient {
    client: reqwest::Client,
    base_url: String,
    secret_key: Option<String>,
}

/// Wire body of `POST /transaction/initialize`.
#[derive(Debug, Serialize)]
struct InitializeBody<'a> {
    amount: u64,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    currency: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reference: Option<&'a str>,
}

impl<'a> From<&'a TransactionRequest> for InitializeBody<'a> {
    fn from(request: &'a TransactionRequest) -> Self {
        Self {
            amount: request.amount,
            email: &request.email,
            currency: request.currency.as_deref(),
            reference: request.reference.as_deref(),
        }
    }
}

impl PaystackClient {
    const SECRET_KEY_VAR: &'static str = "PAYSTACK_SECRET_KEY";

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
impl PaymentGateway for PaystackClient {
    async fn initialize_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<ProviderResponse<InitializeData>, GatewayError> {
        let secret_key = self.secret_key()?;
        let url = endpoint(&self.base_url, ["transaction", "initialize"])?;
        let body = InitializeBody::from(request);
        tracing::debug!(
            %url,
            amount = body.amount,
            reference = body.reference.unwrap_or("-"),
            "Paystack transaction initialize request"
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
            "Paystack transaction initialized"
        );
        Ok(response)
    }

    async fn verify_transaction(
        &self,
        reference: &str,
    ) -> Result<ProviderResponse<VerificationData>, GatewayError> {
        let secret_key = self.secret_key()?;
        let reference = check_reference(reference)?;
        let url = endpoint(&self.base_url, ["transaction", "verify", reference])?;
        tracing::debug!(%url, "Paystack transaction verify request");

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
            "Verified Paystack payment"
        );
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use tokio_test::assert_err;

    const SECRET: &str = "sk_test_secret";

    fn initialize_body() -> serde_json::Value {
        json!({
            "status": true,
            "message": "Authorization URL created",
            "data": {
                "authorization_url": "https://checkout.paystack.com/0peioxfhpn",
                "access_code": "0peioxfhpn",
                "reference": "7PVGX8MEk85tgeEpVDtD",
                "expires_at": "2026-10-20T12:00:00.000Z"
            },
            "meta": {"request_id": "req_1"}
        })
    }

    #[test]
    fn minimal_request_serializes_amount_and_email_only() {
        let request = TransactionRequest::new(10000, "test@example.com").with_customer_name("Ada");
        assert_eq!(
            serde_json::to_string(&InitializeBody::from(&request)).unwrap(),
            r#"{"amount":10000,"email":"test@example.com"}"#
        );
    }

    #[tokio::test]
    async fn initialize_sends_one_authenticated_request_and_returns_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/transaction/initialize")
            .match_header("authorization", "Bearer sk_test_secret")
            .match_header("content-type", "application/json")
            .match_body(Matcher::JsonString(
                r#"{"amount":10000,"email":"test@example.com"}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(initialize_body().to_string())
            .expect(1)
            .create_async()
            .await;

        let client = PaystackClient::new(server.url(), Some(SECRET.to_string()));
        let response = client
            .initialize_transaction(&TransactionRequest::new(10000, "test@example.com"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(serde_json::to_value(&response).unwrap(), initialize_body());
        assert!(!response.data.reference.is_empty());
        assert_eq!(response.data.access_code(), Some("0peioxfhpn"));
    }

    #[tokio::test]
    async fn optional_fields_are_sent_when_present() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/transaction/initialize")
            .match_body(Matcher::Json(json!({
                "amount": 2000,
                "email": "chidi@gmail.com",
                "currency": "NGN",
                "reference": "PAYSTACK-20261019120000-abc",
            })))
            .with_status(200)
            .with_body(initialize_body().to_string())
            .expect(1)
            .create_async()
            .await;

        let client = PaystackClient::new(server.url(), Some(SECRET.to_string()));
        let request = TransactionRequest::new(2000, "chidi@gmail.com")
            .with_currency("NGN")
            .with_reference("PAYSTACK-20261019120000-abc");
        client.initialize_transaction(&request).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_surfaces_as_request_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/transaction/initialize")
            .with_status(401)
            .with_body(r#"{"status":false,"message":"Invalid key"}"#)
            .expect(1)
            .create_async()
            .await;

        let client = PaystackClient::new(server.url(), Some(SECRET.to_string()));
        let err = client
            .initialize_transaction(&TransactionRequest::new(500, "a@b.co"))
            .await
            .unwrap_err();

        mock.assert_async().await;
        match err {
            GatewayError::Request(e) => {
                assert_eq!(e.status(), Some(reqwest::StatusCode::UNAUTHORIZED))
            }
            other => panic!("expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unexpected_body_surfaces_as_decode_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/transaction/initialize")
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let client = PaystackClient::new(server.url(), Some(SECRET.to_string()));
        let err = client
            .initialize_transaction(&TransactionRequest::new(500, "a@b.co"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Decode(_)));
    }

    #[tokio::test]
    async fn missing_secret_key_sends_nothing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/transaction/initialize")
            .expect(0)
            .create_async()
            .await;

        let client = PaystackClient::new(server.url(), None);
        let result = client
            .initialize_transaction(&TransactionRequest::new(500, "a@b.co"))
            .await;

        assert!(matches!(
            result,
            Err(GatewayError::MissingSecretKey("PAYSTACK_SECRET_KEY"))
        ));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn verify_issues_single_get_for_reference() {
        let body = json!({
            "status": true,
            "message": "Verification successful",
            "data": {
                "status": "success",
                "reference": "PAYSTACK-1",
                "amount": 200000,
                "currency": "NGN",
                "gateway_response": "Successful",
                "paid_at": "2026-10-19T12:00:00.000Z",
                "channel": "card"
            }
        });
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/transaction/verify/PAYSTACK-1")
            .match_header("authorization", "Bearer sk_test_secret")
            .with_status(200)
            .with_body(body.to_string())
            .expect(1)
            .create_async()
            .await;

        let client = PaystackClient::new(format!("{}/", server.url()), Some(SECRET.to_string()));
        let response = client.verify_transaction("PAYSTACK-1").await.unwrap();

        mock.assert_async().await;
        assert!(response.status);
        assert!(response.data.is_settled());
        assert_eq!(response.data.amount(), Some(&json!(200000)));
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
    }

    #[tokio::test]
    async fn verify_keeps_reference_inside_its_path_segment() {
        let mut server = mockito::Server::new_async().await;
        let escaped = server
            .mock("GET", "/transaction/verify/abc%3Fx=1")
            .with_status(200)
            .with_body(
                json!({
                    "status": true,
                    "message": "Verification successful",
                    "data": {"status": "failed", "reference": "abc?x=1"}
                })
                .to_string(),
            )
            .expect(1)
            .create_async()
            .await;
        let traversed = server
            .mock("GET", "/transaction/verify/..%2Finitialize")
            .with_status(404)
            .expect(1)
            .create_async()
            .await;
        let truncated = server
            .mock("GET", "/transaction/verify/abc")
            .expect(0)
            .create_async()
            .await;
        let initialize = server
            .mock("GET", "/transaction/initialize")
            .expect(0)
            .create_async()
            .await;

        let client = PaystackClient::new(server.url(), Some(SECRET.to_string()));
        let response = client.verify_transaction("abc?x=1").await.unwrap();
        assert_eq!(response.data.status, "failed");
        assert_err!(client.verify_transaction("../initialize").await);

        escaped.assert_async().await;
        traversed.assert_async().await;
        truncated.assert_async().await;
        initialize.assert_async().await;
    }

    #[tokio::test]
    async fn dot_reference_sends_nothing() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = PaystackClient::new(server.url(), Some(SECRET.to_string()));
        let result = client.verify_transaction("..").await;

        assert!(matches!(result, Err(GatewayError::InvalidReference(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn verify_not_found_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/transaction/verify/missing")
            .with_status(404)
            .with_body(r#"{"status":false,"message":"Transaction reference not found"}"#)
            .create_async()
            .await;

        let client = PaystackClient::new(server.url(), Some(SECRET.to_string()));
        assert_err!(client.verify_transaction("missing").await);
    }
}
