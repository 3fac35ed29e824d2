use crate::{
    handlers::AppState,
    models::{WebhookAck, WebhookEvent},
};
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap},
    Json,
};
use tracing::instrument;

/// Accepts any provider callback, hands it to the sink and acknowledges it.
///
/// The payload is not authenticated or parsed; empty and malformed bodies get
/// the same answer as well-formed ones.
#[instrument(skip_all)]
pub async fn receive_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<WebhookAck> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let event = WebhookEvent::new(body, content_type);
    state.sink.record(&event);

    Json(WebhookAck::success())
}
