use crate::{error::PayhookError, handlers::AppState, models::VerifyPaymentResponse};
use axum::{
    extract::{Path, State},
    Json,
};
use tracing::instrument;

#[instrument(skip(state))]
pub async fn verify_payment(
    State(state): State<AppState>,
    Path(reference): Path<String>,
) -> Result<Json<VerifyPaymentResponse>, PayhookError> {
    let verification = state.gateway.verify_transaction(&reference).await?;
    let message = verification.message;

    if verification.data.is_settled() {
        tracing::info!(status = %verification.data.status, "Payment verification completed");
        Ok(Json(VerifyPaymentResponse::Settled {
            status_of_payment: verification.data.status,
            message,
        }))
    } else {
        tracing::info!("Payment still pending");
        Ok(Json(VerifyPaymentResponse::Pending {
            status: "pending".to_string(),
            message,
        }))
    }
}
