pub mod home;
pub mod verify;
pub mod webhook;

pub use home::*;
pub use verify::*;
pub use webhook::*;

use crate::services::{EventSink, PaymentGateway};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub sink: Arc<dyn EventSink>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PaymentGateway>, sink: Arc<dyn EventSink>) -> Self {
        Self { gateway, sink }
    }
}

/// All routes served by the webhook receiver.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        // Provider payloads are accepted whatever their size.
        .route(
            "/webhook",
            post(receive_webhook).layer(DefaultBodyLimit::disable()),
        )
        .route("/verify_payment/:reference", get(verify_payment))
        .with_state(state)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
}
