use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, experience, availability};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info, warn};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Experiences
        .route("/api/experiences", get(experience::list_experiences))
        .route("/api/get-start-times/{experience_id}", get(experience::get_start_times))

        // Availability
        .route("/api/get-availability-rules/{experience_id}", get(availability::get_availability_rules))
        .route("/api/add-availability-rule", post(availability::add_availability_rule))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        experience_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    if response.status().is_success() {
                        info!(status = response.status().as_u16(), latency_ms = latency.as_millis(), "request handled");
                    } else {
                        warn!(status = response.status().as_u16(), latency_ms = latency.as_millis(), "request answered with an error");
                    }
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
