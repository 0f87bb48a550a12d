use boat_booking_backend::{
    api::router::create_router,
    config::Config,
    domain::models::upstream::UpstreamResponse,
    domain::ports::BokunApi,
    error::AppError,
    infra::factory::build_state,
    state::AppState,
};
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

enum Reply {
    Fixed(UpstreamResponse),
    Echo,
}

/// Scripted stand-in for Bokun. Unscripted calls answer 404.
#[derive(Default)]
pub struct MockBokunApi {
    replies: Mutex<HashMap<(&'static str, String), Reply>>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[allow(dead_code)]
impl MockBokunApi {
    pub fn on(&self, method: &'static str, path: &str, status: u16, body: Value) {
        self.replies.lock().unwrap().insert(
            (method, path.to_string()),
            Reply::Fixed(UpstreamResponse::new(status, body.to_string())),
        );
    }

    pub fn on_text(&self, method: &'static str, path: &str, status: u16, body: &str) {
        self.replies.lock().unwrap().insert(
            (method, path.to_string()),
            Reply::Fixed(UpstreamResponse::new(status, body)),
        );
    }

    /// Answers 200 with the request body, like Bokun returning the saved collection.
    pub fn echo(&self, method: &'static str, path: &str) {
        self.replies.lock().unwrap().insert((method, path.to_string()), Reply::Echo);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_with_method(&self, method: &str) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(|c| c.method == method).collect()
    }

    fn respond(&self, method: &'static str, path: &str, body: Option<&Value>) -> UpstreamResponse {
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            path: path.to_string(),
            body: body.cloned(),
        });

        match self.replies.lock().unwrap().get(&(method, path.to_string())) {
            Some(Reply::Fixed(res)) => res.clone(),
            Some(Reply::Echo) => UpstreamResponse::new(200, body.map(Value::to_string).unwrap_or_default()),
            None => UpstreamResponse::new(404, "{\"message\":\"not found\"}"),
        }
    }
}

#[async_trait]
impl BokunApi for MockBokunApi {
    async fn get(&self, path: &str) -> Result<UpstreamResponse, AppError> {
        Ok(self.respond("GET", path, None))
    }

    async fn put(&self, path: &str, body: &Value) -> Result<UpstreamResponse, AppError> {
        Ok(self.respond("PUT", path, Some(body)))
    }

    async fn post(&self, path: &str, body: &Value) -> Result<UpstreamResponse, AppError> {
        Ok(self.respond("POST", path, Some(body)))
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub bokun: Arc<MockBokunApi>,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        Self::with_experiences(vec![1084194, 1087988])
    }

    pub fn with_experiences(experience_ids: Vec<i64>) -> Self {
        let config = Config {
            port: 0,
            bokun_base_url: "http://localhost".to_string(),
            bokun_access_key: "test-access".to_string(),
            bokun_secret_key: "test-secret".to_string(),
            experience_ids,
            request_timeout_secs: 5,
            log_dir: "./logs".to_string(),
        };

        let bokun = Arc::new(MockBokunApi::default());
        let state = Arc::new(build_state(&config, bokun.clone()));
        let router = create_router(state.clone());

        Self { router, bokun, state }
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }

    pub async fn post_json(&self, uri: &str, payload: &Value) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap()
    }
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
