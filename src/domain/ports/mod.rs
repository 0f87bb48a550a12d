use crate::domain::models::upstream::UpstreamResponse;
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::Value;

/// Signed access to the Bokun REST API. `path` is relative to the configured
/// base URL and includes the query string.
///
/// Implementations return non-2xx responses as `Ok`; only transport and
/// signing failures are errors.
#[async_trait]
pub trait BokunApi: Send + Sync {
    async fn get(&self, path: &str) -> Result<UpstreamResponse, AppError>;
    async fn put(&self, path: &str, body: &Value) -> Result<UpstreamResponse, AppError>;
    async fn post(&self, path: &str, body: &Value) -> Result<UpstreamResponse, AppError>;
}
