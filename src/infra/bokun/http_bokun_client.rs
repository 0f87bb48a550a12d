use crate::config::Config;
use crate::domain::models::upstream::UpstreamResponse;
use crate::domain::ports::BokunApi;
use crate::error::AppError;
use crate::infra::bokun::signer::RequestSigner;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

pub struct HttpBokunClient {
    client: Client,
    base_url: String,
    signer: RequestSigner,
}

impl HttpBokunClient {
    pub fn new(base_url: String, signer: RequestSigner, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            signer,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        Self::new(
            config.bokun_base_url.clone(),
            RequestSigner::new(config.bokun_access_key.clone(), config.bokun_secret_key.clone()),
            config.request_timeout(),
        )
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    #[instrument(skip(self, method, body), fields(method = %method))]
    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<UpstreamResponse, AppError> {
        let headers = self.signer.headers(method.as_str(), path)?;

        let mut request = self.client.request(method.clone(), self.url(path));
        for (name, value) in headers.pairs() {
            request = request.header(name, value);
        }
        if let Some(payload) = body {
            request = request.json(payload);
        }

        let res = request.send().await.map_err(|e| {
            error!("Bokun connection error on {} {}: {}", method, path, e);
            AppError::Transport(e)
        })?;

        let status = res.status();
        let text = res.text().await?;
        debug!(status = status.as_u16(), "Bokun responded to {} {}", method, path);

        if !status.is_success() {
            warn!("Bokun {} {} returned {}: {}", method, path, status, truncate(&text, 300));
        }

        Ok(UpstreamResponse::new(status.as_u16(), text))
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[async_trait]
impl BokunApi for HttpBokunClient {
    async fn get(&self, path: &str) -> Result<UpstreamResponse, AppError> {
        self.send(Method::GET, path, None).await
    }

    async fn put(&self, path: &str, body: &Value) -> Result<UpstreamResponse, AppError> {
        self.send(Method::PUT, path, Some(body)).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<UpstreamResponse, AppError> {
        self.send(Method::POST, path, Some(body)).await
    }
}
