//! HMAC-SHA1 request signing for the Bokun REST API.

use base64::{engine::general_purpose, Engine as _};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::error::AppError;

type HmacSha1 = Hmac<Sha1>;

pub const DATE_HEADER: &str = "X-Bokun-Date";
pub const ACCESS_KEY_HEADER: &str = "X-Bokun-AccessKey";
pub const SIGNATURE_HEADER: &str = "X-Bokun-Signature";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    pub date: String,
    pub access_key: String,
    pub signature: String,
}

impl SignedHeaders {
    /// Header name/value pairs to attach to the outgoing request.
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            (DATE_HEADER, self.date.as_str()),
            (ACCESS_KEY_HEADER, self.access_key.as_str()),
            (SIGNATURE_HEADER, self.signature.as_str()),
            ("Content-Type", "application/json"),
        ]
    }
}

#[derive(Clone)]
pub struct RequestSigner {
    access_key: String,
    secret_key: String,
}

impl RequestSigner {
    pub fn new(access_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            secret_key: secret_key.into(),
        }
    }

    pub fn timestamp(now: DateTime<Utc>) -> String {
        now.format(TIMESTAMP_FORMAT).to_string()
    }

    /// `base64(HMAC-SHA1(secret, timestamp + access_key + METHOD + path))`.
    pub fn sign(&self, timestamp: &str, method: &str, path: &str) -> Result<String, AppError> {
        let mut mac = HmacSha1::new_from_slice(self.secret_key.as_bytes())
            .map_err(|e| AppError::Signing(format!("Failed to create HMAC: {e}")))?;

        mac.update(timestamp.as_bytes());
        mac.update(self.access_key.as_bytes());
        mac.update(method.to_uppercase().as_bytes());
        mac.update(path.as_bytes());

        Ok(general_purpose::STANDARD.encode(mac.finalize().into_bytes()))
    }

    pub fn headers_at(&self, now: DateTime<Utc>, method: &str, path: &str) -> Result<SignedHeaders, AppError> {
        let date = Self::timestamp(now);
        let signature = self.sign(&date, method, path)?;
        Ok(SignedHeaders {
            date,
            access_key: self.access_key.clone(),
            signature,
        })
    }

    /// Signs against the current clock. Bokun rejects stale timestamps, so
    /// headers are never reused across requests.
    pub fn headers(&self, method: &str, path: &str) -> Result<SignedHeaders, AppError> {
        self.headers_at(Utc::now(), method, path)
    }
}
