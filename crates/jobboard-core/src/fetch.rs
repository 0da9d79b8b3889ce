use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::xml::parse_xml_items;

/// Failure of one fetch attempt. Every variant is terminal for that attempt.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP {0}")]
    Status(u16),
    #[error("request failed: {0}")]
    Transport(#[source] ureq::Error),
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ureq::Error> for FetchError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) => FetchError::Status(code),
            other => FetchError::Transport(other),
        }
    }
}

/// Source of parsed response bodies.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<Value, FetchError>;
}

/// Decode a response body according to its content type.
///
/// Anything whose content type mentions `xml` goes through the XML adapter;
/// everything else is parsed as JSON.
pub fn decode_body(content_type: &str, body: &str) -> Result<Value, FetchError> {
    if content_type.contains("xml") {
        Ok(parse_xml_items(body))
    } else {
        Ok(serde_json::from_str(body)?)
    }
}

/// Decode raw response bytes. Invalid UTF-8 sequences are replaced rather than
/// failing the whole page.
pub fn decode_bytes(content_type: &str, bytes: &[u8]) -> Result<Value, FetchError> {
    decode_body(content_type, &String::from_utf8_lossy(bytes))
}

/// Blocking HTTP fetcher.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher;

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<Value, FetchError> {
        debug!("GET {}", url);

        let mut response = ureq::get(url.as_str()).call()?;
        let status = response.status();
        debug!("Status: {}", status);
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.body_mut().read_to_vec()?;
        debug!(
            "Received {} bytes ({})",
            body.len(),
            if content_type.is_empty() {
                "no content type"
            } else {
                content_type.as_str()
            }
        );

        decode_bytes(&content_type, &body)
    }
}
