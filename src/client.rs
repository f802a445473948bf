//! HTTP access to the server under test
//!
//! A thin layer over [`awc::Client`] that resolves endpoint paths against the
//! configured base URL and buffers every reply so cases can inspect status,
//! text and JSON views without touching the transport again.

use std::borrow::Cow;
use std::time::{Duration, Instant};

use actix_web::web::Bytes;
use awc::error::{PayloadError, SendRequestError};
use awc::http::StatusCode;
use awc::http::header::LOCATION;
use awc::{Client, ClientResponse};
use futures_util::Stream;
use serde::Serialize;
use serde_json::Value;

use crate::config::SuiteConfig;
use crate::error::{Result, SuiteError};

/// A fully received reply
#[derive(Debug, Clone)]
pub struct Reply {
    /// Method and path, e.g. `POST /api/login`
    pub endpoint: String,
    pub url: String,
    pub status: StatusCode,
    /// `Location` header, present on redirects
    pub location: Option<String>,
    pub body: Bytes,
    /// From sending the request to the last body byte
    pub elapsed: Duration,
}

impl Reply {
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn json(&self) -> Result<Value> {
        serde_json::from_slice(&self.body).map_err(|e| SuiteError::MalformedResponse {
            url: self.url.clone(),
            message: e.to_string(),
        })
    }
}

#[derive(Clone)]
pub struct AuthClient {
    client: Client,
    config: SuiteConfig,
}

impl AuthClient {
    /// Redirects are not followed: a 302 from the OAuth endpoint is an
    /// answer in itself.
    pub fn new(config: SuiteConfig) -> Self {
        let client = Client::builder().disable_redirects().finish();

        Self { client, config }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub async fn get(&self, path: &str) -> Result<Reply> {
        let url = self.config.url(path);
        let start = Instant::now();
        let sent = self.client.get(&url).send().await;

        receive("GET", path, url, start, sent).await
    }

    pub async fn get_with_bearer(&self, path: &str, token: &str) -> Result<Reply> {
        let url = self.config.url(path);
        let start = Instant::now();
        let sent = self.client.get(&url).bearer_auth(token).send().await;

        receive("GET", path, url, start, sent).await
    }

    pub async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<Reply> {
        let url = self.config.url(path);
        let start = Instant::now();
        let sent = self.client.post(&url).send_json(body).await;

        receive("POST", path, url, start, sent).await
    }

    pub async fn post_with_bearer(&self, path: &str, token: &str) -> Result<Reply> {
        let url = self.config.url(path);
        let start = Instant::now();
        let sent = self.client.post(&url).bearer_auth(token).send().await;

        receive("POST", path, url, start, sent).await
    }
}

async fn receive<S>(
    method: &str,
    path: &str,
    url: String,
    start: Instant,
    sent: Result<ClientResponse<S>, SendRequestError>,
) -> Result<Reply>
where
    S: Stream<Item = Result<Bytes, PayloadError>> + Unpin,
{
    let mut response = sent.map_err(|e| {
        tracing::error!("{} {} failed: {}", method, url, e);

        SuiteError::transport(method, url.as_str(), e)
    })?;

    let status = response.status();
    let location = response
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response
        .body()
        .await
        .map_err(|e| SuiteError::transport(method, url.as_str(), e))?;
    let elapsed = start.elapsed();

    tracing::debug!(
        "{} {} -> {} ({} bytes) in {:?}",
        method,
        url,
        status.as_u16(),
        body.len(),
        elapsed
    );

    Ok(Reply {
        endpoint: format!("{} {}", method, path),
        url,
        status,
        location,
        body,
        elapsed,
    })
}
