use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use crate::domains::megaverse::ports::{HttpResponse, HttpTransport, TransportError};

/// `HttpTransport` backed by a shared reqwest client.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// `timeout` of `None` keeps reqwest's default (no overall request timeout).
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        Ok(Self { client: builder.build()? })
    }

    async fn finish(resp: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = resp.status().as_u16();
        let body = resp.text().await.map_err(classify)?;
        debug!(status, len = body.len(), "response received");
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<HttpResponse, TransportError> {
        debug!(url, "POST");
        let resp = self.client.post(url).json(body).send().await.map_err(classify)?;
        Self::finish(resp).await
    }

    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!(url, "GET");
        let resp = self.client.get(url).send().await.map_err(classify)?;
        Self::finish(resp).await
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_builder() {
        TransportError::InvalidUrl(err.to_string())
    } else if err.is_connect() {
        TransportError::Connect(err.to_string())
    } else if err.is_request() {
        TransportError::NoResponse
    } else {
        TransportError::Other(err.to_string())
    }
}
