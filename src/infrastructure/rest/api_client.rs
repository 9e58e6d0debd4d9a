use anyhow::{Context, Result};
use reqwest::Method;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;
use url::Url;

use crate::domain::value_objects::api_errors::ApiError;

/// Minimal JSON client over the backend REST API, built on reqwest.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

/// Mutation responses carry either a confirmation message or an `error` field,
/// never both.
#[derive(Debug, Deserialize)]
struct WriteEnvelope {
    message: Option<String>,
    error: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("invalid endpoint path: {}", path))
    }

    async fn ensure_success(resp: reqwest::Response, context: &str) -> Result<reqwest::Response> {
        if resp.status().is_success() {
            return Ok(resp);
        }

        let status = resp.status();
        let body = match resp.text().await {
            Ok(text) if !text.is_empty() => text,
            Ok(_) => "<empty response body>".to_string(),
            Err(err) => format!("<failed to read response body: {err}>"),
        };

        let server_message = serde_json::from_str::<WriteEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.error);

        error!(
            status = %status,
            response_body = %body,
            context = %context,
            "backend api request failed"
        );

        match server_message {
            Some(message) => Err(anyhow::Error::new(ApiError::Server(message))),
            None => anyhow::bail!("backend request failed: {} (status {})", context, status),
        }
    }

    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut request = self.http.get(self.endpoint(path)?);
        if !query.is_empty() {
            request = request.query(query);
        }
        let resp = request.send().await?;
        let resp = Self::ensure_success(resp, path).await?;

        Ok(resp.json().await?)
    }

    /// GET for a single record; a 404 reads as `None` instead of an error.
    pub async fn get_optional_json<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>> {
        let resp = self.http.get(self.endpoint(path)?).send().await?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = Self::ensure_success(resp, path).await?;

        Ok(Some(resp.json().await?))
    }

    /// POST/PUT with a JSON body; returns the backend's acknowledgment message
    /// or surfaces its `error` field verbatim.
    pub async fn send_write<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<String> {
        let resp = self
            .http
            .request(method, self.endpoint(path)?)
            .json(body)
            .send()
            .await?;

        Self::decode_write_envelope(resp, path).await
    }

    /// DELETE addressed by query parameters.
    pub async fn send_delete(&self, path: &str, query: &[(&str, String)]) -> Result<String> {
        let resp = self
            .http
            .delete(self.endpoint(path)?)
            .query(query)
            .send()
            .await?;

        Self::decode_write_envelope(resp, path).await
    }

    async fn decode_write_envelope(resp: reqwest::Response, context: &str) -> Result<String> {
        let resp = Self::ensure_success(resp, context).await?;
        let envelope: WriteEnvelope = resp.json().await?;

        if let Some(message) = envelope.error {
            return Err(anyhow::Error::new(ApiError::Server(message)));
        }

        Ok(envelope
            .message
            .unwrap_or_else(|| "Saved successfully".to_string()))
    }
}
