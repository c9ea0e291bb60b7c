//! HTTP client for the upstream matching and mail-generation services.
//!
//! The engine delegates matching and email copywriting to a remote API.
//! This module owns the typed client for that API: request construction,
//! endpoint selection and response decoding. Upstream failures surface as
//! [`EngineError::UpstreamStatus`] / [`EngineError::UpstreamTransport`].

mod mailgen;
mod matching;

pub use mailgen::{MAIL_FREELANCE_ENDPOINT, MAIL_PROSPECT_ENDPOINT, build_mail_payload, mail_endpoint};
pub use matching::{MATCH_FREELANCE_ENDPOINT, MATCH_PROSPECT_ENDPOINT, match_endpoint};

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::info;

use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};

/// Client for the upstream matching / mail-generation API.
pub struct OutreachClient {
    client: reqwest::Client,
    base_url: String,
}

impl OutreachClient {
    /// Creates a new client against the given base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> EngineResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::HttpClient {
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Creates a client from the loaded engine configuration.
    pub fn from_config(config: &ConfigLoader) -> EngineResult<Self> {
        Self::new(config.base_url(), config.timeout())
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET with query parameters, decoding a JSON response.
    pub(crate) async fn get_json<R>(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
    ) -> EngineResult<R>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        info!(endpoint = endpoint, "Calling upstream service");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| EngineError::UpstreamTransport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        Self::decode_response(endpoint, response).await
    }

    /// POST a JSON payload, decoding a JSON response.
    pub(crate) async fn post_json<T, R>(&self, endpoint: &str, payload: &T) -> EngineResult<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        info!(endpoint = endpoint, "Calling upstream service");

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| EngineError::UpstreamTransport {
                endpoint: endpoint.to_string(),
                message: e.to_string(),
            })?;

        Self::decode_response(endpoint, response).await
    }

    async fn decode_response<R>(endpoint: &str, response: reqwest::Response) -> EngineResult<R>
    where
        R: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json::<R>()
                .await
                .map_err(|e| EngineError::UpstreamTransport {
                    endpoint: endpoint.to_string(),
                    message: format!("failed to decode response: {}", e),
                })
        } else {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(EngineError::UpstreamStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_timeout() {
        let client = OutreachClient::new("https://api.example.com", Duration::from_secs(5));
        assert!(client.is_ok());
        assert_eq!(client.unwrap().base_url(), "https://api.example.com");
    }
}
