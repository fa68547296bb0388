//! HTTP client for the query API under evaluation.
//!
//! One `reqwest::Client` is created per evaluation run and reused for every
//! call. Requests block the run until the service answers; there is no
//! timeout or retry policy, matching the strictly sequential resource model.

use crate::error::{EvalError, Result};
use crate::scoring::ResponsePayload;
use reqwest::Client;
use serde::Serialize;
use serde_json::json;

/// Request body for `POST /query`.
#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

/// Client for the query-answering service.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a full endpoint URL.
    fn endpoint(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Send a query and decode the response payload.
    ///
    /// A non-success HTTP status, a transport failure, and an undecodable
    /// body are all errors; the caller decides how to absorb them.
    pub async fn query(&self, query: &str) -> Result<ResponsePayload> {
        let response = self
            .client
            .post(self.endpoint("/query"))
            .json(&QueryRequest { query })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(EvalError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let payload: ResponsePayload = serde_json::from_str(&body)?;
        Ok(payload)
    }

    /// Check service liveness.
    ///
    /// Succeeds only on HTTP 200 with a JSON body exactly equal to
    /// `{"status": "healthy"}`.
    pub async fn health_check(&self) -> Result<()> {
        let response = self.client.get(self.endpoint("/health")).send().await?;

        let status = response.status();
        let body = response.text().await?;

        if status.as_u16() != 200 {
            return Err(EvalError::HealthCheck(format!(
                "expected status 200, got {}",
                status
            )));
        }

        let decoded: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| EvalError::HealthCheck(format!("body is not valid JSON: {}", e)))?;

        if decoded != json!({"status": "healthy"}) {
            return Err(EvalError::HealthCheck(format!(
                "unexpected body: {}",
                decoded
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_construction() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.endpoint("/query"), "http://localhost:8000/query");
        assert_eq!(client.endpoint("/health"), "http://localhost:8000/health");

        // Trailing slash is tolerated
        let client = ApiClient::new("http://localhost:8000/");
        assert_eq!(client.endpoint("/query"), "http://localhost:8000/query");
    }
}
