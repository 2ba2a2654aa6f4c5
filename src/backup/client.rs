//! Backup-and-recovery HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::backup::traits::ListResponse;
use crate::config::api;
use crate::error::{BrError, Result};

/// Backup-and-recovery API client
pub struct BackupClient {
    client: Client,
    token: String,
    endpoint: String,
    /// Tenant sent with every request when set
    tenant_id: Option<String>,
    /// Custom base URL override (for testing with mock servers)
    base_url_override: Option<String>,
}

impl BackupClient {
    /// Create a new client for the given service endpoint
    pub fn new(token: String, endpoint: String) -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            endpoint,
            tenant_id: None,
            base_url_override: None,
        }
    }

    /// Create a client with custom base URL (for testing with mock servers)
    #[cfg(test)]
    pub fn with_base_url(token: String, endpoint: String, base_url: String) -> Self {
        let client = Client::builder().build().unwrap_or_else(|_| Client::new());

        Self {
            client,
            token,
            endpoint,
            tenant_id: None,
            base_url_override: Some(base_url),
        }
    }

    /// Set the tenant sent in the tenant header
    pub fn set_tenant_id(&mut self, tenant_id: Option<String>) {
        self.tenant_id = tenant_id;
    }

    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    /// Get the endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        if let Some(ref url) = self.base_url_override {
            return url.trim_end_matches('/').to_string();
        }
        let endpoint = self.endpoint.trim_end_matches('/');
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("https://{}", endpoint)
        }
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/json");
        match &self.tenant_id {
            Some(tenant) => builder.header(api::TENANT_HEADER, tenant),
            None => builder,
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// Parse an API response, returning an error naming the operation
    /// for non-success status codes and undecodable bodies
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        operation: &'static str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| BrError::Transport { operation, source })?;

        if !status.is_success() {
            return Err(BrError::Api {
                operation,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body).map_err(|e| BrError::Decode {
            operation,
            message: e.to_string(),
        })
    }

    /// Call a list endpoint once and return its items
    ///
    /// Only the first page is read; the list APIs used here return
    /// everything in a single response.
    ///
    /// # Arguments
    /// * `operation` - Operation name used in diagnostics (e.g. "GetRecoveries")
    /// * `path` - API path relative to the endpoint
    /// * `query` - Query parameters, already encoded as strings
    /// * `headers` - Extra per-request headers
    pub(crate) async fn list<T, R>(
        &self,
        operation: &'static str,
        path: &str,
        query: &[(&'static str, String)],
        headers: &[(&'static str, String)],
    ) -> Result<Vec<T>>
    where
        R: DeserializeOwned + ListResponse<T>,
    {
        let url = format!("{}/{}{}", self.base_url(), path, query_string(query));
        debug!("{}: GET {}", operation, url);

        let mut request = self.get(&url);
        for (name, value) in headers {
            request = request.header(*name, value);
        }

        let response = request
            .send()
            .await
            .map_err(|source| BrError::Transport { operation, source })?;

        let resp: R = self.parse_api_response(response, operation).await?;
        let items = resp.into_items();
        debug!("{}: {} item(s) returned", operation, items.len());
        Ok(items)
    }
}

/// Render query pairs as `?k=v&k2=v2` (empty when there are none)
fn query_string(query: &[(&'static str, String)]) -> String {
    if query.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = query
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect();
    format!("?{}", pairs.join("&"))
}

fn truncate_body(body: &str) -> String {
    body.chars().take(api::ERROR_BODY_LIMIT).collect()
}

#[cfg(test)]
impl BackupClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::with_base_url(
            "test-token".to_string(),
            "mock.backup-recovery.example.com".to_string(),
            base_url.to_string(),
        )
    }
}
