//! Main WaitlistClient

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use url::Url;
use waitlist_core::model::Record;

use crate::error::Error;
use crate::parse::records_from_json;

/// Default endpoint for the waitlist data.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com/users";

/// The client for the read-only waitlist API.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely. The API is a single unauthenticated GET with no
/// retry or backoff policy; a failed fetch is reported once and left to
/// the caller.
///
/// # Example
///
/// ```ignore
/// use waitlist_client::WaitlistClient;
///
/// let client = WaitlistClient::builder().build();
/// let records = client.fetch_records().await?;
/// ```
#[derive(Clone)]
pub struct WaitlistClient {
    inner: Arc<WaitlistClientInner>,
}

struct WaitlistClientInner {
    url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl WaitlistClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> WaitlistClientBuilder {
        WaitlistClientBuilder::new()
    }

    /// Fetches all waitlist records.
    ///
    /// Issues one GET against the configured URL and parses the JSON array
    /// body. A non-2xx status and a transport failure both surface as an
    /// [`Error`]; the caller decides how to present it.
    pub async fn fetch_records(&self) -> Result<Vec<Record>, Error> {
        let url =
            Url::parse(&self.inner.url).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        debug!("fetching records from {url}");

        let mut request = self.inner.http_client.get(url);
        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(Error::from)?;

        if response.status().is_success() {
            let body: serde_json::Value = response.json().await.map_err(Error::from)?;
            records_from_json(body)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(Error::http(status, body))
        }
    }

    /// Returns the URL the client fetches from.
    pub fn url(&self) -> &str {
        &self.inner.url
    }
}

/// Builder for constructing a [`WaitlistClient`].
///
/// Every field has a default, so `WaitlistClient::builder().build()` is a
/// working client against the public endpoint.
#[derive(Default)]
pub struct WaitlistClientBuilder {
    url: Option<String>,
    timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl WaitlistClientBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the endpoint URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets a per-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Supplies a pre-configured `reqwest::Client`.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the client.
    pub fn build(self) -> WaitlistClient {
        WaitlistClient {
            inner: Arc::new(WaitlistClientInner {
                url: self.url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
                http_client: self.http_client.unwrap_or_default(),
                timeout: self.timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = WaitlistClient::builder().build();
        assert_eq!(client.url(), DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_overrides_url() {
        let client = WaitlistClient::builder()
            .url("http://localhost:9090/users")
            .timeout(Duration::from_secs(5))
            .build();
        assert_eq!(client.url(), "http://localhost:9090/users");
    }

    #[tokio::test]
    async fn test_invalid_url_is_reported_not_panicked() {
        let client = WaitlistClient::builder().url("not a url").build();
        let err = client.fetch_records().await.unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }
}
