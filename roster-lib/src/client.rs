//! HTTP member source

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::error::ApiError;
use crate::error::Error;
use crate::model::Member;
use crate::source::MemberSource;

/// The fixed resource the admin table reads its members from.
pub const DEFAULT_MEMBERS_URL: &str =
    "https://geektrust.s3-ap-southeast-1.amazonaws.com/adminui-problem/members.json";

/// Client that fetches the member list over HTTP.
///
/// This client is cheap to clone (uses `Arc` internally).
///
/// # Example
///
/// ```ignore
/// use roster_lib::RosterClient;
///
/// let client = RosterClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let members = client.fetch().await?;
/// ```
#[derive(Clone)]
pub struct RosterClient {
    inner: Arc<RosterClientInner>,
}

struct RosterClientInner {
    url: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl RosterClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> RosterClientBuilder {
        RosterClientBuilder::new()
    }

    /// Returns the URL members are fetched from.
    pub fn url(&self) -> &str {
        self.inner.url.as_str()
    }

    /// Issues a single `GET` for the member list.
    ///
    /// The response must be a 2xx with a JSON array of `{id, name, email, role}`
    /// objects. Anything else is an error; there is no retry.
    pub async fn fetch(&self) -> Result<Vec<Member>, ApiError> {
        let mut request = self.inner.http_client.get(self.inner.url.clone());

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or("request failed").to_string()
            } else {
                body
            };
            return Err(ApiError::http(status.as_u16(), message));
        }

        let body = response.text().await.map_err(|e| self.classify(e))?;
        serde_json::from_str::<Vec<Member>>(&body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body))
    }

    fn classify(&self, error: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(error),
        }
    }
}

#[async_trait]
impl MemberSource for RosterClient {
    async fn fetch_members(&self) -> Result<Vec<Member>, Error> {
        Ok(self.fetch().await?)
    }
}

/// Builder for constructing a [`RosterClient`].
///
/// Every field is optional; the URL defaults to [`DEFAULT_MEMBERS_URL`] and no
/// request timeout is applied unless one is set.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use roster_lib::RosterClient;
///
/// let client = RosterClient::builder()
///     .url("http://127.0.0.1:8080/members.json")
///     .connect_timeout(Duration::from_secs(5))
///     .build()
///     .unwrap();
///
/// assert_eq!(client.url(), "http://127.0.0.1:8080/members.json");
/// ```
#[derive(Debug, Default)]
pub struct RosterClientBuilder {
    url: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl RosterClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the members URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the [`RosterClient`].
    ///
    /// Fails with [`ApiError::InvalidUrl`] if the URL does not parse, and with
    /// [`ApiError::Network`] if the default HTTP client cannot be created.
    pub fn build(self) -> Result<RosterClient, ApiError> {
        let raw = self.url.unwrap_or_else(|| DEFAULT_MEMBERS_URL.to_string());
        let url = Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(RosterClient {
            inner: Arc::new(RosterClientInner {
                url,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}
