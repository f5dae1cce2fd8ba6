//! HTTP client for the artworks listing endpoint

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use url::Url;

use crate::PageCache;
use crate::error::ApiError;
use crate::error::Error;
use crate::model::Artwork;
use crate::model::Listing;
use crate::source::PageSource;

/// Default listing endpoint of the Art Institute of Chicago API.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// Client for the paginated artworks listing.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across tasks, which is how in-flight page fetches are spawned.
///
/// # Example
///
/// ```ignore
/// use artgrid_lib::ArticClient;
///
/// let client = ArticClient::builder()
///     .url("https://api.artic.edu/api/v1/artworks")
///     .build()?;
///
/// let page = client.fetch_page(1, 12).await?;
/// ```
#[derive(Clone)]
pub struct ArticClient {
    inner: Arc<ArticClientInner>,
}

struct ArticClientInner {
    base_url: Url,
    http_client: Client,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ArticClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> ArticClientBuilder<Missing> {
        ArticClientBuilder::new()
    }

    /// Returns the listing URL.
    pub fn base_url(&self) -> &str {
        self.inner.base_url.as_str()
    }

    /// Builds the URL for one page.
    ///
    /// Any query already present on the base URL is kept.
    pub fn page_url(&self, page: u32, page_size: usize) -> Url {
        let mut url = self.inner.base_url.clone();
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("limit", &page_size.to_string())
            .append_pair("fields", &Artwork::FIELDS.join(","));
        url
    }

    /// Fetches one page of artworks.
    ///
    /// `page` is 1-indexed. Records beyond `page_size` are dropped.
    pub async fn fetch_page(&self, page: u32, page_size: usize) -> Result<PageCache, Error> {
        if page == 0 {
            return Err(Error::InvalidPage(page));
        }

        let url = self.page_url(page, page_size);
        log::debug!("GET {}", url);

        let mut request = self
            .inner
            .http_client
            .get(url)
            .header(ACCEPT, "application/json");

        if let Some(agent) = &self.inner.user_agent {
            request = request.header("AIC-User-Agent", agent.as_str());
        }

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.network_error(e))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http(status.as_u16(), error_message(&body)).into());
        }

        let body = response.text().await.map_err(|e| self.network_error(e))?;
        let listing: Listing = serde_json::from_str(&body)
            .map_err(|e| ApiError::parse_with_body(e.to_string(), body.as_str()))?;

        log::debug!(
            "Page {} returned {} records of {}",
            page,
            listing.data.len(),
            listing.pagination.total
        );

        Ok(PageCache::new(listing.data, listing.pagination.total).truncated(page_size))
    }

    fn network_error(&self, error: reqwest::Error) -> Error {
        match self.inner.timeout {
            Some(timeout) if error.is_timeout() => ApiError::Timeout(timeout).into(),
            _ => ApiError::Network(error).into(),
        }
    }
}

#[async_trait]
impl PageSource for ArticClient {
    async fn fetch_page(&self, page: u32, page_size: usize) -> Result<PageCache, Error> {
        ArticClient::fetch_page(self, page, page_size).await
    }
}

/// Pulls a readable message out of an error body.
///
/// The API answers errors with `{"status": .., "error": .., "detail": ..}`;
/// anything else is returned verbatim.
fn error_message(body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("detail")
                .or_else(|| v.get("error"))
                .and_then(|d| d.as_str())
                .map(str::to_string)
        });
    detail.unwrap_or_else(|| body.to_string())
}

// =============================================================================
// Typestate Builder
// =============================================================================

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing an [`ArticClient`].
///
/// The listing URL is required and enforced at compile time.
///
/// # Example
///
/// ```ignore
/// let client = ArticClient::builder()
///     .url(DEFAULT_BASE_URL)
///     .timeout(Duration::from_secs(10))
///     .user_agent("artgrid (you@example.com)")
///     .build()?;
/// ```
pub struct ArticClientBuilder<U> {
    url: U,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<Client>,
}

impl ArticClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Sets the listing URL.
    pub fn url(self, url: impl Into<String>) -> ArticClientBuilder<Set<String>> {
        ArticClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            user_agent: self.user_agent,
            http_client: self.http_client,
        }
    }
}

impl Default for ArticClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> ArticClientBuilder<U> {
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

    /// Identifies the application to the API through `AIC-User-Agent`.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl ArticClientBuilder<Set<String>> {
    /// Builds the [`ArticClient`].
    ///
    /// Fails if the URL does not parse or the HTTP client cannot be created.
    pub fn build(self) -> Result<ArticClient, Error> {
        let base_url = Url::parse(&self.url.0)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.url.0, e)))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder
                    .build()
                    .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?
            }
        };

        Ok(ArticClient {
            inner: Arc::new(ArticClientInner {
                base_url,
                http_client,
                timeout: self.timeout,
                user_agent: self.user_agent,
            }),
        })
    }
}
