use log::debug;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode, Url};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::{AddressFilter, AddressResult};

const ADDRESSES_PATH: &[&str] = &["api", "addresses"];

/// HTTP client for the address-validation service.
///
/// Holds no state besides the connection pool, so a single value can be
/// cloned and shared across tasks. Every call is a single attempt: nothing
/// is retried or cached, and the filter is sent exactly as given.
#[derive(Debug, Clone)]
pub struct AddressClient {
    client: Client,
    endpoint: Url,
}

impl AddressClient {
    /// client for `base_url` with default settings
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url)?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .default_headers(Self::default_headers())
            .user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(
            Self {
                client: builder.build().map_err(Error::Build)?,
                endpoint: Self::endpoint(&config.base_url),
            }
        )
    }

    fn default_headers() -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(ACCEPT, HeaderValue::from_static("application/json"));
        map
    }

    /// `{base}/api/addresses`, keeping any path prefix on the base url
    fn endpoint(base_url: &Url) -> Url {
        let mut url = base_url.clone();
        url.set_query(None);
        url.set_fragment(None);
        // cannot-be-a-base urls are rejected when the config is parsed
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(ADDRESSES_PATH);
        }
        url
    }

    pub fn endpoint_url(&self) -> &Url {
        &self.endpoint
    }

    /// Look up the addresses matching `filter`.
    ///
    /// A non-success status fails with [`Error::Service`] carrying the body
    /// verbatim; the status code is never reinterpreted.
    pub async fn get_addresses(&self, filter: &AddressFilter) -> Result<AddressResult> {
        let (status, body) = self.send(filter).await?;
        if !status.is_success() {
            return Err(Error::Service { status, body });
        }
        serde_json::from_str(&body).map_err(|source| Error::Decode { source, body })
    }

    /// Same request as [`get_addresses`](Self::get_addresses), but returns
    /// the body text whatever the status. Only transport failures are errors.
    pub async fn get_addresses_raw(&self, filter: &AddressFilter) -> Result<String> {
        let (_, body) = self.send(filter).await?;
        Ok(body)
    }

    async fn send(&self, filter: &AddressFilter) -> Result<(StatusCode, String)> {
        debug!("GET {} with {:?}", self.endpoint, filter);
        let response = self.client
            .get(self.endpoint.clone())
            .query(filter)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("[{}] answered {} with {} bytes", self.endpoint, status, body.len());
        Ok((status, body))
    }
}
