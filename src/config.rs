use std::time::Duration;
use reqwest::Url;
use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://address.dev-procarepay.com";
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub const BASE_URL_ENV: &str = "ADDRESS_BASE_URL";
pub const TIMEOUT_ENV: &str = "ADDRESS_TIMEOUT_SECS";

/// Settings used to build an [`AddressClient`](crate::AddressClient)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: Url,
    /// `None` leaves the transport's own behaviour in place (no timeout)
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_BASE_URL is a constant known to parse
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(
            Self {
                base_url: parse_base_url(base_url)?,
                ..Default::default()
            }
        )
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// load settings from environment variables
    ///
    /// ADDRESS_BASE_URL=`URL`, ADDRESS_TIMEOUT_SECS=`SECONDS`
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match var(BASE_URL_ENV) {
            Some(url) => Self::new(&url)?,
            None => Self::default(),
        };
        if let Some(secs) = var(TIMEOUT_ENV) {
            config.timeout = Some(parse_timeout(&secs)?);
        }
        Ok(config)
    }
}

pub fn parse_base_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url.trim()).map_err(|e| Error::InvalidBaseUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::InvalidBaseUrl {
            url: url.to_string(),
            reason: "expected an http(s) url".to_string(),
        });
    }
    Ok(parsed)
}

pub fn parse_timeout(secs: &str) -> Result<Duration> {
    secs.trim()
        .parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| Error::InvalidTimeout(secs.to_string()))
}
