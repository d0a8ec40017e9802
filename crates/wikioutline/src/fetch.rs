use crate::prelude::*;
use log::{debug, warn};
use std::time::Duration;
use wikioutline_core::outline::{article_url, parse_outline, Outline, DEFAULT_BASE_URL};

/// Upstream settings shared by the `serve` and `get` commands.
#[derive(Debug, Clone, clap::Args)]
pub struct UpstreamOptions {
    /// Base URL the article subject is appended to
    #[arg(long, env = "OUTLINE_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Upstream request timeout in seconds (default: 5)
    #[arg(short, long, env = "OUTLINE_TIMEOUT", default_value = "5")]
    pub timeout: u64,
}

/// Immutable upstream configuration, built once at startup.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl From<&UpstreamOptions> for FetchConfig {
    fn from(options: &UpstreamOptions) -> Self {
        Self {
            base_url: options.base_url.clone(),
            timeout: Duration::from_secs(options.timeout),
        }
    }
}

impl FetchConfig {
    pub fn url_for(&self, subject: &str) -> String {
        article_url(&self.base_url, subject)
    }
}

/// Fetches the raw article HTML for `subject`.
///
/// A new client is built for every call and dropped when the call returns.
/// Redirects are not followed. Transport failures and every status other
/// than 200 collapse into [`Error::NotFound`].
pub async fn fetch_article(config: &FetchConfig, subject: &str) -> Result<String, Error> {
    let url = config.url_for(subject);
    debug!("Fetching article from {url}");

    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(|e| {
            warn!("Failed to build HTTP client: {e}");
            Error::NotFound
        })?;

    let response = client.get(&url).send().await.map_err(|e| {
        warn!("Failed to fetch {url}: {e}");
        Error::NotFound
    })?;

    if response.status() != reqwest::StatusCode::OK {
        warn!("Failed to fetch {url}: HTTP {}", response.status());
        return Err(Error::NotFound);
    }

    response.text().await.map_err(|e| {
        warn!("Failed to read body of {url}: {e}");
        Error::NotFound
    })
}

/// Fetches the article for `subject` and extracts its outline.
pub async fn fetch_outline(config: &FetchConfig, subject: &str) -> Result<Outline, Error> {
    let html = fetch_article(config, subject).await?;
    Ok(parse_outline(&html)?)
}
