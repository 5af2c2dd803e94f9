//! HTTP client for the headless-rendering proxy.
//!
//! One GET per category: the proxy loads the Ad Library listing, runs the
//! scroll script, and returns the final markup. Failures are logged and
//! surfaced as a failed [`RenderedDocument`]; nothing here is retried.

use std::path::PathBuf;
use std::time::Duration;

use adtrend_core::{AppConfig, Category};
use reqwest::{Client, Url};

use crate::document::RenderedDocument;
use crate::error::ScraperError;
use crate::pipeline::DocumentSource;
use crate::request::FetchRequest;
use crate::scroll::{build_scroll_script, DEFAULT_SCROLL_PAUSE_MS, DEFAULT_SCROLL_REPEATS};
use crate::snapshot::write_snapshot;

/// Ad Library keyword search across all active/inactive US ads, sorted by
/// monthly relevancy. The search phrase is appended as `&q=`.
pub const AD_LIBRARY_LISTING_URL: &str = "https://www.facebook.com/ads/library/?active_status=all&ad_type=all&country=US&sort_data[direction]=desc&sort_data[mode]=relevancy_monthly_grouped&search_type=keyword_unordered&media_type=all";

/// Client for the rendering proxy.
///
/// The credential is passed in explicitly; use [`RenderClient::from_config`]
/// in production or [`RenderClient::new`] to point at a mock server in tests.
pub struct RenderClient {
    client: Client,
    api_key: String,
    base_url: Url,
    scroll_repeats: usize,
    scroll_pause_ms: u64,
    snapshot_dir: Option<PathBuf>,
}

impl std::fmt::Debug for RenderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderClient")
            .field("api_key", &"[redacted]")
            .field("base_url", &self.base_url.as_str())
            .field("scroll_repeats", &self.scroll_repeats)
            .field("scroll_pause_ms", &self.scroll_pause_ms)
            .field("snapshot_dir", &self.snapshot_dir)
            .finish_non_exhaustive()
    }
}

impl RenderClient {
    /// Creates a client with the default scroll script and snapshots disabled.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`ScraperError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(api_key: &str, base_url: &str, timeout_secs: u64) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("adtrend/0.1 (ad-library-trends)")
            .build()?;

        // Exactly one trailing slash so query pairs land on the service root.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            scroll_repeats: DEFAULT_SCROLL_REPEATS,
            scroll_pause_ms: DEFAULT_SCROLL_PAUSE_MS,
            snapshot_dir: None,
        })
    }

    /// Creates a client from loaded application configuration.
    ///
    /// # Errors
    ///
    /// See [`RenderClient::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, ScraperError> {
        Ok(Self::new(
            &config.render_api_key,
            &config.render_base_url,
            config.request_timeout_secs,
        )?
        .with_scroll(config.scroll_repeats, config.scroll_pause_ms)
        .with_snapshot_dir(config.snapshot_dir.clone()))
    }

    #[must_use]
    pub fn with_scroll(mut self, repeats: usize, pause_ms: u64) -> Self {
        self.scroll_repeats = repeats;
        self.scroll_pause_ms = pause_ms;
        self
    }

    #[must_use]
    pub fn with_snapshot_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.snapshot_dir = dir;
        self
    }

    /// Builds the capture request for one search phrase.
    #[must_use]
    pub fn build_request(&self, phrase: &str) -> FetchRequest {
        FetchRequest::for_search(
            AD_LIBRARY_LISTING_URL,
            phrase,
            build_scroll_script(self.scroll_repeats, self.scroll_pause_ms),
        )
    }

    /// Sends `request` to the rendering service and returns the raw body.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] on any non-2xx response.
    /// - [`ScraperError::Http`] on network failure or timeout.
    /// - [`ScraperError::Serialize`] if the script cannot be encoded.
    pub async fn render(&self, request: &FetchRequest) -> Result<String, ScraperError> {
        let url = self.build_url(request)?;
        // Strip the URL from transport errors: it carries the credential.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: request.target_url().to_owned(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| ScraperError::Http(e.without_url()))
    }

    /// Appends the credential, target URL, render options and the encoded
    /// interaction script to the service base URL.
    fn build_url(&self, request: &FetchRequest) -> Result<Url, ScraperError> {
        let instructions = request.instructions_json()?;
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("apikey", &self.api_key);
            pairs.append_pair("url", request.target_url());
            for (name, value) in request.render_options() {
                pairs.append_pair(name, value);
            }
            pairs.append_pair("js_instructions", &instructions);
        }
        Ok(url)
    }

    async fn save_snapshot(&self, category: Category, body: &str) {
        let Some(dir) = &self.snapshot_dir else {
            return;
        };
        match write_snapshot(dir, category, body).await {
            Ok(path) => tracing::info!(%category, path = %path.display(), "raw HTML saved"),
            Err(e) => tracing::warn!(%category, error = %e, "could not save raw HTML snapshot"),
        }
    }
}

impl DocumentSource for RenderClient {
    async fn fetch(&self, category: Category, phrase: &str) -> RenderedDocument {
        let request = self.build_request(phrase);
        tracing::info!(%category, target_url = request.target_url(), "fetching ad library listing");

        match self.render(&request).await {
            Ok(body) => {
                tracing::info!(%category, bytes = body.len(), "rendering service responded");
                self.save_snapshot(category, &body).await;
                RenderedDocument::succeeded(body)
            }
            Err(e) => {
                tracing::error!(%category, stage = "fetch", error = %e, "rendering request failed");
                RenderedDocument::failed()
            }
        }
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
