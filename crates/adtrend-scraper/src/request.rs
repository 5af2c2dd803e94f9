//! Outbound request description for one category capture.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::error::ScraperError;
use crate::scroll::InteractionStep;

/// Milliseconds the rendering service waits after load before capture.
pub const RENDER_WAIT_MS: u64 = 5000;
pub const VIEWPORT_WIDTH: u32 = 1920;
pub const VIEWPORT_HEIGHT: u32 = 1080;

/// Everything the rendering service needs to capture one listing page.
///
/// Built once per category and never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    target_url: String,
    interaction_script: Vec<InteractionStep>,
    render_options: BTreeMap<&'static str, String>,
}

impl FetchRequest {
    /// Builds the request for a keyword search on `listing_url`.
    ///
    /// `listing_url` already carries its own query string; the phrase is
    /// form-encoded and appended as `&q=`, so spaces become `+`.
    #[must_use]
    pub fn for_search(
        listing_url: &str,
        phrase: &str,
        interaction_script: Vec<InteractionStep>,
    ) -> Self {
        let encoded = form_urlencoded::byte_serialize(phrase.trim().as_bytes());
        let query: String = encoded.collect();
        let target_url = format!("{listing_url}&q={query}");

        let render_options = BTreeMap::from([
            ("js_render", "true".to_string()),
            ("antibot", "true".to_string()),
            ("premium_proxy", "true".to_string()),
            ("original_status", "true".to_string()),
            ("wait", RENDER_WAIT_MS.to_string()),
            ("window_width", VIEWPORT_WIDTH.to_string()),
            ("window_height", VIEWPORT_HEIGHT.to_string()),
        ]);

        Self {
            target_url,
            interaction_script,
            render_options,
        }
    }

    #[must_use]
    pub fn target_url(&self) -> &str {
        &self.target_url
    }

    #[must_use]
    pub fn interaction_script(&self) -> &[InteractionStep] {
        &self.interaction_script
    }

    #[must_use]
    pub fn render_options(&self) -> &BTreeMap<&'static str, String> {
        &self.render_options
    }

    /// The interaction script as the JSON string sent in `js_instructions`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Serialize`] if the script cannot be encoded.
    pub fn instructions_json(&self) -> Result<String, ScraperError> {
        serde_json::to_string(&self.interaction_script).map_err(|e| ScraperError::Serialize {
            context: format!("js_instructions for {}", self.target_url),
            source: e,
        })
    }
}
