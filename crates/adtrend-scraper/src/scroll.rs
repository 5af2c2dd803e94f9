//! Interaction script that makes the listing page lazy-load more ads before
//! it is captured.

use serde::Serialize;

pub const DEFAULT_SCROLL_REPEATS: usize = 5;
pub const DEFAULT_SCROLL_PAUSE_MS: u64 = 3000;

/// One step executed by the rendering service before capture.
///
/// Serializes to the service's instruction format, e.g. `{"scroll_y":"100%"}`
/// or `{"wait":3000}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionStep {
    /// Scroll to the given vertical position; `"100%"` is the page bottom.
    ScrollY(String),
    /// Pause for the given number of milliseconds.
    Wait(u64),
}

impl InteractionStep {
    #[must_use]
    pub fn scroll_to_bottom() -> Self {
        InteractionStep::ScrollY("100%".to_string())
    }
}

/// Builds `repeats` scroll-to-bottom + pause pairs.
#[must_use]
pub fn build_scroll_script(repeats: usize, pause_ms: u64) -> Vec<InteractionStep> {
    (0..repeats)
        .flat_map(|_| [InteractionStep::scroll_to_bottom(), InteractionStep::Wait(pause_ms)])
        .collect()
}
