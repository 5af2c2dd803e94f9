use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    /// Access credential for the rendering service.
    pub render_api_key: String,
    pub render_base_url: String,
    pub request_timeout_secs: u64,
    pub scroll_repeats: usize,
    pub scroll_pause_ms: u64,
    /// Where raw responses are written for inspection; `None` disables snapshots.
    pub snapshot_dir: Option<PathBuf>,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("render_api_key", &"[redacted]")
            .field("render_base_url", &self.render_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("scroll_repeats", &self.scroll_repeats)
            .field("scroll_pause_ms", &self.scroll_pause_ms)
            .field("snapshot_dir", &self.snapshot_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}
