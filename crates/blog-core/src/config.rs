//! Blog Configuration

use std::time::Duration;

use blog_a11y::AnnouncerConfig;
use serde::{Deserialize, Serialize};

use crate::BlogError;

/// Largest accepted `page_window`
pub const MAX_PAGE_WINDOW: usize = 50;

/// Blog configuration options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Posts shown per page
    pub posts_per_page: usize,

    /// Page-number buttons shown around the current page
    pub page_window: usize,

    /// Delay before an announcement lane is reset (milliseconds)
    pub announcement_clear_ms: u64,

    /// Characters of content kept in a derived excerpt
    pub excerpt_len: usize,

    /// Artificial latency of the mock post source (milliseconds)
    pub load_delay_ms: u64,

    /// Announcements kept in history
    pub history_limit: usize,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            posts_per_page: 6,
            page_window: 5,
            announcement_clear_ms: 1000,
            excerpt_len: 150,
            load_delay_ms: 1000,
            history_limit: 100,
        }
    }
}

impl BlogConfig {
    /// Parse from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, BlogError> {
        let config: Self = serde_json::from_str(json).map_err(|e| BlogError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BlogError> {
        if self.posts_per_page == 0 {
            return Err(BlogError::Config("posts_per_page must be greater than 0".into()));
        }
        if self.page_window == 0 || self.page_window > MAX_PAGE_WINDOW {
            return Err(BlogError::Config(format!(
                "page_window must be between 1 and {MAX_PAGE_WINDOW}"
            )));
        }
        Ok(())
    }

    pub fn announcer_config(&self) -> AnnouncerConfig {
        AnnouncerConfig {
            clear_after: Duration::from_millis(self.announcement_clear_ms),
            history_limit: self.history_limit,
        }
    }

    pub fn load_delay(&self) -> Duration {
        Duration::from_millis(self.load_delay_ms)
    }
}
