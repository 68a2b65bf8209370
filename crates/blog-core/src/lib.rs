//! Blog Core
//!
//! Interaction state for the accessible blog reader.
//!
//! # Pipeline
//! ```text
//! query → SearchFilterPipeline → filtered posts → Paginator → visible slice
//!                  └──────────── announcements ───────┘→ Announcer
//! ```
//!
//! # Example
//! ```rust,ignore
//! use blog_a11y::Announcer;
//! use blog_core::{BlogConfig, BlogSession, MockPostSource, PostStore};
//!
//! let config = BlogConfig::default();
//! let announcer = Announcer::new(config.announcer_config());
//! let mut store = PostStore::new(config.excerpt_len);
//! smol::block_on(store.load(&MockPostSource::new(config.load_delay())))?;
//! let mut session = BlogSession::new(config, announcer, store)?;
//! session.set_term("aria");
//! ```

mod config;
pub mod post;
pub mod source;
pub mod store;
pub mod search;
pub mod pagination;
pub mod validation;
pub mod session;

pub use config::{BlogConfig, MAX_PAGE_WINDOW};
pub use post::{Post, PostId, make_excerpt};
pub use source::{PostSource, MockPostSource, JsonPostSource, seed_posts};
pub use store::{PostStore, LoadState};
pub use search::{
    SearchFilterPipeline, Query, CategoryFilter, FilterResult,
    filter_posts, result_announcement, categories, ALL_CATEGORIES, SEARCH_CLEARED,
};
pub use pagination::{
    Paginator, PageWindow, PageItem, PageChange,
    paginate, paginate_with_width, total_pages, clamp_page, page_announcement, DEFAULT_WINDOW,
};
pub use validation::{PostDraft, Field, ValidationErrors};
pub use session::{BlogSession, Theme};

/// Blog error
#[derive(Debug, thiserror::Error)]
pub enum BlogError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Failed to load posts: {0}")]
    Load(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}
