//! Blog Session
//!
//! Wires the store, search pipeline, paginator and announcer together the
//! way the reader UI drives them. Every query change restarts at page 1.

use blog_a11y::{Announcer, Politeness};

use crate::config::BlogConfig;
use crate::pagination::{PageChange, PageWindow, Paginator};
use crate::post::Post;
use crate::search::{categories, filter_posts, CategoryFilter, FilterResult, Query, SearchFilterPipeline};
use crate::store::PostStore;
use crate::validation::PostDraft;
use crate::BlogError;

pub const POST_ADDED: &str = "Post added successfully!";
pub const RETURNING_TO_LIST: &str = "Returning to blog list";
pub const IMAGE_REMOVED: &str = "Image removed";

/// Number of related posts shown under a post
const RELATED_LIMIT: usize = 3;

/// Colour theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Reader/editor session state
#[derive(Debug)]
pub struct BlogSession {
    config: BlogConfig,
    announcer: Announcer,
    store: PostStore,
    pipeline: SearchFilterPipeline,
    paginator: Paginator,
    query: Query,
    filtered: Vec<Post>,
    theme: Theme,
}

impl BlogSession {
    /// Start on the identity query, page 1. Nothing is announced.
    pub fn new(config: BlogConfig, announcer: Announcer, store: PostStore) -> Result<Self, BlogError> {
        config.validate()?;
        let mut paginator = Paginator::new(announcer.clone(), config.posts_per_page, config.page_window);
        let filtered = store.list().to_vec();
        paginator.reset(filtered.len());

        Ok(Self {
            pipeline: SearchFilterPipeline::new(announcer.clone()),
            config,
            announcer,
            store,
            paginator,
            query: Query::all(),
            filtered,
            theme: Theme::default(),
        })
    }

    pub fn config(&self) -> &BlogConfig {
        &self.config
    }

    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }

    pub fn store(&self) -> &PostStore {
        &self.store
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Posts matching the active query
    pub fn filtered(&self) -> &[Post] {
        &self.filtered
    }

    /// Category selector options
    pub fn categories(&self) -> Vec<String> {
        categories(self.store.list())
    }

    pub fn set_term(&mut self, term: &str) -> FilterResult {
        let query = self.query.with_term(term);
        self.apply_query(query)
    }

    pub fn set_category(&mut self, category: &str) -> FilterResult {
        let query = self.query.with_category(CategoryFilter::parse(category));
        self.apply_query(query)
    }

    /// Replace the query, re-filter, announce, and return to page 1
    pub fn apply_query(&mut self, query: Query) -> FilterResult {
        let result = self.pipeline.run(self.store.list(), &query);
        self.query = query;
        self.install(result.items.clone());
        result
    }

    pub fn clear_search(&mut self) -> FilterResult {
        let result = self.pipeline.clear(self.store.list());
        self.query = Query::all();
        self.install(result.items.clone());
        result
    }

    pub fn page_window(&self) -> PageWindow {
        self.paginator.paginate()
    }

    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    /// Posts on the current page
    pub fn visible_posts(&self) -> &[Post] {
        let range = self.paginator.paginate().visible_range;
        &self.filtered[range]
    }

    pub fn change_page(&mut self, requested: i64) -> PageChange {
        self.paginator.change_page(requested)
    }

    pub fn next_page(&mut self) -> Option<PageChange> {
        self.paginator.next_page()
    }

    pub fn prev_page(&mut self) -> Option<PageChange> {
        self.paginator.prev_page()
    }

    /// Validate and store a new post.
    ///
    /// The filtered set is refreshed under the active query without a search
    /// announcement; only the submission outcome is announced.
    pub fn submit_post(&mut self, draft: PostDraft) -> Result<Post, BlogError> {
        if let Err(errors) = draft.validate() {
            tracing::debug!(errors = errors.len(), "post draft rejected");
            self.announcer.announce(errors.announcement(), Politeness::Assertive);
            return Err(BlogError::Validation(errors));
        }

        let post = self.store.add(draft);
        let refreshed = filter_posts(self.store.list(), &self.query);
        self.install(refreshed);
        self.announcer.announce(POST_ADDED, Politeness::Polite);
        Ok(post)
    }

    /// Drop the draft's image and announce it
    pub fn remove_draft_image(&self, draft: &mut PostDraft) {
        draft.remove_image();
        self.announcer.announce(IMAGE_REMOVED, Politeness::Polite);
    }

    /// Open a post for reading
    pub fn view_post(&self, id: &str) -> Result<&Post, BlogError> {
        let post = self
            .store
            .get(id)
            .ok_or_else(|| BlogError::PostNotFound(id.to_string()))?;
        self.announcer.announce(format!("Viewing post: {}", post.title), Politeness::Polite);
        Ok(post)
    }

    /// Up to three other posts in the same category
    pub fn related_posts(&self, id: &str) -> Result<Vec<&Post>, BlogError> {
        let post = self
            .store
            .get(id)
            .ok_or_else(|| BlogError::PostNotFound(id.to_string()))?;
        Ok(self.store.related(post, RELATED_LIMIT))
    }

    pub fn return_to_list(&self) {
        self.announcer.announce(RETURNING_TO_LIST, Politeness::Polite);
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.announcer
            .announce(format!("Switched to {} mode", self.theme.name()), Politeness::Polite);
        self.theme
    }

    fn install(&mut self, filtered: Vec<Post>) {
        self.paginator.reset(filtered.len());
        self.filtered = filtered;
    }
}
