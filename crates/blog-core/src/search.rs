//! Search & Filter
//!
//! Derives the filtered post set for a query and announces the result count.
//!
//! Filtering is stable: items keep corpus order, there is no ranking. The
//! announcement wording is fixed because screen-reader users learn it:
//!
//! ```text
//! Search updated. {n} {post|posts} found[ for "{term}"][ in {category}].
//! ```

use std::fmt;

use blog_a11y::{Announcer, Politeness};

use crate::post::Post;

/// Category value meaning "no category filter"
pub const ALL_CATEGORIES: &str = "all";

/// Announced when the user clears the search
pub const SEARCH_CLEARED: &str = "Search cleared. Showing all posts.";

/// Category filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive category name
    Named(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Named(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Named(name) => name,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search query. A new query replaces the previous one wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query {
    pub term: String,
    pub category: CategoryFilter,
}

impl Query {
    pub fn new(term: impl Into<String>, category: impl Into<CategoryFilter>) -> Self {
        Self { term: term.into(), category: category.into() }
    }

    /// Query that matches every post
    pub fn all() -> Self {
        Self::default()
    }

    /// Term with surrounding whitespace removed
    pub fn effective_term(&self) -> &str {
        self.term.trim()
    }

    pub fn is_identity(&self) -> bool {
        self.effective_term().is_empty() && self.category == CategoryFilter::All
    }

    pub fn with_term(&self, term: impl Into<String>) -> Self {
        Self { term: term.into(), category: self.category.clone() }
    }

    pub fn with_category(&self, category: impl Into<CategoryFilter>) -> Self {
        Self { term: self.term.clone(), category: category.into() }
    }
}

/// Outcome of one filter evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult {
    pub items: Vec<Post>,
    pub count: usize,
    pub announcement: String,
}

/// Posts matching `query`, in corpus order
pub fn filter_posts(corpus: &[Post], query: &Query) -> Vec<Post> {
    let needle = query.effective_term().to_lowercase();
    corpus
        .iter()
        .filter(|post| needle.is_empty() || post.mentions(&needle))
        .filter(|post| query.category.matches(&post.category))
        .cloned()
        .collect()
}

/// Result-count sentence for `count` matches of `query`
pub fn result_announcement(count: usize, query: &Query) -> String {
    let noun = if count == 1 { "post" } else { "posts" };
    let mut text = format!("Search updated. {count} {noun} found");

    let term = query.effective_term();
    if !term.is_empty() {
        text.push_str(&format!(" for \"{term}\""));
    }
    if let CategoryFilter::Named(category) = &query.category {
        text.push_str(&format!(" in {category}"));
    }
    text.push('.');
    text
}

/// Category selector options: "all", then each category in first-seen order
pub fn categories(corpus: &[Post]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for post in corpus {
        if !out.iter().skip(1).any(|c| c == &post.category) {
            out.push(post.category.clone());
        }
    }
    out
}

/// Filter pipeline bound to the application announcer
#[derive(Debug, Clone)]
pub struct SearchFilterPipeline {
    announcer: Announcer,
}

impl SearchFilterPipeline {
    pub fn new(announcer: Announcer) -> Self {
        Self { announcer }
    }

    /// Filter by raw term and category name
    pub fn filter(&self, corpus: &[Post], term: &str, category: &str) -> FilterResult {
        self.run(corpus, &Query::new(term, category))
    }

    /// Filter by a prepared query and announce the result count
    pub fn run(&self, corpus: &[Post], query: &Query) -> FilterResult {
        let items = filter_posts(corpus, query);
        let count = items.len();
        let announcement = result_announcement(count, query);
        tracing::debug!(term = query.effective_term(), category = %query.category, count, "search recomputed");
        self.announcer.announce(announcement.clone(), Politeness::Polite);
        FilterResult { items, count, announcement }
    }

    /// Reset to the identity query
    pub fn clear(&self, corpus: &[Post]) -> FilterResult {
        let items = corpus.to_vec();
        let count = items.len();
        tracing::debug!(count, "search cleared");
        self.announcer.announce(SEARCH_CLEARED, Politeness::Polite);
        FilterResult { items, count, announcement: SEARCH_CLEARED.to_string() }
    }
}
