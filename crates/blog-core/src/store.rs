//! Post Store
//!
//! Owns the canonical corpus.

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::Utc;

use crate::post::{make_excerpt, Post, PostId};
use crate::source::PostSource;
use crate::validation::PostDraft;
use crate::BlogError;

/// Corpus load state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
}

/// Canonical post collection, newest first
#[derive(Debug)]
pub struct PostStore {
    posts: Vec<Post>,
    state: LoadState,
    last_id: u64,
    excerpt_len: usize,
}

impl PostStore {
    pub fn new(excerpt_len: usize) -> Self {
        Self {
            posts: Vec::new(),
            state: LoadState::Loading,
            last_id: 0,
            excerpt_len,
        }
    }

    /// Store that is already loaded with `posts`
    pub fn from_posts(posts: Vec<Post>, excerpt_len: usize) -> Self {
        Self {
            posts,
            state: LoadState::Ready,
            last_id: 0,
            excerpt_len,
        }
    }

    /// Replace the corpus with whatever `source` yields
    pub async fn load<S: PostSource>(&mut self, source: &S) -> Result<usize, BlogError> {
        self.state = LoadState::Loading;
        let posts = source.load().await?;
        tracing::info!("Loaded {} posts", posts.len());
        self.posts = posts;
        self.state = LoadState::Ready;
        Ok(self.posts.len())
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Create a post from a draft and put it first.
    ///
    /// The draft is stored as given; callers validate beforehand.
    pub fn add(&mut self, draft: PostDraft) -> Post {
        let id = self.next_id();
        let excerpt = make_excerpt(&draft.content, self.excerpt_len);
        let post = Post {
            id: PostId::new(id.to_string()),
            title: draft.title,
            content: draft.content,
            category: draft.category,
            publish_date: Utc::now().date_naive(),
            image: draft.image.filter(|i| !i.is_empty()),
            image_alt: draft.image_alt,
            excerpt,
        };
        tracing::info!(id = %post.id, "Added post \"{}\"", post.title);
        self.posts.insert(0, post.clone());
        post
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id.as_str() == id)
    }

    pub fn list(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Other posts in the same category, in corpus order
    pub fn related(&self, post: &Post, limit: usize) -> Vec<&Post> {
        self.posts
            .iter()
            .filter(|p| p.id != post.id && p.category == post.category)
            .take(limit)
            .collect()
    }

    /// Epoch milliseconds, bumped past the last issued id
    fn next_id(&mut self) -> u64 {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        self.last_id = millis.max(self.last_id + 1);
        self.last_id
    }
}

impl Default for PostStore {
    fn default() -> Self {
        Self::new(150)
    }
}
