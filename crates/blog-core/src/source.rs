//! Post Sources
//!
//! Asynchronous origins of the initial corpus.

use std::time::Duration;

use chrono::NaiveDate;

use crate::post::{Post, PostId};
use crate::BlogError;

/// Asynchronous corpus loader
#[allow(async_fn_in_trait)]
pub trait PostSource {
    /// Load the full corpus, newest first
    async fn load(&self) -> Result<Vec<Post>, BlogError>;
}

/// Built-in sample posts served after an artificial delay
#[derive(Debug, Clone)]
pub struct MockPostSource {
    delay: Duration,
    posts: Vec<Post>,
}

impl MockPostSource {
    pub fn new(delay: Duration) -> Self {
        Self { delay, posts: seed_posts() }
    }

    /// Serve `posts` instead of the samples
    pub fn with_posts(mut self, posts: Vec<Post>) -> Self {
        self.posts = posts;
        self
    }
}

impl Default for MockPostSource {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

impl PostSource for MockPostSource {
    async fn load(&self) -> Result<Vec<Post>, BlogError> {
        if !self.delay.is_zero() {
            smol::Timer::after(self.delay).await;
        }
        Ok(self.posts.clone())
    }
}

/// Corpus supplied as a JSON array
#[derive(Debug, Clone)]
pub struct JsonPostSource {
    json: String,
}

impl JsonPostSource {
    pub fn new(json: impl Into<String>) -> Self {
        Self { json: json.into() }
    }
}

impl PostSource for JsonPostSource {
    async fn load(&self) -> Result<Vec<Post>, BlogError> {
        serde_json::from_str(&self.json).map_err(|e| BlogError::Load(e.to_string()))
    }
}

/// Sample corpus
pub fn seed_posts() -> Vec<Post> {
    vec![
        seed(
            "1",
            "Getting Started with Web Accessibility",
            "Web accessibility ensures that websites and applications are usable by everyone, including people with disabilities. This involves creating content that can be perceived, understood, navigated, and interacted with by users of all abilities.\n\nKey principles include providing alternative text for images, ensuring proper color contrast, using semantic HTML elements, and making sure all functionality is keyboard accessible. Screen readers and other assistive technologies rely on well-structured markup to convey information to users.\n\nImplementing accessibility from the start is much easier than retrofitting it later. Consider it an essential part of the development process, not an afterthought.",
            "Accessibility",
            (2025, 9, 15),
            "Learn the fundamentals of web accessibility and why it matters for creating inclusive digital experiences.",
        ),
        seed(
            "2",
            "Building Semantic HTML",
            "Semantic HTML provides meaning to web content beyond just presentation. Using elements like article, section, nav, and proper heading hierarchy creates a logical document structure that assistive technologies can understand.\n\nInstead of using div elements for everything, choose HTML elements that best describe your content. Use headings (h1-h6) in logical order, employ lists for grouped items, and utilize landmarks like main, aside, and footer.\n\nSemantic markup improves SEO, accessibility, and code maintainability. It makes your content more meaningful to both humans and machines.",
            "Development",
            (2025, 9, 10),
            "Discover how semantic HTML elements create better structure and accessibility for your web content.",
        ),
        seed(
            "3",
            "ARIA Best Practices",
            "ARIA (Accessible Rich Internet Applications) attributes provide semantic information about elements to assistive technologies. They should be used to enhance, not replace, semantic HTML.\n\nCommon ARIA attributes include aria-label for accessible names, aria-describedby for additional descriptions, and aria-live for dynamic content updates. Use roles sparingly and only when semantic HTML is insufficient.\n\nRemember: the first rule of ARIA is don't use ARIA if you can accomplish the same thing with semantic HTML. Always test with actual screen readers to ensure your ARIA implementation works as expected.",
            "Accessibility",
            (2025, 9, 5),
            "Master ARIA attributes to enhance accessibility for complex web applications and dynamic content.",
        ),
    ]
}

fn seed(id: &str, title: &str, content: &str, category: &str, date: (i32, u32, u32), excerpt: &str) -> Post {
    Post {
        id: PostId::new(id),
        title: title.into(),
        content: content.into(),
        category: category.into(),
        publish_date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default(),
        image: None,
        image_alt: String::new(),
        excerpt: excerpt.into(),
    }
}
