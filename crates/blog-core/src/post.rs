//! Posts

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Opaque post identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Body text; paragraphs are separated by blank lines
    pub content: String,
    pub category: String,
    pub publish_date: NaiveDate,
    /// Image as a data URL
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub image_alt: String,
    #[serde(default)]
    pub excerpt: String,
}

impl Post {
    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|i| !i.is_empty())
    }

    /// Non-empty paragraphs of the content
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Date as shown on cards, e.g. "September 15, 2025"
    pub fn display_date(&self) -> String {
        self.publish_date.format("%B %-d, %Y").to_string()
    }

    /// Case-insensitive substring match on title or content.
    /// `needle` must already be lowercase.
    pub(crate) fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }
}

/// First `max_chars` characters of `content` followed by "..."
pub fn make_excerpt(content: &str, max_chars: usize) -> String {
    let mut excerpt: String = content.chars().take(max_chars).collect();
    excerpt.push_str("...");
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(content: &str) -> Post {
        Post {
            id: PostId::new("1"),
            title: "Title".into(),
            content: content.into(),
            category: "Dev".into(),
            publish_date: NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(),
            image: None,
            image_alt: String::new(),
            excerpt: String::new(),
        }
    }

    #[test]
    fn test_excerpt_truncates_on_chars() {
        assert_eq!(make_excerpt("héllo world", 5), "héllo...");
        assert_eq!(make_excerpt("short", 150), "short...");
    }

    #[test]
    fn test_paragraphs() {
        let p = post("First.\n\nSecond.\n\n\n\nThird.");
        assert_eq!(p.paragraphs().collect::<Vec<_>>(), vec!["First.", "Second.", "Third."]);
    }

    #[test]
    fn test_display_date() {
        assert_eq!(post("x").display_date(), "September 15, 2025");
    }

    #[test]
    fn test_empty_image_is_no_image() {
        let mut p = post("x");
        p.image = Some(String::new());
        assert!(!p.has_image());
    }

    #[test]
    fn test_json_field_names() {
        let json = serde_json::to_value(post("x")).unwrap();
        assert_eq!(json["publishDate"], "2025-09-15");
        assert_eq!(json["imageAlt"], "");
        assert_eq!(json["id"], "1");
    }
}
