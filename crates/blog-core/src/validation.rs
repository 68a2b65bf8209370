//! Post Form Validation
//!
//! Required-field checks for new posts.

use std::fmt;

/// Form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Content,
    Category,
    ImageAlt,
}

impl Field {
    /// Form control name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Category => "category",
            Self::ImageAlt => "imageAlt",
        }
    }

    pub fn validation_message(&self) -> &'static str {
        match self {
            Self::Title => "Title is required",
            Self::Content => "Content is required",
            Self::Category => "Category is required",
            Self::ImageAlt => "Alt text is required when image is provided",
        }
    }
}

/// Failed fields, in form order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    fields: Vec<Field>,
}

impl ValidationErrors {
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    /// Message for a failed field
    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.contains(field).then(|| field.validation_message())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Assertive announcement for a rejected submission
    pub fn announcement(&self) -> String {
        let n = self.len();
        let suffix = if n > 1 { "s" } else { "" };
        format!("Form has {n} error{suffix}. Please correct and try again.")
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields.iter().map(Field::validation_message).collect();
        f.write_str(&messages.join("; "))
    }
}

/// Unsaved post as entered in the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    /// Image as a data URL
    pub image: Option<String>,
    pub image_alt: String,
}

impl PostDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn with_image(mut self, data_url: impl Into<String>, alt: impl Into<String>) -> Self {
        self.image = Some(data_url.into());
        self.image_alt = alt.into();
        self
    }

    /// Drop the image together with its alt text
    pub fn remove_image(&mut self) {
        self.image = None;
        self.image_alt.clear();
    }

    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|i| !i.is_empty())
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut fields = Vec::new();
        if self.title.trim().is_empty() {
            fields.push(Field::Title);
        }
        if self.content.trim().is_empty() {
            fields.push(Field::Content);
        }
        if self.category.trim().is_empty() {
            fields.push(Field::Category);
        }
        if self.has_image() && self.image_alt.trim().is_empty() {
            fields.push(Field::ImageAlt);
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors { fields })
        }
    }
}
