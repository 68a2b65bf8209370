//! Live Region Politeness
//!
//! The two announcement lanes and their ARIA mapping.

use std::fmt;

/// Live region politeness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Politeness {
    /// Waits for the screen reader to finish the current utterance
    #[default]
    Polite,
    /// Interrupts the current utterance
    Assertive,
}

impl Politeness {
    pub const ALL: [Politeness; 2] = [Politeness::Polite, Politeness::Assertive];

    /// Parse a priority name. Unknown names fall back to `Polite`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "polite" => Self::Polite,
            "assertive" => Self::Assertive,
            other => {
                tracing::warn!(priority = other, "unknown announcement priority, using polite");
                Self::Polite
            }
        }
    }

    /// Value of the `aria-live` attribute
    pub fn aria_live(&self) -> &'static str {
        match self {
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }

    /// Implicit ARIA role of the region hosting this lane
    pub fn role(&self) -> &'static str {
        match self {
            Self::Polite => "status",
            Self::Assertive => "alert",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            Self::Polite => 0,
            Self::Assertive => 1,
        }
    }
}

impl From<&str> for Politeness {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl fmt::Display for Politeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.aria_live())
    }
}
