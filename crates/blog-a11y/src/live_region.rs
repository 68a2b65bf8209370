//! Live Region Support
//!
//! Render-layer sinks that mirror announcer lanes into ARIA live regions.

use std::cell::RefCell;
use std::rc::Rc;

use crate::politeness::Politeness;
use crate::A11yError;

/// Live region configuration
#[derive(Debug, Clone)]
pub struct LiveRegionConfig {
    /// Politeness level
    pub politeness: Politeness,
    /// Whether to announce the entire region or just changes
    pub atomic: bool,
}

impl Default for LiveRegionConfig {
    fn default() -> Self {
        Self {
            politeness: Politeness::Polite,
            // Lanes always hold whole sentences
            atomic: true,
        }
    }
}

impl LiveRegionConfig {
    /// Create polite live region
    pub fn polite() -> Self {
        Self {
            politeness: Politeness::Polite,
            ..Default::default()
        }
    }

    /// Create assertive live region
    pub fn assertive() -> Self {
        Self {
            politeness: Politeness::Assertive,
            ..Default::default()
        }
    }

    /// Region hosting the given lane
    pub fn for_lane(politeness: Politeness) -> Self {
        match politeness {
            Politeness::Polite => Self::polite(),
            Politeness::Assertive => Self::assertive(),
        }
    }

    /// Set atomic mode
    pub fn with_atomic(mut self, atomic: bool) -> Self {
        self.atomic = atomic;
        self
    }

    /// ARIA attributes the hosting element must carry
    pub fn attributes(&self) -> Vec<(&'static str, &'static str)> {
        vec![
            ("aria-live", self.politeness.aria_live()),
            ("aria-atomic", if self.atomic { "true" } else { "false" }),
            ("role", self.politeness.role()),
        ]
    }
}

/// A change to one lane's text. An empty `text` is a clear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneUpdate {
    pub politeness: Politeness,
    pub text: String,
}

impl LaneUpdate {
    pub fn is_clear(&self) -> bool {
        self.text.is_empty()
    }
}

/// Receiver of lane updates (the render layer's live regions)
pub trait LiveRegionSink {
    /// Reflect a lane update into the hosting environment
    fn update(&self, update: &LaneUpdate) -> Result<(), A11yError>;

    /// Sink name for diagnostics
    fn name(&self) -> &'static str;
}

/// Sink that drops every update
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl LiveRegionSink for NullSink {
    fn update(&self, _update: &LaneUpdate) -> Result<(), A11yError> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "null"
    }
}

/// Sink that records every update; clones share the same log
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    updates: Rc<RefCell<Vec<LaneUpdate>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<LaneUpdate> {
        self.updates.borrow().clone()
    }

    /// Updates seen on one lane, in order
    pub fn lane(&self, politeness: Politeness) -> Vec<String> {
        self.updates
            .borrow()
            .iter()
            .filter(|u| u.politeness == politeness)
            .map(|u| u.text.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.updates.borrow_mut().clear();
    }
}

impl LiveRegionSink for RecordingSink {
    fn update(&self, update: &LaneUpdate) -> Result<(), A11yError> {
        self.updates.borrow_mut().push(update.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}
