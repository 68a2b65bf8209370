//! Blog Accessibility
//!
//! Announcement plumbing for the accessible blog.
//!
//! Features:
//! - Two live-region lanes (polite, assertive)
//! - Auto-clear after a fixed delay so repeated messages are re-announced
//! - Superseded clear timers are invalidated, never raced
//! - Pub/sub delivery to render-layer sinks
//! - Bounded announcement history

pub mod politeness;
pub mod clock;
pub mod live_region;
pub mod history;
pub mod announcer;

pub use politeness::Politeness;
pub use clock::{Clock, SystemClock, ManualClock};
pub use live_region::{LiveRegionSink, LaneUpdate, LiveRegionConfig, NullSink, RecordingSink};
pub use history::{AnnouncementHistory, AnnouncementRecord};
pub use announcer::{Announcer, AnnouncerConfig, PendingClear, SubscriptionId};

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Live region not mounted: {0}")]
    RegionUnavailable(String),

    #[error("Sink rejected update: {0}")]
    SinkFailed(String),
}
