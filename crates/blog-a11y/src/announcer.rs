//! Announcer
//!
//! Application-wide screen-reader broadcast with one lane per politeness.
//!
//! Assistive technology only speaks a live region when its text *changes*.
//! Each lane is therefore reset to the empty string a fixed delay after every
//! announcement, so two identical messages in a row are both spoken.
//!
//! A new announcement on a lane replaces its text at once and supersedes the
//! pending clear. Every clear carries the lane generation it was scheduled
//! for; a clear whose generation is stale is dropped instead of wiping the
//! newer text.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::clock::{Clock, SystemClock};
use crate::history::{AnnouncementHistory, AnnouncementRecord};
use crate::live_region::{LaneUpdate, LiveRegionSink};
use crate::politeness::Politeness;

/// Announcer configuration
#[derive(Debug, Clone)]
pub struct AnnouncerConfig {
    /// Delay before a lane is reset to empty
    pub clear_after: Duration,
    /// Maximum number of announcements kept in history
    pub history_limit: usize,
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            clear_after: Duration::from_millis(1000),
            history_limit: 100,
        }
    }
}

/// A scheduled lane clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingClear {
    pub politeness: Politeness,
    pub generation: u64,
    pub deadline: Instant,
}

/// Handle returned by [`Announcer::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Debug, Default)]
struct Lane {
    text: String,
    generation: u64,
    deadline: Option<Instant>,
}

struct AnnouncerState {
    lanes: [Lane; 2],
    history: AnnouncementHistory,
    sinks: Vec<(SubscriptionId, Rc<dyn LiveRegionSink>)>,
    next_subscription: u64,
    enabled: bool,
}

/// Screen-reader announcer.
///
/// Cloning yields another handle to the same lanes. Construct one at startup
/// and hand clones to every producer.
#[derive(Clone)]
pub struct Announcer {
    state: Rc<RefCell<AnnouncerState>>,
    clock: Rc<dyn Clock>,
    config: AnnouncerConfig,
}

impl Announcer {
    /// Create an announcer on the system clock
    pub fn new(config: AnnouncerConfig) -> Self {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    /// Create an announcer on a caller-supplied clock
    pub fn with_clock(config: AnnouncerConfig, clock: Rc<dyn Clock>) -> Self {
        let state = AnnouncerState {
            lanes: [Lane::default(), Lane::default()],
            history: AnnouncementHistory::new(config.history_limit),
            sinks: Vec::new(),
            next_subscription: 0,
            enabled: true,
        };
        Self {
            state: Rc::new(RefCell::new(state)),
            clock,
            config,
        }
    }

    pub fn config(&self) -> &AnnouncerConfig {
        &self.config
    }

    /// Announce `text` on the given lane.
    ///
    /// Returns the clear this call scheduled, or `None` while muted.
    pub fn announce(&self, text: impl Into<String>, politeness: Politeness) -> Option<PendingClear> {
        let text = text.into();
        let now = self.clock.now();

        let pending = {
            let mut state = self.state.borrow_mut();
            if !state.enabled {
                return None;
            }

            let lane = &mut state.lanes[politeness.index()];
            lane.generation += 1;
            lane.text = text.clone();
            let deadline = now + self.config.clear_after;
            lane.deadline = Some(deadline);
            let generation = lane.generation;

            state.history.push(AnnouncementRecord {
                text: text.clone(),
                politeness,
                at: now,
            });

            PendingClear { politeness, generation, deadline }
        };

        tracing::debug!(lane = %politeness, generation = pending.generation, "announce: {}", text);
        self.notify(LaneUpdate { politeness, text });
        Some(pending)
    }

    /// Announce on the polite lane
    pub fn polite(&self, text: impl Into<String>) -> Option<PendingClear> {
        self.announce(text, Politeness::Polite)
    }

    /// Announce on the assertive lane
    pub fn assertive(&self, text: impl Into<String>) -> Option<PendingClear> {
        self.announce(text, Politeness::Assertive)
    }

    /// Apply a timer firing. Returns `true` if the lane was cleared, `false`
    /// if the clear had been superseded or already applied.
    pub fn expire(&self, pending: PendingClear) -> bool {
        {
            let mut state = self.state.borrow_mut();
            let lane = &mut state.lanes[pending.politeness.index()];
            if lane.generation != pending.generation || lane.deadline.is_none() {
                tracing::trace!(lane = %pending.politeness, generation = pending.generation, "stale clear dropped");
                return false;
            }
            lane.text.clear();
            lane.deadline = None;
        }

        self.notify(LaneUpdate { politeness: pending.politeness, text: String::new() });
        true
    }

    /// Clear every lane whose deadline has passed. Returns how many were cleared.
    pub fn fire_due(&self) -> usize {
        let now = self.clock.now();
        let due: Vec<PendingClear> = self
            .pending()
            .into_iter()
            .filter(|p| p.deadline <= now)
            .collect();

        due.into_iter().filter(|p| self.expire(*p)).count()
    }

    /// Currently scheduled clears, earliest first
    pub fn pending(&self) -> Vec<PendingClear> {
        let state = self.state.borrow();
        let mut pending: Vec<PendingClear> = Politeness::ALL
            .iter()
            .filter_map(|&politeness| {
                let lane = &state.lanes[politeness.index()];
                lane.deadline.map(|deadline| PendingClear {
                    politeness,
                    generation: lane.generation,
                    deadline,
                })
            })
            .collect();
        pending.sort_by_key(|p| p.deadline);
        pending
    }

    /// Earliest scheduled clear deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending().first().map(|p| p.deadline)
    }

    /// Drive clear timers on the current executor until no clears remain.
    ///
    /// Deadlines are awaited with `smol::Timer`, so this expects the announcer
    /// to run on the system clock.
    pub async fn run_timers(&self) {
        while let Some(next) = self.pending().first().copied() {
            smol::Timer::at(next.deadline).await;
            self.expire(next);
        }
    }

    /// Current text of a lane
    pub fn text(&self, politeness: Politeness) -> String {
        self.state.borrow().lanes[politeness.index()].text.clone()
    }

    pub fn is_pending(&self, politeness: Politeness) -> bool {
        self.state.borrow().lanes[politeness.index()].deadline.is_some()
    }

    /// Register a sink for lane updates
    pub fn subscribe<S: LiveRegionSink + 'static>(&self, sink: S) -> SubscriptionId {
        let mut state = self.state.borrow_mut();
        let id = SubscriptionId(state.next_subscription);
        state.next_subscription += 1;
        tracing::debug!(sink = sink.name(), "live region sink subscribed");
        state.sinks.push((id, Rc::new(sink)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.sinks.len();
        state.sinks.retain(|(sid, _)| *sid != id);
        state.sinks.len() != before
    }

    /// Mute or unmute. Muting leaves lane text and pending clears untouched.
    pub fn set_enabled(&self, enabled: bool) {
        self.state.borrow_mut().enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.state.borrow().enabled
    }

    /// Announcement history, oldest first
    pub fn history(&self) -> Vec<String> {
        self.state.borrow().history.texts()
    }

    pub fn last_announcement(&self) -> Option<AnnouncementRecord> {
        self.state.borrow().history.last().cloned()
    }

    fn notify(&self, update: LaneUpdate) {
        // Sinks may announce re-entrantly, so no borrow is held while they run.
        let sinks: Vec<Rc<dyn LiveRegionSink>> = self
            .state
            .borrow()
            .sinks
            .iter()
            .map(|(_, sink)| Rc::clone(sink))
            .collect();

        for sink in sinks {
            if let Err(e) = sink.update(&update) {
                tracing::warn!(sink = sink.name(), "live region update dropped: {}", e);
            }
        }
    }
}

impl Default for Announcer {
    fn default() -> Self {
        Self::new(AnnouncerConfig::default())
    }
}

impl fmt::Debug for Announcer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Announcer")
            .field("polite", &state.lanes[0])
            .field("assertive", &state.lanes[1])
            .field("sinks", &state.sinks.len())
            .field("enabled", &state.enabled)
            .finish()
    }
}
