//! Periodic refresh of the displayed times
//!
//! A refresh tick formats the current time for every row, then persists the
//! configuration. [`RefreshTask`] is the repeating schedule the event loop
//! owns; its interval can be changed from outside between ticks.

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use super::WorldClock;
use crate::config_io::ConfigStore;
use crate::timezone;

/// Tick interval while seconds are displayed
pub const SECONDS_INTERVAL: Duration = Duration::from_secs(1);

/// Tick interval while only minutes are displayed
pub const MINUTES_INTERVAL: Duration = Duration::from_secs(10);

/// Interval between ticks for the given display mode
pub fn interval_for(show_seconds: bool) -> Duration {
    if show_seconds {
        SECONDS_INTERVAL
    } else {
        MINUTES_INTERVAL
    }
}

/// Source of the current instant
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl TimeSource for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Repeating schedule for refresh ticks
#[derive(Debug, Clone)]
pub struct RefreshTask {
    interval: Duration,
    /// `None` means a tick is due right away
    next_due: Option<Instant>,
}

impl RefreshTask {
    /// A task whose first tick is due immediately
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Change the interval; a pending deadline further out than
    /// `now + interval` is pulled in
    pub fn set_interval(&mut self, interval: Duration, now: Instant) {
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        if let Some(due) = self.next_due {
            let latest = now + interval;
            if due > latest {
                self.next_due = Some(latest);
            }
        }
    }

    /// Make the next tick due immediately
    pub fn trigger(&mut self) {
        self.next_due = None;
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.map_or(true, |due| now >= due)
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next_due
            .map_or(Duration::ZERO, |due| due.saturating_duration_since(now))
    }

    /// Schedule the following tick one interval after `now`
    pub fn schedule_next(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }
}

impl WorldClock {
    /// Update every row's display for `now`
    ///
    /// Rows whose zone does not resolve keep their previous display.
    pub fn refresh_displays(&mut self, now: DateTime<Utc>) {
        let show_seconds = self.show_seconds;
        for (idx, row) in self.rows.iter_mut().enumerate() {
            match timezone::zone_time(row.entry.get(), now, show_seconds) {
                Ok(text) => row.display = Some(text),
                Err(e) => tracing::debug!("Row {} not updated: {}", idx, e),
            }
        }
    }

    /// One refresh tick: update displays, persist, and return the interval
    /// until the next tick
    pub fn tick(&mut self, time: &dyn TimeSource, store: &mut ConfigStore) -> Duration {
        self.refresh_displays(time.now());
        if let Err(e) = store.save(&self.to_config()) {
            tracing::warn!("Could not save configuration: {:#}", anyhow::Error::new(e));
        }
        interval_for(self.show_seconds)
    }
}
