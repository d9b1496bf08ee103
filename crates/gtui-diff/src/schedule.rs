//! Debouncing diff requests from list navigation
//!
//! Holding an arrow key through the staging list should not compute a diff
//! for every row it passes. [`DiffScheduler`] decides when a diff may start
//! and whether a finished diff still belongs to the selected file. The
//! engine itself stays stateless.

use crate::config::ScheduleConfig;
use parking_lot::Mutex;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Identifies one navigation to a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTicket {
    generation: u64,
    path: PathBuf,
}

impl DiffTicket {
    /// File this ticket asks a diff for
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Debug)]
struct SchedulerState {
    generation: u64,
    target: Option<PathBuf>,
    last_nav: Option<Instant>,
    last_start: Option<Instant>,
}

/// Gatekeeper for diff computations
///
/// Shared between the input loop and background workers, typically as
/// `Arc<DiffScheduler>`.
#[derive(Debug)]
pub struct DiffScheduler {
    nav_debounce: Duration,
    min_interval: Duration,
    state: Mutex<SchedulerState>,
}

impl DiffScheduler {
    /// Create a scheduler with the given timings
    pub fn new(config: &ScheduleConfig) -> Self {
        DiffScheduler {
            nav_debounce: config.nav_debounce(),
            min_interval: config.min_interval(),
            state: Mutex::new(SchedulerState {
                generation: 0,
                target: None,
                last_nav: None,
                last_start: None,
            }),
        }
    }

    /// Record that the selection moved to `path`
    ///
    /// Any ticket handed out earlier becomes stale.
    pub fn navigate(&self, path: impl Into<PathBuf>, now: Instant) -> DiffTicket {
        let path = path.into();
        let mut state = self.state.lock();
        state.generation += 1;
        state.target = Some(path.clone());
        state.last_nav = Some(now);

        DiffTicket {
            generation: state.generation,
            path,
        }
    }

    /// Check whether the diff for `ticket` may start now
    ///
    /// Succeeds only for the latest ticket, once navigation has been idle
    /// for the debounce period and the minimum interval since the previous
    /// diff has passed. A successful check counts as starting the diff.
    pub fn should_start(&self, ticket: &DiffTicket, now: Instant) -> bool {
        let mut state = self.state.lock();

        if ticket.generation != state.generation {
            tracing::trace!("Dropping stale diff request for {:?}", ticket.path);
            return false;
        }

        let settled = state
            .last_nav
            .is_none_or(|t| now.saturating_duration_since(t) >= self.nav_debounce);
        let rested = state
            .last_start
            .is_none_or(|t| now.saturating_duration_since(t) >= self.min_interval);

        if settled && rested {
            state.last_start = Some(now);
            tracing::debug!("Starting diff for {:?}", ticket.path);
            true
        } else {
            false
        }
    }

    /// Check whether a finished diff for `ticket` should be shown
    pub fn accept(&self, ticket: &DiffTicket) -> bool {
        let state = self.state.lock();
        let current = ticket.generation == state.generation
            && state.target.as_deref() == Some(ticket.path.as_path());
        if !current {
            tracing::debug!("Discarding diff for {:?}, selection moved", ticket.path);
        }
        current
    }

    /// File currently selected, if any
    pub fn target(&self) -> Option<PathBuf> {
        self.state.lock().target.clone()
    }
}

impl Default for DiffScheduler {
    fn default() -> Self {
        DiffScheduler::new(&ScheduleConfig::default())
    }
}
