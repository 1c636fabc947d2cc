//! Application state for the HTTP server.

use chrono_tz::Tz;
use std::sync::Arc;

use crate::db::repository::LocationRepository;
use crate::error::InputError;
use crate::models::{CivilClock, CivilInstant, Clock};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Location catalog
    pub repository: Arc<dyn LocationRepository>,
    /// Source of "now" when a request does not pin an instant
    pub clock: Arc<dyn Clock>,
    /// Civil timezone used to localize explicit timestamps
    pub timezone: Tz,
}

impl AppState {
    /// State backed by the system clock in `timezone`.
    pub fn new(repository: Arc<dyn LocationRepository>, timezone: Tz) -> Self {
        Self {
            repository,
            clock: Arc::new(CivilClock::new(timezone)),
            timezone,
        }
    }

    /// Replace the clock, e.g. with a [`crate::models::FixedClock`] in tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// The instant named by an optional `at` parameter, or the clock's now.
    ///
    /// Resolved once per request so every rule in the response sees the same instant.
    pub fn resolve_instant(&self, at: Option<&str>) -> Result<CivilInstant, InputError> {
        match at {
            Some(value) if !value.trim().is_empty() => {
                CivilInstant::parse_rfc3339(value, self.timezone)
            }
            _ => Ok(self.clock.now()),
        }
    }
}
