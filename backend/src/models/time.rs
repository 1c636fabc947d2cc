use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Civil timezone every parking rule in Chicago is written against.
pub const CIVIL_TIMEZONE: Tz = chrono_tz::America::Chicago;

/// A point in time as perceived on the wall clocks of one civil timezone.
///
/// All rule evaluation reads hour, weekday and month from this type, so the
/// answer never depends on the timezone of the machine doing the evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilInstant(DateTime<Tz>);

impl CivilInstant {
    /// Wrap a UTC instant, localized to `tz`.
    pub fn from_utc(instant: DateTime<Utc>, tz: Tz) -> Self {
        Self(instant.with_timezone(&tz))
    }

    /// Wrap an instant carrying any fixed offset, localized to `tz`.
    pub fn from_fixed(instant: DateTime<FixedOffset>, tz: Tz) -> Self {
        Self(instant.with_timezone(&tz))
    }

    /// Build an instant from wall-clock fields in `tz`.
    ///
    /// Returns `None` for invalid fields or for local times skipped by a
    /// daylight-saving transition. Ambiguous times resolve to the earlier offset.
    pub fn from_local(
        tz: Tz,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> Option<Self> {
        tz.with_ymd_and_hms(year, month, day, hour, minute, 0)
            .earliest()
            .map(Self)
    }

    /// Parse an RFC 3339 timestamp and localize it to `tz`.
    pub fn parse_rfc3339(value: &str, tz: Tz) -> Result<Self, InputError> {
        DateTime::parse_from_rfc3339(value.trim())
            .map(|dt| Self::from_fixed(dt, tz))
            .map_err(|e| InputError::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// Hour of day, 0-23.
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Day of week, 0 = Sunday through 6 = Saturday.
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// Month, 0 = January through 11 = December.
    pub fn month0(&self) -> u32 {
        self.0.month0()
    }

    /// Calendar date on the civil wall clock.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    pub fn timezone(&self) -> Tz {
        self.0.timezone()
    }

    pub fn as_datetime(&self) -> &DateTime<Tz> {
        &self.0
    }

    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

impl std::fmt::Display for CivilInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Source of the current instant.
///
/// Anything that renders many restrictions at once should call [`Clock::now`]
/// a single time and hand the same [`CivilInstant`] to every evaluator.
pub trait Clock: Send + Sync {
    fn now(&self) -> CivilInstant;
}

/// Reads the system clock and localizes it to a civil timezone.
#[derive(Debug, Clone, Copy)]
pub struct CivilClock {
    tz: Tz,
}

impl CivilClock {
    pub fn new(tz: Tz) -> Self {
        Self { tz }
    }

    pub fn chicago() -> Self {
        Self::new(CIVIL_TIMEZONE)
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }
}

impl Default for CivilClock {
    fn default() -> Self {
        Self::chicago()
    }
}

impl Clock for CivilClock {
    fn now(&self) -> CivilInstant {
        CivilInstant::from_utc(Utc::now(), self.tz)
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CivilInstant);

impl Clock for FixedClock {
    fn now(&self) -> CivilInstant {
        self.0
    }
}

/// Wall-clock breakdown of a [`CivilInstant`], as served over the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CivilTimeInfo {
    pub timezone: String,
    pub timestamp: String,
    pub date: NaiveDate,
    pub hour: u32,
    pub minute: u32,
    pub day_of_week: u32,
    pub month: u32,
}

impl From<&CivilInstant> for CivilTimeInfo {
    fn from(instant: &CivilInstant) -> Self {
        Self {
            timezone: instant.timezone().name().to_string(),
            timestamp: instant.to_string(),
            date: instant.date(),
            hour: instant.hour(),
            minute: instant.minute(),
            day_of_week: instant.day_of_week(),
            month: instant.month0(),
        }
    }
}
