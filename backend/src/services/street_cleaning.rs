//! Street-cleaning urgency classification and labels.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::InputError;
use crate::models::CivilInstant;

/// Days ahead that still count as "soon".
pub const SOON_THRESHOLD_DAYS: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyTier {
    /// Today, or a date already past.
    Today,
    /// One to three days out.
    Soon,
    Later,
    None,
}

impl UrgencyTier {
    /// Map colour for a cleaning zone in this tier.
    pub fn color(&self) -> &'static str {
        match self {
            UrgencyTier::Today => "#dc2626",
            UrgencyTier::Soon => "#f97316",
            UrgencyTier::Later => "#16a34a",
            UrgencyTier::None => "#9ca3af",
        }
    }
}

/// Classification of one cleaning date against the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CleaningOutlook {
    pub tier: UrgencyTier,
    /// Whole calendar days from today; negative when the date is past.
    pub days_until: Option<i64>,
}

/// Whole calendar days between the civil date of `now` and `date`.
///
/// Time of day plays no part, so a cleaning earlier today is still day 0.
pub fn days_until(date: NaiveDate, now: &CivilInstant) -> i64 {
    (date - now.date()).num_days()
}

pub fn outlook(next_cleaning: Option<NaiveDate>, now: &CivilInstant) -> CleaningOutlook {
    match next_cleaning {
        None => CleaningOutlook {
            tier: UrgencyTier::None,
            days_until: None,
        },
        Some(date) => {
            let days = days_until(date, now);
            let tier = if days <= 0 {
                UrgencyTier::Today
            } else if days <= SOON_THRESHOLD_DAYS {
                UrgencyTier::Soon
            } else {
                UrgencyTier::Later
            };
            CleaningOutlook {
                tier,
                days_until: Some(days),
            }
        }
    }
}

pub fn classify(next_cleaning: Option<NaiveDate>, now: &CivilInstant) -> UrgencyTier {
    outlook(next_cleaning, now).tier
}

/// `Mon, Oct 19`
pub fn format_cleaning_date(date: NaiveDate) -> String {
    date.format("%a, %b %-d").to_string()
}

pub fn cleaning_label(next_cleaning: Option<NaiveDate>, now: &CivilInstant) -> String {
    let Some(date) = next_cleaning else {
        return "No scheduled cleaning".to_string();
    };
    let formatted = format_cleaning_date(date);
    match days_until(date, now) {
        d if d <= 0 => format!("Cleaning TODAY ({})", formatted),
        1 => format!("Cleaning TOMORROW ({})", formatted),
        _ => format!("Next cleaning: {}", formatted),
    }
}

/// Parse a feed date: `YYYY-MM-DD`, or an ISO date-time whose date part is
/// taken as written. Blank input means no cleaning is scheduled.
pub fn parse_cleaning_date(value: &str) -> Result<Option<NaiveDate>, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(Some(dt.date_naive()));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Some(dt.date()));
        }
    }
    Err(InputError::InvalidDate {
        value: value.to_string(),
    })
}
