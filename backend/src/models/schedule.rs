//! Recurring restriction windows and the meter rate-description parser.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::time::CivilInstant;

/// Days of the week a window applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayRange {
    #[serde(rename = "Mon-Sat")]
    MonSat,
    #[serde(rename = "Mon-Fri")]
    MonFri,
    #[serde(rename = "Mon-Sun")]
    MonSun,
}

impl DayRange {
    /// Whether `day_of_week` (0 = Sunday) falls in this range.
    pub fn contains(&self, day_of_week: u32) -> bool {
        match self {
            DayRange::MonSat => (1..=6).contains(&day_of_week),
            DayRange::MonFri => (1..=5).contains(&day_of_week),
            DayRange::MonSun => day_of_week <= 6,
        }
    }

    /// Case-insensitive match of the `Mon-Sat` style tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "mon-sat" => Some(DayRange::MonSat),
            "mon-fri" => Some(DayRange::MonFri),
            "mon-sun" => Some(DayRange::MonSun),
            _ => None,
        }
    }

    /// Display label, with an en dash.
    pub fn label(&self) -> &'static str {
        match self {
            DayRange::MonSat => "Mon–Sat",
            DayRange::MonFri => "Mon–Fri",
            DayRange::MonSun => "Mon–Sun",
        }
    }
}

/// A day range plus a half-open `[start_hour, end_hour)` hour range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnforcementWindow {
    pub days: DayRange,
    pub start_hour: u32,
    pub end_hour: u32,
}

impl EnforcementWindow {
    pub const fn new(days: DayRange, start_hour: u32, end_hour: u32) -> Self {
        Self {
            days,
            start_hour,
            end_hour,
        }
    }

    /// Start inclusive, end exclusive. A window whose end is not after its
    /// start never matches.
    pub fn contains(&self, now: &CivilInstant) -> bool {
        let hour = now.hour();
        self.days.contains(now.day_of_week()) && hour >= self.start_hour && hour < self.end_hour
    }

    /// e.g. `Mon–Sat 8am–10pm`
    pub fn describe(&self) -> String {
        format!(
            "{} {}–{}",
            self.days.label(),
            format_hour(self.start_hour),
            format_hour(self.end_hour)
        )
    }
}

/// Meter hours used when a description is missing or unreadable.
pub const DEFAULT_METER_WINDOW: EnforcementWindow = EnforcementWindow::new(DayRange::MonSat, 8, 22);

/// How a [`MeterSchedule`] was arrived at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleSource {
    /// No description supplied.
    Absent,
    /// Description read successfully.
    Parsed,
    /// Description present but unreadable; the default window applies.
    Fallback,
}

/// Resolved enforcement hours of one meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeterSchedule {
    Always,
    Window(EnforcementWindow),
}

static WINDOW_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(mon-sat|mon-fri|mon-sun)\s+(\d{1,2})\s*(am|pm)\s*-\s*(\d{1,2})\s*(am|pm)")
        .expect("meter window pattern is valid")
});

impl MeterSchedule {
    /// Resolve a free-text rate description.
    ///
    /// Unreadable text yields the default Mon-Sat 8am-10pm window, not an error.
    pub fn resolve(rate_description: Option<&str>) -> (Self, ScheduleSource) {
        let Some(text) = rate_description else {
            return (MeterSchedule::Window(DEFAULT_METER_WINDOW), ScheduleSource::Absent);
        };

        if text.contains("24/7") {
            return (MeterSchedule::Always, ScheduleSource::Parsed);
        }

        match parse_window(text) {
            Some(window) => (MeterSchedule::Window(window), ScheduleSource::Parsed),
            None => {
                tracing::debug!(
                    rate_description = text,
                    "unreadable meter schedule, using default window"
                );
                (MeterSchedule::Window(DEFAULT_METER_WINDOW), ScheduleSource::Fallback)
            }
        }
    }

    pub fn is_active(&self, now: &CivilInstant) -> bool {
        match self {
            MeterSchedule::Always => true,
            MeterSchedule::Window(window) => window.contains(now),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            MeterSchedule::Always => "24/7".to_string(),
            MeterSchedule::Window(window) => window.describe(),
        }
    }
}

/// Find a `Mon-Sat 8AM-10PM` style window anywhere in `text`.
pub fn parse_window(text: &str) -> Option<EnforcementWindow> {
    let caps = WINDOW_PATTERN.captures(text)?;
    let days = DayRange::from_tag(&caps[1])?;
    let start_hour = to_24_hour(caps[2].parse().ok()?, &caps[3])?;
    let end_hour = to_24_hour(caps[4].parse().ok()?, &caps[5])?;
    Some(EnforcementWindow::new(days, start_hour, end_hour))
}

/// 12 AM is 0, 12 PM is 12, other PM hours add 12. Hours outside 1-12 are rejected.
pub fn to_24_hour(hour: u32, meridiem: &str) -> Option<u32> {
    if !(1..=12).contains(&hour) {
        return None;
    }
    let pm = meridiem.eq_ignore_ascii_case("pm");
    Some(match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    })
}

/// 24-hour value back to `8am` / `10pm` / `12am`.
pub fn format_hour(hour: u32) -> String {
    match hour {
        0 | 24 => "12am".to_string(),
        12 => "12pm".to_string(),
        h if h < 12 => format!("{}am", h),
        h => format!("{}pm", h - 12),
    }
}
