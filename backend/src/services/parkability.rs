//! Combines every restriction that applies to one location into a single
//! "can I park here right now" answer.
//!
//! Precedence, highest first:
//!
//! 1. street cleaning today
//! 2. an active winter ban, permit zone or snow ban
//! 3. street cleaning tomorrow
//! 4. an enforced meter
//! 5. a meter outside its hours
//! 6. nothing known about the location
//! 7. otherwise free
//!
//! An active restriction always outranks an inactive meter or a cleaning
//! that is still days away.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::street_cleaning::{CleaningOutlook, UrgencyTier};
use super::{permit_zone, street_cleaning, winter_ban};
use crate::models::{CivilInstant, MeterSchedule};

/// Days out at which an upcoming cleaning turns the verdict to caution.
/// Tighter than the three-day "soon" tier.
pub const CAUTION_THRESHOLD_DAYS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParkabilityVerdict {
    Free,
    MeteredEnforced,
    MeteredFree,
    Restricted,
    Caution,
    NoData,
}

impl ParkabilityVerdict {
    /// Higher wins when locations are ranked or layered on the map.
    pub fn priority(&self) -> u8 {
        match self {
            ParkabilityVerdict::Restricted => 5,
            ParkabilityVerdict::Caution => 4,
            ParkabilityVerdict::MeteredEnforced => 3,
            ParkabilityVerdict::MeteredFree => 2,
            ParkabilityVerdict::Free => 1,
            ParkabilityVerdict::NoData => 0,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ParkabilityVerdict::Restricted => "#dc2626",
            ParkabilityVerdict::Caution => "#f59e0b",
            ParkabilityVerdict::MeteredEnforced => "#2563eb",
            ParkabilityVerdict::MeteredFree => "#10b981",
            ParkabilityVerdict::Free => "#16a34a",
            ParkabilityVerdict::NoData => "#9ca3af",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParkabilityVerdict::Restricted => "No parking right now",
            ParkabilityVerdict::Caution => "Street cleaning tomorrow",
            ParkabilityVerdict::MeteredEnforced => "Metered parking (pay now)",
            ParkabilityVerdict::MeteredFree => "Meter not enforced now",
            ParkabilityVerdict::Free => "OK to park",
            ParkabilityVerdict::NoData => "No restriction data",
        }
    }
}

/// Meter details relevant to one location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterConditions {
    #[serde(default)]
    pub rate_description: Option<String>,
}

/// Which restrictions apply to a location. Membership comes from feed data;
/// the time rules are evaluated by [`assess`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationConditions {
    #[serde(default)]
    pub next_cleaning: Option<NaiveDate>,
    #[serde(default)]
    pub meter: Option<MeterConditions>,
    /// On the Dec-Apr overnight ban route list.
    #[serde(default)]
    pub winter_ban_route: bool,
    /// Inside a residential permit zone.
    #[serde(default)]
    pub permit_zone: bool,
    /// On a 2-inch snow ban route.
    #[serde(default)]
    pub snow_route: bool,
    /// The 2-inch snow ban has been triggered. Only meaningful with `snow_route`.
    #[serde(default)]
    pub snow_ban_active: bool,
}

/// Composed verdict plus everything needed to present it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkabilityAssessment {
    pub verdict: ParkabilityVerdict,
    pub color: String,
    pub priority: u8,
    pub label: String,
    /// Which rules fired, most significant first.
    pub reasons: Vec<String>,
    pub cleaning: CleaningOutlook,
    pub cleaning_label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meter_schedule: Option<String>,
}

/// Time-dependent flags for one location at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveRestrictions {
    winter_ban: bool,
    permit_zone: bool,
    snow_ban: bool,
}

impl ActiveRestrictions {
    fn evaluate(conditions: &LocationConditions, now: &CivilInstant) -> Self {
        Self {
            winter_ban: conditions.winter_ban_route && winter_ban::is_winter_ban_active(now),
            permit_zone: conditions.permit_zone && permit_zone::is_permit_zone_active(now),
            snow_ban: conditions.snow_route && conditions.snow_ban_active,
        }
    }

    fn any(&self) -> bool {
        self.winter_ban || self.permit_zone || self.snow_ban
    }
}

/// Decide the verdict for one location at `now`.
pub fn assess(conditions: &LocationConditions, now: &CivilInstant) -> ParkabilityAssessment {
    let cleaning = street_cleaning::outlook(conditions.next_cleaning, now);
    let active = ActiveRestrictions::evaluate(conditions, now);
    let meter_schedule = conditions
        .meter
        .as_ref()
        .map(|m| MeterSchedule::resolve(m.rate_description.as_deref()).0);

    let mut reasons = Vec::new();
    if cleaning.tier == UrgencyTier::Today {
        reasons.push("Street cleaning today".to_string());
    }
    if active.winter_ban {
        reasons.push("Winter overnight ban in effect (3am–7am)".to_string());
    }
    if active.permit_zone {
        reasons.push("Permit zone enforced (Mon–Fri 6am–6pm)".to_string());
    }
    if active.snow_ban {
        reasons.push("2-inch snow ban in effect".to_string());
    }

    let verdict = if cleaning.tier == UrgencyTier::Today || active.any() {
        ParkabilityVerdict::Restricted
    } else if cleaning.tier == UrgencyTier::Soon
        && cleaning.days_until.is_some_and(|d| d <= CAUTION_THRESHOLD_DAYS)
    {
        reasons.push("Street cleaning tomorrow".to_string());
        ParkabilityVerdict::Caution
    } else if let Some(schedule) = meter_schedule {
        let text = schedule.describe();
        if schedule.is_active(now) {
            reasons.push(format!("Meter enforced ({})", text));
            ParkabilityVerdict::MeteredEnforced
        } else {
            reasons.push(format!("Meter outside enforced hours ({})", text));
            ParkabilityVerdict::MeteredFree
        }
    } else if conditions.next_cleaning.is_none() && !has_zone_data(conditions) {
        ParkabilityVerdict::NoData
    } else {
        ParkabilityVerdict::Free
    };

    tracing::trace!(?verdict, reasons = reasons.len(), "assessed location");

    ParkabilityAssessment {
        verdict,
        color: verdict.color().to_string(),
        priority: verdict.priority(),
        label: verdict.label().to_string(),
        reasons,
        cleaning,
        cleaning_label: street_cleaning::cleaning_label(conditions.next_cleaning, now),
        meter_schedule: meter_schedule.map(|s| s.describe()),
    }
}

/// Assess many locations against one captured instant, so no location flips
/// state partway through because a boundary second passed.
pub fn assess_batch(
    locations: &[LocationConditions],
    now: &CivilInstant,
) -> Vec<ParkabilityAssessment> {
    locations.iter().map(|c| assess(c, now)).collect()
}

fn has_zone_data(conditions: &LocationConditions) -> bool {
    conditions.winter_ban_route || conditions.permit_zone || conditions.snow_route
}
