//! Restriction evaluators.
//!
//! Each evaluator is a pure function of the current [`CivilInstant`] and the
//! restriction's schedule metadata. Both the HTTP layer and library callers go
//! through these functions, so every surface applies identical rules.
//!
//! [`CivilInstant`]: crate::models::CivilInstant

pub mod meter;
pub mod parkability;
pub mod permit_zone;
pub mod street_cleaning;
pub mod winter_ban;

pub use meter::{is_enforced, schedule_text};
pub use parkability::{
    assess, assess_batch, LocationConditions, MeterConditions, ParkabilityAssessment,
    ParkabilityVerdict,
};
pub use permit_zone::is_permit_zone_active;
pub use street_cleaning::{
    classify, cleaning_label, parse_cleaning_date, CleaningOutlook, UrgencyTier,
};
pub use winter_ban::is_winter_ban_active;
