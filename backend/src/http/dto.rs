//! Data Transfer Objects for the HTTP API.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    LocationConditions, LocationId, LocationRecord, ParkabilityAssessment, UrgencyTier,
};
use crate::models::{CivilTimeInfo, ScheduleSource};

/// Optional evaluation instant shared by every rule endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AtQuery {
    /// RFC 3339 timestamp; the server clock is used when absent
    #[serde(default)]
    pub at: Option<String>,
}

/// Query parameters for the meter enforcement endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MeterQuery {
    #[serde(default)]
    pub rate_description: Option<String>,
    #[serde(default)]
    pub at: Option<String>,
}

/// Query parameters for the street-cleaning endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CleaningQuery {
    /// Next cleaning date (`YYYY-MM-DD` or ISO date-time)
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub at: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Catalog status
    pub database: String,
    pub timezone: String,
    pub now: CivilTimeInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeterEnforcementResponse {
    pub enforced: bool,
    pub schedule_text: String,
    pub schedule_source: ScheduleSource,
    pub evaluated_at: CivilTimeInfo,
}

/// Active/inactive answer for a fixed-window restriction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictionStatusResponse {
    pub active: bool,
    pub window: String,
    pub evaluated_at: CivilTimeInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreetCleaningResponse {
    pub tier: UrgencyTier,
    pub days_until: Option<i64>,
    pub label: String,
    pub color: String,
    pub evaluated_at: CivilTimeInfo,
}

/// Request body for a single parkability evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ParkabilityRequest {
    #[serde(flatten)]
    pub conditions: LocationConditions,
    #[serde(default)]
    pub at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkabilityResponse {
    pub evaluated_at: CivilTimeInfo,
    pub assessment: ParkabilityAssessment,
}

/// Request body for evaluating many locations against one instant.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct BatchParkabilityRequest {
    pub locations: Vec<LocationConditions>,
    #[serde(default)]
    pub at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchParkabilityResponse {
    pub evaluated_at: CivilTimeInfo,
    pub assessments: Vec<ParkabilityAssessment>,
}

/// Location list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationListResponse {
    pub locations: Vec<LocationRecord>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertLocationResponse {
    pub id: LocationId,
    /// Whether an existing record was replaced
    pub replaced: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationParkabilityResponse {
    pub id: LocationId,
    pub name: String,
    pub evaluated_at: CivilTimeInfo,
    pub assessment: ParkabilityAssessment,
}
