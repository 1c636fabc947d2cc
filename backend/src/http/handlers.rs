//! HTTP handlers for the REST API.
//!
//! Each handler resolves the evaluation instant once, then delegates to the
//! same rule functions library callers use.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::dto::{
    AtQuery, BatchParkabilityRequest, BatchParkabilityResponse, CleaningQuery, HealthResponse,
    LocationListResponse, LocationParkabilityResponse, MeterEnforcementResponse, MeterQuery,
    ParkabilityRequest, ParkabilityResponse, RestrictionStatusResponse, StreetCleaningResponse,
    UpsertLocationResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{LocationId, LocationRecord};
use crate::db::services as db_services;
use crate::models::{CivilTimeInfo, MeterSchedule};
use crate::services::permit_zone::PERMIT_ZONE_WINDOW;
use crate::services::{parkability, permit_zone, street_cleaning, winter_ban};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

const WINTER_BAN_WINDOW: &str = "Dec–Mar 3am–7am";

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let db_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        database: db_status,
        timezone: state.timezone.name().to_string(),
        now: CivilTimeInfo::from(&state.clock.now()),
    }))
}

/// GET /v1/clock
pub async fn get_clock(State(state): State<AppState>) -> HandlerResult<CivilTimeInfo> {
    Ok(Json(CivilTimeInfo::from(&state.clock.now())))
}

// =============================================================================
// Rule Endpoints
// =============================================================================

/// GET /v1/meters/enforcement
pub async fn get_meter_enforcement(
    State(state): State<AppState>,
    Query(query): Query<MeterQuery>,
) -> HandlerResult<MeterEnforcementResponse> {
    let now = state.resolve_instant(query.at.as_deref())?;
    let (schedule, source) = MeterSchedule::resolve(query.rate_description.as_deref());

    Ok(Json(MeterEnforcementResponse {
        enforced: schedule.is_active(&now),
        schedule_text: schedule.describe(),
        schedule_source: source,
        evaluated_at: CivilTimeInfo::from(&now),
    }))
}

/// GET /v1/winter-ban
pub async fn get_winter_ban(
    State(state): State<AppState>,
    Query(query): Query<AtQuery>,
) -> HandlerResult<RestrictionStatusResponse> {
    let now = state.resolve_instant(query.at.as_deref())?;

    Ok(Json(RestrictionStatusResponse {
        active: winter_ban::is_winter_ban_active(&now),
        window: WINTER_BAN_WINDOW.to_string(),
        evaluated_at: CivilTimeInfo::from(&now),
    }))
}

/// GET /v1/permit-zone
pub async fn get_permit_zone(
    State(state): State<AppState>,
    Query(query): Query<AtQuery>,
) -> HandlerResult<RestrictionStatusResponse> {
    let now = state.resolve_instant(query.at.as_deref())?;

    Ok(Json(RestrictionStatusResponse {
        active: permit_zone::is_permit_zone_active(&now),
        window: PERMIT_ZONE_WINDOW.describe(),
        evaluated_at: CivilTimeInfo::from(&now),
    }))
}

/// GET /v1/street-cleaning
pub async fn get_street_cleaning(
    State(state): State<AppState>,
    Query(query): Query<CleaningQuery>,
) -> HandlerResult<StreetCleaningResponse> {
    let now = state.resolve_instant(query.at.as_deref())?;
    let date = match query.date.as_deref() {
        Some(value) => street_cleaning::parse_cleaning_date(value)?,
        None => None,
    };
    let outlook = street_cleaning::outlook(date, &now);

    Ok(Json(StreetCleaningResponse {
        tier: outlook.tier,
        days_until: outlook.days_until,
        label: street_cleaning::cleaning_label(date, &now),
        color: outlook.tier.color().to_string(),
        evaluated_at: CivilTimeInfo::from(&now),
    }))
}

/// POST /v1/parkability
pub async fn assess_parkability(
    State(state): State<AppState>,
    Json(request): Json<ParkabilityRequest>,
) -> HandlerResult<ParkabilityResponse> {
    let now = state.resolve_instant(request.at.as_deref())?;

    Ok(Json(ParkabilityResponse {
        evaluated_at: CivilTimeInfo::from(&now),
        assessment: parkability::assess(&request.conditions, &now),
    }))
}

/// POST /v1/parkability/batch
///
/// Every location is evaluated against a single captured instant.
pub async fn assess_parkability_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchParkabilityRequest>,
) -> HandlerResult<BatchParkabilityResponse> {
    let now = state.resolve_instant(request.at.as_deref())?;

    Ok(Json(BatchParkabilityResponse {
        evaluated_at: CivilTimeInfo::from(&now),
        assessments: parkability::assess_batch(&request.locations, &now),
    }))
}

// =============================================================================
// Location Catalog
// =============================================================================

/// GET /v1/locations
pub async fn list_locations(State(state): State<AppState>) -> HandlerResult<LocationListResponse> {
    let locations = db_services::list_locations(state.repository.as_ref()).await?;
    let total = locations.len();

    Ok(Json(LocationListResponse { locations, total }))
}

/// POST /v1/locations
///
/// 201 for a new location, 200 when an existing one was replaced.
pub async fn upsert_location(
    State(state): State<AppState>,
    Json(record): Json<LocationRecord>,
) -> Result<(StatusCode, Json<UpsertLocationResponse>), AppError> {
    let id = record.id.clone();
    let replaced = db_services::upsert_location(state.repository.as_ref(), record).await?;
    let status = if replaced {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };

    Ok((status, Json(UpsertLocationResponse { id, replaced })))
}

/// GET /v1/locations/{location_id}/parkability
pub async fn get_location_parkability(
    State(state): State<AppState>,
    Path(location_id): Path<String>,
    Query(query): Query<AtQuery>,
) -> HandlerResult<LocationParkabilityResponse> {
    let now = state.resolve_instant(query.at.as_deref())?;
    let id = LocationId::new(location_id);
    let (record, assessment) =
        db_services::assess_location(state.repository.as_ref(), &id, &now).await?;

    Ok(Json(LocationParkabilityResponse {
        id: record.id,
        name: record.name,
        evaluated_at: CivilTimeInfo::from(&now),
        assessment,
    }))
}
