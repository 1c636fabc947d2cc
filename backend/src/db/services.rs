//! High-level operations on the location catalog.
//!
//! Handlers and the server binary call these rather than the repository
//! directly, so validation and logging happen in one place.

use std::path::Path;

use tracing::{debug, info};

use super::repository::{ErrorContext, LocationRepository, RepositoryError, RepositoryResult};
use crate::api::{LocationId, LocationRecord};
use crate::models::CivilInstant;
use crate::services::parkability::{self, ParkabilityAssessment};

pub async fn health_check(repo: &dyn LocationRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

pub async fn list_locations(repo: &dyn LocationRepository) -> RepositoryResult<Vec<LocationRecord>> {
    repo.list_locations().await
}

pub async fn get_location(
    repo: &dyn LocationRepository,
    id: &LocationId,
) -> RepositoryResult<LocationRecord> {
    repo.get_location(id).await
}

/// Reject records the rules could not evaluate.
pub fn validate_location(record: &LocationRecord) -> RepositoryResult<()> {
    let context = || {
        ErrorContext::new("validate_location")
            .with_entity("location")
            .with_entity_id(&record.id)
    };
    if record.id.as_str().trim().is_empty() {
        return Err(RepositoryError::validation_with_context(
            "Location id must not be empty",
            context(),
        ));
    }
    record
        .conditions()
        .map(|_| ())
        .map_err(|e| RepositoryError::validation_with_context(e.to_string(), context()))
}

/// Validate then store. Returns `true` when an existing record was replaced.
pub async fn upsert_location(
    repo: &dyn LocationRepository,
    record: LocationRecord,
) -> RepositoryResult<bool> {
    validate_location(&record)?;
    let id = record.id.clone();
    let replaced = repo.upsert_location(record).await?;
    debug!(location = %id, replaced, "stored location");
    Ok(replaced)
}

/// Evaluate a stored location at `now`.
///
/// The returned record is the one the assessment was computed from.
pub async fn assess_location(
    repo: &dyn LocationRepository,
    id: &LocationId,
    now: &CivilInstant,
) -> RepositoryResult<(LocationRecord, ParkabilityAssessment)> {
    let record = get_location(repo, id).await?;
    let conditions = record.conditions().map_err(|e| {
        RepositoryError::validation_with_context(
            e.to_string(),
            ErrorContext::new("assess_location").with_entity_id(id),
        )
    })?;
    let assessment = parkability::assess(&conditions, now);
    Ok((record, assessment))
}

/// Read a JSON array of [`LocationRecord`] from disk.
pub fn read_seed_file(path: &Path) -> RepositoryResult<Vec<LocationRecord>> {
    let context = || ErrorContext::new("read_seed_file").with_details(path.display().to_string());
    let content = std::fs::read_to_string(path).map_err(|e| {
        RepositoryError::configuration_with_context(
            format!("Failed to read seed file: {}", e),
            context(),
        )
    })?;
    serde_json::from_str(&content).map_err(|e| {
        RepositoryError::configuration_with_context(
            format!("Failed to parse seed file: {}", e),
            context(),
        )
    })
}

/// Load and store every record of a seed file. Returns how many were stored.
pub async fn seed_locations(repo: &dyn LocationRepository, path: &Path) -> RepositoryResult<usize> {
    let records = read_seed_file(path)?;
    let count = records.len();
    for record in records {
        upsert_location(repo, record).await?;
    }
    info!(count, path = %path.display(), "seeded location catalog");
    Ok(count)
}
