//! Repository trait for the location catalog.
//!
//! The catalog holds the feed records already matched to named locations.
//! Rule evaluation never touches storage; it receives the records through
//! the service layer.

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

use async_trait::async_trait;

use crate::api::{LocationId, LocationRecord};

#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// Whether the backend can serve requests.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// All stored locations, ordered by id.
    async fn list_locations(&self) -> RepositoryResult<Vec<LocationRecord>>;

    /// One location by id.
    async fn get_location(&self, id: &LocationId) -> RepositoryResult<LocationRecord>;

    /// Insert or replace a location. Returns `true` when an existing record was replaced.
    async fn upsert_location(&self, record: LocationRecord) -> RepositoryResult<bool>;
}
