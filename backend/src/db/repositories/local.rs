//! In-memory local repository implementation.
//!
//! Suitable for unit testing and for serving a catalog seeded from a JSON
//! file at startup.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::{LocationId, LocationRecord};
use crate::db::repository::*;

/// In-memory local repository.
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    locations: BTreeMap<LocationId, LocationRecord>,
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            locations: BTreeMap::new(),
            is_healthy: true,
        }
    }
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `records`. Later duplicates win.
    pub fn with_locations(records: impl IntoIterator<Item = LocationRecord>) -> Self {
        let repo = Self::new();
        {
            let mut data = repo.data.write();
            for record in records {
                data.locations.insert(record.id.clone(), record);
            }
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.data.read().locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().locations.is_empty()
    }

    /// Simulate an unavailable backend.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }
}

#[async_trait]
impl LocationRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn list_locations(&self) -> RepositoryResult<Vec<LocationRecord>> {
        Ok(self.data.read().locations.values().cloned().collect())
    }

    async fn get_location(&self, id: &LocationId) -> RepositoryResult<LocationRecord> {
        self.data.read().locations.get(id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Location {} not found", id),
                ErrorContext::new("get_location")
                    .with_entity("location")
                    .with_entity_id(id),
            )
        })
    }

    async fn upsert_location(&self, record: LocationRecord) -> RepositoryResult<bool> {
        let mut data = self.data.write();
        Ok(data.locations.insert(record.id.clone(), record).is_some())
    }
}
