//! Repository abstraction over a keyed collection of records

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::utils::errors::Result;

/// A record that can be stored in a repository
pub trait Entity: Clone + Send + Sync + 'static {
    /// Short name used in logs
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn created_at(&self) -> DateTime<Utc>;
}

/// Keyed collection of records.
///
/// `list` yields records in insertion order. `save` inserts a new record or
/// replaces the one with the same id in place.
pub trait Repository<T: Entity>: Send + Sync {
    fn get(&self, id: &str) -> Result<Option<T>>;

    fn save(&mut self, record: T) -> Result<()>;

    fn delete(&mut self, id: &str) -> Result<Option<T>>;

    fn list(&self) -> Result<Vec<T>>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.get(id)?.is_some())
    }
}

/// Repository handle shared between services.
///
/// Every read-modify-write sequence must hold the write guard for its whole
/// duration. When two guards are needed, bookings are locked before venues.
pub type SharedRepository<T> = Arc<RwLock<Box<dyn Repository<T>>>>;

/// Order records newest first. Records created at the same instant keep the
/// later-inserted one in front.
pub fn newest_first<T: Entity>(mut records: Vec<T>) -> Vec<T> {
    records.reverse();
    records.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
    records
}
