//! In-memory repository backend

use std::collections::HashMap;

use tracing::trace;

use crate::database::repository::{Entity, Repository};
use crate::utils::errors::Result;

/// Vector-backed store with an id index for constant-time lookups
#[derive(Debug, Clone)]
pub struct MemoryRepository<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn reindex(&mut self) {
        self.index = self
            .records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.id().to_string(), pos))
            .collect();
    }
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    fn get(&self, id: &str) -> Result<Option<T>> {
        Ok(self.index.get(id).map(|&pos| self.records[pos].clone()))
    }

    fn save(&mut self, record: T) -> Result<()> {
        match self.index.get(record.id()) {
            Some(&pos) => {
                trace!(kind = T::KIND, id = record.id(), "Replacing record");
                self.records[pos] = record;
            }
            None => {
                trace!(kind = T::KIND, id = record.id(), "Inserting record");
                self.index.insert(record.id().to_string(), self.records.len());
                self.records.push(record);
            }
        }
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<Option<T>> {
        let Some(pos) = self.index.remove(id) else {
            return Ok(None);
        };
        let removed = self.records.remove(pos);
        self.reindex();
        trace!(kind = T::KIND, id, "Removed record");
        Ok(Some(removed))
    }

    fn list(&self) -> Result<Vec<T>> {
        Ok(self.records.clone())
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
