//! In-memory table used as the persistence backend of the repositories.
//!
//! A [`Table`] behaves like the small slice of an ORM the repositories need:
//! auto-increment primary keys, automatic `created_at`/`updated_at`,
//! paginated reads in primary-key order and counts. Rows are cloned in and
//! out, so callers never hold references into the table.

use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;
use thiserror::Error;
use tracing::debug;

use crate::models::Model;

/// Failures reported by a [`Table`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found in {table} (id {id})")]
    RecordNotFound { table: &'static str, id: u32 },
    #[error("table {0} is unavailable: lock poisoned")]
    Poisoned(&'static str),
}

#[derive(Debug)]
struct Rows<M> {
    next_id: u32,
    rows: BTreeMap<u32, M>,
}

/// Thread-safe in-memory table of `M` rows keyed by id.
#[derive(Debug)]
pub struct Table<M: Model> {
    inner: RwLock<Rows<M>>,
}

impl<M: Model> Default for Table<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Model> Table<M> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Rows {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Insert `row`, assigning its id and both timestamps.
    pub fn insert(&self, row: &mut M) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned(M::table_name()))?;
        let id = guard.next_id;
        guard.next_id += 1;

        let now = Utc::now();
        row.set_id(id);
        row.set_created_at(now);
        row.set_updated_at(now);
        guard.rows.insert(id, row.clone());
        debug!(table = M::table_name(), id, "row inserted");
        Ok(())
    }

    /// Fetch the row with primary key `id`.
    pub fn first(&self, id: u32) -> Result<M, StoreError> {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned(M::table_name()))?;
        guard
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::RecordNotFound {
                table: M::table_name(),
                id,
            })
    }

    /// Rows matching `filter`, skipping `offset` and returning at most `limit`.
    pub fn find<F>(&self, offset: usize, limit: usize, filter: F) -> Result<Vec<M>, StoreError>
    where
        F: Fn(&M) -> bool,
    {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned(M::table_name()))?;
        Ok(guard
            .rows
            .values()
            .filter(|row| filter(row))
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    /// Persist every field of `row`, refreshing `updated_at`.
    ///
    /// Like an ORM save, a row whose id is unknown is stored under that id.
    pub fn save(&self, row: &mut M) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned(M::table_name()))?;
        row.set_updated_at(Utc::now());
        let id = row.id();
        if id >= guard.next_id {
            guard.next_id = id + 1;
        }
        guard.rows.insert(id, row.clone());
        debug!(table = M::table_name(), id, "row saved");
        Ok(())
    }

    /// Remove the row with primary key `id`. Removing a missing row is not an error.
    pub fn delete(&self, id: u32) -> Result<(), StoreError> {
        let mut guard = self.inner.write().map_err(|_| StoreError::Poisoned(M::table_name()))?;
        guard.rows.remove(&id);
        debug!(table = M::table_name(), id, "row deleted");
        Ok(())
    }

    /// Number of rows matching `filter`.
    pub fn count<F>(&self, filter: F) -> Result<u64, StoreError>
    where
        F: Fn(&M) -> bool,
    {
        let guard = self.inner.read().map_err(|_| StoreError::Poisoned(M::table_name()))?;
        Ok(guard.rows.values().filter(|row| filter(row)).count() as u64)
    }
}
