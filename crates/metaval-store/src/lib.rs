//! Record-store boundary for the serialization layer.
//!
//! The core exchanges only `(type tag, serialized form)` pairs with a
//! store, keyed by opaque identifiers the store owns. Storage internals —
//! engine, layout, caching — live entirely behind [`RecordStore`];
//! [`InMemoryStore`] is the reference implementation used by tests.

use std::collections::HashMap;
use std::fmt;

use metaval::MetaRecord;
use thiserror::Error;

/// Opaque record identifier. Assigned by the store on insert; callers
/// never construct meaningful ids themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("no record with id {0}")]
    NotFound(RecordId),
}

/// Keyed persistence of serialized records.
pub trait RecordStore {
    /// Stores a record and returns its store-owned identifier.
    fn put(&mut self, record: MetaRecord) -> Result<RecordId, StoreError>;

    /// Replaces the record behind an existing identifier.
    fn update(&mut self, id: RecordId, record: MetaRecord) -> Result<(), StoreError>;

    /// Fetches a record by identifier.
    fn get(&self, id: RecordId) -> Result<MetaRecord, StoreError>;

    /// Removes a record, returning it.
    fn remove(&mut self, id: RecordId) -> Result<MetaRecord, StoreError>;
}

/// Hash-map-backed reference store with monotonically assigned ids.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: HashMap<RecordId, MetaRecord>,
    next_id: u64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl RecordStore for InMemoryStore {
    fn put(&mut self, record: MetaRecord) -> Result<RecordId, StoreError> {
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.records.insert(id, record);
        Ok(id)
    }

    fn update(&mut self, id: RecordId, record: MetaRecord) -> Result<(), StoreError> {
        match self.records.get_mut(&id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn get(&self, id: RecordId) -> Result<MetaRecord, StoreError> {
        self.records
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn remove(&mut self, id: RecordId) -> Result<MetaRecord, StoreError> {
        self.records.remove(&id).ok_or(StoreError::NotFound(id))
    }
}
