//! In-process record store backed by a concurrent map.

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::{Query, Record, RecordStore};

/// Thread-safe in-memory store with database-like id assignment.
///
/// Saving a record with id 0 assigns the next free value of an internal
/// sequence. Saving with an explicit id (fixture seeding) upserts at that id
/// and does not advance the sequence, mirroring how identity columns ignore
/// rows inserted with explicit keys; the sequence steps over occupied ids
/// instead of overwriting them.
pub struct MemoryStore<T: Record> {
    rows: DashMap<i32, T>,
    sequence: AtomicI32,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self { rows: DashMap::new(), sequence: AtomicI32::new(1) }
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for MemoryStore<T> {
    async fn get(&self, id: i32) -> Option<T> {
        self.rows.get(&id).map(|row| row.value().clone())
    }

    async fn list(&self) -> Vec<T> {
        let mut all: Vec<T> = self.rows.iter().map(|row| row.value().clone()).collect();
        all.sort_by_key(Record::id);
        all
    }

    async fn save(&self, mut record: T) -> T {
        if record.id() == 0 {
            let mut id = self.sequence.fetch_add(1, Ordering::SeqCst);
            while self.rows.contains_key(&id) {
                id = self.sequence.fetch_add(1, Ordering::SeqCst);
            }
            record.set_id(id);
        }
        self.rows.insert(record.id(), record.clone());
        record
    }

    async fn delete(&self, id: i32) {
        self.rows.remove(&id);
    }

    async fn find(&self, query: Query<T>) -> Vec<T> {
        let mut hits: Vec<T> = self
            .rows
            .iter()
            .filter(|row| query.matches(row.value()))
            .map(|row| row.value().clone())
            .collect();
        hits.sort_by_key(Record::id);
        query.sort(&mut hits);
        hits
    }
}
