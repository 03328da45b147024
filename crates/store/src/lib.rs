//! Generic record store collaborator for the registry services.
//! - `Record` marks an entity with a surrogate integer id.
//! - `RecordStore` is the minimal persistence contract the services call.
//! - `Query` is the single filter/ordering capability every derived lookup
//!   is built from.
//! - `MemoryStore` is the in-process implementation used by fixtures and tests.

use async_trait::async_trait;

pub mod memory;
pub mod query;

pub use memory::MemoryStore;
pub use query::Query;

/// An entity persisted under a surrogate integer identifier.
///
/// Id `0` means "not yet persisted"; the store assigns the real id on save,
/// the way a database identity column would.
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

/// Minimal persistence contract per entity type.
///
/// Implementations own all durable-storage and concurrency mechanics; the
/// service layer only calls these operations and interprets the results.
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Fetch one record by id.
    async fn get(&self, id: i32) -> Option<T>;

    /// All records, ordered by id.
    async fn list(&self) -> Vec<T>;

    /// Insert or overwrite. A record with id 0 receives the next sequence id.
    async fn save(&self, record: T) -> T;

    /// Remove by id; absent ids are a no-op.
    async fn delete(&self, id: i32);

    /// Records matching the query, in the query's order (id order if none).
    async fn find(&self, query: Query<T>) -> Vec<T>;
}
