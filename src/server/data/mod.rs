//! Repository layer for all domain entities.
//!
//! Every entity is accessed through the generic [`Repository`] trait, which is
//! implemented twice: by a SeaORM repository per entity for the relational
//! backend, and once generically by [`memory::InMemoryRepository`] for the
//! in-memory backend. The [`store::Store`] chosen at startup hands out
//! request-scoped repository handles, so services never know which backend
//! they talk to.

pub mod blood_donation;
pub mod blood_type;
pub mod donor;
pub mod memory;
pub mod personnel;
pub mod seed;
pub mod store;

#[cfg(test)]
mod test;

use async_trait::async_trait;

use crate::server::error::persistence::PersistenceError;

/// A domain model that can be stored by a [`Repository`].
///
/// The construction hooks are used by backends that keep domain models
/// directly, such as the in-memory store.
pub trait Record: Clone + Send + Sync + 'static {
    /// Input for creating a record.
    type Create: Send + 'static;
    /// Input for updating a record.
    type Update: Send + 'static;

    /// Primary key.
    fn id(&self) -> i32;

    /// Unique natural key, if the entity has one (PESEL, blood type name).
    fn natural_key(&self) -> Option<&str>;

    /// Builds the record stored under `id` from creation input.
    fn from_create(id: i32, param: Self::Create) -> Self;

    /// Applies update input in place.
    fn apply_update(&mut self, param: Self::Update);
}

/// Persistence operations shared by all entities.
///
/// Implementations never retry; backend failures surface as
/// [`PersistenceError`].
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Inserts a new record and returns it with its assigned ID.
    ///
    /// # Returns
    /// - `Ok(T)` - The created record
    /// - `Err(PersistenceError::Conflict)` - Natural key already taken
    /// - `Err(PersistenceError::Database)` - Backend failure
    async fn create(&self, param: T::Create) -> Result<T, PersistenceError>;

    /// Finds a record by primary key.
    async fn get_by_id(&self, id: i32) -> Result<Option<T>, PersistenceError>;

    /// Finds a record by natural key. Always `None` for entities without one.
    async fn find_by_key(&self, key: &str) -> Result<Option<T>, PersistenceError>;

    /// Returns all records ordered by ID.
    async fn list(&self) -> Result<Vec<T>, PersistenceError>;

    /// Updates a record, returning `None` if it does not exist.
    async fn update(&self, id: i32, param: T::Update) -> Result<Option<T>, PersistenceError>;

    /// Deletes a record, returning whether it existed.
    async fn delete(&self, id: i32) -> Result<bool, PersistenceError>;
}
