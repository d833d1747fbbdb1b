//! In-memory persistence backend.
//!
//! Each entity lives in a [`MemoryTable`], a `BTreeMap` keyed by ID behind a
//! tokio `RwLock`. Natural keys are kept unique like the relational unique
//! indexes; foreign keys are not enforced.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::server::{
    data::{Record, Repository},
    error::persistence::PersistenceError,
    model::{
        blood_donation::BloodDonation, blood_type::BloodType, donor::Donor, personnel::Personnel,
    },
};

struct TableState<T> {
    rows: BTreeMap<i32, T>,
    next_id: i32,
}

/// One table of records of type `T`.
pub struct MemoryTable<T> {
    state: RwLock<TableState<T>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            state: RwLock::new(TableState {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

/// All tables of the in-memory backend, shared across requests.
#[derive(Default)]
pub struct MemoryStore {
    pub blood_types: MemoryTable<BloodType>,
    pub donors: MemoryTable<Donor>,
    pub personnel: MemoryTable<Personnel>,
    pub blood_donations: MemoryTable<BloodDonation>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deletes a donor and their donations while holding both table locks.
    ///
    /// Locks are taken donors first, then donations.
    pub async fn delete_donor_with_donations(&self, id: i32) -> Result<bool, PersistenceError> {
        let mut donors = self.donors.state.write().await;
        let mut donations = self.blood_donations.state.write().await;

        if donors.rows.remove(&id).is_none() {
            return Ok(false);
        }
        donations.rows.retain(|_, donation| donation.donor_id != id);

        Ok(true)
    }
}

/// Request-scoped repository over a shared [`MemoryTable`].
pub struct InMemoryRepository<'a, T> {
    table: &'a MemoryTable<T>,
}

impl<'a, T> InMemoryRepository<'a, T> {
    pub fn new(table: &'a MemoryTable<T>) -> Self {
        Self { table }
    }
}

fn key_taken<T: Record>(rows: &BTreeMap<i32, T>, key: &str, except: Option<i32>) -> bool {
    rows.values()
        .any(|row| row.natural_key() == Some(key) && Some(row.id()) != except)
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<'_, T> {
    async fn create(&self, param: T::Create) -> Result<T, PersistenceError> {
        let mut state = self.table.state.write().await;

        let record = T::from_create(state.next_id, param);
        if let Some(key) = record.natural_key() {
            if key_taken(&state.rows, key, None) {
                return Err(PersistenceError::Conflict(format!(
                    "natural key '{}' already exists",
                    key
                )));
            }
        }

        state.next_id += 1;
        state.rows.insert(record.id(), record.clone());

        Ok(record)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<T>, PersistenceError> {
        let state = self.table.state.read().await;
        Ok(state.rows.get(&id).cloned())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        let state = self.table.state.read().await;
        Ok(state
            .rows
            .values()
            .find(|row| row.natural_key() == Some(key))
            .cloned())
    }

    async fn list(&self) -> Result<Vec<T>, PersistenceError> {
        let state = self.table.state.read().await;
        Ok(state.rows.values().cloned().collect())
    }

    async fn update(&self, id: i32, param: T::Update) -> Result<Option<T>, PersistenceError> {
        let mut state = self.table.state.write().await;

        let Some(mut record) = state.rows.get(&id).cloned() else {
            return Ok(None);
        };
        record.apply_update(param);

        if let Some(key) = record.natural_key() {
            if key_taken(&state.rows, key, Some(id)) {
                return Err(PersistenceError::Conflict(format!(
                    "natural key '{}' already exists",
                    key
                )));
            }
        }

        state.rows.insert(id, record.clone());

        Ok(Some(record))
    }

    async fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let mut state = self.table.state.write().await;
        Ok(state.rows.remove(&id).is_some())
    }
}
