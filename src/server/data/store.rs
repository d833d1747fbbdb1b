//! Backend selection and request-scoped repository construction.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        blood_donation::BloodDonationRepository, blood_type::BloodTypeRepository,
        donor::DonorRepository, memory::InMemoryRepository, memory::MemoryStore,
        personnel::PersonnelRepository, Repository,
    },
    error::persistence::PersistenceError,
    model::{
        blood_donation::BloodDonation, blood_type::BloodType, donor::Donor, personnel::Personnel,
    },
};

/// The persistence backend chosen at startup.
///
/// Cloning is cheap: the relational variant clones a connection pool handle
/// and the in-memory variant clones an `Arc`.
#[derive(Clone)]
pub enum Store {
    Relational(DatabaseConnection),
    InMemory(Arc<MemoryStore>),
}

impl Store {
    /// Creates an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(MemoryStore::new()))
    }

    pub fn blood_types(&self) -> Box<dyn Repository<BloodType> + '_> {
        match self {
            Self::Relational(db) => Box::new(BloodTypeRepository::new(db)),
            Self::InMemory(store) => Box::new(InMemoryRepository::new(&store.blood_types)),
        }
    }

    pub fn donors(&self) -> Box<dyn Repository<Donor> + '_> {
        match self {
            Self::Relational(db) => Box::new(DonorRepository::new(db)),
            Self::InMemory(store) => Box::new(InMemoryRepository::new(&store.donors)),
        }
    }

    pub fn personnel(&self) -> Box<dyn Repository<Personnel> + '_> {
        match self {
            Self::Relational(db) => Box::new(PersonnelRepository::new(db)),
            Self::InMemory(store) => Box::new(InMemoryRepository::new(&store.personnel)),
        }
    }

    pub fn blood_donations(&self) -> Box<dyn Repository<BloodDonation> + '_> {
        match self {
            Self::Relational(db) => Box::new(BloodDonationRepository::new(db)),
            Self::InMemory(store) => Box::new(InMemoryRepository::new(&store.blood_donations)),
        }
    }

    /// Deletes a donor together with their donations as a single operation.
    ///
    /// Returns whether the donor existed.
    pub async fn delete_donor_with_donations(&self, id: i32) -> Result<bool, PersistenceError> {
        match self {
            Self::Relational(db) => DonorRepository::new(db).delete_with_donations(id).await,
            Self::InMemory(store) => store.delete_donor_with_donations(id).await,
        }
    }
}
