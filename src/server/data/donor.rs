//! Donor data repository for database operations
//!
//! Provides the `DonorRepository` for managing donors in the relational store
//! and the `Record` implementation used by the in-memory store. Donors are
//! looked up by PESEL as their natural key.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

use crate::server::{
    data::{Record, Repository},
    error::persistence::PersistenceError,
    model::donor::{CreateDonorParam, Donor, UpdateDonorParam},
};

impl Record for Donor {
    type Create = CreateDonorParam;
    type Update = UpdateDonorParam;

    fn id(&self) -> i32 {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.pesel)
    }

    fn from_create(id: i32, param: Self::Create) -> Self {
        Self {
            id,
            pesel: param.pesel,
            first_name: param.first_name,
            last_name: param.last_name,
            blood_type_id: param.blood_type_id,
            phone_number: param.phone_number,
            email: param.email,
        }
    }

    fn apply_update(&mut self, param: Self::Update) {
        self.first_name = param.first_name;
        self.last_name = param.last_name;
        self.blood_type_id = param.blood_type_id;
        self.phone_number = param.phone_number;
        self.email = param.email;
    }
}

/// Repository providing database operations for donors.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting donor records.
pub struct DonorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DonorRepository<'a> {
    /// Creates a new DonorRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Deletes a donor and their donations in one transaction
    ///
    /// # Returns
    /// - `Ok(true)` - Donor and donations deleted
    /// - `Ok(false)` - No donor with this ID; nothing is deleted
    /// - `Err(PersistenceError)` - Backend failure; the transaction is rolled back
    pub async fn delete_with_donations(&self, id: i32) -> Result<bool, PersistenceError> {
        let txn = self.db.begin().await?;

        entity::prelude::BloodDonation::delete_many()
            .filter(entity::blood_donation::Column::DonorId.eq(id))
            .exec(&txn)
            .await?;
        let result = entity::prelude::Donor::delete_by_id(id).exec(&txn).await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }
        txn.commit().await?;

        Ok(true)
    }
}

#[async_trait]
impl Repository<Donor> for DonorRepository<'_> {
    async fn create(&self, param: CreateDonorParam) -> Result<Donor, PersistenceError> {
        let entity = entity::donor::ActiveModel {
            pesel: ActiveValue::Set(param.pesel),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            blood_type_id: ActiveValue::Set(param.blood_type_id),
            phone_number: ActiveValue::Set(param.phone_number),
            email: ActiveValue::Set(param.email),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Donor::from_entity(entity))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Donor>, PersistenceError> {
        let entity = entity::prelude::Donor::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Donor::from_entity))
    }

    async fn find_by_key(&self, pesel: &str) -> Result<Option<Donor>, PersistenceError> {
        let entity = entity::prelude::Donor::find()
            .filter(entity::donor::Column::Pesel.eq(pesel))
            .one(self.db)
            .await?;

        Ok(entity.map(Donor::from_entity))
    }

    async fn list(&self) -> Result<Vec<Donor>, PersistenceError> {
        let entities = entity::prelude::Donor::find()
            .order_by_asc(entity::donor::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Donor::from_entity).collect())
    }

    async fn update(
        &self,
        id: i32,
        param: UpdateDonorParam,
    ) -> Result<Option<Donor>, PersistenceError> {
        let Some(existing) = entity::prelude::Donor::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::donor::ActiveModel = existing.into();
        active.first_name = ActiveValue::Set(param.first_name);
        active.last_name = ActiveValue::Set(param.last_name);
        active.blood_type_id = ActiveValue::Set(param.blood_type_id);
        active.phone_number = ActiveValue::Set(param.phone_number);
        active.email = ActiveValue::Set(param.email);
        let entity = active.update(self.db).await?;

        Ok(Some(Donor::from_entity(entity)))
    }

    async fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let result = entity::prelude::Donor::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
