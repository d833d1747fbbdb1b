//! Blood donation data repository for database operations
//!
//! Donations have no natural key, so `find_by_key` never matches.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder};

use crate::server::{
    data::{Record, Repository},
    error::persistence::PersistenceError,
    model::blood_donation::{BloodDonation, CreateBloodDonationParam, UpdateBloodDonationParam},
};

impl Record for BloodDonation {
    type Create = CreateBloodDonationParam;
    type Update = UpdateBloodDonationParam;

    fn id(&self) -> i32 {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        None
    }

    fn from_create(id: i32, param: Self::Create) -> Self {
        Self {
            id,
            donor_id: param.donor_id,
            personnel_id: param.personnel_id,
            donated_at: param.donated_at,
            volume_ml: param.volume_ml,
        }
    }

    fn apply_update(&mut self, param: Self::Update) {
        self.donated_at = param.donated_at;
        self.volume_ml = param.volume_ml;
    }
}

pub struct BloodDonationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BloodDonationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<BloodDonation> for BloodDonationRepository<'_> {
    async fn create(
        &self,
        param: CreateBloodDonationParam,
    ) -> Result<BloodDonation, PersistenceError> {
        let entity = entity::blood_donation::ActiveModel {
            donor_id: ActiveValue::Set(param.donor_id),
            personnel_id: ActiveValue::Set(param.personnel_id),
            donated_at: ActiveValue::Set(param.donated_at),
            volume_ml: ActiveValue::Set(param.volume_ml),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BloodDonation::from_entity(entity))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<BloodDonation>, PersistenceError> {
        let entity = entity::prelude::BloodDonation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(BloodDonation::from_entity))
    }

    async fn find_by_key(&self, _key: &str) -> Result<Option<BloodDonation>, PersistenceError> {
        Ok(None)
    }

    async fn list(&self) -> Result<Vec<BloodDonation>, PersistenceError> {
        let entities = entity::prelude::BloodDonation::find()
            .order_by_asc(entity::blood_donation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BloodDonation::from_entity).collect())
    }

    async fn update(
        &self,
        id: i32,
        param: UpdateBloodDonationParam,
    ) -> Result<Option<BloodDonation>, PersistenceError> {
        let Some(existing) = entity::prelude::BloodDonation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::blood_donation::ActiveModel = existing.into();
        active.donated_at = ActiveValue::Set(param.donated_at);
        active.volume_ml = ActiveValue::Set(param.volume_ml);
        let entity = active.update(self.db).await?;

        Ok(Some(BloodDonation::from_entity(entity)))
    }

    async fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let result = entity::prelude::BloodDonation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
