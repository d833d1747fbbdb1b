//! Blood type data repository for database operations
//!
//! Provides the `BloodTypeRepository` for managing blood types in the relational
//! store and the `Record` implementation used by the in-memory store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::{Record, Repository},
    error::persistence::PersistenceError,
    model::blood_type::{BloodType, CreateBloodTypeParam, UpdateBloodTypeParam},
};

impl Record for BloodType {
    type Create = CreateBloodTypeParam;
    type Update = UpdateBloodTypeParam;

    fn id(&self) -> i32 {
        self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.name)
    }

    fn from_create(id: i32, param: Self::Create) -> Self {
        Self {
            id,
            name: param.name,
        }
    }

    fn apply_update(&mut self, param: Self::Update) {
        self.name = param.name;
    }
}

/// Repository providing database operations for blood types.
pub struct BloodTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BloodTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<BloodType> for BloodTypeRepository<'_> {
    async fn create(&self, param: CreateBloodTypeParam) -> Result<BloodType, PersistenceError> {
        let entity = entity::blood_type::ActiveModel {
            name: ActiveValue::Set(param.name),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BloodType::from_entity(entity))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<BloodType>, PersistenceError> {
        let entity = entity::prelude::BloodType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(BloodType::from_entity))
    }

    async fn find_by_key(&self, name: &str) -> Result<Option<BloodType>, PersistenceError> {
        let entity = entity::prelude::BloodType::find()
            .filter(entity::blood_type::Column::Name.eq(name))
            .one(self.db)
            .await?;

        Ok(entity.map(BloodType::from_entity))
    }

    async fn list(&self) -> Result<Vec<BloodType>, PersistenceError> {
        let entities = entity::prelude::BloodType::find()
            .order_by_asc(entity::blood_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(BloodType::from_entity).collect())
    }

    async fn update(
        &self,
        id: i32,
        param: UpdateBloodTypeParam,
    ) -> Result<Option<BloodType>, PersistenceError> {
        let Some(existing) = entity::prelude::BloodType::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::blood_type::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        let entity = active.update(self.db).await?;

        Ok(Some(BloodType::from_entity(entity)))
    }

    async fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let result = entity::prelude::BloodType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
