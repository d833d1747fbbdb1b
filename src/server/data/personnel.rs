//! Personnel data repository for database operations

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::{Record, Repository},
    error::persistence::PersistenceError,
    model::personnel::{NewPersonnel, Personnel, PersonnelChanges},
};

impl Record for Personnel {
    type Create = NewPersonnel;
    type Update = PersonnelChanges;

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
            password_hash: param.password_hash,
            salt: param.salt,
        }
    }

    fn apply_update(&mut self, param: Self::Update) {
        self.first_name = param.first_name;
        self.last_name = param.last_name;
        if let Some((password_hash, salt)) = param.credentials {
            self.password_hash = password_hash;
            self.salt = salt;
        }
    }
}

pub struct PersonnelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PersonnelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository<Personnel> for PersonnelRepository<'_> {
    async fn create(&self, param: NewPersonnel) -> Result<Personnel, PersistenceError> {
        let entity = entity::personnel::ActiveModel {
            pesel: ActiveValue::Set(param.pesel),
            first_name: ActiveValue::Set(param.first_name),
            last_name: ActiveValue::Set(param.last_name),
            password_hash: ActiveValue::Set(param.password_hash),
            salt: ActiveValue::Set(param.salt),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Personnel::from_entity(entity))
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Personnel>, PersistenceError> {
        let entity = entity::prelude::Personnel::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Personnel::from_entity))
    }

    async fn find_by_key(&self, pesel: &str) -> Result<Option<Personnel>, PersistenceError> {
        let entity = entity::prelude::Personnel::find()
            .filter(entity::personnel::Column::Pesel.eq(pesel))
            .one(self.db)
            .await?;

        Ok(entity.map(Personnel::from_entity))
    }

    async fn list(&self) -> Result<Vec<Personnel>, PersistenceError> {
        let entities = entity::prelude::Personnel::find()
            .order_by_asc(entity::personnel::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Personnel::from_entity).collect())
    }

    async fn update(
        &self,
        id: i32,
        param: PersonnelChanges,
    ) -> Result<Option<Personnel>, PersistenceError> {
        let Some(existing) = entity::prelude::Personnel::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::personnel::ActiveModel = existing.into();
        active.first_name = ActiveValue::Set(param.first_name);
        active.last_name = ActiveValue::Set(param.last_name);
        if let Some((password_hash, salt)) = param.credentials {
            active.password_hash = ActiveValue::Set(password_hash);
            active.salt = ActiveValue::Set(salt);
        }
        let entity = active.update(self.db).await?;

        Ok(Some(Personnel::from_entity(entity)))
    }

    async fn delete(&self, id: i32) -> Result<bool, PersistenceError> {
        let result = entity::prelude::Personnel::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
