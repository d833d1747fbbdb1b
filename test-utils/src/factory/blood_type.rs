//! Blood type factory for creating test blood type entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blood types with customizable fields.
pub struct BloodTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> BloodTypeFactory<'a> {
    /// Creates a new BloodTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Type {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Type {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the blood type entity into the database.
    pub async fn build(self) -> Result<entity::blood_type::Model, DbErr> {
        entity::blood_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a blood type with default values.
pub async fn create_blood_type(db: &DatabaseConnection) -> Result<entity::blood_type::Model, DbErr> {
    BloodTypeFactory::new(db).build().await
}
