//! Personnel factory for creating test personnel entities.
//!
//! Password material is stored as given; the factory does not hash anything.

use crate::factory::helpers::{next_id, next_pesel};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct PersonnelFactory<'a> {
    db: &'a DatabaseConnection,
    pesel: String,
    first_name: String,
    last_name: String,
    password_hash: String,
    salt: String,
}

impl<'a> PersonnelFactory<'a> {
    /// Creates a new PersonnelFactory with default values.
    ///
    /// Defaults:
    /// - pesel: unique, valid check digit
    /// - first_name: `"Nurse"`
    /// - last_name: `"Number {id}"`
    /// - password_hash / salt: placeholder strings
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            pesel: next_pesel(),
            first_name: "Nurse".to_string(),
            last_name: format!("Number {}", next_id()),
            password_hash: "hash".to_string(),
            salt: "salt".to_string(),
        }
    }

    pub fn pesel(mut self, pesel: impl Into<String>) -> Self {
        self.pesel = pesel.into();
        self
    }

    /// Sets stored password material.
    pub fn credentials(mut self, password_hash: impl Into<String>, salt: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self.salt = salt.into();
        self
    }

    pub async fn build(self) -> Result<entity::personnel::Model, DbErr> {
        entity::personnel::ActiveModel {
            id: ActiveValue::NotSet,
            pesel: ActiveValue::Set(self.pesel),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            password_hash: ActiveValue::Set(self.password_hash),
            salt: ActiveValue::Set(self.salt),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a personnel account with default values.
pub async fn create_personnel(db: &DatabaseConnection) -> Result<entity::personnel::Model, DbErr> {
    PersonnelFactory::new(db).build().await
}
