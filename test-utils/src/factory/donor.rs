//! Donor factory for creating test donor entities.
//!
//! This module provides factory methods for creating donor entities with sensible
//! defaults. Every donor references an existing blood type.

use crate::factory::helpers::{next_id, next_pesel};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test donors with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::donor::DonorFactory;
///
/// let donor = DonorFactory::new(&db, blood_type.id)
///     .pesel("44051401359")
///     .email(Some("donor@example.com"))
///     .build()
///     .await?;
/// ```
pub struct DonorFactory<'a> {
    db: &'a DatabaseConnection,
    pesel: String,
    first_name: String,
    last_name: String,
    blood_type_id: i32,
    phone_number: String,
    email: Option<String>,
}

impl<'a> DonorFactory<'a> {
    /// Creates a new DonorFactory with default values.
    ///
    /// Defaults:
    /// - pesel: unique, valid check digit
    /// - first_name: `"Donor"`
    /// - last_name: `"Number {id}"`
    /// - phone_number: `"500{id}"`
    /// - email: `None`
    pub fn new(db: &'a DatabaseConnection, blood_type_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            pesel: next_pesel(),
            first_name: "Donor".to_string(),
            last_name: format!("Number {}", id),
            blood_type_id,
            phone_number: format!("500{:06}", id),
            email: None,
        }
    }

    pub fn pesel(mut self, pesel: impl Into<String>) -> Self {
        self.pesel = pesel.into();
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = last_name.into();
        self
    }

    pub fn email(mut self, email: Option<&str>) -> Self {
        self.email = email.map(str::to_string);
        self
    }

    /// Builds and inserts the donor entity into the database.
    pub async fn build(self) -> Result<entity::donor::Model, DbErr> {
        entity::donor::ActiveModel {
            id: ActiveValue::NotSet,
            pesel: ActiveValue::Set(self.pesel),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            blood_type_id: ActiveValue::Set(self.blood_type_id),
            phone_number: ActiveValue::Set(self.phone_number),
            email: ActiveValue::Set(self.email),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a donor with default values for the specified blood type.
pub async fn create_donor(
    db: &DatabaseConnection,
    blood_type_id: i32,
) -> Result<entity::donor::Model, DbErr> {
    DonorFactory::new(db, blood_type_id).build().await
}
