//! Domain & parameter models for personnel operations
//!
//! Personnel are the staff accounts able to log in. Two layers of parameters
//! exist: the `*Param` types carry plaintext passwords from the API into the
//! service, which hashes them into the `New*`/`*Changes` records stored by
//! repositories.

use crate::model::{
    auth::LoginDto,
    personnel::{CreatePersonnelDto, PersonnelDto, UpdatePersonnelDto},
};

/// The personnel domain model, including stored password material
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Personnel {
    pub id: i32,
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub salt: String,
}

impl Personnel {
    pub fn from_entity(entity: entity::personnel::Model) -> Self {
        Self {
            id: entity.id,
            pesel: entity.pesel,
            first_name: entity.first_name,
            last_name: entity.last_name,
            password_hash: entity.password_hash,
            salt: entity.salt,
        }
    }

    /// Converts into the API representation, dropping password material
    pub fn into_dto(self) -> PersonnelDto {
        PersonnelDto {
            id: self.id,
            pesel: self.pesel,
            first_name: self.first_name,
            last_name: self.last_name,
        }
    }
}

/// Parameters for creating a personnel account
#[derive(Debug, Clone)]
pub struct CreatePersonnelParam {
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

impl CreatePersonnelParam {
    pub fn from_dto(dto: CreatePersonnelDto) -> Self {
        Self {
            pesel: dto.pesel.trim().to_string(),
            first_name: dto.first_name,
            last_name: dto.last_name,
            password: dto.password,
        }
    }
}

/// Parameters for updating a personnel account
#[derive(Debug, Clone)]
pub struct UpdatePersonnelParam {
    pub first_name: String,
    pub last_name: String,
    pub password: Option<String>,
}

impl UpdatePersonnelParam {
    pub fn from_dto(dto: UpdatePersonnelDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            password: dto.password,
        }
    }
}

/// Personnel record as handed to a repository, password already hashed
#[derive(Debug, Clone)]
pub struct NewPersonnel {
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub password_hash: String,
    pub salt: String,
}

/// Stored changes to a personnel record
#[derive(Debug, Clone)]
pub struct PersonnelChanges {
    pub first_name: String,
    pub last_name: String,
    /// Replacement `(password_hash, salt)`, if the password changed
    pub credentials: Option<(String, String)>,
}

/// Parameters for logging in
#[derive(Debug, Clone)]
pub struct LoginParam {
    pub pesel: String,
    pub password: String,
}

impl LoginParam {
    pub fn from_dto(dto: LoginDto) -> Self {
        Self {
            pesel: dto.pesel,
            password: dto.password,
        }
    }
}
