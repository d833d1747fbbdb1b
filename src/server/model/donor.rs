//! Domain & parameter models for donor operations
//!
//! Defines the donor domain model, the parameter models used to create and
//! update donors, and conversions from entity models and into DTOs.

use crate::model::donor::{CreateDonorDto, DonorDto, UpdateDonorDto};

/// The donor domain model
///
/// A donor is identified by their PESEL, which cannot change after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donor {
    pub id: i32,
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub blood_type_id: i32,
    pub phone_number: String,
    pub email: Option<String>,
}

impl Donor {
    /// Converts an entity model to the donor domain model
    pub fn from_entity(entity: entity::donor::Model) -> Self {
        Self {
            id: entity.id,
            pesel: entity.pesel,
            first_name: entity.first_name,
            last_name: entity.last_name,
            blood_type_id: entity.blood_type_id,
            phone_number: entity.phone_number,
            email: entity.email,
        }
    }

    /// Converts the domain model into its API representation
    pub fn into_dto(self) -> DonorDto {
        DonorDto {
            id: self.id,
            pesel: self.pesel,
            first_name: self.first_name,
            last_name: self.last_name,
            blood_type_id: self.blood_type_id,
            phone_number: self.phone_number,
            email: self.email,
        }
    }
}

/// Parameters for registering a new donor
#[derive(Debug, Clone)]
pub struct CreateDonorParam {
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub blood_type_id: i32,
    pub phone_number: String,
    pub email: Option<String>,
}

impl CreateDonorParam {
    pub fn from_dto(dto: CreateDonorDto) -> Self {
        Self {
            pesel: dto.pesel.trim().to_string(),
            first_name: dto.first_name,
            last_name: dto.last_name,
            blood_type_id: dto.blood_type_id,
            phone_number: dto.phone_number,
            email: dto.email,
        }
    }
}

/// Parameters for updating a donor's mutable fields
#[derive(Debug, Clone)]
pub struct UpdateDonorParam {
    pub first_name: String,
    pub last_name: String,
    pub blood_type_id: i32,
    pub phone_number: String,
    pub email: Option<String>,
}

impl UpdateDonorParam {
    pub fn from_dto(dto: UpdateDonorDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            blood_type_id: dto.blood_type_id,
            phone_number: dto.phone_number,
            email: dto.email,
        }
    }
}
