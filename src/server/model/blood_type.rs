//! Domain & parameter models for blood type operations

use crate::model::blood_type::{BloodTypeDto, CreateBloodTypeDto, UpdateBloodTypeDto};

/// The blood type domain model, e.g. `"AB Rh+"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloodType {
    pub id: i32,
    pub name: String,
}

impl BloodType {
    pub fn from_entity(entity: entity::blood_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }

    pub fn into_dto(self) -> BloodTypeDto {
        BloodTypeDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Parameters for creating a new blood type
#[derive(Debug, Clone)]
pub struct CreateBloodTypeParam {
    pub name: String,
}

impl CreateBloodTypeParam {
    pub fn from_dto(dto: CreateBloodTypeDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }
}

/// Parameters for renaming an existing blood type
#[derive(Debug, Clone)]
pub struct UpdateBloodTypeParam {
    pub name: String,
}

impl UpdateBloodTypeParam {
    pub fn from_dto(dto: UpdateBloodTypeDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }
}
