//! Domain & parameter models for blood donation operations

use chrono::{DateTime, Utc};

use crate::model::blood_donation::{
    BloodDonationDto, CreateBloodDonationDto, UpdateBloodDonationDto,
};

/// A single recorded donation, taken from a donor by a member of personnel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloodDonation {
    pub id: i32,
    pub donor_id: i32,
    pub personnel_id: i32,
    pub donated_at: DateTime<Utc>,
    pub volume_ml: i32,
}

impl BloodDonation {
    pub fn from_entity(entity: entity::blood_donation::Model) -> Self {
        Self {
            id: entity.id,
            donor_id: entity.donor_id,
            personnel_id: entity.personnel_id,
            donated_at: entity.donated_at,
            volume_ml: entity.volume_ml,
        }
    }

    pub fn into_dto(self) -> BloodDonationDto {
        BloodDonationDto {
            id: self.id,
            donor_id: self.donor_id,
            personnel_id: self.personnel_id,
            donated_at: self.donated_at,
            volume_ml: self.volume_ml,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBloodDonationParam {
    pub donor_id: i32,
    pub personnel_id: i32,
    pub donated_at: DateTime<Utc>,
    pub volume_ml: i32,
}

impl CreateBloodDonationParam {
    pub fn from_dto(dto: CreateBloodDonationDto) -> Self {
        Self {
            donor_id: dto.donor_id,
            personnel_id: dto.personnel_id,
            donated_at: dto.donated_at,
            volume_ml: dto.volume_ml,
        }
    }
}

/// Donor and personnel of a donation are fixed once recorded.
#[derive(Debug, Clone)]
pub struct UpdateBloodDonationParam {
    pub donated_at: DateTime<Utc>,
    pub volume_ml: i32,
}

impl UpdateBloodDonationParam {
    pub fn from_dto(dto: UpdateBloodDonationDto) -> Self {
        Self {
            donated_at: dto.donated_at,
            volume_ml: dto.volume_ml,
        }
    }
}
