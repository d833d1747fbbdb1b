use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBloodDonationDto {
    pub donor_id: i32,
    pub personnel_id: i32,
    pub donated_at: DateTime<Utc>,
    pub volume_ml: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateBloodDonationDto {
    pub donated_at: DateTime<Utc>,
    pub volume_ml: i32,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct BloodDonationDto {
    pub id: i32,
    pub donor_id: i32,
    pub personnel_id: i32,
    pub donated_at: DateTime<Utc>,
    pub volume_ml: i32,
}
