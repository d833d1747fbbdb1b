use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDonorDto {
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub blood_type_id: i32,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateDonorDto {
    pub first_name: String,
    pub last_name: String,
    pub blood_type_id: i32,
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DonorDto {
    pub id: i32,
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub blood_type_id: i32,
    pub phone_number: String,
    pub email: Option<String>,
}
