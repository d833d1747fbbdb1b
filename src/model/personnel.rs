use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePersonnelDto {
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdatePersonnelDto {
    pub first_name: String,
    pub last_name: String,
    /// New password, left unchanged when omitted
    #[serde(default)]
    pub password: Option<String>,
}

/// Personnel as exposed over the API; password material is never included.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PersonnelDto {
    pub id: i32,
    pub pesel: String,
    pub first_name: String,
    pub last_name: String,
}
