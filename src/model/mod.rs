//! Request and response DTOs exchanged over the HTTP API.

pub mod api;
pub mod auth;
pub mod blood_donation;
pub mod blood_type;
pub mod donor;
pub mod personnel;
