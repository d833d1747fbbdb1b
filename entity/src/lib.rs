//! SeaORM entity models for the blood donors database.

pub mod prelude;

pub mod blood_donation;
pub mod blood_type;
pub mod donor;
pub mod personnel;
