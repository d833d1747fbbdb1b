//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry the
//! input of a single create or update operation.

pub mod blood_donation;
pub mod blood_type;
pub mod donor;
pub mod personnel;
