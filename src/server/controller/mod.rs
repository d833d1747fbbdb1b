//! HTTP request handlers.
//!
//! Controllers convert DTOs into parameter models, call a per-request service and
//! convert the returned domain models back into DTOs. Authentication is handled by
//! the router's middleware; every handler except login runs behind it.

pub mod auth;
pub mod blood_donation;
pub mod blood_type;
pub mod donor;
pub mod personnel;
