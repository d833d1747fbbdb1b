//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: PESEL checksums, name and volume rules, duplicate natural keys
//! - **Orchestration**: Checking referenced rows exist before writing
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services are constructed per request from borrowed parts of `AppState` and build a
//! fresh repository handle from the [`Store`](crate::server::data::store::Store) for
//! every call. Missing rows are reported as `AppError::NotFound`.

pub mod auth;
pub mod blood_donation;
pub mod blood_type;
pub mod donor;
pub mod personnel;
