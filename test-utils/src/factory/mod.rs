//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let blood_type = factory::create_blood_type(&db).await?;
//! let donor = factory::create_donor(&db, blood_type.id).await?;
//!
//! // Or with all dependencies at once
//! let (blood_type, donor, personnel, donation) =
//!     factory::helpers::create_donation_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let donor = factory::donor::DonorFactory::new(&db, blood_type.id)
//!     .pesel("44051401359")
//!     .first_name("Jan")
//!     .build()
//!     .await?;
//! ```

pub mod blood_donation;
pub mod blood_type;
pub mod donor;
pub mod helpers;
pub mod personnel;

pub use blood_donation::create_blood_donation;
pub use blood_type::create_blood_type;
pub use donor::create_donor;
pub use personnel::create_personnel;
