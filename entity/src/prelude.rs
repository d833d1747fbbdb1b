pub use super::blood_donation::Entity as BloodDonation;
pub use super::blood_type::Entity as BloodType;
pub use super::donor::Entity as Donor;
pub use super::personnel::Entity as Personnel;
