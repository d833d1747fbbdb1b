//! Shared helper utilities for factory methods.
//!
//! Provides ID and PESEL generation plus convenience methods for creating entities
//! together with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

const PESEL_WEIGHTS: [u64; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a unique PESEL with a valid check digit.
pub fn next_pesel() -> String {
    let body = format!("{:010}", 8_000_000_000 + next_id());
    let sum: u64 = body
        .bytes()
        .zip(PESEL_WEIGHTS)
        .map(|(b, w)| u64::from(b - b'0') * w)
        .sum();

    format!("{}{}", body, (10 - sum % 10) % 10)
}

/// Creates a blood donation together with the blood type, donor and personnel
/// it references.
///
/// # Returns
/// - `Ok((blood_type, donor, personnel, donation))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_donation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::blood_type::Model,
        entity::donor::Model,
        entity::personnel::Model,
        entity::blood_donation::Model,
    ),
    DbErr,
> {
    let blood_type = crate::factory::blood_type::create_blood_type(db).await?;
    let donor = crate::factory::donor::create_donor(db, blood_type.id).await?;
    let personnel = crate::factory::personnel::create_personnel(db).await?;
    let donation =
        crate::factory::blood_donation::create_blood_donation(db, donor.id, personnel.id).await?;

    Ok((blood_type, donor, personnel, donation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_distinct_eleven_digit_pesels() {
        let first = next_pesel();
        let second = next_pesel();

        assert_eq!(first.len(), 11);
        assert!(first.chars().all(|c| c.is_ascii_digit()));
        assert_ne!(first, second);
    }
}
