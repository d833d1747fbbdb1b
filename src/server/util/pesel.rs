//! PESEL (Polish national identification number) validation.

use crate::server::error::AppError;

const WEIGHTS: [u32; 10] = [1, 3, 7, 9, 1, 3, 7, 9, 1, 3];

/// Checks that `pesel` is 11 digits with a valid check digit.
///
/// # Returns
/// - `Ok(())` - Well-formed PESEL
/// - `Err(AppError::BadRequest)` - Wrong length, non-digit characters, or bad checksum
pub fn validate_pesel(pesel: &str) -> Result<(), AppError> {
    let digits: Vec<u32> = pesel.chars().filter_map(|c| c.to_digit(10)).collect();

    if pesel.len() != 11 || digits.len() != 11 {
        return Err(AppError::BadRequest(format!(
            "PESEL '{}' must consist of exactly 11 digits",
            pesel
        )));
    }

    if digits[10] != check_digit(&digits[..10]) {
        return Err(AppError::BadRequest(format!(
            "PESEL '{}' has an invalid check digit",
            pesel
        )));
    }

    Ok(())
}

/// Computes the PESEL check digit for the first ten digits.
pub fn check_digit(digits: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(WEIGHTS).map(|(d, w)| d * w).sum();
    (10 - sum % 10) % 10
}
