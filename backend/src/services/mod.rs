//! Module for core business logic services.
//!
//! This module encapsulates the operations behind each endpoint: gating and
//! recording attendance, managing courses, and casting and tallying votes. Each
//! service orchestrates the auth gate and the database queries.

pub mod attendance;
pub mod courses;
pub mod vote_tally;

/// Trims `value` and rejects it if nothing is left.
pub(crate) fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, crate::errors::AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::errors::AppError::InvalidInput(format!(
            "{field} must not be empty"
        )));
    }
    Ok(trimmed)
}
