// Error handling utilities for consistent error messages and exit codes

use std::process;
use thiserror::Error;
use crate::models::task::FIELD_SEPARATOR;

/// Invalid user input
///
/// Surfaces as `Error: <message>` with exit code 1 when it reaches `main`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    Empty(String),
    #[error("{field} cannot contain '{}' or line breaks: '{value}'", FIELD_SEPARATOR.trim())]
    ContainsSeparator { field: String, value: String },
    #[error("Invalid {kind} ID: '{value}'. ID must be exactly four numeric digits (e.g. 1234).")]
    InvalidId { kind: String, value: String },
    #[error("Invalid quantity: {0}. Quantity must be a positive integer.")]
    InvalidQuantity(i64),
    #[error("Invalid task number: '{0}'. Task number must be a positive integer.")]
    InvalidTaskNumber(String),
    #[error("Invalid {field}: {value}. Value must be a non-negative number.")]
    InvalidAmount { field: String, value: f64 },
}

/// Exit with a user error (exit code 1)
/// User errors are for invalid input, missing resources, etc.
pub fn user_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    process::exit(1);
}

/// Validate that a string is not empty
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Empty(field_name.to_string()))
    } else {
        Ok(())
    }
}

/// Validate a value stored as one field of a comma-separated record line
pub fn validate_record_field(value: &str, field_name: &str) -> Result<(), ValidationError> {
    validate_non_empty(value, field_name)?;
    if value.contains(FIELD_SEPARATOR.trim()) || value.contains('\n') || value.contains('\r') {
        return Err(ValidationError::ContainsSeparator {
            field: field_name.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

/// Validate a four-digit book or author ID
pub fn validate_four_digit_id(value: &str, kind: &str) -> Result<i64, ValidationError> {
    let value = value.trim();
    if value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()) {
        value.parse::<i64>().map_err(|_| ValidationError::InvalidId {
            kind: kind.to_string(),
            value: value.to_string(),
        })
    } else {
        Err(ValidationError::InvalidId {
            kind: kind.to_string(),
            value: value.to_string(),
        })
    }
}

/// Validate that a stock quantity is positive
pub fn validate_quantity(qty: i64) -> Result<i64, ValidationError> {
    if qty > 0 {
        Ok(qty)
    } else {
        Err(ValidationError::InvalidQuantity(qty))
    }
}

/// Validate a 1-based task number as shown in task listings
pub fn validate_task_number(value: &str) -> Result<usize, ValidationError> {
    value.trim()
        .parse::<usize>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| ValidationError::InvalidTaskNumber(value.to_string()))
}

/// Validate a monetary amount or percentage rate
pub fn validate_amount(value: f64, field_name: &str) -> Result<f64, ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::InvalidAmount {
            field: field_name.to_string(),
            value,
        })
    }
}
