//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::error::MockError;

/// Payload type used by the table-driven tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub name: String,
}

/// Create a test user.
///
/// This is the canonical implementation used across all tests.
pub fn make_user(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
    }
}

/// Create a mock error with the given message.
pub fn make_err(message: &str) -> MockError {
    MockError::new(message)
}
