// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the execution contract.

use std::fmt;

/// A mock result was read before any factory populated it.
///
/// This is a mistake in the test itself: a table case forgot to configure the
/// result its mock returns. [`require_executed`](super::require_executed)
/// turns it into a test abort; [`check_executed`](super::check_executed)
/// hands it back as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    result: String,
}

impl ContractViolation {
    /// Violation for the result variant named `result` (e.g. `MResult[i32]`).
    pub fn not_executed(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }

    /// Diagnostic name of the misused result variant.
    pub fn result(&self) -> &str {
        &self.result
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not expected to execute", self.result)
    }
}

impl std::error::Error for ContractViolation {}
