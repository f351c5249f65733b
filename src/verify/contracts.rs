// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The execution contract shared by every mock result.
//!
//! Every container answers the same three questions: was it populated, does
//! it model a failure, and what is that failure. The checker in this module
//! only talks to [`MockResult`], so one function guards all arities.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Every accessor that hands out a payload (`val*`, `err`, `into_result`)
//! goes through [`require_executed`] first. Removing the call lets a test
//! silently read the zero value of a result nobody configured.
//!
//! # Usage
//!
//! ```
//! use mresult::prelude::*;
//!
//! let t = TestContext::current();
//! let (_ok, fail) = mresult::generator::<u32>(&t);
//!
//! let result = fail(&t, MockError::new("timeout"));
//! assert!(check_executed(&t, &result).is_ok());
//! require_executed(&t, &result);
//! ```

use super::types::ContractViolation;
use crate::context::TestContext;
use crate::error::MockError;

/// Behaviour common to `MResult0`, `MResult` and `MResult2`.
pub trait MockResult {
    /// Diagnostic label of the concrete variant, e.g. `MResult[i32]`.
    fn name(&self) -> String;

    /// The stored failure and whether the result was populated.
    ///
    /// Never aborts.
    fn has_err(&self, t: &TestContext) -> (Option<&MockError>, bool);

    /// Whether the result was built by one of its generator's factories.
    ///
    /// Never aborts.
    fn is_executed(&self, t: &TestContext) -> bool {
        self.has_err(t).1
    }

    /// Whether the result models a failed call.
    ///
    /// Never aborts.
    fn is_error(&self, t: &TestContext) -> bool {
        self.has_err(t).0.is_some()
    }

    /// The stored failure, `None` for a success.
    ///
    /// # Panics
    /// Aborts the test if the result was never populated.
    #[track_caller]
    fn err(&self, t: &TestContext) -> Option<&MockError> {
        require_executed(t, self);
        self.has_err(t).0
    }
}

/// Check that `result` was populated, without aborting.
pub fn check_executed<R: MockResult + ?Sized>(
    t: &TestContext,
    result: &R,
) -> Result<(), ContractViolation> {
    if result.is_executed(t) {
        Ok(())
    } else {
        Err(ContractViolation::not_executed(result.name()))
    }
}

/// Abort the current test unless `result` was populated.
///
/// # Panics
/// Panics with `"<test>: <variant> is not expected to execute"` when the
/// result is a default (never configured) value.
#[track_caller]
pub fn require_executed<R: MockResult + ?Sized>(t: &TestContext, result: &R) {
    // INVARIANT: payload accessors only run on populated results
    if let Err(violation) = check_executed(t, result) {
        t.fatal(violation);
    }
}
