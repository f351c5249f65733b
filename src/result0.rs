// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mock results for calls that return only an error.

use crate::context::TestContext;
use crate::error::MockError;
use crate::verify::{require_executed, MockResult};

/// A mock result that carries no value, only an optional failure.
///
/// Useful for mocking calls like `fn save(&self, user: &User) -> Result<(), E>`.
///
/// The `Default` value is an unexecuted result. Use [`generator0`] to create
/// populated ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MResult0 {
    err: Option<MockError>,
    executed: bool,
}

/// Creates successful [`MResult0`] instances.
pub type NewFunc0 = fn(&TestContext) -> MResult0;

/// Creates failed [`MResult0`] instances.
pub type NewErrFunc0 = fn(&TestContext, MockError) -> MResult0;

pub(crate) fn new0(_t: &TestContext) -> MResult0 {
    MResult0 {
        err: None,
        executed: true,
    }
}

pub(crate) fn new_err0(_t: &TestContext, err: MockError) -> MResult0 {
    MResult0 {
        err: Some(err),
        executed: true,
    }
}

/// Returns the factories for [`MResult0`]: one for successes, one for failures.
///
/// # Example
///
/// ```
/// use mresult::prelude::*;
///
/// let t = TestContext::current();
/// let (save_r, save_r_err) = mresult::generator0(&t);
///
/// let cases = [
///     ("success", save_r(&t)),
///     ("error", save_r_err(&t, MockError::new("save failed"))),
/// ];
///
/// for (name, save_result) in &cases {
///     assert_eq!(save_result.is_error(&t), *name == "error");
/// }
/// ```
pub fn generator0(_t: &TestContext) -> (NewFunc0, NewErrFunc0) {
    (new0, new_err0)
}

impl MResult0 {
    /// Convert into what the mocked call returns.
    ///
    /// # Panics
    /// Aborts the test if the result was never populated.
    #[track_caller]
    pub fn into_result(self, t: &TestContext) -> Result<(), MockError> {
        require_executed(t, &self);
        match self.err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl MockResult for MResult0 {
    fn name(&self) -> String {
        "MResult0".to_string()
    }

    fn has_err(&self, _t: &TestContext) -> (Option<&MockError>, bool) {
        (self.err.as_ref(), self.executed)
    }
}
