// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mock results for calls that return one value or an error.

use crate::context::TestContext;
use crate::error::MockError;
use crate::utils::short_type_name;
use crate::verify::{require_executed, MockResult};

/// A mock result that carries a single value and an optional failure.
///
/// Useful for mocking database queries, API calls or file reads: anything
/// shaped like `fn get(&self, id: u64) -> Result<T, E>`.
///
/// The `Default` value is an unexecuted result. Use [`generator`] to create
/// populated ones. A failed result holds `T::default()` as its value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MResult<T> {
    val: T,
    err: Option<MockError>,
    executed: bool,
}

/// Creates successful [`MResult`] instances.
pub type NewFunc<T> = fn(&TestContext, T) -> MResult<T>;

/// Creates failed [`MResult`] instances.
pub type NewErrFunc<T> = fn(&TestContext, MockError) -> MResult<T>;

pub(crate) fn new<T>(_t: &TestContext, val: T) -> MResult<T> {
    MResult {
        val,
        err: None,
        executed: true,
    }
}

pub(crate) fn new_err<T: Default>(_t: &TestContext, err: MockError) -> MResult<T> {
    MResult {
        val: T::default(),
        err: Some(err),
        executed: true,
    }
}

/// Returns the factories for [`MResult`]: one for successes with a value,
/// one for failures.
///
/// `T` must implement `Default`: a failed result stores `T::default()` as its
/// value, and the unexecuted `MResult<T>` is its `Default`. Payloads without
/// a `Default` (e.g. `Arc<dyn Trait>`) cannot be mocked directly; wrap them
/// in `Option` so the failure path has a value to hold.
///
/// # Example
///
/// ```
/// use mresult::prelude::*;
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// let t = TestContext::current();
/// let (get_user_r, get_user_r_err) = mresult::generator::<Option<User>>(&t);
///
/// let found = get_user_r(&t, Some(User { id: 1, name: "John".into() }));
/// let not_found = get_user_r_err(&t, MockError::new("user not found"));
///
/// assert_eq!(found.val(&t).as_ref().map(|u| u.id), Some(1));
/// assert_eq!(not_found.val(&t), &None);
/// assert!(not_found.is_error(&t));
/// ```
pub fn generator<T: Default>(_t: &TestContext) -> (NewFunc<T>, NewErrFunc<T>) {
    (new::<T>, new_err::<T>)
}

impl<T> MResult<T> {
    /// The stored value.
    ///
    /// Does not look at the failure: on a failed result this is
    /// `T::default()`. Check [`is_error`](MockResult::is_error) first.
    ///
    /// # Panics
    /// Aborts the test if the result was never populated.
    #[track_caller]
    pub fn val(&self, t: &TestContext) -> &T {
        require_executed(t, self);
        &self.val
    }

    /// The stored value and whether the result was populated.
    ///
    /// Never aborts.
    pub fn has_val(&self, _t: &TestContext) -> (&T, bool) {
        (&self.val, self.executed)
    }

    /// Convert into what the mocked call returns.
    ///
    /// # Panics
    /// Aborts the test if the result was never populated.
    #[track_caller]
    pub fn into_result(self, t: &TestContext) -> Result<T, MockError> {
        require_executed(t, &self);
        match self.err {
            Some(err) => Err(err),
            None => Ok(self.val),
        }
    }
}

impl<T> MockResult for MResult<T> {
    fn name(&self) -> String {
        format!("MResult[{}]", short_type_name::<T>())
    }

    fn has_err(&self, _t: &TestContext) -> (Option<&MockError>, bool) {
        (self.err.as_ref(), self.executed)
    }
}
