// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Mock results for calls that return two values or an error.

use crate::context::TestContext;
use crate::error::MockError;
use crate::utils::short_type_name;
use crate::verify::{require_executed, MockResult};

/// A mock result that carries two values and an optional failure.
///
/// Useful for lookups that return a value plus a flag, or any call returning
/// a pair of related values: `fn lookup(&self, key: &str) -> Result<(T1, T2), E>`.
///
/// The `Default` value is an unexecuted result. Use [`generator2`] to create
/// populated ones. A failed result holds the default of both value types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MResult2<T1, T2> {
    val1: T1,
    val2: T2,
    err: Option<MockError>,
    executed: bool,
}

/// Creates successful [`MResult2`] instances.
pub type NewFunc2<T1, T2> = fn(&TestContext, T1, T2) -> MResult2<T1, T2>;

/// Creates failed [`MResult2`] instances.
pub type NewErrFunc2<T1, T2> = fn(&TestContext, MockError) -> MResult2<T1, T2>;

pub(crate) fn new2<T1, T2>(_t: &TestContext, val1: T1, val2: T2) -> MResult2<T1, T2> {
    MResult2 {
        val1,
        val2,
        err: None,
        executed: true,
    }
}

pub(crate) fn new_err2<T1: Default, T2: Default>(
    _t: &TestContext,
    err: MockError,
) -> MResult2<T1, T2> {
    MResult2 {
        val1: T1::default(),
        val2: T2::default(),
        err: Some(err),
        executed: true,
    }
}

/// Returns the factories for [`MResult2`]: one for successes with two values,
/// one for failures.
///
/// Both `T1` and `T2` must implement `Default`, which is what a failed result
/// stores in its value fields. Wrap payloads without a `Default` (e.g.
/// `Arc<dyn Trait>`) in `Option`.
///
/// # Example
///
/// ```
/// use mresult::prelude::*;
///
/// let t = TestContext::current();
/// let (lookup_r, lookup_r_err) = mresult::generator2::<String, i32>(&t);
///
/// let found = lookup_r(&t, "key1".to_string(), 42);
/// let failed = lookup_r_err(&t, MockError::new("database connection failed"));
///
/// assert_eq!(found.has_val(&t), (&"key1".to_string(), &42, true));
/// assert_eq!(failed.has_val(&t), (&String::new(), &0, true));
/// ```
pub fn generator2<T1: Default, T2: Default>(
    _t: &TestContext,
) -> (NewFunc2<T1, T2>, NewErrFunc2<T1, T2>) {
    (new2::<T1, T2>, new_err2::<T1, T2>)
}

impl<T1, T2> MResult2<T1, T2> {
    /// The first stored value.
    ///
    /// # Panics
    /// Aborts the test if the result was never populated.
    #[track_caller]
    pub fn val1(&self, t: &TestContext) -> &T1 {
        require_executed(t, self);
        &self.val1
    }

    /// The second stored value.
    ///
    /// # Panics
    /// Aborts the test if the result was never populated.
    #[track_caller]
    pub fn val2(&self, t: &TestContext) -> &T2 {
        require_executed(t, self);
        &self.val2
    }

    /// Both values and whether the result was populated.
    ///
    /// Never aborts. On a failed result both values are their defaults.
    pub fn has_val(&self, _t: &TestContext) -> (&T1, &T2, bool) {
        (&self.val1, &self.val2, self.executed)
    }

    /// Convert into what the mocked call returns.
    ///
    /// # Panics
    /// Aborts the test if the result was never populated.
    #[track_caller]
    pub fn into_result(self, t: &TestContext) -> Result<(T1, T2), MockError> {
        require_executed(t, &self);
        match self.err {
            Some(err) => Err(err),
            None => Ok((self.val1, self.val2)),
        }
    }
}

impl<T1, T2> MockResult for MResult2<T1, T2> {
    fn name(&self) -> String {
        format!(
            "MResult2[{}, {}]",
            short_type_name::<T1>(),
            short_type_name::<T2>()
        )
    }

    fn has_err(&self, _t: &TestContext) -> (Option<&MockError>, bool) {
        (self.err.as_ref(), self.executed)
    }
}
