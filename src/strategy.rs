// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! proptest strategies producing populated mock results.
//!
//! Each strategy yields successes and failures, so a property that drives the
//! system under test with arbitrary mock outcomes covers both paths.
//!
//! ```
//! use mresult::prelude::*;
//! use mresult::strategy;
//! use proptest::prelude::*;
//!
//! proptest!(|(result in strategy::mresult(any::<u32>()))| {
//!     let t = TestContext::current();
//!     prop_assert!(result.is_executed(&t));
//! });
//! ```

use proptest::option;
use proptest::prelude::*;
use std::fmt;

use crate::context::TestContext;
use crate::error::MockError;
use crate::result0::{new0, new_err0, MResult0};
use crate::result1::{new, new_err, MResult};
use crate::result2::{new2, new_err2, MResult2};

/// Mock errors with short lowercase messages.
pub fn errors() -> impl Strategy<Value = MockError> {
    "[a-z]{1,12}( [a-z]{1,12}){0,3}".prop_map(MockError::from)
}

/// Populated [`MResult0`] values.
pub fn mresult0() -> impl Strategy<Value = MResult0> {
    option::of(errors()).prop_map(|err| {
        let t = strategy_context();
        match err {
            Some(err) => new_err0(&t, err),
            None => new0(&t),
        }
    })
}

/// Populated [`MResult`] values, successes drawing from `values`.
pub fn mresult<T, S>(values: S) -> impl Strategy<Value = MResult<T>>
where
    T: Default + fmt::Debug,
    S: Strategy<Value = T>,
{
    (values, option::of(errors())).prop_map(|(val, err)| {
        let t = strategy_context();
        match err {
            Some(err) => new_err(&t, err),
            None => new(&t, val),
        }
    })
}

/// Populated [`MResult2`] values, successes drawing from `values1` and `values2`.
pub fn mresult2<T1, T2, S1, S2>(values1: S1, values2: S2) -> impl Strategy<Value = MResult2<T1, T2>>
where
    T1: Default + fmt::Debug,
    T2: Default + fmt::Debug,
    S1: Strategy<Value = T1>,
    S2: Strategy<Value = T2>,
{
    (values1, values2, option::of(errors())).prop_map(|(val1, val2, err)| {
        let t = strategy_context();
        match err {
            Some(err) => new_err2(&t, err),
            None => new2(&t, val1, val2),
        }
    })
}

fn strategy_context() -> TestContext {
    TestContext::new("mresult::strategy")
}
