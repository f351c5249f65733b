// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The explicit handle for the running test.
//!
//! Every operation in this crate takes a `&TestContext` so that the only
//! ambient resource, the ability to fail the current test, is visible at the
//! call site. Failing is a panic: libtest runs each test on its own thread and
//! reports the panic against that test only.

use std::fmt;
use std::thread;

/// Label used when the current thread carries no test name.
const UNNAMED_TEST: &str = "<unnamed test>";

/// Handle for the test currently executing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestContext {
    name: String,
}

impl TestContext {
    /// Create a context with an explicit test name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Create a context named after the running test.
    ///
    /// libtest names each test thread after the test path, so inside a
    /// `#[test]` this yields e.g. `tests::lookup_returns_user`.
    pub fn current() -> Self {
        let name = thread::current()
            .name()
            .filter(|name| !name.is_empty() && *name != "main")
            .unwrap_or(UNNAMED_TEST)
            .to_string();
        Self { name }
    }

    /// Name of the test this context belongs to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Write a diagnostic line for this test.
    ///
    /// Output goes to stderr, which libtest captures and only shows for
    /// failing tests (or with `--nocapture`).
    pub fn log(&self, message: impl fmt::Display) {
        eprintln!("{}: {}", self.name, message);
    }

    /// Abort the current test.
    ///
    /// # Panics
    /// Always. The panic message is `"<test name>: <message>"` and the
    /// reported location is the caller's.
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        panic!("{}: {}", self.name, message)
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for TestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
