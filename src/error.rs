// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The failure value carried by a mock result.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Error a mocked call "returns".
///
/// Cloning is cheap (the error is shared), so one `MockError` can be reused
/// across table cases and compared against what the system under test
/// propagated.
///
/// Two mock errors compare equal when they are the same error or render the
/// same message.
#[derive(Clone)]
pub struct MockError {
    inner: Arc<dyn Error + Send + Sync + 'static>,
}

/// Plain-message error behind [`MockError::new`].
#[derive(Debug)]
struct Message(String);

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Error for Message {}

impl MockError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Message(message.into())),
        }
    }

    /// Wrap a concrete error so the system under test can see its real type.
    pub fn wrap<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(error),
        }
    }

    /// Borrow the wrapped error as `E`, if that is what it is.
    pub fn downcast_ref<E: Error + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }

    /// Whether the wrapped error is an `E`.
    pub fn is<E: Error + 'static>(&self) -> bool {
        self.inner.is::<E>()
    }
}

impl fmt::Debug for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.downcast_ref::<Message>() {
            Some(Message(message)) => f.debug_tuple("MockError").field(message).finish(),
            None => f.debug_tuple("MockError").field(&self.inner).finish(),
        }
    }
}

impl fmt::Display for MockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl Error for MockError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.inner.source()
    }
}

impl PartialEq for MockError {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.to_string() == other.to_string()
    }
}

impl From<&str> for MockError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for MockError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}
