// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: the execution contract and its checker.
//!
//! Two ways to ask "was this result ever configured?":
//!
//! 1. [`check_executed`] returns a [`ContractViolation`] you can assert on.
//!
//! 2. [`require_executed`] aborts the current test. Every payload accessor
//!    calls it, so reading an unconfigured result fails loudly at the line
//!    that did it.

mod types;
pub mod contracts;

pub use contracts::{check_executed, require_executed, MockResult};
pub use types::*;
