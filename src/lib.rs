//! Typed mock results for table-driven tests.
//!
//! A mocked call either succeeds with some values or fails with an error.
//! This crate gives that outcome a type, so each table case declares it once
//! and the test asserts against it uniformly instead of growing a bespoke
//! success/error struct per mocked signature.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌────────────────┐
//! │  result0.rs  │   │  result1.rs  │   │   result2.rs   │
//! │  (MResult0,  │   │  (MResult,   │   │  (MResult2,    │
//! │  generator0) │   │  generator)  │   │   generator2)  │
//! └──────────────┘   └──────────────┘   └────────────────┘
//!        │                  │                   │
//!        ▼                  ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                          │
//! │  (MockResult trait, require_executed,               │
//! │   check_executed, ContractViolation)                │
//! └─────────────────────────────────────────────────────┘
//!        │                                      │
//!        ▼                                      ▼
//! ┌──────────────┐                      ┌──────────────┐
//! │  context.rs  │                      │   error.rs   │
//! │ (TestContext)│                      │  (MockError) │
//! └──────────────┘                      └──────────────┘
//! ```
//!
//! | Arity | Container          | Generator        | Mocked signature             |
//! |-------|--------------------|------------------|------------------------------|
//! | 0     | `MResult0`         | `generator0`     | `fn(..) -> Result<(), E>`    |
//! | 1     | `MResult<T>`       | `generator`      | `fn(..) -> Result<T, E>`     |
//! | 2     | `MResult2<T1, T2>` | `generator2`     | `fn(..) -> Result<(T1, T2), E>` |
//!
//! # Usage
//!
//! ```
//! use mresult::prelude::*;
//!
//! let t = TestContext::current();
//! let (get_user_r, get_user_r_err) = mresult::generator::<u64>(&t);
//!
//! struct Case {
//!     name: &'static str,
//!     get_user: MResult<u64>,
//!     want_err: bool,
//! }
//!
//! let cases = [
//!     Case { name: "success", get_user: get_user_r(&t, 1), want_err: false },
//!     Case {
//!         name: "error",
//!         get_user: get_user_r_err(&t, MockError::new("database error")),
//!         want_err: true,
//!     },
//! ];
//!
//! for case in cases {
//!     assert_eq!(case.get_user.is_error(&t), case.want_err, "{}", case.name);
//!     // The mock layer hands this to the system under test.
//!     let _returned: Result<u64, MockError> = case.get_user.into_result(&t);
//! }
//! ```
//!
//! Reading a result that no factory populated aborts the test:
//!
//! ```should_panic
//! use mresult::prelude::*;
//!
//! let t = TestContext::current();
//! let unset = MResult::<i32>::default();
//! unset.val(&t); // panics: "MResult[i32] is not expected to execute"
//! ```

// Module declarations
pub mod context;
pub mod error;
mod result0;
mod result1;
mod result2;
#[cfg(feature = "proptest")]
pub mod strategy;
pub mod testing;
mod utils;
pub mod verify;

// Re-exports for public API
pub use context::TestContext;
pub use error::MockError;
pub use result0::{generator0, MResult0, NewErrFunc0, NewFunc0};
pub use result1::{generator, MResult, NewErrFunc, NewFunc};
pub use result2::{generator2, MResult2, NewErrFunc2, NewFunc2};
pub use utils::short_type_name;
pub use verify::{check_executed, require_executed, ContractViolation, MockResult};

/// Everything a test module needs: containers, the contract trait, the
/// context and the error type.
pub mod prelude {
    pub use crate::context::TestContext;
    pub use crate::error::MockError;
    pub use crate::verify::{check_executed, require_executed, ContractViolation, MockResult};
    pub use crate::{MResult, MResult0, MResult2};
}
