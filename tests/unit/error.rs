//! MockError as the system under test sees it.

use mresult::prelude::*;
use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq)]
struct NotFound {
    id: u64,
}

impl fmt::Display for NotFound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user {} not found", self.id)
    }
}

impl Error for NotFound {}

#[test]
fn test_wrapped_error_survives_a_round_trip() {
    let t = TestContext::current();
    let (_, get_user_r_err) = mresult::generator::<u64>(&t);
    let result = get_user_r_err(&t, MockError::wrap(NotFound { id: 7 }));

    let err = result.into_result(&t).unwrap_err();
    assert!(err.is::<NotFound>());
    assert_eq!(err.downcast_ref::<NotFound>(), Some(&NotFound { id: 7 }));
    assert_eq!(err.to_string(), "user 7 not found");
}

#[test]
fn test_string_conversions() {
    let t = TestContext::current();
    let (_, fail) = mresult::generator0(&t);

    let from_str = fail(&t, "boom".into());
    let from_string = fail(&t, String::from("boom").into());

    assert_eq!(from_str, from_string);
    assert_eq!(from_str.err(&t).map(ToString::to_string).as_deref(), Some("boom"));
}

#[test]
fn test_errors_can_be_boxed() {
    let err: Box<dyn Error + Send + Sync> = Box::new(MockError::new("boxed"));
    assert_eq!(err.to_string(), "boxed");
    assert!(err.source().is_none());
}
