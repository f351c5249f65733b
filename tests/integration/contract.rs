//! Tests for the abort-on-unconfigured contract as seen through a mock.

use super::common::{make_user, MockUserStore, UserService};
use mresult::prelude::*;

#[test]
#[should_panic(expected = "MResult0 is not expected to execute")]
fn test_unconfigured_save_aborts_the_test() {
    let t = TestContext::current();
    let (get_user_r, _) = mresult::generator(&t);

    // The case forgot to configure save_user.
    let store = MockUserStore {
        get_user: get_user_r(&t, make_user(1, "John")),
        ..MockUserStore::new(&t)
    };

    let _ = UserService::new(store).rename(1, "Jane");
}

#[test]
#[should_panic(expected = "MResult2[String, i32] is not expected to execute")]
fn test_unconfigured_lookup_aborts_the_test() {
    let t = TestContext::current();
    let _ = UserService::new(MockUserStore::new(&t)).score("key1");
}

#[test]
#[should_panic(expected = "MResult[i32] is not expected to execute")]
fn test_unconstructed_value_aborts() {
    let t = TestContext::current();
    let unset: MResult<i32> = MResult::default();
    unset.val(&t);
}

#[test]
#[should_panic(expected = "ctx/named: MResult[User] is not expected to execute")]
fn test_abort_message_names_the_test() {
    let t = TestContext::new("ctx/named");
    let _ = MockUserStore::new(&t).get_user.err(&t);
}

#[test]
fn test_violation_can_be_inspected_without_aborting() {
    let t = TestContext::current();
    let store = MockUserStore::new(&t);

    let violation = check_executed(&t, &store.lookup).unwrap_err();
    assert_eq!(violation.result(), "MResult2[String, i32]");
    assert_eq!(
        violation.to_string(),
        "MResult2[String, i32] is not expected to execute"
    );

    let err: Box<dyn std::error::Error> = Box::new(violation);
    assert!(err.to_string().contains("MResult2"));
}

#[test]
fn test_aborts_stay_inside_one_test_thread() {
    let t = TestContext::current();
    let unset = MResult0::default();

    let outcome = std::thread::spawn(move || {
        let inner = TestContext::new("inner");
        unset.err(&inner).cloned()
    })
    .join();

    assert!(outcome.is_err(), "unset result must abort its thread");
    assert!(!t.name().is_empty());
}
