//! Table-driven tests where every case declares its mock outcomes up front.

use super::common::{make_err, make_user, MockUserStore, User, UserService};
use mresult::prelude::*;

// ============================================================================
// ARITY 1 + ARITY 0
// ============================================================================

struct RenameCase {
    name: &'static str,
    get_user: MResult<User>,
    save_user: MResult0,
    want: Result<User, MockError>,
}

#[test]
fn test_rename_table() {
    let t = TestContext::current();
    let (get_user_r, get_user_r_err) = mresult::generator::<User>(&t);
    let (save_r, save_r_err) = mresult::generator0(&t);

    let cases = vec![
        RenameCase {
            name: "success",
            get_user: get_user_r(&t, make_user(1, "John")),
            save_user: save_r(&t),
            want: Ok(make_user(1, "Jane")),
        },
        RenameCase {
            name: "not_found",
            get_user: get_user_r_err(&t, make_err("user not found")),
            // save is never reached, so it stays unconfigured
            save_user: MResult0::default(),
            want: Err(make_err("user not found")),
        },
        RenameCase {
            name: "save_failed",
            get_user: get_user_r(&t, make_user(2, "Ann")),
            save_user: save_r_err(&t, make_err("save failed")),
            want: Err(make_err("save failed")),
        },
    ];

    for case in cases {
        let store = MockUserStore {
            get_user: case.get_user.clone(),
            save_user: case.save_user.clone(),
            ..MockUserStore::new(&t)
        };
        let service = UserService::new(store);

        let got = service.rename(case.get_user.val(&t).id, "Jane");
        assert_eq!(got, case.want, "case {}", case.name);

        // The error the service returned is exactly the one the case configured.
        if case.get_user.is_error(&t) {
            assert_eq!(got.err().as_ref(), case.get_user.err(&t), "case {}", case.name);
        }
    }
}

#[test]
fn test_configured_status_drives_expectations() {
    let t = TestContext::current();
    let (save_r, _) = mresult::generator0(&t);

    let cases = [
        ("unconfigured", MResult0::default(), false),
        ("configured", save_r(&t), true),
    ];

    for (name, save_user, want_executed) in cases {
        // has_err never aborts, so a test can branch on "was this configured"
        let (err, executed) = save_user.has_err(&t);
        assert_eq!(executed, want_executed, "case {}", name);
        assert!(err.is_none(), "case {}", name);
        assert_eq!(check_executed(&t, &save_user).is_ok(), want_executed, "case {}", name);
    }
}

// ============================================================================
// ARITY 2
// ============================================================================

#[test]
fn test_score_table() {
    let t = TestContext::current();
    let (lookup_r, lookup_r_err) = mresult::generator2::<String, i32>(&t);

    let cases = [
        ("found", lookup_r(&t, "key1".to_string(), 42), Ok(42)),
        ("empty_label", lookup_r(&t, String::new(), 42), Ok(0)),
        (
            "database_error",
            lookup_r_err(&t, make_err("database connection failed")),
            Err(make_err("database connection failed")),
        ),
    ];

    for (name, lookup, want) in cases {
        let store = MockUserStore {
            lookup: lookup.clone(),
            ..MockUserStore::new(&t)
        };
        let service = UserService::new(store);

        assert_eq!(service.score("key1"), want, "case {}", name);

        if lookup.is_error(&t) {
            assert_eq!(lookup.has_val(&t), (&String::new(), &0, true), "case {}", name);
        } else {
            assert_eq!(lookup.val2(&t), &42, "case {}", name);
        }
    }
}
