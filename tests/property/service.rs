//! The service under test propagates whatever outcome the mock was given.

use super::common::{MockUserStore, User, UserService};
use mresult::prelude::*;
use mresult::strategy;
use proptest::prelude::*;

fn user_strategy() -> impl Strategy<Value = User> {
    (any::<u64>(), "[A-Z][a-z]{1,10}").prop_map(|(id, name)| User { id, name })
}

proptest! {
    #[test]
    fn prop_rename_propagates_mock_outcomes(
        get_user in strategy::mresult(user_strategy()),
        save_user in strategy::mresult0(),
        new_name in "[A-Z][a-z]{1,10}",
    ) {
        let t = TestContext::current();
        let store = MockUserStore {
            get_user: get_user.clone(),
            save_user: save_user.clone(),
            ..MockUserStore::new(&t)
        };

        let got = UserService::new(store).rename(get_user.val(&t).id, &new_name);

        if let Some(err) = get_user.err(&t) {
            prop_assert_eq!(got, Err(err.clone()));
        } else if let Some(err) = save_user.err(&t) {
            prop_assert_eq!(got, Err(err.clone()));
        } else {
            let want = User { id: get_user.val(&t).id, name: new_name };
            prop_assert_eq!(got, Ok(want));
        }
    }
}
