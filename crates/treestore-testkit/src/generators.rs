//! Proptest generators for property-based testing.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::fixtures::{User, UserId};

/// Generate a random UserId.
pub fn user_id() -> impl Strategy<Value = UserId> {
    (1u32..=10_000).prop_map(UserId)
}

/// Generate a plausible email payload.
pub fn email() -> impl Strategy<Value = String> {
    "[a-z]{1,12}@(example|test)\\.com"
}

/// Generate a user without an id.
pub fn unsaved_user() -> impl Strategy<Value = User> {
    email().prop_map(|email| User { id: None, email })
}

/// Generate a user carrying an id.
pub fn saved_user() -> impl Strategy<Value = User> {
    (user_id(), email()).prop_map(|(id, email)| User {
        id: Some(id),
        email,
    })
}

/// Generate a set of distinct ids, ascending by construction.
pub fn user_id_set(max_len: usize) -> impl Strategy<Value = BTreeSet<UserId>> {
    prop::collection::btree_set(user_id(), 0..=max_len)
}

/// Generate a user per id, preserving the ids' ascending order.
pub fn users_for_ids(max_len: usize) -> impl Strategy<Value = Vec<User>> {
    user_id_set(max_len).prop_flat_map(|ids| {
        let ids: Vec<UserId> = ids.into_iter().collect();
        prop::collection::vec(email(), ids.len()).prop_map(move |emails| {
            ids.iter()
                .zip(emails)
                .map(|(id, email)| User {
                    id: Some(*id),
                    email,
                })
                .collect()
        })
    })
}
