// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session registry tests.

use croprec::{Page, SessionState};
use time::{Duration, OffsetDateTime};

use super::helpers::logged_in_as;
use crate::{ApiError, SessionRegistry};

fn start() -> OffsetDateTime {
    OffsetDateTime::from_unix_timestamp(1_767_225_600).unwrap()
}

#[test]
fn test_new_session_starts_on_login() {
    let mut registry: SessionRegistry = SessionRegistry::default();
    let token: String = registry.create();

    assert_eq!(registry.get(&token).unwrap(), SessionState::new());
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_tokens_are_unique() {
    let mut registry: SessionRegistry = SessionRegistry::default();
    let first: String = registry.create();
    let second: String = registry.create();

    assert_ne!(first, second);
    assert!(first.starts_with("session_"));
}

#[test]
fn test_sessions_are_independent() {
    let mut registry: SessionRegistry = SessionRegistry::default();
    let alice: String = registry.create();
    let bob: String = registry.create();

    registry
        .update(&alice, logged_in_as("alice", Page::App))
        .unwrap();

    assert_eq!(registry.get(&alice).unwrap(), logged_in_as("alice", Page::App));
    assert_eq!(registry.get(&bob).unwrap(), SessionState::new());
}

#[test]
fn test_unknown_token_is_rejected() {
    let mut registry: SessionRegistry = SessionRegistry::default();
    assert!(matches!(
        registry.get("session_bogus"),
        Err(ApiError::SessionNotFound { .. })
    ));
    assert!(matches!(
        registry.update("session_bogus", SessionState::new()),
        Err(ApiError::SessionNotFound { .. })
    ));
}

#[test]
fn test_idle_session_expires() {
    let mut registry: SessionRegistry = SessionRegistry::new(Duration::minutes(30));
    let token: String = registry.create_at(start());

    assert!(
        registry
            .get_at(&token, start() + Duration::minutes(30))
            .is_ok()
    );
    let err: ApiError = registry
        .get_at(&token, start() + Duration::minutes(61))
        .unwrap_err();

    assert_eq!(
        err,
        ApiError::SessionNotFound {
            reason: String::from("Session expired")
        }
    );
    assert!(registry.is_empty());
}

#[test]
fn test_activity_extends_the_session() {
    let mut registry: SessionRegistry = SessionRegistry::new(Duration::minutes(30));
    let token: String = registry.create_at(start());

    for minutes in [20, 40, 60, 80] {
        registry
            .update_at(
                &token,
                SessionState::new(),
                start() + Duration::minutes(minutes),
            )
            .unwrap();
    }
    assert!(registry.get_at(&token, start() + Duration::minutes(100)).is_ok());
}

#[test]
fn test_end_removes_session() {
    let mut registry: SessionRegistry = SessionRegistry::default();
    let token: String = registry.create();

    assert!(registry.end(&token));
    assert!(!registry.end(&token));
    assert!(registry.get(&token).is_err());
}

#[test]
fn test_create_purges_expired_sessions() {
    let mut registry: SessionRegistry = SessionRegistry::new(Duration::minutes(30));
    registry.create_at(start());
    registry.create_at(start());
    let fresh: String = registry.create_at(start() + Duration::minutes(45));

    assert_eq!(registry.len(), 1);
    assert!(registry.get_at(&fresh, start() + Duration::minutes(50)).is_ok());
}

#[test]
fn test_purge_expired_counts_removed() {
    let mut registry: SessionRegistry = SessionRegistry::new(Duration::minutes(5));
    registry.create_at(start());
    registry.create_at(start() + Duration::minutes(4));

    assert_eq!(registry.purge_expired_at(start() + Duration::minutes(6)), 1);
    assert_eq!(registry.len(), 1);
    assert_eq!(SessionRegistry::default().ttl(), Duration::minutes(30));
}
