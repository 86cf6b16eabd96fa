// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for rejected page transitions.
//!
//! These tests verify that commands outside the page graph are rejected
//! with specific error kinds and never alter the session.

use crate::{Command, CoreError, Page, SessionState, apply, require_logged_in};

use super::helpers::{all_commands, create_logged_in_state, create_state_on};

/// Returns whether a command is accepted on a page (for a logged-in session
/// on app/history, or an anonymous one on login/signup).
const fn is_allowed(page: Page, command: &Command) -> bool {
    matches!(
        (page, command),
        (Page::Login, Command::SubmitLogin { .. } | Command::OpenSignup)
            | (Page::Signup, Command::SubmitSignup { .. } | Command::BackToLogin)
            | (
                Page::App,
                Command::SubmitRecommendation | Command::ViewHistory | Command::Logout
            )
            | (Page::History, Command::BackToApp)
    )
}

#[test]
fn test_every_invalid_pair_is_rejected_without_side_effects() {
    for page in [Page::Login, Page::Signup, Page::App, Page::History] {
        let state: SessionState = if page.requires_login() {
            create_logged_in_state(page)
        } else {
            create_state_on(page)
        };

        for command in all_commands() {
            let allowed: bool = is_allowed(page, &command);
            let name: &'static str = command.name();
            let before: SessionState = state.clone();
            let result = apply(&state, command);

            assert_eq!(state, before);
            if allowed {
                assert!(result.is_ok(), "{name} should be allowed on {page}");
            } else {
                assert_eq!(
                    result,
                    Err(CoreError::InvalidTransition {
                        page,
                        command: name
                    }),
                    "{name} should be rejected on {page}"
                );
            }
        }
    }
}

#[test]
fn test_app_page_without_login_is_rejected() {
    let state: SessionState = create_state_on(Page::App);
    let result = apply(&state, Command::ViewHistory);
    assert_eq!(result, Err(CoreError::NotLoggedIn { page: Page::App }));
}

#[test]
fn test_history_page_without_username_is_rejected() {
    let state: SessionState = SessionState {
        page: Page::History,
        logged_in: true,
        username: None,
    };
    let result = apply(&state, Command::BackToApp);
    assert_eq!(
        result,
        Err(CoreError::NotLoggedIn {
            page: Page::History
        })
    );
}

#[test]
fn test_require_logged_in_returns_username() {
    let state: SessionState = create_logged_in_state(Page::App);
    assert_eq!(require_logged_in(&state).unwrap().value(), "alice");
    assert!(require_logged_in(&SessionState::new()).is_err());
}

#[test]
fn test_core_error_display() {
    let err: CoreError = CoreError::InvalidTransition {
        page: Page::Login,
        command: "Logout",
    };
    assert_eq!(
        format!("{err}"),
        "Action 'Logout' is not available on the login page"
    );

    let err: CoreError = CoreError::NotLoggedIn { page: Page::History };
    assert_eq!(
        format!("{err}"),
        "The history page requires a logged-in user"
    );
}
