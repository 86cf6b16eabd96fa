// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::{Command, SignupOutcome};
use crate::error::CoreError;
use crate::require_logged_in;
use crate::state::{Notice, Page, SessionState, TransitionResult};
use croprec_domain::AuthOutcome;

/// Applies a command to a session, producing the next session state.
///
/// This function is pure: it performs no I/O and never mutates `state`.
///
/// # Arguments
///
/// * `state` - The current session state (immutable)
/// * `command` - The action to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and an optional notice
/// * `Err(CoreError)` if the command is not valid for the current page
///
/// # Errors
///
/// Returns an error if:
/// - The command is not available on the current page
/// - The current page requires a login the session does not have
pub fn apply(state: &SessionState, command: Command) -> Result<TransitionResult, CoreError> {
    if state.page.requires_login() {
        require_logged_in(state)?;
    }

    match (state.page, command) {
        (Page::Login, Command::SubmitLogin { username, outcome }) => Ok(match outcome {
            AuthOutcome::Success => TransitionResult {
                new_state: SessionState {
                    page: Page::App,
                    logged_in: true,
                    username: Some(username),
                },
                notice: Some(Notice::success("Login successful! Redirecting...")),
            },
            AuthOutcome::WrongPassword => stay(state, Notice::error("Incorrect password.")),
            AuthOutcome::NotFound => stay(
                state,
                Notice::error("User not found. Please sign up first."),
            ),
        }),
        (Page::Login, Command::OpenSignup) => Ok(move_to(state, Page::Signup)),
        (Page::Signup, Command::SubmitSignup { outcome }) => Ok(match outcome {
            SignupOutcome::Created => TransitionResult {
                new_state: SessionState {
                    page: Page::Login,
                    ..state.clone()
                },
                notice: Some(Notice::success(
                    "Account created successfully! You can now log in.",
                )),
            },
            SignupOutcome::MissingFields => stay(
                state,
                Notice::warning("Please enter both username and password."),
            ),
            SignupOutcome::UsernameTaken => stay(
                state,
                Notice::error("Username already exists. Please choose another."),
            ),
        }),
        (Page::Signup, Command::BackToLogin) => Ok(move_to(state, Page::Login)),
        (Page::App, Command::SubmitRecommendation) => Ok(TransitionResult {
            new_state: state.clone(),
            notice: None,
        }),
        (Page::App, Command::ViewHistory) => Ok(move_to(state, Page::History)),
        (Page::App, Command::Logout) => Ok(TransitionResult {
            new_state: SessionState::new(),
            notice: None,
        }),
        (Page::History, Command::BackToApp) => Ok(move_to(state, Page::App)),
        (page, command) => Err(CoreError::InvalidTransition {
            page,
            command: command.name(),
        }),
    }
}

/// Keeps the session where it is and attaches a notice.
fn stay(state: &SessionState, notice: Notice) -> TransitionResult {
    TransitionResult {
        new_state: state.clone(),
        notice: Some(notice),
    }
}

/// Moves the session to another page without touching the login.
fn move_to(state: &SessionState, page: Page) -> TransitionResult {
    TransitionResult {
        new_state: SessionState {
            page,
            ..state.clone()
        },
        notice: None,
    }
}
