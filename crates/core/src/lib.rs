// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod apply;
mod command;
mod error;
mod state;

#[cfg(test)]
mod tests;

use croprec_domain::Username;

// Re-export public types and functions
pub use apply::apply;
pub use command::{Command, SignupOutcome};
pub use error::CoreError;
pub use state::{Notice, NoticeLevel, Page, SessionState, TransitionResult};

/// Returns the logged-in user of a session.
///
/// This is a read-only check that does not change the session.
///
/// # Arguments
///
/// * `state` - The session to inspect
///
/// # Errors
///
/// Returns `CoreError::NotLoggedIn` if the session has no logged-in user.
pub fn require_logged_in(state: &SessionState) -> Result<&Username, CoreError> {
    match (&state.username, state.logged_in) {
        (Some(username), true) => Ok(username),
        _ => Err(CoreError::NotLoggedIn { page: state.page }),
    }
}
