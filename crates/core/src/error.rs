// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::Page;

/// Errors that can occur during state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The command is not available on the current page.
    InvalidTransition {
        /// The page the session was on.
        page: Page,
        /// The command that was attempted.
        command: &'static str,
    },
    /// The page requires a logged-in user.
    NotLoggedIn {
        /// The page the session was on.
        page: Page,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition { page, command } => {
                write!(f, "Action '{command}' is not available on the {page} page")
            }
            Self::NotLoggedIn { page } => {
                write!(f, "The {page} page requires a logged-in user")
            }
        }
    }
}

impl std::error::Error for CoreError {}
