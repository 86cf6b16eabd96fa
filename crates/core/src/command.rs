// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use croprec_domain::{AuthOutcome, Username};

/// Outcome of an account creation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The account was stored.
    Created,
    /// Username or password was blank.
    MissingFields,
    /// The username is already registered.
    UsernameTaken,
}

/// A command represents a user action as data only.
///
/// Commands are the only way to change a session. Actions that touch the
/// stores are resolved first and carry their outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// The login form was submitted.
    SubmitLogin {
        /// The username that was entered.
        username: Username,
        /// The result of checking the credentials.
        outcome: AuthOutcome,
    },
    /// "Sign Up" was clicked on the login page.
    OpenSignup,
    /// The signup form was submitted.
    SubmitSignup {
        /// The result of the account creation attempt.
        outcome: SignupOutcome,
    },
    /// "Back to Login" was clicked on the signup page.
    BackToLogin,
    /// "Recommend Crop" was clicked on the app page.
    SubmitRecommendation,
    /// "View My Recommendations" was clicked on the app page.
    ViewHistory,
    /// "Logout" was clicked on the app page.
    Logout,
    /// "Back to App" was clicked on the history page.
    BackToApp,
}

impl Command {
    /// Returns the command name used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SubmitLogin { .. } => "SubmitLogin",
            Self::OpenSignup => "OpenSignup",
            Self::SubmitSignup { .. } => "SubmitSignup",
            Self::BackToLogin => "BackToLogin",
            Self::SubmitRecommendation => "SubmitRecommendation",
            Self::ViewHistory => "ViewHistory",
            Self::Logout => "Logout",
            Self::BackToApp => "BackToApp",
        }
    }
}
