// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use croprec_domain::Username;
use serde::{Deserialize, Serialize};

/// The page a session is currently looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    /// Username/password form. Every session starts here.
    #[default]
    Login,
    /// Account creation form.
    Signup,
    /// Measurement form and model accuracy.
    App,
    /// The user's past recommendations.
    History,
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Page {
    /// Converts this page to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Signup => "signup",
            Self::App => "app",
            Self::History => "history",
        }
    }

    /// Returns the heading shown on this page.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Login => "Login to Crop Recommendation System",
            Self::Signup => "Create a New Account",
            Self::App => "Crop Recommendation System",
            Self::History => "My Past Recommendations",
        }
    }

    /// Returns whether this page is only reachable after logging in.
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::App | Self::History)
    }
}

/// Per-session controller state.
///
/// Sessions are independent of each other and are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// The current page.
    pub page: Page,
    /// Whether the session has a logged-in user.
    pub logged_in: bool,
    /// The logged-in user, if any.
    pub username: Option<Username>,
}

impl SessionState {
    /// Creates a fresh session on the login page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: Page::Login,
            logged_in: false,
            username: None,
        }
    }
}

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// The action completed.
    Success,
    /// Neutral information.
    Info,
    /// The input needs correcting.
    Warning,
    /// The action was refused.
    Error,
}

/// An inline message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// The severity.
    pub level: NoticeLevel,
    /// The message text.
    pub text: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(text: &str) -> Self {
        Self {
            level: NoticeLevel::Success,
            text: text.to_string(),
        }
    }

    /// Creates an informational notice.
    #[must_use]
    pub fn info(text: &str) -> Self {
        Self {
            level: NoticeLevel::Info,
            text: text.to_string(),
        }
    }

    /// Creates a warning notice.
    #[must_use]
    pub fn warning(text: &str) -> Self {
        Self {
            level: NoticeLevel::Warning,
            text: text.to_string(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(text: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            text: text.to_string(),
        }
    }
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The session state after the transition.
    pub new_state: SessionState,
    /// An optional message for the user.
    pub notice: Option<Notice>,
}
