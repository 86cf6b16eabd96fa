// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use croprec::{Command, Notice, Page};
use croprec_domain::{FeatureVector, HistoryEntry};
use serde::{Deserialize, Serialize};

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The username as entered.
    pub username: String,
    /// The password as entered.
    pub password: String,
}

/// API request to create an account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// The requested username, stored exactly as entered.
    pub username: String,
    /// The requested password.
    pub password: String,
}

/// API request for a crop recommendation.
///
/// Field names follow the dataset columns; `N`, `P` and `K` are also
/// accepted in lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Nitrogen content.
    #[serde(rename = "N", alias = "n")]
    pub n: f64,
    /// Phosphorus content.
    #[serde(rename = "P", alias = "p")]
    pub p: f64,
    /// Potassium content.
    #[serde(rename = "K", alias = "k")]
    pub k: f64,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Soil pH.
    pub ph: f64,
    /// Rainfall in millimetres.
    pub rainfall: f64,
}

impl RecommendRequest {
    /// Converts the request into a feature vector.
    #[must_use]
    pub const fn features(&self) -> FeatureVector {
        FeatureVector::new(
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        )
    }
}

/// A button press that changes the page without touching the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavigationAction {
    /// "Sign Up" on the login page.
    OpenSignup,
    /// "Back to Login" on the signup page.
    BackToLogin,
    /// "View My Recommendations" on the app page.
    ViewHistory,
    /// "Logout" on the app page.
    Logout,
    /// "Back to App" on the history page.
    BackToApp,
}

impl NavigationAction {
    /// Returns the controller command for this action.
    #[must_use]
    pub const fn to_command(self) -> Command {
        match self {
            Self::OpenSignup => Command::OpenSignup,
            Self::BackToLogin => Command::BackToLogin,
            Self::ViewHistory => Command::ViewHistory,
            Self::Logout => Command::Logout,
            Self::BackToApp => Command::BackToApp,
        }
    }
}

/// API request wrapping a navigation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigateRequest {
    /// The button that was pressed.
    pub action: NavigationAction,
}

/// One past recommendation, with columns named as in the history table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryRowResponse {
    /// The user who asked.
    pub username: String,
    /// Nitrogen content.
    #[serde(rename = "N")]
    pub n: f64,
    /// Phosphorus content.
    #[serde(rename = "P")]
    pub p: f64,
    /// Potassium content.
    #[serde(rename = "K")]
    pub k: f64,
    /// Temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Soil pH.
    pub ph: f64,
    /// Rainfall in millimetres.
    pub rainfall: f64,
    /// The crop that was recommended.
    pub recommendation: String,
}

impl From<HistoryEntry> for HistoryRowResponse {
    fn from(entry: HistoryEntry) -> Self {
        let features: FeatureVector = entry.features;
        Self {
            username: entry.username.value().to_string(),
            n: features.n,
            p: features.p,
            k: features.k,
            temperature: features.temperature,
            humidity: features.humidity,
            ph: features.ph,
            rainfall: features.rainfall,
            recommendation: entry.recommendation.value().to_string(),
        }
    }
}

/// The document describing what a session's current page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum PageView {
    /// Empty login form.
    Login {
        /// Page heading.
        title: String,
    },
    /// Empty signup form.
    Signup {
        /// Page heading.
        title: String,
    },
    /// The measurement form.
    App {
        /// Page heading.
        title: String,
        /// The logged-in user.
        username: String,
        /// Held-out accuracy of the model.
        accuracy: f64,
        /// Names of the measurement fields, in input order.
        fields: Vec<String>,
    },
    /// The user's past recommendations.
    History {
        /// Page heading.
        title: String,
        /// The logged-in user.
        username: String,
        /// Past recommendations, oldest first.
        entries: Vec<HistoryRowResponse>,
        /// Set when there is nothing to show.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notice: Option<Notice>,
    },
}

impl PageView {
    /// Returns the page this view renders.
    #[must_use]
    pub const fn page(&self) -> Page {
        match self {
            Self::Login { .. } => Page::Login,
            Self::Signup { .. } => Page::Signup,
            Self::App { .. } => Page::App,
            Self::History { .. } => Page::History,
        }
    }
}

/// The outcome of a transition: where the session is now and what to tell
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionResponse {
    /// The page after the transition.
    pub page: Page,
    /// An inline message, if the transition produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
}

/// API response for a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// The recommended crop label.
    pub crop: String,
    /// Knowledge base text for the crop.
    pub description: String,
    /// Held-out accuracy of the model.
    pub accuracy: f64,
    /// Message announcing the result.
    pub notice: Notice,
}

/// API response describing one crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropInfoResponse {
    /// The crop name as requested.
    pub name: String,
    /// Knowledge base text, or the fallback for unknown crops.
    pub description: String,
}
