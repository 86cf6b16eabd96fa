// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// Number of soil and climate measurements in a feature vector.
pub const FEATURE_COUNT: usize = 7;

/// Column names of the feature vector, in canonical order.
///
/// These match the column headers of the training dataset and the
/// history table.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// A login name.
///
/// Usernames are compared exactly: no case folding and no trimming.
/// `" alice"` and `"alice"` are different users.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Creates a new username from the given value, unchanged.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the username value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the username is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A password as entered by the user.
///
/// The `Debug` implementation never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a raw password.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Exposes the raw password.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the password is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Password(<redacted>)")
    }
}

/// A registered user as read back from the credential table.
///
/// `password` holds the stored form, which is either the plaintext or a
/// hash depending on how the store was configured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// The unique login name.
    pub username: Username,
    /// The stored password value.
    pub password: String,
}

impl User {
    /// Creates a new user record.
    #[must_use]
    pub const fn new(username: Username, password: String) -> Self {
        Self { username, password }
    }
}

/// Result of checking a username/password pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthOutcome {
    /// The user exists and the password matches.
    Success,
    /// No user with this name exists.
    NotFound,
    /// The user exists but the password does not match.
    WrongPassword,
}

/// The seven soil and climate measurements submitted for a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Nitrogen content.
    pub n: f64,
    /// Phosphorus content.
    pub p: f64,
    /// Potassium content.
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

impl FeatureVector {
    /// Creates a feature vector from its components.
    #[must_use]
    pub const fn new(
        n: f64,
        p: f64,
        k: f64,
        temperature: f64,
        humidity: f64,
        ph: f64,
        rainfall: f64,
    ) -> Self {
        Self {
            n,
            p,
            k,
            temperature,
            humidity,
            ph,
            rainfall,
        }
    }

    /// Builds a feature vector from values in `FEATURE_NAMES` order.
    #[must_use]
    pub const fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        let [n, p, k, temperature, humidity, ph, rainfall] = values;
        Self::new(n, p, k, temperature, humidity, ph, rainfall)
    }

    /// Returns the values in `FEATURE_NAMES` order.
    #[must_use]
    pub const fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.n,
            self.p,
            self.k,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// A crop name as produced by the classifier.
///
/// Labels keep the spelling of the training data (`"rice"`,
/// `"kidneybeans"`). Knowledge base lookups fold case separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CropLabel(String);

impl CropLabel {
    /// Creates a new crop label.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the label value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the label with its first letter capitalized, for display.
    #[must_use]
    pub fn title(&self) -> String {
        let mut chars = self.0.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
        })
    }
}

impl std::fmt::Display for CropLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One past recommendation.
///
/// History entries are immutable once recorded. The username is not
/// checked against the credential table.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// The user who asked for the recommendation.
    pub username: Username,
    /// The submitted measurements.
    pub features: FeatureVector,
    /// The crop that was recommended.
    pub recommendation: CropLabel,
}

impl HistoryEntry {
    /// Creates a new history entry.
    #[must_use]
    pub const fn new(
        username: Username,
        features: FeatureVector,
        recommendation: CropLabel,
    ) -> Self {
        Self {
            username,
            features,
            recommendation,
        }
    }
}
