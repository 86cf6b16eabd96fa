// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use croprec_domain::{CropLabel, FeatureVector, HistoryEntry, User, Username};
use serde::{Deserialize, Serialize};

/// Header row of the credential table.
pub const USER_HEADERS: &[&str] = &["username", "password"];

/// Header row of the history table.
pub const HISTORY_HEADERS: &[&str] = &[
    "username",
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
    "recommendation",
];

/// One row of the credential table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRow {
    pub username: String,
    pub password: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self::new(Username::new(&row.username), row.password)
    }
}

/// One row of the history table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRow {
    pub username: String,
    #[serde(rename = "N")]
    pub n: f64,
    #[serde(rename = "P")]
    pub p: f64,
    #[serde(rename = "K")]
    pub k: f64,
    pub temperature: f64,
    pub humidity: f64,
    pub ph: f64,
    pub rainfall: f64,
    pub recommendation: String,
}

impl From<&HistoryEntry> for HistoryRow {
    fn from(entry: &HistoryEntry) -> Self {
        let features: &FeatureVector = &entry.features;
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

impl From<HistoryRow> for HistoryEntry {
    fn from(row: HistoryRow) -> Self {
        Self::new(
            Username::new(&row.username),
            FeatureVector::new(
                row.n,
                row.p,
                row.k,
                row.temperature,
                row.humidity,
                row.ph,
                row.rainfall,
            ),
            CropLabel::new(&row.recommendation),
        )
    }
}
