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

pub mod crops;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use crops::{CropInfo, FALLBACK_DESCRIPTION, describe, known_crops};
pub use error::DomainError;
pub use types::{
    AuthOutcome, CropLabel, FEATURE_COUNT, FEATURE_NAMES, FeatureVector, HistoryEntry, Password,
    User, Username,
};
pub use validation::{validate_credentials_present, validate_feature_vector};
