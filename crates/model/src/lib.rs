// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Crop classifier for the recommendation service.
//!
//! The model is a random forest of CART decision trees trained on a labeled
//! CSV dataset of soil and climate measurements. Training is deterministic
//! for a given seed: the same dataset and configuration always produce the
//! same split, the same trees, and the same accuracy.
//!
//! ## Pipeline
//!
//! 1. [`Dataset::from_path`] loads and validates the CSV file.
//! 2. [`Dataset::train_test_split`] holds out a seeded test partition.
//! 3. [`RandomForest::fit`] grows the trees on the training partition.
//! 4. [`accuracy`] scores the forest on the test partition.
//!
//! [`Recommender::train`] runs all four steps and is what the server uses.

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
#![allow(clippy::multiple_crate_versions)]

mod dataset;
mod error;
mod forest;
mod metrics;
mod recommender;
mod tree;

#[cfg(test)]
mod tests;

pub use dataset::{DATASET_HEADERS, Dataset, Sample};
pub use error::{ConfigError, ModelError};
pub use forest::{ForestConfig, RandomForest};
pub use metrics::accuracy;
pub use recommender::{Recommender, TrainingConfig};
pub use tree::{DecisionTree, TreeParams};
