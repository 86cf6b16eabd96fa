// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The trained model the server answers recommendations with.

use std::time::Instant;

use croprec_domain::{CropLabel, FeatureVector};
use tracing::info;

use crate::dataset::Dataset;
use crate::error::ModelError;
use crate::forest::{ForestConfig, RandomForest};
use crate::metrics::accuracy;

/// How the recommender is trained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingConfig {
    /// Share of the dataset held out for scoring.
    pub test_fraction: f64,
    /// Seed for the train/test shuffle.
    pub split_seed: u64,
    /// Forest hyperparameters.
    pub forest: ForestConfig,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            split_seed: 42,
            forest: ForestConfig::default(),
        }
    }
}

impl TrainingConfig {
    /// Uses `seed` for both the split and the forest.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.split_seed = seed;
        self.forest.seed = seed;
        self
    }

    /// Sets the number of trees.
    #[must_use]
    pub const fn with_trees(mut self, n_estimators: usize) -> Self {
        self.forest.n_estimators = n_estimators;
        self
    }
}

/// A forest trained once and its held-out accuracy.
///
/// Immutable after training, so one instance can serve every request.
#[derive(Debug, Clone)]
pub struct Recommender {
    forest: RandomForest,
    accuracy: f64,
    train_size: usize,
    test_size: usize,
}

impl Recommender {
    /// Splits `dataset`, fits a forest on the training part and scores it on
    /// the test part.
    ///
    /// # Errors
    ///
    /// Returns an error if the split or the forest configuration is invalid.
    pub fn train(dataset: &Dataset, config: &TrainingConfig) -> Result<Self, ModelError> {
        let started: Instant = Instant::now();
        let (train, test) = dataset.train_test_split(config.test_fraction, config.split_seed)?;
        let forest: RandomForest = RandomForest::fit(&train, &config.forest)?;
        let accuracy: f64 = accuracy(&forest, &test);

        info!(
            samples = dataset.len(),
            train = train.len(),
            test = test.len(),
            trees = config.forest.n_estimators,
            classes = forest.classes().len(),
            accuracy,
            elapsed = ?started.elapsed(),
            "Trained recommender"
        );

        Ok(Self {
            forest,
            accuracy,
            train_size: train.len(),
            test_size: test.len(),
        })
    }

    /// Recommends a crop for the given measurements.
    ///
    /// Any numeric input is accepted; values far outside the training range
    /// still produce a label.
    #[must_use]
    pub fn recommend(&self, features: &FeatureVector) -> CropLabel {
        self.forest.predict(features)
    }

    /// Accuracy on the held-out test partition, in `0.0..=1.0`.
    #[must_use]
    pub const fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Number of training samples.
    #[must_use]
    pub const fn train_size(&self) -> usize {
        self.train_size
    }

    /// Number of test samples.
    #[must_use]
    pub const fn test_size(&self) -> usize {
        self.test_size
    }

    /// The underlying forest.
    #[must_use]
    pub const fn forest(&self) -> &RandomForest {
        &self.forest
    }
}
