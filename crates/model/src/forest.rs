// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bagged ensembles of decision trees.

use croprec_domain::{CropLabel, FEATURE_COUNT, FeatureVector};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::dataset::Dataset;
use crate::error::{ConfigError, ModelError};
use crate::tree::{DecisionTree, TreeParams, majority_class};

/// Random forest hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForestConfig {
    /// Number of trees.
    pub n_estimators: usize,
    /// Seed for bootstrap sampling and feature selection.
    pub seed: u64,
    /// Features examined per split.
    pub max_features: usize,
    /// Nodes with fewer samples than this become leaves.
    pub min_samples_split: usize,
    /// Maximum tree depth; `None` grows until leaves are pure.
    pub max_depth: Option<usize>,
}

impl Default for ForestConfig {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            seed: 42,
            max_features: FEATURE_COUNT.isqrt(),
            min_samples_split: 2,
            max_depth: None,
        }
    }
}

impl ForestConfig {
    /// Checks that the configuration can train a forest.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no trees, `max_features` is outside
    /// `1..=7`, or `min_samples_split` is below 2.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.n_estimators == 0 {
            return Err(ConfigError::NoTrees);
        }
        if self.max_features == 0 || self.max_features > FEATURE_COUNT {
            return Err(ConfigError::MaxFeatures {
                value: self.max_features,
                max: FEATURE_COUNT,
            });
        }
        if self.min_samples_split < 2 {
            return Err(ConfigError::MinSamplesSplit(self.min_samples_split));
        }
        Ok(())
    }

    const fn tree_params(&self) -> TreeParams {
        TreeParams {
            max_features: self.max_features,
            min_samples_split: self.min_samples_split,
            max_depth: self.max_depth,
        }
    }
}

/// A fitted random forest classifier.
#[derive(Debug, Clone)]
pub struct RandomForest {
    /// Class labels, sorted; tree outputs index into this.
    classes: Vec<CropLabel>,
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    /// Trains a forest on `train`.
    ///
    /// Each tree is grown on a bootstrap sample (drawn with replacement, the
    /// same size as `train`). All randomness comes from one generator seeded
    /// with `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or `train` is empty.
    pub fn fit(train: &Dataset, config: &ForestConfig) -> Result<Self, ModelError> {
        config.validate()?;
        if train.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        let classes: Vec<CropLabel> = train.labels();
        let features: Vec<[f64; FEATURE_COUNT]> =
            train.samples().iter().map(|s| s.features).collect();
        let targets: Vec<usize> = train
            .samples()
            .iter()
            .map(|s| classes.binary_search(&s.label).unwrap_or_default())
            .collect();

        let params: TreeParams = config.tree_params();
        let mut rng: StdRng = StdRng::seed_from_u64(config.seed);
        let n: usize = features.len();

        let trees: Vec<DecisionTree> = (0..config.n_estimators)
            .map(|_| {
                let bootstrap: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
                DecisionTree::fit(
                    &features,
                    &targets,
                    classes.len(),
                    &bootstrap,
                    &params,
                    &mut rng,
                )
            })
            .collect();

        debug!(
            trees = trees.len(),
            classes = classes.len(),
            samples = n,
            "Fitted random forest"
        );

        Ok(Self { classes, trees })
    }

    /// Predicts the crop for one feature vector by majority vote.
    ///
    /// Ties go to the label that sorts first.
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> CropLabel {
        self.predict_row(&features.to_array())
    }

    /// Predicts the crop for a raw feature row.
    #[must_use]
    pub fn predict_row(&self, row: &[f64; FEATURE_COUNT]) -> CropLabel {
        let mut votes: Vec<usize> = vec![0; self.classes.len()];
        for tree in &self.trees {
            votes[tree.predict(row)] += 1;
        }
        self.classes[majority_class(&votes)].clone()
    }

    /// Class labels the forest can predict, sorted.
    #[must_use]
    pub fn classes(&self) -> &[CropLabel] {
        &self.classes
    }

    /// The fitted trees.
    #[must_use]
    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }
}
