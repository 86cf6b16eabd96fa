// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Invalid training parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The forest was configured with zero trees.
    #[error("The forest needs at least one tree")]
    NoTrees,

    /// `max_features` is outside `1..=max`.
    #[error("max_features must be between 1 and {max}, got {value}")]
    MaxFeatures { value: usize, max: usize },

    /// `min_samples_split` is below 2.
    #[error("min_samples_split must be at least 2, got {0}")]
    MinSamplesSplit(usize),

    /// The test fraction is not strictly between 0 and 1.
    #[error("Test fraction must be strictly between 0 and 1, got {0}")]
    TestFraction(f64),

    /// The split leaves one side without samples.
    #[error("Splitting {total} samples with test fraction {fraction} leaves a partition empty")]
    EmptyPartition { total: usize, fraction: f64 },
}

/// Errors that can occur while loading data or training the model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The dataset file could not be read.
    Io(String),
    /// The dataset is not in the expected format.
    MalformedDataset {
        /// 1-based line number of the offending record, if known.
        line: Option<u64>,
        /// What was wrong.
        reason: String,
    },
    /// The dataset has a header but no samples.
    EmptyDataset,
    /// The training configuration is invalid.
    InvalidConfig(ConfigError),
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "Dataset I/O error: {msg}"),
            Self::MalformedDataset {
                line: Some(line),
                reason,
            } => write!(f, "Malformed dataset at line {line}: {reason}"),
            Self::MalformedDataset { line: None, reason } => {
                write!(f, "Malformed dataset: {reason}")
            }
            Self::EmptyDataset => write!(f, "Dataset contains no samples"),
            Self::InvalidConfig(err) => write!(f, "Invalid training configuration: {err}"),
        }
    }
}

impl std::error::Error for ModelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidConfig(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for ModelError {
    fn from(err: ConfigError) -> Self {
        Self::InvalidConfig(err)
    }
}

impl From<std::io::Error> for ModelError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for ModelError {
    fn from(err: csv::Error) -> Self {
        let line: Option<u64> = err.position().map(csv::Position::line);
        if err.is_io_error() {
            return Self::Io(err.to_string());
        }
        Self::MalformedDataset {
            line,
            reason: err.to_string(),
        }
    }
}
