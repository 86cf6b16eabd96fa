// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Labeled training data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use croprec_domain::{CropLabel, FEATURE_COUNT, FEATURE_NAMES, FeatureVector};
use csv::StringRecord;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ConfigError, ModelError};

/// Header row every dataset must carry.
pub const DATASET_HEADERS: &[&str] = &[
    "N",
    "P",
    "K",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
    "label",
];

/// One labeled observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Feature values in `FEATURE_NAMES` order.
    pub features: [f64; FEATURE_COUNT],
    /// The crop grown under these conditions.
    pub label: CropLabel,
}

impl Sample {
    /// Creates a sample from a feature vector and label.
    #[must_use]
    pub const fn new(features: &FeatureVector, label: CropLabel) -> Self {
        Self {
            features: features.to_array(),
            label,
        }
    }
}

#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "N")]
    n: f64,
    #[serde(rename = "P")]
    p: f64,
    #[serde(rename = "K")]
    k: f64,
    temperature: f64,
    humidity: f64,
    ph: f64,
    rainfall: f64,
    label: String,
}

/// An ordered collection of samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Creates a dataset from samples.
    #[must_use]
    pub const fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Loads a dataset from a CSV file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or its contents are not
    /// a valid dataset (see [`Dataset::from_reader`]).
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let file: File = File::open(path)
            .map_err(|e| ModelError::Io(format!("Cannot open {}: {e}", path.display())))?;
        let dataset: Self = Self::from_reader(file)?;
        info!(
            path = %path.display(),
            samples = dataset.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parses a dataset from CSV bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The header row is not `N,P,K,temperature,humidity,ph,rainfall,label`
    /// - A feature cell is not a finite number
    /// - A label is blank
    /// - There are no data rows
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: StringRecord = reader.headers()?.clone();
        if !headers.iter().eq(DATASET_HEADERS.iter().copied()) {
            return Err(ModelError::MalformedDataset {
                line: Some(1),
                reason: format!(
                    "expected header '{}', found '{}'",
                    DATASET_HEADERS.join(","),
                    headers.iter().collect::<Vec<&str>>().join(",")
                ),
            });
        }

        let mut samples: Vec<Sample> = Vec::new();
        let mut record: StringRecord = StringRecord::new();
        while reader.read_record(&mut record)? {
            let line: Option<u64> = record.position().map(csv::Position::line);
            let row: DatasetRow = record.deserialize(Some(&headers)).map_err(|e| {
                ModelError::MalformedDataset {
                    line,
                    reason: e.to_string(),
                }
            })?;
            let features: FeatureVector = FeatureVector::new(
                row.n,
                row.p,
                row.k,
                row.temperature,
                row.humidity,
                row.ph,
                row.rainfall,
            );

            if let Some((name, _)) = FEATURE_NAMES
                .into_iter()
                .zip(features.to_array())
                .find(|(_, value)| !value.is_finite())
            {
                return Err(ModelError::MalformedDataset {
                    line,
                    reason: format!("{name} is not a finite number"),
                });
            }
            if row.label.is_empty() {
                return Err(ModelError::MalformedDataset {
                    line,
                    reason: String::from("label is empty"),
                });
            }

            samples.push(Sample::new(&features, CropLabel::new(&row.label)));
        }

        if samples.is_empty() {
            return Err(ModelError::EmptyDataset);
        }

        Ok(Self { samples })
    }

    /// Returns the samples in file order.
    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// Returns the number of samples.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if there are no samples.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Returns the distinct labels, sorted.
    #[must_use]
    pub fn labels(&self) -> Vec<CropLabel> {
        let mut labels: Vec<CropLabel> = self.samples.iter().map(|s| s.label.clone()).collect();
        labels.sort();
        labels.dedup();
        labels
    }

    /// Splits the dataset into `(train, test)` partitions.
    ///
    /// Sample indices are shuffled with a generator seeded from `seed`. The
    /// first `ceil(len * test_fraction)` shuffled samples form the test
    /// partition and the rest form the training partition. The same seed
    /// always produces the same split.
    ///
    /// # Errors
    ///
    /// Returns an error if `test_fraction` is not strictly between 0 and 1,
    /// or if either partition would be empty.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn train_test_split(
        &self,
        test_fraction: f64,
        seed: u64,
    ) -> Result<(Self, Self), ModelError> {
        if !(0.0..1.0).contains(&test_fraction) || test_fraction <= 0.0 {
            return Err(ConfigError::TestFraction(test_fraction).into());
        }

        let total: usize = self.samples.len();
        let test_size: usize = (total as f64 * test_fraction).ceil() as usize;
        if test_size == 0 || test_size >= total {
            return Err(ConfigError::EmptyPartition {
                total,
                fraction: test_fraction,
            }
            .into());
        }

        let mut indices: Vec<usize> = (0..total).collect();
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let (test_idx, train_idx) = indices.split_at(test_size);
        let pick = |idx: &[usize]| Self {
            samples: idx.iter().map(|&i| self.samples[i].clone()).collect(),
        };

        debug!(
            train = train_idx.len(),
            test = test_idx.len(),
            seed,
            "Split dataset"
        );
        Ok((pick(train_idx), pick(test_idx)))
    }
}
