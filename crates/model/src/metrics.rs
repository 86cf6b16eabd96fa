// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::dataset::Dataset;
use crate::forest::RandomForest;

/// Fraction of `test` samples the forest labels correctly.
///
/// Returns 0.0 for an empty test set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn accuracy(model: &RandomForest, test: &Dataset) -> f64 {
    if test.is_empty() {
        return 0.0;
    }
    let correct: usize = test
        .samples()
        .iter()
        .filter(|sample| model.predict_row(&sample.features) == sample.label)
        .count();
    correct as f64 / test.len() as f64
}
