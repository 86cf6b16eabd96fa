// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use croprec_domain::{CropLabel, FeatureVector, HistoryEntry, Username};

pub fn create_test_features() -> FeatureVector {
    FeatureVector::new(90.0, 42.0, 43.0, 20.8, 82.0, 6.5, 202.9)
}

pub fn create_test_entry(username: &str, crop: &str) -> HistoryEntry {
    HistoryEntry::new(
        Username::new(username),
        create_test_features(),
        CropLabel::new(crop),
    )
}
