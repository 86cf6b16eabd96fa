// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use crate::Dataset;

/// Three crops separated by nitrogen alone, twelve rows each.
pub fn separable_csv() -> String {
    let mut csv: String = String::from("N,P,K,temperature,humidity,ph,rainfall,label\n");
    for i in 0..12 {
        let jitter: f64 = f64::from(i) * 0.5;
        for (base, label) in [(10.0, "alpha"), (50.0, "bravo"), (90.0, "charlie")] {
            csv.push_str(&format!("{},40,40,25.0,70.0,6.5,100.0,{label}\n", base + jitter));
        }
    }
    csv
}

pub fn separable_dataset() -> Dataset {
    Dataset::from_reader(separable_csv().as_bytes()).unwrap()
}

pub fn shipped_dataset_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/cropsrec.csv")
}
