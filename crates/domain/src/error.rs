// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Username is empty or only whitespace.
    EmptyUsername,
    /// Password is empty or only whitespace.
    EmptyPassword,
    /// A feature value is NaN or infinite.
    NonFiniteFeature {
        /// The feature column name.
        feature: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "Username cannot be empty"),
            Self::EmptyPassword => write!(f, "Password cannot be empty"),
            Self::NonFiniteFeature { feature } => {
                write!(f, "Feature '{feature}' must be a finite number")
            }
        }
    }
}

impl std::error::Error for DomainError {}
