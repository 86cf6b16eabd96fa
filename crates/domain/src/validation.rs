// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{FEATURE_NAMES, FeatureVector, Password, Username};

/// Validates that both signup fields were filled in.
///
/// A field consisting only of whitespace counts as empty. The values
/// themselves are stored untrimmed.
///
/// # Arguments
///
/// * `username` - The requested username
/// * `password` - The requested password
///
/// # Errors
///
/// Returns an error if:
/// - The username is blank
/// - The password is blank
pub fn validate_credentials_present(
    username: &Username,
    password: &Password,
) -> Result<(), DomainError> {
    if username.is_blank() {
        return Err(DomainError::EmptyUsername);
    }
    if password.is_blank() {
        return Err(DomainError::EmptyPassword);
    }
    Ok(())
}

/// Validates that every feature value is a finite number.
///
/// Physically implausible values (negative nitrogen, pH of 40) are
/// accepted; only NaN and infinities are rejected.
///
/// # Errors
///
/// Returns an error naming the first non-finite feature.
pub fn validate_feature_vector(features: &FeatureVector) -> Result<(), DomainError> {
    for (name, value) in FEATURE_NAMES.into_iter().zip(features.to_array()) {
        if !value.is_finite() {
            return Err(DomainError::NonFiniteFeature { feature: name });
        }
    }
    Ok(())
}
