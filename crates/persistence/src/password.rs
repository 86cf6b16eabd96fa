// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! How passwords are written to and checked against the credential table.

use std::str::FromStr;

use croprec_domain::Password;
use tracing::warn;

use crate::error::PersistenceError;

/// Lowest work factor bcrypt accepts.
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts.
pub const MAX_BCRYPT_COST: u32 = 31;

/// Password storage scheme for the credential table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStorage {
    /// Passwords are stored as entered and compared byte for byte.
    ///
    /// Matches tables written by earlier versions of the app. Not suitable
    /// for production data.
    Plaintext,
    /// Passwords are stored as salted bcrypt hashes.
    Bcrypt {
        /// The bcrypt work factor, `MIN_BCRYPT_COST..=MAX_BCRYPT_COST`.
        cost: u32,
    },
}

impl PasswordStorage {
    /// Bcrypt with the library's default cost.
    #[must_use]
    pub const fn bcrypt() -> Self {
        Self::Bcrypt {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Checks the scheme's parameters.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InitializationError` if the bcrypt cost is
    /// out of range.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        match self {
            Self::Plaintext => Ok(()),
            Self::Bcrypt { cost } if (MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(cost) => Ok(()),
            Self::Bcrypt { cost } => Err(PersistenceError::InitializationError(format!(
                "bcrypt cost must be between {MIN_BCRYPT_COST} and {MAX_BCRYPT_COST}, got {cost}"
            ))),
        }
    }

    /// Produces the value to store for a new password.
    ///
    /// # Errors
    ///
    /// Returns an error if bcrypt hashing fails (e.g. an out-of-range cost).
    pub fn encode(&self, password: &Password) -> Result<String, PersistenceError> {
        match self {
            Self::Plaintext => Ok(password.expose().to_string()),
            Self::Bcrypt { cost } => Ok(bcrypt::hash(password.expose(), *cost)?),
        }
    }

    /// Checks an entered password against a stored value.
    ///
    /// Under bcrypt, a stored value that is not a bcrypt hash never matches.
    ///
    /// # Errors
    ///
    /// This function currently never fails; the `Result` mirrors `encode`.
    pub fn verify(&self, password: &Password, stored: &str) -> Result<bool, PersistenceError> {
        match self {
            Self::Plaintext => Ok(password.expose() == stored),
            Self::Bcrypt { .. } => match bcrypt::verify(password.expose(), stored) {
                Ok(matches) => Ok(matches),
                Err(e) => {
                    warn!(error = %e, "Stored password is not a valid bcrypt hash");
                    Ok(false)
                }
            },
        }
    }

    /// Returns the scheme name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plaintext => "plaintext",
            Self::Bcrypt { .. } => "bcrypt",
        }
    }
}

impl Default for PasswordStorage {
    fn default() -> Self {
        Self::bcrypt()
    }
}

impl FromStr for PasswordStorage {
    type Err = PersistenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plaintext" => Ok(Self::Plaintext),
            "bcrypt" => Ok(Self::bcrypt()),
            _ => Err(PersistenceError::InitializationError(format!(
                "Unknown password storage '{s}'. Must be 'plaintext' or 'bcrypt'"
            ))),
        }
    }
}

impl std::fmt::Display for PasswordStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
