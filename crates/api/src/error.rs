// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use croprec::CoreError;
use croprec_domain::DomainError;
use croprec_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// The action is not available on the session's current page.
    InvalidTransition {
        /// A human-readable description of the refused action.
        message: String,
    },
    /// The action requires a logged-in user.
    NotLoggedIn {
        /// A human-readable description of what was refused.
        message: String,
    },
    /// The session token is unknown or has expired.
    SessionNotFound {
        /// Why the session could not be used.
        reason: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidTransition { message } | Self::NotLoggedIn { message } => {
                write!(f, "{message}")
            }
            Self::SessionNotFound { reason } => write!(f, "Session not found: {reason}"),
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::EmptyUsername => ApiError::InvalidInput {
            field: String::from("username"),
            message: err.to_string(),
        },
        DomainError::EmptyPassword => ApiError::InvalidInput {
            field: String::from("password"),
            message: err.to_string(),
        },
        DomainError::NonFiniteFeature { feature } => ApiError::InvalidInput {
            field: feature.to_string(),
            message: err.to_string(),
        },
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidTransition { .. } => ApiError::InvalidTransition {
            message: err.to_string(),
        },
        CoreError::NotLoggedIn { .. } => ApiError::NotLoggedIn {
            message: err.to_string(),
        },
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        translate_core_error(err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        translate_domain_error(err)
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: format!("Storage error: {err}"),
        }
    }
}
