// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Session token extraction for the server.
//!
//! The extractor only reads the token. Whether the token names a live
//! session is decided by the `SessionRegistry`, under its lock, by the
//! handler that uses it.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::AppState;

/// Extractor for the caller's session token.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     AxumState(app_state): AxumState<AppState>,
///     SessionToken(token): SessionToken,
/// ) -> Result<Json<Response>, HttpError> {
///     let mut sessions = app_state.sessions.lock().await;
///     let state: SessionState = sessions.get(&token)?;
///     // ...
/// }
/// ```
///
/// # Errors
///
/// Returns HTTP 401 Unauthorized if:
/// - Authorization header is missing
/// - Authorization header format is invalid
pub struct SessionToken(pub String);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| {
                debug!("Missing Authorization header");
                SessionError::MissingAuthorizationHeader
            })?
            .to_str()
            .map_err(|_| {
                warn!("Invalid Authorization header encoding");
                SessionError::InvalidAuthorizationHeader
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            warn!("Authorization header does not start with 'Bearer '");
            SessionError::InvalidAuthorizationHeader
        })?;

        if token.trim().is_empty() {
            return Err(SessionError::InvalidAuthorizationHeader);
        }

        Ok(Self(token.trim().to_string()))
    }
}

/// Session extraction errors.
///
/// These errors are returned when the token cannot be read and are
/// automatically converted to HTTP responses.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is missing.
    MissingAuthorizationHeader,
    /// Authorization header format is invalid.
    InvalidAuthorizationHeader,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        let message: &str = match self {
            Self::MissingAuthorizationHeader => "Missing Authorization header",
            Self::InvalidAuthorizationHeader => {
                "Invalid Authorization header format. Expected: 'Bearer <token>'"
            }
        };

        crate::HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: message.to_string(),
        }
        .into_response()
    }
}
