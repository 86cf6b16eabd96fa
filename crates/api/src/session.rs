// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory registry of client sessions.
//!
//! Each session owns one `SessionState` and is addressed by an opaque
//! token. Sessions expire after a period of inactivity and are never
//! persisted; restarting the server logs everyone out.

use std::collections::HashMap;

use croprec::SessionState;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use crate::error::ApiError;

/// A registered session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    /// The session's controller state.
    pub state: SessionState,
    /// When the session was last used.
    pub last_seen: OffsetDateTime,
}

impl SessionRecord {
    fn is_expired(&self, now: OffsetDateTime, ttl: Duration) -> bool {
        now - self.last_seen > ttl
    }
}

/// Token-addressed session states with an idle timeout.
#[derive(Debug)]
pub struct SessionRegistry {
    sessions: HashMap<String, SessionRecord>,
    ttl: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TTL)
    }
}

impl SessionRegistry {
    /// Default idle timeout (30 minutes).
    pub const DEFAULT_TTL: Duration = Duration::minutes(30);

    /// Creates an empty registry whose sessions expire after `ttl` of
    /// inactivity.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    /// Returns the idle timeout.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Starts a new session on the login page and returns its token.
    ///
    /// Expired sessions are purged first.
    pub fn create(&mut self) -> String {
        self.create_at(OffsetDateTime::now_utc())
    }

    /// Starts a new session as of `now`.
    pub fn create_at(&mut self, now: OffsetDateTime) -> String {
        self.purge_expired_at(now);

        let token: String = generate_session_token(now);
        self.sessions.insert(
            token.clone(),
            SessionRecord {
                state: SessionState::new(),
                last_seen: now,
            },
        );

        info!(active_sessions = self.sessions.len(), "Session created");
        token
    }

    /// Returns a session's state and marks it as used.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` if the token is unknown or the
    /// session has expired. An expired session is removed.
    pub fn get(&mut self, token: &str) -> Result<SessionState, ApiError> {
        self.get_at(token, OffsetDateTime::now_utc())
    }

    /// Returns a session's state as of `now` and marks it as used.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` if the token is unknown or the
    /// session has expired.
    pub fn get_at(&mut self, token: &str, now: OffsetDateTime) -> Result<SessionState, ApiError> {
        let record: &mut SessionRecord = self.live_record(token, now)?;
        record.last_seen = now;
        Ok(record.state.clone())
    }

    /// Replaces a session's state.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` if the token is unknown or the
    /// session has expired.
    pub fn update(&mut self, token: &str, state: SessionState) -> Result<(), ApiError> {
        self.update_at(token, state, OffsetDateTime::now_utc())
    }

    /// Replaces a session's state as of `now`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::SessionNotFound` if the token is unknown or the
    /// session has expired.
    pub fn update_at(
        &mut self,
        token: &str,
        state: SessionState,
        now: OffsetDateTime,
    ) -> Result<(), ApiError> {
        let record: &mut SessionRecord = self.live_record(token, now)?;
        record.state = state;
        record.last_seen = now;
        Ok(())
    }

    /// Ends a session. Returns `false` if the token was unknown.
    pub fn end(&mut self, token: &str) -> bool {
        let removed: bool = self.sessions.remove(token).is_some();
        if removed {
            info!(active_sessions = self.sessions.len(), "Session ended");
        }
        removed
    }

    /// Removes every expired session. Returns how many were removed.
    pub fn purge_expired(&mut self) -> usize {
        self.purge_expired_at(OffsetDateTime::now_utc())
    }

    /// Removes every session expired as of `now`.
    pub fn purge_expired_at(&mut self, now: OffsetDateTime) -> usize {
        let ttl: Duration = self.ttl;
        let before: usize = self.sessions.len();
        self.sessions
            .retain(|_, record| !record.is_expired(now, ttl));
        let purged: usize = before - self.sessions.len();
        if purged > 0 {
            debug!(purged, "Purged expired sessions");
        }
        purged
    }

    /// Number of registered sessions, including any not yet purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no sessions are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    fn live_record(
        &mut self,
        token: &str,
        now: OffsetDateTime,
    ) -> Result<&mut SessionRecord, ApiError> {
        let expired: bool = match self.sessions.get(token) {
            None => {
                return Err(ApiError::SessionNotFound {
                    reason: String::from("Unknown session token"),
                });
            }
            Some(record) => record.is_expired(now, self.ttl),
        };

        if expired {
            self.sessions.remove(token);
            debug!("Rejected expired session");
            return Err(ApiError::SessionNotFound {
                reason: String::from("Session expired"),
            });
        }

        self.sessions
            .get_mut(token)
            .ok_or_else(|| ApiError::SessionNotFound {
                reason: String::from("Unknown session token"),
            })
    }
}

/// Generates an opaque session token.
fn generate_session_token(now: OffsetDateTime) -> String {
    format!(
        "session_{}_{:016x}{:016x}",
        now.unix_timestamp_nanos(),
        rand::random::<u64>(),
        rand::random::<u64>()
    )
}
