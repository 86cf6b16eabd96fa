// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the crop recommendation service.
//!
//! This crate stores registered users and recommendation history as two
//! CSV tables, each with a header row.
//!
//! ## Storage Backends
//!
//! - **File** — `users.csv` and `recommendations.csv` inside a data
//!   directory. Used by the server.
//! - **Memory** — the same bytes in a buffer. Used by unit tests.
//!
//! ## Write Model
//!
//! Both tables are append-only. A write adds one encoded row at the end of
//! the table; earlier rows are never rewritten. Callers that share a
//! `Persistence` across tasks serialize access with a mutex, which is the
//! only coordination provided. Two processes writing the same data
//! directory are not coordinated.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

use std::path::Path;

use croprec_domain::{AuthOutcome, HistoryEntry, Password, User, Username};
use tracing::info;

mod backend;
mod credentials;
mod data_models;
mod error;
mod history;
mod password;
mod table;

#[cfg(test)]
mod tests;

pub use backend::{FileStorage, MemoryStorage, TableStorage};
pub use credentials::CredentialStore;
pub use data_models::{HISTORY_HEADERS, USER_HEADERS};
pub use error::PersistenceError;
pub use history::HistoryStore;
pub use password::{MAX_BCRYPT_COST, MIN_BCRYPT_COST, PasswordStorage};

/// File name of the credential table inside a data directory.
pub const USERS_FILE: &str = "users.csv";

/// File name of the history table inside a data directory.
pub const HISTORY_FILE: &str = "recommendations.csv";

/// Persistence adapter holding both stores.
///
/// Backend selection happens once at construction time and is transparent
/// to callers.
pub struct Persistence {
    credentials: CredentialStore,
    history: HistoryStore,
}

impl Persistence {
    /// Creates persistence backed by empty in-memory tables.
    ///
    /// Passwords are stored in plaintext, which keeps tests fast.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        Self::new_in_memory_with(PasswordStorage::Plaintext)
    }

    /// Creates persistence backed by empty in-memory tables with the given
    /// password storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the tables cannot be initialized.
    pub fn new_in_memory_with(password_storage: PasswordStorage) -> Result<Self, PersistenceError> {
        Self::from_storage(
            Box::new(MemoryStorage::new()),
            Box::new(MemoryStorage::new()),
            password_storage,
        )
    }

    /// Creates persistence backed by CSV files in `data_dir`.
    ///
    /// The directory is created if missing. Missing tables are created with
    /// their header rows; existing tables are opened as they are.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or tables cannot be created, or if
    /// an existing table has the wrong header.
    pub fn new_with_dir(
        data_dir: &Path,
        password_storage: PasswordStorage,
    ) -> Result<Self, PersistenceError> {
        std::fs::create_dir_all(data_dir).map_err(|e| {
            PersistenceError::InitializationError(format!(
                "Cannot create data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        info!(
            data_dir = %data_dir.display(),
            password_storage = %password_storage,
            "Opening CSV tables"
        );

        Self::from_storage(
            Box::new(FileStorage::new(&data_dir.join(USERS_FILE))),
            Box::new(FileStorage::new(&data_dir.join(HISTORY_FILE))),
            password_storage,
        )
    }

    /// Creates persistence over arbitrary table storage.
    ///
    /// # Errors
    ///
    /// Returns an error if either table cannot be initialized.
    pub fn from_storage(
        users: Box<dyn TableStorage>,
        history: Box<dyn TableStorage>,
        password_storage: PasswordStorage,
    ) -> Result<Self, PersistenceError> {
        Ok(Self {
            credentials: CredentialStore::open(users, password_storage)?,
            history: HistoryStore::open(history)?,
        })
    }

    /// Returns the credential store.
    #[must_use]
    pub const fn credentials(&self) -> &CredentialStore {
        &self.credentials
    }

    /// Returns the history store.
    #[must_use]
    pub const fn history(&self) -> &HistoryStore {
        &self.history
    }

    /// Registers a new user. Returns `false` if the username is taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential table cannot be read or written.
    pub fn create_user(
        &mut self,
        username: &Username,
        password: &Password,
    ) -> Result<bool, PersistenceError> {
        self.credentials.insert(username, password)
    }

    /// Checks a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential table cannot be read.
    pub fn authenticate(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<AuthOutcome, PersistenceError> {
        self.credentials.authenticate(username, password)
    }

    /// Lists every registered user.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential table cannot be read.
    pub fn list_users(&self) -> Result<Vec<User>, PersistenceError> {
        self.credentials.load_all()
    }

    /// Records a recommendation in the history table.
    ///
    /// # Errors
    ///
    /// Returns an error if the history table cannot be written.
    pub fn record_recommendation(&mut self, entry: &HistoryEntry) -> Result<(), PersistenceError> {
        self.history.append(entry)
    }

    /// Returns one user's past recommendations in the order they were made.
    ///
    /// # Errors
    ///
    /// Returns an error if the history table cannot be read.
    pub fn get_user_history(
        &self,
        username: &Username,
    ) -> Result<Vec<HistoryEntry>, PersistenceError> {
        self.history.query_by_user(username)
    }
}
