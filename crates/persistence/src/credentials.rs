// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The credential table: one row per registered user.

use croprec_domain::{AuthOutcome, Password, User, Username};
use tracing::{debug, info};

use crate::backend::TableStorage;
use crate::data_models::{USER_HEADERS, UserRow};
use crate::error::PersistenceError;
use crate::password::PasswordStorage;
use crate::table::CsvTable;

/// Registered usernames and their stored passwords.
///
/// Usernames are unique under exact, case-sensitive comparison. Users are
/// never updated or removed.
pub struct CredentialStore {
    table: CsvTable,
    password_storage: PasswordStorage,
}

impl CredentialStore {
    /// Opens the credential table, creating its header row if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the password storage parameters are invalid, the
    /// storage cannot be read or written, or an existing table has the
    /// wrong header.
    pub fn open(
        storage: Box<dyn TableStorage>,
        password_storage: PasswordStorage,
    ) -> Result<Self, PersistenceError> {
        password_storage.validate()?;
        let table: CsvTable = CsvTable::open("users", USER_HEADERS, storage)?;
        Ok(Self {
            table,
            password_storage,
        })
    }

    /// Returns the password storage scheme in use.
    #[must_use]
    pub const fn password_storage(&self) -> PasswordStorage {
        self.password_storage
    }

    /// Reads every registered user in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or decoded.
    pub fn load_all(&self) -> Result<Vec<User>, PersistenceError> {
        let rows: Vec<UserRow> = self.table.read_all()?;
        Ok(rows.into_iter().map(User::from).collect())
    }

    /// Finds a user by exact username.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or decoded.
    pub fn find(&self, username: &Username) -> Result<Option<User>, PersistenceError> {
        Ok(self
            .load_all()?
            .into_iter()
            .find(|user| &user.username == username))
    }

    /// Registers a new user.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` if the user was stored
    /// * `Ok(false)` if the username is already taken; nothing is written
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or written, or the
    /// password cannot be encoded.
    pub fn insert(
        &mut self,
        username: &Username,
        password: &Password,
    ) -> Result<bool, PersistenceError> {
        if self.find(username)?.is_some() {
            debug!(username = %username, "Username already registered");
            return Ok(false);
        }

        let row: UserRow = UserRow {
            username: username.value().to_string(),
            password: self.password_storage.encode(password)?,
        };
        self.table.append(&row)?;

        info!(
            username = %username,
            storage = %self.password_storage,
            "Registered user"
        );
        Ok(true)
    }

    /// Checks a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or decoded.
    pub fn authenticate(
        &self,
        username: &Username,
        password: &Password,
    ) -> Result<AuthOutcome, PersistenceError> {
        let Some(user) = self.find(username)? else {
            return Ok(AuthOutcome::NotFound);
        };

        if self.password_storage.verify(password, &user.password)? {
            Ok(AuthOutcome::Success)
        } else {
            Ok(AuthOutcome::WrongPassword)
        }
    }
}
