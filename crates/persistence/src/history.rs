// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The recommendation history table.

use croprec_domain::{HistoryEntry, Username};
use tracing::debug;

use crate::backend::TableStorage;
use crate::data_models::{HISTORY_HEADERS, HistoryRow};
use crate::error::PersistenceError;
use crate::table::CsvTable;

/// Append-only log of past recommendations.
pub struct HistoryStore {
    table: CsvTable,
}

impl HistoryStore {
    /// Opens the history table, creating its header row if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read or written, or if an
    /// existing table has the wrong header.
    pub fn open(storage: Box<dyn TableStorage>) -> Result<Self, PersistenceError> {
        Ok(Self {
            table: CsvTable::open("recommendations", HISTORY_HEADERS, storage)?,
        })
    }

    /// Records one recommendation.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be written.
    pub fn append(&mut self, entry: &HistoryEntry) -> Result<(), PersistenceError> {
        self.table.append(&HistoryRow::from(entry))?;
        debug!(
            username = %entry.username,
            recommendation = %entry.recommendation,
            "Recorded recommendation"
        );
        Ok(())
    }

    /// Reads every entry in append order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or decoded.
    pub fn load_all(&self) -> Result<Vec<HistoryEntry>, PersistenceError> {
        let rows: Vec<HistoryRow> = self.table.read_all()?;
        Ok(rows.into_iter().map(HistoryEntry::from).collect())
    }

    /// Returns one user's entries in append order.
    ///
    /// # Errors
    ///
    /// Returns an error if the table cannot be read or decoded.
    pub fn query_by_user(&self, username: &Username) -> Result<Vec<HistoryEntry>, PersistenceError> {
        Ok(self
            .load_all()?
            .into_iter()
            .filter(|entry| &entry.username == username)
            .collect())
    }
}
