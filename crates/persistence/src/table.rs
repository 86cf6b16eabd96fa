// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Header-checked, append-only CSV tables.

use csv::StringRecord;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::backend::TableStorage;
use crate::error::PersistenceError;

/// A CSV table with a fixed header row.
pub struct CsvTable {
    /// Table name used in errors and logs.
    name: &'static str,
    /// Expected header row, in column order.
    headers: &'static [&'static str],
    /// Where the bytes live.
    storage: Box<dyn TableStorage>,
}

impl CsvTable {
    /// Opens a table, creating the header row if the table is empty.
    ///
    /// # Arguments
    ///
    /// * `name` - Table name for errors and logs
    /// * `headers` - The exact header row the table must carry
    /// * `storage` - The byte storage beneath the table
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The storage cannot be read or written
    /// - An existing table has a different header row
    pub fn open(
        name: &'static str,
        headers: &'static [&'static str],
        storage: Box<dyn TableStorage>,
    ) -> Result<Self, PersistenceError> {
        let mut table: Self = Self {
            name,
            headers,
            storage,
        };
        table.ensure_initialized()?;
        Ok(table)
    }

    /// Creates the header row for a new table or checks the one that exists.
    ///
    /// Only a zero-length table counts as new. Appends cannot replace
    /// existing bytes, so whitespace-only content is rejected.
    ///
    /// An existing table whose last line lacks a terminator gets one, so the
    /// next append starts on a fresh line.
    fn ensure_initialized(&mut self) -> Result<(), PersistenceError> {
        let contents: Vec<u8> = self.storage.read_all()?;

        if contents.is_empty() {
            info!(
                table = self.name,
                location = %self.storage.location(),
                "Creating table"
            );
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(self.headers)?;
            let header_bytes: Vec<u8> = writer
                .into_inner()
                .map_err(|e| PersistenceError::Csv(e.to_string()))?;
            return self.storage.append(&header_bytes);
        }

        if contents.iter().all(u8::is_ascii_whitespace) {
            return Err(PersistenceError::MalformedTable {
                table: self.name,
                reason: String::from("table has content but no header row"),
            });
        }

        let mut reader = csv::Reader::from_reader(contents.as_slice());
        let found: StringRecord = reader.headers()?.clone();
        if !found.iter().eq(self.headers.iter().copied()) {
            return Err(PersistenceError::MalformedTable {
                table: self.name,
                reason: format!(
                    "expected header '{}', found '{}'",
                    self.headers.join(","),
                    found.iter().collect::<Vec<&str>>().join(",")
                ),
            });
        }

        if contents.last() != Some(&b'\n') {
            debug!(table = self.name, "Terminating last line before appending");
            self.storage.append(b"\n")?;
        }

        Ok(())
    }

    /// Reads every row in storage order.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read or a row does not
    /// decode.
    pub fn read_all<T: DeserializeOwned>(&self) -> Result<Vec<T>, PersistenceError> {
        let contents: Vec<u8> = self.storage.read_all()?;
        let mut reader = csv::Reader::from_reader(contents.as_slice());

        let mut rows: Vec<T> = Vec::new();
        for (idx, result) in reader.deserialize::<T>().enumerate() {
            let row: T = result.map_err(|e| PersistenceError::MalformedTable {
                table: self.name,
                reason: format!("row {}: {e}", idx + 1),
            })?;
            rows.push(row);
        }
        Ok(rows)
    }

    /// Appends one row.
    ///
    /// # Errors
    ///
    /// Returns an error if the row cannot be encoded or written.
    pub fn append<T: Serialize>(&mut self, row: &T) -> Result<(), PersistenceError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer.serialize(row)?;
        let bytes: Vec<u8> = writer
            .into_inner()
            .map_err(|e| PersistenceError::Csv(e.to_string()))?;
        self.storage.append(&bytes)?;

        debug!(table = self.name, bytes = bytes.len(), "Appended row");
        Ok(())
    }
}
