// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Byte-level storage backends for CSV tables.
//!
//! A table only ever needs two primitives: read everything, and append
//! bytes at the end. Both backends implement exactly that.
//!
//! ## Backend Support
//!
//! - `file` — one file per table on disk (default for the server)
//! - `memory` — a byte buffer (unit tests, throwaway sessions)
//!
//! Nothing above this module knows which backend is in use.

pub mod file;
pub mod memory;

use crate::error::PersistenceError;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Trait for the raw storage beneath a CSV table.
///
/// Writes are append-only: existing bytes are never rewritten.
pub trait TableStorage: Send {
    /// Returns the full contents of the table.
    ///
    /// A table that has never been written returns an empty buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be read.
    fn read_all(&self) -> Result<Vec<u8>, PersistenceError>;

    /// Appends bytes to the end of the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying storage cannot be written.
    fn append(&mut self, bytes: &[u8]) -> Result<(), PersistenceError>;

    /// Describes where the table lives, for logs.
    fn location(&self) -> String;
}
