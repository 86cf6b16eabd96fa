// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::TableStorage;
use crate::error::PersistenceError;

/// A table held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    bytes: Vec<u8>,
}

impl MemoryStorage {
    /// Creates an empty in-memory table.
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Creates an in-memory table with existing contents.
    #[must_use]
    pub fn with_contents(contents: &str) -> Self {
        Self {
            bytes: contents.as_bytes().to_vec(),
        }
    }
}

impl TableStorage for MemoryStorage {
    fn read_all(&self) -> Result<Vec<u8>, PersistenceError> {
        Ok(self.bytes.clone())
    }

    fn append(&mut self, bytes: &[u8]) -> Result<(), PersistenceError> {
        self.bytes.extend_from_slice(bytes);
        Ok(())
    }

    fn location(&self) -> String {
        String::from("<memory>")
    }
}
