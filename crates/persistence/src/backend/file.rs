// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::TableStorage;
use crate::error::PersistenceError;

/// A table stored in a single file.
///
/// The file is created on the first append. Each append opens the file in
/// append mode, so a row is added without rewriting earlier rows.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Creates storage for the file at `path`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TableStorage for FileStorage {
    fn read_all(&self) -> Result<Vec<u8>, PersistenceError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(PersistenceError::Io(format!(
                "{}: {e}",
                self.path.display()
            ))),
        }
    }

    fn append(&mut self, bytes: &[u8]) -> Result<(), PersistenceError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PersistenceError::Io(format!("{}: {e}", self.path.display())))?;
        file.write_all(bytes)
            .and_then(|()| file.flush())
            .map_err(|e| PersistenceError::Io(format!("{}: {e}", self.path.display())))
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
