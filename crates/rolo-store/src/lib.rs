pub mod error;
pub mod paths;

pub use error::{Result, StoreError};

use rolo_core::domain::{AddressBook, Record};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const BOOK_VERSION: u32 = 1;

/// On-disk document: a version tag plus the full list of records. Records
/// go through the core types' serde impls, so a tampered file is rejected
/// with the same validation rules as live input.
#[derive(Debug, Serialize, Deserialize)]
struct BookFile {
    version: u32,
    contacts: Vec<Record>,
}

/// Whole-book persistence: one load at startup, one save on clean exit.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole book. A missing file is an empty book, not an error.
    pub fn load(&self) -> Result<AddressBook> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(AddressBook::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };

        let file: BookFile = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        if file.version != BOOK_VERSION {
            return Err(StoreError::UnsupportedVersion(file.version));
        }

        let mut book = AddressBook::new();
        for record in file.contacts {
            book.upsert(record);
        }
        Ok(book)
    }

    /// Overwrites the file with the current book. Writes a sibling temp
    /// file first and renames it over the target, so a failed save never
    /// truncates the previous state.
    pub fn save(&self, book: &AddressBook) -> Result<()> {
        let file = BookFile {
            version: BOOK_VERSION,
            contacts: book.iter().cloned().collect(),
        };
        let mut raw = serde_json::to_string_pretty(&file).map_err(StoreError::Serialize)?;
        raw.push('\n');

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = temp_path(&self.path);
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
