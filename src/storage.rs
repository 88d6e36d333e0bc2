//! JSON file persistence for the address book.
//!
//! The on-disk format is one object mapping contact name to
//! `{"birthday": "YYYY-MM-DD" | null, "phones": ["<10 digits>", ...]}`.
//! The stored shape carries plain strings; every field goes back through
//! normal validation when a book is reconstructed, so a hand-edited file
//! that violates the rules fails the whole load instead of silently
//! dropping data.

use crate::book::AddressBook;
use crate::error::StorageResult;
use crate::models::{Phone, Record};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info};

/// One record as persisted: the name lives in the enclosing map key.
#[derive(Debug, Serialize, Deserialize)]
struct StoredRecord {
    birthday: Option<String>,
    #[serde(default)]
    phones: Vec<String>,
}

impl From<&Record> for StoredRecord {
    fn from(record: &Record) -> Self {
        Self {
            birthday: record.birthday().map(|b| b.to_string()),
            phones: record.phones().iter().map(Phone::as_str).map(str::to_string).collect(),
        }
    }
}

impl AddressBook {
    /// Serialize the whole book to `path`, overwriting any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> StorageResult<()> {
        let path = path.as_ref();
        let stored: BTreeMap<&str, StoredRecord> = self
            .iter()
            .map(|(name, record)| (name.as_str(), StoredRecord::from(record)))
            .collect();

        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), &stored)?;
        info!(path = %path.display(), records = self.len(), "address book saved");
        Ok(())
    }

    /// Reconstruct a book from `path`, re-running all field validation.
    ///
    /// A missing file is not an error: it yields an empty book, matching
    /// first-run startup. Anything else that goes wrong (unreadable file,
    /// malformed JSON, a stored field failing validation) surfaces as a
    /// [`StorageError`](crate::error::StorageError).
    pub fn load(path: impl AsRef<Path>) -> StorageResult<Self> {
        let path = path.as_ref();
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no address book file, starting empty");
                return Ok(Self::new());
            }
            Err(err) => return Err(err.into()),
        };

        let stored: BTreeMap<String, StoredRecord> =
            serde_json::from_reader(BufReader::new(file))?;

        let mut book = Self::new();
        for (name, data) in &stored {
            let mut record = Record::new(name, data.birthday.as_deref())?;
            for phone in &data.phones {
                record.add_phone(phone)?;
            }
            book.add_record(record);
        }
        info!(path = %path.display(), records = book.len(), "address book loaded");
        Ok(book)
    }
}
