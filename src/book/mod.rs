//! The address book container: CRUD, search, and paginated rendering.

mod pages;

pub use pages::Pages;

use crate::models::Record;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use tracing::debug;

/// In-memory directory of contacts, keyed by name.
///
/// Exclusively owned, plain state: construct one explicitly and pass it to
/// whatever drives it. Iteration (search results, pagination, persistence)
/// follows the map's key order, so output is deterministic across runs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name. An existing record with the same
    /// name is replaced wholesale, not merged.
    pub fn add_record(&mut self, record: Record) {
        let name = record.name().as_str().to_string();
        if self.records.insert(name.clone(), record).is_some() {
            debug!(%name, "replaced existing record");
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Exact-name lookup with mutable access, for phone edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record stored under `name`. Returns whether anything was
    /// removed; a missing name is a no-op.
    pub fn delete(&mut self, name: &str) -> bool {
        self.records.remove(name).is_some()
    }

    /// Every record whose name contains `query` case-insensitively, or
    /// whose phone list contains `query` as an exact substring.
    ///
    /// Results come back in iteration order; no matches is an empty vec.
    pub fn search(&self, query: &str) -> Vec<&Record> {
        let query_lower = query.to_lowercase();
        self.records
            .values()
            .filter(|record| {
                record.name().as_str().to_lowercase().contains(&query_lower)
                    || record.phones().iter().any(|p| p.as_str().contains(query))
            })
            .collect()
    }

    /// Lazy iterator of page strings, `page_size` entries per page.
    ///
    /// Each page concatenates `"<name>: <record display>"` entries with no
    /// separator in between; the final page may be short. A fresh call
    /// restarts from the beginning, and an empty book yields no pages.
    pub fn paginate(&self, page_size: NonZeroUsize) -> Pages<'_> {
        Pages::new(self.records.iter(), page_size)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate `(name, record)` pairs in deterministic key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Record> {
        self.records.iter()
    }
}
