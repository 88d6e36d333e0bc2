//! Lazy pagination over address book entries.

use crate::models::Record;
use std::collections::btree_map;
use std::fmt::Write;
use std::num::NonZeroUsize;

/// Iterator over formatted pages of an [`AddressBook`](super::AddressBook).
///
/// Each item is one page: up to `page_size` consecutive
/// `"<name>: <record display>"` entries concatenated with no separator.
/// The iterator borrows the book, so memory stays proportional to a single
/// page; call [`AddressBook::paginate`](super::AddressBook::paginate) again
/// to restart from the first page.
#[derive(Debug)]
pub struct Pages<'a> {
    entries: btree_map::Iter<'a, String, Record>,
    page_size: NonZeroUsize,
}

impl<'a> Pages<'a> {
    pub(super) fn new(
        entries: btree_map::Iter<'a, String, Record>,
        page_size: NonZeroUsize,
    ) -> Self {
        Self { entries, page_size }
    }
}

impl Iterator for Pages<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut page = String::new();
        for (name, record) in self.entries.by_ref().take(self.page_size.get()) {
            // infallible: writing into a String cannot fail
            let _ = write!(page, "{name}: {record}");
        }
        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }
}
