//! Abstract six-column row persistence.
//!
//! The concrete backend (a relational table, an in-memory fake in tests)
//! owns its connection handling; the book only ever reads all rows or
//! replaces all rows.

use crate::domain::{Contact, ContactBook, ContactDraft};
use crate::error::ValidationError;
use chrono::NaiveDate;
use thiserror::Error;

/// Six field values in canonical order: first, middle, last name, birth
/// date, email, phone.
pub type FieldRow = [String; 6];

pub trait RowStore {
    fn read_all(&mut self) -> Result<Vec<FieldRow>, RowStoreError>;
    fn replace_all(&mut self, rows: &[FieldRow]) -> Result<(), RowStoreError>;
}

/// Backend failure reported by a [`RowStore`] implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("row store: {0}")]
pub struct RowStoreError(pub String);

impl RowStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreLoadError {
    #[error(transparent)]
    Store(#[from] RowStoreError),
    #[error("row {row}: {source}")]
    Row { row: usize, source: ValidationError },
}

impl ContactBook {
    /// Clears the book and repopulates it from the store.
    ///
    /// All-or-nothing: every row must validate before the in-memory
    /// sequence is replaced; on failure the book keeps its prior contents
    /// and the error names the offending 1-based row. Returns the number of
    /// contacts loaded.
    pub fn load_from_store<S: RowStore>(
        &mut self,
        store: &mut S,
        today: NaiveDate,
    ) -> Result<usize, StoreLoadError> {
        let rows = store.read_all()?;
        let mut contacts = Vec::with_capacity(rows.len());
        for (number, row) in rows.into_iter().enumerate() {
            let [first_name, middle_name, last_name, birth_date, email, phone] = row;
            let draft = ContactDraft {
                first_name,
                middle_name,
                last_name,
                birth_date,
                email,
                phone,
            };
            let contact = Contact::new(draft, today).map_err(|source| StoreLoadError::Row {
                row: number + 1,
                source,
            })?;
            contacts.push(contact);
        }

        let loaded = contacts.len();
        self.replace_contents(contacts);
        Ok(loaded)
    }

    /// Rewrites the store with the book's contents. Full replace, not an
    /// incremental sync.
    pub fn save_to_store<S: RowStore>(&self, store: &mut S) -> Result<(), RowStoreError> {
        let rows: Vec<FieldRow> = self.contacts().iter().map(Contact::to_row).collect();
        store.replace_all(&rows)
    }
}
