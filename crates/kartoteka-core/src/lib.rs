pub mod domain;
pub mod error;
pub mod rowstore;
pub mod rules;
pub mod textfile;
pub mod time;

pub use domain::{Contact, ContactBook, ContactDraft};
pub use error::{BookError, Field, ValidationError, ValidationReason};
pub use rowstore::{FieldRow, RowStore, RowStoreError, StoreLoadError};
pub use textfile::{LineError, LoadReport, SkippedLine};
