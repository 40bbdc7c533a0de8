//! Comma-delimited text persistence.
//!
//! One record per line, six fields in canonical order (first, middle, last
//! name, birth date, email, phone), no header. Field values must not contain
//! the delimiter; there is no quoting, an embedded comma corrupts the
//! record boundary.

use crate::domain::{Contact, ContactBook, ContactDraft};
use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

pub const FIELD_COUNT: usize = 6;
const DELIMITER: char = ',';

/// Why a line was skipped during a load.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum LineError {
    #[error("expected 6 comma-separated fields, found {found}")]
    FieldCount { found: usize },
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A skipped input line, 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: LineError,
}

/// Outcome of a best-effort load: malformed lines are reported here, they
/// never abort the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

impl ContactBook {
    /// Clears the book and reloads it from a delimited text file.
    ///
    /// Fails only if the file cannot be opened or read; a malformed line is
    /// skipped, logged, and recorded in the returned report while loading
    /// continues.
    pub fn load_from_path(
        &mut self,
        path: impl AsRef<Path>,
        today: NaiveDate,
    ) -> io::Result<LoadReport> {
        let file = File::open(path)?;
        self.load_from_reader(BufReader::new(file), today)
    }

    /// Reader-generic form of [`load_from_path`](Self::load_from_path).
    pub fn load_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        today: NaiveDate,
    ) -> io::Result<LoadReport> {
        self.clear();
        let mut report = LoadReport::default();

        for (number, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = number + 1;
            if line.trim().is_empty() {
                continue;
            }
            match parse_line(&line, today) {
                Ok(contact) => {
                    self.add(contact);
                    report.loaded += 1;
                }
                Err(reason) => {
                    warn!(line = line_no, %reason, "skipping malformed contact line");
                    report.skipped.push(SkippedLine {
                        line: line_no,
                        reason,
                    });
                }
            }
        }

        debug!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "loaded contacts from text"
        );
        Ok(report)
    }

    /// Writes the book to a delimited text file, one contact per line.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()
    }

    /// Writer-generic form of [`save_to_path`](Self::save_to_path).
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for contact in self.contacts() {
            writeln!(writer, "{}", contact.to_row().join(","))?;
        }
        Ok(())
    }
}

fn parse_line(line: &str, today: NaiveDate) -> Result<Contact, LineError> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(LineError::FieldCount {
            found: fields.len(),
        });
    }

    let draft = ContactDraft {
        first_name: fields[0].trim().to_string(),
        middle_name: fields[1].trim().to_string(),
        last_name: fields[2].trim().to_string(),
        birth_date: fields[3].trim().to_string(),
        email: fields[4].trim().to_string(),
        phone: fields[5].trim().to_string(),
    };
    Ok(Contact::new(draft, today)?)
}
