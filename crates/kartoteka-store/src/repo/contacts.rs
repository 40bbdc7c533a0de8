use crate::error::StoreError;
use kartoteka_core::{FieldRow, RowStore, RowStoreError};
use rusqlite::{params, Connection, Row};
use tracing::debug;

/// Six-column contact rows, addressed as a whole: read everything, replace
/// everything. Insertion order is preserved via the rowid.
pub struct ContactRowsRepo<'a> {
    conn: &'a Connection,
}

impl<'a> ContactRowsRepo<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// All rows in insertion order.
    pub fn read_rows(&self) -> Result<Vec<FieldRow>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT first_name, middle_name, last_name, birth_date, email, phone
             FROM contacts ORDER BY id;",
        )?;
        let mut rows = stmt.query([])?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            out.push(fields_from_row(row)?);
        }
        Ok(out)
    }

    /// Deletes every row and writes `rows` in order, inside one
    /// transaction.
    pub fn replace_rows(&self, rows: &[FieldRow]) -> Result<(), StoreError> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute("DELETE FROM contacts;", [])?;
        {
            let mut stmt = tx.prepare(
                "INSERT INTO contacts (first_name, middle_name, last_name, birth_date, email, phone)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            )?;
            for row in rows {
                stmt.execute(params![row[0], row[1], row[2], row[3], row[4], row[5]])?;
            }
        }
        tx.commit()?;
        debug!(rows = rows.len(), "replaced contact rows");
        Ok(())
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM contacts;", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn fields_from_row(row: &Row<'_>) -> Result<FieldRow, rusqlite::Error> {
    Ok([
        row.get::<_, String>(0)?,
        row.get::<_, String>(1)?,
        row.get::<_, String>(2)?,
        row.get::<_, String>(3)?,
        row.get::<_, String>(4)?,
        row.get::<_, String>(5)?,
    ])
}

impl RowStore for ContactRowsRepo<'_> {
    fn read_all(&mut self) -> Result<Vec<FieldRow>, RowStoreError> {
        self.read_rows()
            .map_err(|err| RowStoreError::new(err.to_string()))
    }

    fn replace_all(&mut self, rows: &[FieldRow]) -> Result<(), RowStoreError> {
        self.replace_rows(rows)
            .map_err(|err| RowStoreError::new(err.to_string()))
    }
}
