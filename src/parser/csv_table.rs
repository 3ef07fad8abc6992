use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::header::map_header;
use super::record::{coerce_field, Coercion, SqlValue};
use crate::error::{LoadError, Result};
use crate::schema::{Column, TableSchema};

/// A CSV file held fully in memory, already coerced to the table's types
#[derive(Debug, Clone)]
pub struct CsvTable {
    /// Target columns in header order
    pub columns: Vec<&'static Column>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl CsvTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Read every record from `reader` and coerce it against `schema`
pub fn read_csv<R: Read>(reader: R, schema: &TableSchema, mode: Coercion) -> Result<CsvTable> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let columns = map_header(&headers, schema)?;

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        let row = record
            .iter()
            .zip(columns.iter().copied())
            .map(|(raw, column)| coerce_field(raw, column, line, mode))
            .collect::<Result<Vec<_>>>()?;
        rows.push(row);
    }

    debug!(columns = columns.len(), rows = rows.len(), "parsed CSV");
    Ok(CsvTable { columns, rows })
}

pub fn read_csv_file(path: &Path, schema: &TableSchema, mode: Coercion) -> Result<CsvTable> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file, schema, mode)
}
