use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::schema_gen::{generate_create_table, generate_insert};
use crate::body::CelestialBody;
use crate::error::Result;
use crate::parser::{read_csv_file, Coercion, CsvTable};
use crate::schema::{TableSchema, HYGDATA};

/// Default database file, created in the working directory
pub const DEFAULT_DATABASE: &str = "celestial_body_data.db";

/// Default HYG catalog export, read from the working directory
pub const DEFAULT_CSV: &str = "hygdata_v3.csv";

/// A single connection to the catalog store, shared by schema setup and loading
pub struct Catalog {
    conn: Connection,
    schema: &'static TableSchema,
}

impl Catalog {
    /// Open (or create) the store at `db_path`. Existing data is kept.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = Connection::open(db_path)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA cache_size = -64000;")?;
        Ok(Self {
            conn,
            schema: &HYGDATA,
        })
    }

    pub fn schema(&self) -> &'static TableSchema {
        self.schema
    }

    /// Create the catalog table if it does not exist yet
    pub fn init_schema(&self) -> Result<()> {
        let sql = generate_create_table(self.schema);
        self.conn.execute_batch(&sql)?;
        debug!(table = self.schema.name, "schema ready");
        Ok(())
    }

    /// Append every row of `table` in a single transaction.
    ///
    /// Any failure, including a duplicate primary key, rolls the whole append back.
    pub fn append(&mut self, table: &CsvTable) -> Result<u64> {
        let names: Vec<&str> = table.columns.iter().map(|c| c.name).collect();
        let insert_sql = generate_insert(self.schema, &names);

        let tx = self.conn.transaction()?;
        let mut count: u64 = 0;
        {
            let mut stmt = tx.prepare_cached(&insert_sql)?;
            for row in &table.rows {
                for (idx, value) in row.iter().enumerate() {
                    value.bind_to(idx + 1, &mut stmt)?;
                }
                stmt.raw_execute()?;
                count += 1;
            }
        }
        tx.commit()?;

        Ok(count)
    }

    pub fn row_count(&self) -> Result<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.schema.name);
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Number of tables named like the catalog table (0 or 1)
    pub fn table_count(&self) -> Result<u64> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [self.schema.name],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }

    pub fn find_body(&self, id: i64) -> Result<Option<CelestialBody>> {
        let sql = format!("SELECT * FROM {} WHERE id = ?1", self.schema.name);
        let body = self
            .conn
            .query_row(&sql, [id], CelestialBody::from_row)
            .optional()?;
        Ok(body)
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

/// Options for a full load run
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub coercion: Coercion,
}

/// Outcome of a successful load run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub database: PathBuf,
    pub rows_before: u64,
    pub rows_appended: u64,
    pub rows_after: u64,
}

/// Initialize the schema, then bulk-load `csv_path` into the store at `db_path`
pub fn load_catalog(db_path: &Path, csv_path: &Path, options: &LoadOptions) -> Result<LoadSummary> {
    let mut catalog = Catalog::open(db_path)?;
    catalog.init_schema()?;
    info!(database = %db_path.display(), table = catalog.schema().name, "schema initialized");

    let table = read_csv_file(csv_path, catalog.schema(), options.coercion)?;
    info!(csv = %csv_path.display(), rows = table.len(), "read input file");

    let rows_before = catalog.row_count()?;
    let rows_appended = catalog.append(&table)?;
    let rows_after = catalog.row_count()?;
    info!(rows_appended, rows_after, "bulk load complete");

    Ok(LoadSummary {
        database: db_path.to_path_buf(),
        rows_before,
        rows_appended,
        rows_after,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::parser::read_csv;

    fn catalog() -> Catalog {
        let catalog = Catalog::open_in_memory().unwrap();
        catalog.init_schema().unwrap();
        catalog
    }

    fn parse(data: &str) -> CsvTable {
        read_csv(data.as_bytes(), &HYGDATA, Coercion::Strict).unwrap()
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let mut catalog = catalog();
        catalog.append(&parse("id,proper\n1,Sol\n")).unwrap();
        catalog.init_schema().unwrap();
        assert_eq!(catalog.table_count().unwrap(), 1);
        assert_eq!(catalog.row_count().unwrap(), 1);
    }

    #[test]
    fn test_append_and_find() {
        let mut catalog = catalog();
        let appended = catalog
            .append(&parse("id,proper,mag,hip\n1,Sol,-26.7,\n2,Sirius,-1.44,32349\n"))
            .unwrap();
        assert_eq!(appended, 2);

        let sirius = catalog.find_body(2).unwrap().unwrap();
        assert_eq!(sirius.proper.as_deref(), Some("Sirius"));
        assert_eq!(sirius.hip, Some(32349));
        assert_eq!(sirius.mag, Some(-1.44));
        assert_eq!(sirius.dist, None);

        let sol = catalog.find_body(1).unwrap().unwrap();
        assert_eq!(sol.hip, None);
        assert!(catalog.find_body(99).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_id_rolls_back() {
        let mut catalog = catalog();
        catalog.append(&parse("id,proper\n1,Sol\n")).unwrap();

        let err = catalog
            .append(&parse("id,proper\n2,Sirius\n1,Sol again\n"))
            .unwrap_err();
        assert!(matches!(err, LoadError::ConstraintViolation { .. }));
        assert_eq!(catalog.row_count().unwrap(), 1);
        assert!(catalog.find_body(2).unwrap().is_none());
    }

    #[test]
    fn test_empty_append() {
        let mut catalog = catalog();
        assert_eq!(catalog.append(&parse("id\n")).unwrap(), 0);
        assert_eq!(catalog.row_count().unwrap(), 0);
    }
}
