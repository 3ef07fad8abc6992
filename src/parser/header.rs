use csv::StringRecord;
use std::collections::HashSet;

use crate::error::{LoadError, Result};
use crate::schema::{Column, TableSchema};

/// Map each CSV header to its table column, in header order.
///
/// Names must match exactly. Unknown or repeated headers are rejected, as is a
/// header without every required column. Other columns may be omitted.
pub fn map_header(headers: &StringRecord, schema: &TableSchema) -> Result<Vec<&'static Column>> {
    let mut seen = HashSet::new();
    let mut columns = Vec::with_capacity(headers.len());

    for name in headers.iter() {
        let column = schema
            .column(name)
            .ok_or_else(|| LoadError::UnknownColumn {
                table: schema.name,
                column: name.to_string(),
            })?;
        if !seen.insert(column.name) {
            return Err(LoadError::DuplicateColumn {
                column: name.to_string(),
            });
        }
        columns.push(column);
    }

    if let Some(missing) = schema.required_columns().find(|c| !seen.contains(c.name)) {
        return Err(LoadError::MissingColumn {
            column: missing.name,
        });
    }

    Ok(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::HYGDATA;

    fn header(names: &[&str]) -> StringRecord {
        StringRecord::from(names.to_vec())
    }

    #[test]
    fn test_subset_header_maps_in_order() {
        let columns = map_header(&header(&["proper", "id", "mag"]), &HYGDATA).unwrap();
        let names: Vec<_> = columns.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["proper", "id", "mag"]);
    }

    #[test]
    fn test_full_header() {
        let names: Vec<&str> = HYGDATA.column_names().collect();
        let columns = map_header(&header(&names), &HYGDATA).unwrap();
        assert_eq!(columns.len(), HYGDATA.columns.len());
    }

    #[test]
    fn test_unknown_column() {
        let err = map_header(&header(&["id", "color"]), &HYGDATA).unwrap_err();
        assert!(matches!(err, LoadError::UnknownColumn { ref column, .. } if column == "color"));
    }

    #[test]
    fn test_case_mismatch_is_unknown() {
        let err = map_header(&header(&["ID"]), &HYGDATA).unwrap_err();
        assert!(matches!(err, LoadError::UnknownColumn { .. }));
    }

    #[test]
    fn test_duplicate_column() {
        let err = map_header(&header(&["id", "mag", "mag"]), &HYGDATA).unwrap_err();
        assert!(matches!(err, LoadError::DuplicateColumn { .. }));
    }

    #[test]
    fn test_missing_id() {
        let err = map_header(&header(&["proper"]), &HYGDATA).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { column: "id" }));
        assert!(err.is_schema_mismatch());
    }
}
