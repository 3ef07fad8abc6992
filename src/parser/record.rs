use crate::error::{LoadError, Result};
use crate::schema::{Column, ColumnType};

/// How a field that does not match its declared column type is handled
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Coercion {
    /// Reject the field and abort the load
    #[default]
    Strict,
    /// Store the raw text, as SQLite type affinity would
    Lenient,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    pub fn bind_to(&self, idx: usize, stmt: &mut rusqlite::Statement) -> rusqlite::Result<()> {
        match self {
            SqlValue::Null => stmt.raw_bind_parameter(idx, rusqlite::types::Null)?,
            SqlValue::Integer(i) => stmt.raw_bind_parameter(idx, i)?,
            SqlValue::Real(f) => stmt.raw_bind_parameter(idx, f)?,
            SqlValue::Text(s) => stmt.raw_bind_parameter(idx, s.as_str())?,
        }
        Ok(())
    }
}

/// Coerce one raw CSV field to the declared type of `column`.
///
/// Empty fields become NULL. Required columns are always coerced strictly,
/// whatever `mode` says, and reject empty fields.
pub fn coerce_field(raw: &str, column: &'static Column, line: u64, mode: Coercion) -> Result<SqlValue> {
    let value = match column.col_type {
        ColumnType::Integer => parse_integer(raw),
        ColumnType::Real => parse_real(raw),
        ColumnType::Text if raw.is_empty() => Some(SqlValue::Null),
        ColumnType::Text => Some(SqlValue::Text(raw.to_string())),
    };

    let mode = if column.nullable { mode } else { Coercion::Strict };
    let value = match (value, mode) {
        (Some(v), _) => v,
        (None, Coercion::Lenient) => SqlValue::Text(raw.to_string()),
        (None, Coercion::Strict) => {
            return Err(LoadError::Coercion {
                line,
                column: column.name,
                value: raw.to_string(),
                expected: column.col_type,
            })
        }
    };

    if value == SqlValue::Null && !column.nullable {
        return Err(LoadError::MissingValue {
            line,
            column: column.name,
        });
    }

    Ok(value)
}

/// Integer literal, or a float literal without a fractional part (`2.0`)
fn parse_integer(raw: &str) -> Option<SqlValue> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(SqlValue::Null);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Some(SqlValue::Integer(i));
    }

    let f = s.parse::<f64>().ok()?;
    if f.is_nan() {
        Some(SqlValue::Null)
    } else if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(SqlValue::Integer(f as i64))
    } else {
        None
    }
}

fn parse_real(raw: &str) -> Option<SqlValue> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(SqlValue::Null);
    }

    let f = s.parse::<f64>().ok()?;
    if f.is_nan() {
        Some(SqlValue::Null)
    } else {
        Some(SqlValue::Real(f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static ID: Column = Column::required("id", ColumnType::Integer);
    static HIP: Column = Column::new("hip", ColumnType::Integer);
    static MAG: Column = Column::new("mag", ColumnType::Real);
    static PROPER: Column = Column::new("proper", ColumnType::Text);

    #[test]
    fn test_integer_forms() {
        assert_eq!(coerce_field("42", &HIP, 2, Coercion::Strict).unwrap(), SqlValue::Integer(42));
        assert_eq!(coerce_field(" -7 ", &HIP, 2, Coercion::Strict).unwrap(), SqlValue::Integer(-7));
        assert_eq!(coerce_field("2.0", &HIP, 2, Coercion::Strict).unwrap(), SqlValue::Integer(2));
        assert_eq!(coerce_field("", &HIP, 2, Coercion::Strict).unwrap(), SqlValue::Null);
    }

    #[test]
    fn test_fractional_integer_is_rejected() {
        let err = coerce_field("2.5", &HIP, 9, Coercion::Strict).unwrap_err();
        match err {
            LoadError::Coercion { line, column, expected, .. } => {
                assert_eq!(line, 9);
                assert_eq!(column, "hip");
                assert_eq!(expected, ColumnType::Integer);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_real_forms() {
        assert_eq!(coerce_field("-1.44", &MAG, 2, Coercion::Strict).unwrap(), SqlValue::Real(-1.44));
        assert_eq!(coerce_field("1e3", &MAG, 2, Coercion::Strict).unwrap(), SqlValue::Real(1000.0));
        assert_eq!(coerce_field("NaN", &MAG, 2, Coercion::Strict).unwrap(), SqlValue::Null);
        assert!(coerce_field("bright", &MAG, 2, Coercion::Strict).is_err());
    }

    #[test]
    fn test_text_is_verbatim() {
        assert_eq!(
            coerce_field(" Sirius ", &PROPER, 2, Coercion::Strict).unwrap(),
            SqlValue::Text(" Sirius ".to_string())
        );
        assert_eq!(coerce_field("", &PROPER, 2, Coercion::Strict).unwrap(), SqlValue::Null);
    }

    #[test]
    fn test_lenient_keeps_raw_text() {
        assert_eq!(
            coerce_field("Gl 551", &HIP, 2, Coercion::Lenient).unwrap(),
            SqlValue::Text("Gl 551".to_string())
        );
    }

    #[test]
    fn test_required_column_ignores_lenient_mode() {
        assert!(matches!(
            coerce_field("abc", &ID, 3, Coercion::Lenient),
            Err(LoadError::Coercion { .. })
        ));
        assert!(matches!(
            coerce_field("", &ID, 3, Coercion::Lenient),
            Err(LoadError::MissingValue { line: 3, column: "id" })
        ));
    }
}
