use std::path::Path;

use log::debug;
use thiserror::Error;

use super::model::{CellValue, Column, ColumnType, Table};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed CSV: {0}")]
    Malformed(#[from] csv::Error),
    #[error("file contains no columns")]
    Empty,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a CSV file from disk.
pub fn load_file(path: &Path) -> Result<Table, LoadError> {
    let bytes = std::fs::read(path)?;
    load_bytes(&bytes)
}

/// Parse CSV bytes into a [`Table`] with per-column inferred types.
///
/// The first record is the header row. An empty field is a missing value.
/// Rows with an inconsistent field count are a parse error.
pub fn load_bytes(bytes: &[u8]) -> Result<Table, LoadError> {
    let mut reader = csv::Reader::from_reader(bytes);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if headers.is_empty() {
        return Err(LoadError::Empty);
    }

    // Transpose the record stream into per-column raw text.
    let mut raw_columns: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in reader.records() {
        let record = result?;
        for (idx, field) in record.iter().enumerate() {
            raw_columns[idx].push(field.to_string());
        }
    }

    let columns: Vec<Column> = headers
        .into_iter()
        .zip(raw_columns)
        .map(|(name, raw)| build_column(name, raw))
        .collect();

    for c in &columns {
        debug!("column '{}' inferred as {} ({} rows)", c.name, c.ty, c.values.len());
    }

    Ok(Table::new(columns))
}

// ---------------------------------------------------------------------------
// Type inference
// ---------------------------------------------------------------------------

/// Infer the column type by conversion: every non-missing field as `i64`,
/// failing that every field as `f64`, failing that text.
fn build_column(name: String, raw: Vec<String>) -> Column {
    if raw.is_empty() {
        // Header-only file: no data to infer from, columns stay textual.
        return Column {
            name,
            ty: ColumnType::Text,
            values: Vec::new(),
        };
    }

    if raw.iter().all(|field| field.is_empty()) {
        // A column of only missing markers reads as numeric.
        return Column {
            name,
            ty: ColumnType::Float,
            values: vec![CellValue::Null; raw.len()],
        };
    }

    if let Some(values) = convert_all(&raw, |field| {
        field.parse::<i64>().ok().map(CellValue::Integer)
    }) {
        return Column {
            name,
            ty: ColumnType::Integer,
            values,
        };
    }

    if let Some(values) = convert_all(&raw, |field| {
        field.parse::<f64>().ok().map(CellValue::Float)
    }) {
        return Column {
            name,
            ty: ColumnType::Float,
            values,
        };
    }

    let values = raw
        .into_iter()
        .map(|field| {
            if field.is_empty() {
                CellValue::Null
            } else {
                CellValue::Text(field)
            }
        })
        .collect();
    Column {
        name,
        ty: ColumnType::Text,
        values,
    }
}

/// Convert every non-missing field with `parse`, bailing out on the first
/// field that does not convert. Numeric fields are trimmed before parsing.
fn convert_all(
    raw: &[String],
    parse: impl Fn(&str) -> Option<CellValue>,
) -> Option<Vec<CellValue>> {
    raw.iter()
        .map(|field| {
            if field.is_empty() {
                Some(CellValue::Null)
            } else {
                parse(field.trim())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn infers_integer_float_and_text_columns() {
        let table = load_bytes(b"id,score,label\n1,1.5,a\n2,2.0,b\n3,2.5,c\n").unwrap();

        assert_eq!(table.column("id").unwrap().ty, ColumnType::Integer);
        assert_eq!(table.column("score").unwrap().ty, ColumnType::Float);
        assert_eq!(table.column("label").unwrap().ty, ColumnType::Text);
        assert_eq!(table.row_count(), 3);
    }

    #[test]
    fn one_stray_letter_demotes_a_column_to_text() {
        let table = load_bytes(b"v\n1\n2\nx\n").unwrap();
        assert_eq!(table.column("v").unwrap().ty, ColumnType::Text);
    }

    #[test]
    fn integer_fields_with_a_decimal_point_are_floats() {
        let table = load_bytes(b"v\n1\n2.0\n3\n").unwrap();
        assert_eq!(table.column("v").unwrap().ty, ColumnType::Float);
        assert_eq!(table.column("v").unwrap().values[0], CellValue::Float(1.0));
    }

    #[test]
    fn empty_fields_become_null_without_changing_the_type() {
        let table = load_bytes(b"k,v\na,1\nb,\nc,3\n").unwrap();
        let column = table.column("v").unwrap();

        assert_eq!(column.ty, ColumnType::Integer);
        assert_eq!(column.values[1], CellValue::Null);
        assert_eq!(column.distinct_values().len(), 2);
    }

    #[test]
    fn all_missing_column_reads_as_float() {
        let table = load_bytes(b"a,b\n1,\n2,\n").unwrap();
        assert_eq!(table.column("b").unwrap().ty, ColumnType::Float);
    }

    #[test]
    fn header_only_file_is_a_zero_row_table() {
        let table = load_bytes(b"a,b\n").unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column("a").unwrap().ty, ColumnType::Text);
    }

    #[test]
    fn numeric_fields_are_trimmed_before_parsing() {
        let table = load_bytes(b"v\n 1\n2 \n").unwrap();
        assert_eq!(table.column("v").unwrap().ty, ColumnType::Integer);
    }

    #[test]
    fn ragged_rows_are_a_parse_error() {
        let err = load_bytes(b"a,b\n1,2\n3\n").unwrap_err();
        assert!(matches!(err, LoadError::Malformed(_)));
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(load_bytes(b"").unwrap_err(), LoadError::Empty));
    }

    #[test]
    fn quoted_fields_keep_their_delimiters() {
        let table = load_bytes(b"name\n\"last, first\"\n").unwrap();
        assert_eq!(
            table.column("name").unwrap().values[0],
            CellValue::Text("last, first".to_string())
        );
    }

    #[test]
    fn load_file_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"x\n1\n2\n").unwrap();
        file.flush().unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column("x").unwrap().ty, ColumnType::Integer);
    }

    #[test]
    fn load_file_missing_path_is_an_io_error() {
        let err = load_file(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
