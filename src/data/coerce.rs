use thiserror::Error;

use super::model::{CellValue, Column, ColumnType};

// ---------------------------------------------------------------------------
// Filter-value coercion
// ---------------------------------------------------------------------------

/// Raw filter text that does not convert to the column's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value '{raw}' cannot be converted to {target} for column '{column}'")]
pub struct CoercionError {
    pub column: String,
    pub raw: String,
    pub target: ColumnType,
}

/// Convert raw filter text into the column's native type.
///
/// Empty input means "no filter requested" and maps to `Ok(None)`. Text
/// columns take the input unchanged; numeric columns parse the trimmed
/// input and report a [`CoercionError`] when it does not convert.
pub fn coerce(column: &Column, raw: &str) -> Result<Option<CellValue>, CoercionError> {
    if raw.is_empty() {
        return Ok(None);
    }

    let value = match column.ty {
        ColumnType::Text => CellValue::Text(raw.to_string()),
        ColumnType::Integer => raw
            .trim()
            .parse::<i64>()
            .map(CellValue::Integer)
            .map_err(|_| conversion_error(column, raw))?,
        ColumnType::Float => raw
            .trim()
            .parse::<f64>()
            .map(CellValue::Float)
            .map_err(|_| conversion_error(column, raw))?,
    };
    Ok(Some(value))
}

fn conversion_error(column: &Column, raw: &str) -> CoercionError {
    CoercionError {
        column: column.name.clone(),
        raw: raw.to_string(),
        target: column.ty,
    }
}
