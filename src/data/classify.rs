use super::model::{Column, ColumnType};

// ---------------------------------------------------------------------------
// Input-modality classification
// ---------------------------------------------------------------------------

/// Numeric columns with fewer distinct values than this are still offered
/// as an enumerated choice.
pub const CATEGORICAL_LIMIT: usize = 10;

/// Which kind of filter-value widget a column should get.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnClass {
    /// Value is picked from the column's distinct values.
    Categorical,
    /// Value is typed in as free text.
    Continuous,
}

/// Classify a column: text columns and low-cardinality numeric columns are
/// categorical, everything else is continuous.
pub fn classify(column: &Column) -> ColumnClass {
    if column.ty == ColumnType::Text || column.distinct_values().len() < CATEGORICAL_LIMIT {
        ColumnClass::Categorical
    } else {
        ColumnClass::Continuous
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;

    fn numeric_column(distinct: usize) -> Column {
        Column {
            name: "n".to_string(),
            ty: ColumnType::Integer,
            values: (0..distinct as i64).map(CellValue::Integer).collect(),
        }
    }

    #[test]
    fn nine_distinct_numeric_values_are_categorical() {
        assert_eq!(classify(&numeric_column(9)), ColumnClass::Categorical);
    }

    #[test]
    fn ten_distinct_numeric_values_are_continuous() {
        assert_eq!(classify(&numeric_column(10)), ColumnClass::Continuous);
    }

    #[test]
    fn text_columns_are_categorical_at_any_cardinality() {
        let column = Column {
            name: "t".to_string(),
            ty: ColumnType::Text,
            values: (0..1000).map(|i| CellValue::Text(format!("v{i}"))).collect(),
        };
        assert_eq!(classify(&column), ColumnClass::Categorical);
    }

    #[test]
    fn repeated_values_count_once() {
        let mut column = numeric_column(3);
        column.values.extend((0..3).map(CellValue::Integer));
        column.values.push(CellValue::Null);
        assert_eq!(classify(&column), ColumnClass::Categorical);
        assert_eq!(column.distinct_values().len(), 3);
    }
}
