use std::collections::BTreeSet;

use super::model::Table;

// ---------------------------------------------------------------------------
// Load-time summary
// ---------------------------------------------------------------------------

/// Headline figures shown after a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub row_count: usize,
    pub column_count: usize,
    /// Number of distinct column types present, not distinct columns.
    pub distinct_type_count: usize,
}

/// Compute the summary from the table's post-load shape.
pub fn summarize(table: &Table) -> Summary {
    let types: BTreeSet<_> = table.columns().iter().map(|c| c.ty).collect();
    Summary {
        row_count: table.row_count(),
        column_count: table.column_count(),
        distinct_type_count: types.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_bytes;

    #[test]
    fn counts_rows_columns_and_types() {
        let table = load_bytes(b"name,age\na,5\nb,5\nc,7\n").unwrap();
        assert_eq!(
            summarize(&table),
            Summary {
                row_count: 3,
                column_count: 2,
                distinct_type_count: 2,
            }
        );
    }

    #[test]
    fn same_typed_columns_count_as_one_type() {
        let table = load_bytes(b"a,b\n1,2\n3,4\n").unwrap();
        assert_eq!(summarize(&table).distinct_type_count, 1);
        assert_eq!(summarize(&table).column_count, 2);
    }

    #[test]
    fn all_three_types_are_counted() {
        let table = load_bytes(b"i,f,t\n1,1.5,x\n").unwrap();
        assert_eq!(summarize(&table).distinct_type_count, 3);
    }
}
