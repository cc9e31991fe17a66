use super::model::{CellValue, Table};

// ---------------------------------------------------------------------------
// View – the currently displayed row subset
// ---------------------------------------------------------------------------

/// Row subset of a [`Table`]: indices into the table's rows, in table order.
/// Rebuilt from the full table on every filter or reset; never mutated in
/// place and never kept across a reload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    indices: Vec<usize>,
}

impl View {
    /// View covering every row of `table`.
    pub fn full(table: &Table) -> Self {
        View {
            indices: (0..table.row_count()).collect(),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Exact-match filtering
// ---------------------------------------------------------------------------

/// Rows of `table` whose value in `column` equals `value` under the
/// column's native equality. No coercion, no substring or case folding;
/// missing cells match nothing. An unknown column name matches nothing.
pub fn apply_filter(table: &Table, column: &str, value: &CellValue) -> View {
    let indices = match table.column(column) {
        Some(col) => col
            .values
            .iter()
            .enumerate()
            .filter(|(_, cell)| *cell == value)
            .map(|(idx, _)| idx)
            .collect(),
        None => Vec::new(),
    };
    View { indices }
}
