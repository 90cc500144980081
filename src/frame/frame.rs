//! Frame container.

use super::column::Column;

/// Error raised when a [`Frame`] cannot be assembled.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FrameError {
    /// Columns must all share the same row count.
    #[error("column '{column}' has {got} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },

    /// Column names must be unique within a frame.
    #[error("duplicate column name '{column}'")]
    DuplicateName { column: String },
}

/// An ordered sequence of named columns with uniform row count.
///
/// A `Frame` is built once by a loader, mutated in place by
/// [`reduce`](crate::reduce::reduce), then handed to a writer. A frame with
/// zero columns is valid and has zero rows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Frame {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Frame {
    /// Create a frame from columns.
    ///
    /// Fails if the columns disagree on row count or share a name.
    pub fn new(columns: Vec<Column>) -> Result<Self, FrameError> {
        let n_rows = columns.first().map_or(0, Column::len);
        for col in &columns {
            if col.len() != n_rows {
                return Err(FrameError::LengthMismatch {
                    column: col.name().to_string(),
                    expected: n_rows,
                    got: col.len(),
                });
            }
        }
        for (i, col) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name() == col.name()) {
                return Err(FrameError::DuplicateName {
                    column: col.name().to_string(),
                });
            }
        }
        Ok(Self { columns, n_rows })
    }

    /// Create a frame with no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of rows (uniform across columns).
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Columns in declared order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub(crate) fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Total in-memory byte footprint of all column values.
    pub fn byte_size(&self) -> usize {
        self.columns.iter().map(Column::byte_size).sum()
    }
}
