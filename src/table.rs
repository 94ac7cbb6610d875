//! Minimal column-addressed table used for inputs and reports.
//!
//! Cells are `Option<String>`: `None` models an absent value, which the
//! rest of the pipeline treats differently from any present string.

use crate::errors::ReconcileError;
use crate::types::ColumnName;

/// One table row; cell positions line up with the owning table's columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<Option<String>>,
}

impl Row {
    /// Returns the cell at `idx`, flattening absence and out-of-range to `None`.
    pub fn cell(&self, idx: usize) -> Option<&str> {
        self.cells.get(idx).and_then(|c| c.as_deref())
    }

    /// Returns all cells in column order.
    pub fn cells(&self) -> &[Option<String>] {
        &self.cells
    }
}

/// An in-memory table with named columns and optional-valued cells.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: Vec<ColumnName>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates an empty table with the given name and column layout.
    pub fn new(
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<ColumnName>>,
    ) -> Self {
        Self {
            name: name.into(),
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Returns the table's name, used in error messages and file stems.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the column names in declaration order.
    pub fn columns(&self) -> &[ColumnName] {
        &self.columns
    }

    /// Looks up the position of `column`, if the table has it.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Like [`Table::column_index`] but failing loudly when the column is
    /// missing, naming the table and the column.
    pub fn require_column(&self, column: &str) -> Result<usize, ReconcileError> {
        self.column_index(column)
            .ok_or_else(|| ReconcileError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Appends a row; the cell count must match the column count.
    pub fn push_row(
        &mut self,
        cells: impl IntoIterator<Item = Option<String>>,
    ) -> Result<(), ReconcileError> {
        let cells: Vec<Option<String>> = cells.into_iter().collect();
        if cells.len() != self.columns.len() {
            return Err(ReconcileError::Configuration(format!(
                "row with {} cells pushed onto table '{}' with {} columns",
                cells.len(),
                self.name,
                self.columns.len()
            )));
        }
        self.rows.push(Row { cells });
        Ok(())
    }

    /// Returns the rows in insertion order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
