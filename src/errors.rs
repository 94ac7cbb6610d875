use thiserror::Error;

use crate::types::ColumnName;

/// Errors surfaced by reconciliation, coverage aggregation, and table I/O.
#[derive(Debug, Error)]
pub enum ReconcileError {
    /// An input table lacks a column the configuration requires.
    #[error("input table '{table}' is missing required column '{column}'")]
    MissingColumn {
        /// Name of the offending table.
        table: String,
        /// Column the configuration asked for.
        column: ColumnName,
    },

    /// Aggregated data violated an internal invariant.
    #[error("data inconsistency: {details}")]
    DataInconsistency {
        /// Human-readable description of the violated invariant.
        details: String,
    },

    /// A configuration or construction argument was unusable.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Underlying filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV parse or write failure.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}
