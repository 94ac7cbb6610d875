#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Reusable report runners shared by the packaged binary.
pub mod apps;
/// Match classification for workstations present in both sources.
pub mod classify;
/// Duplicate collapsing to one record per workstation key.
pub mod collapse;
/// Column bindings, row filtering, and match policy.
pub mod config;
/// Centralized constants: tag prefixes, column names, report shapes.
pub mod constants;
/// Per-agency coverage statistics.
pub mod coverage;
/// The reconciliation pipeline and its collapsed record types.
pub mod engine;
/// Key-based join of two record sets into three partitions.
pub mod join;
/// Tag normalization.
pub mod normalize;
/// Report table construction.
pub mod report;
/// In-memory tables with named columns and optional-valued cells.
pub mod table;
/// File transports for inventory inputs and report outputs.
pub mod transport;
/// Shared type aliases.
pub mod types;

mod errors;

pub use classify::{MatchResult, classify};
pub use config::{MatchPolicy, ReconcileConfig, RowFilter, SccmColumns, TaniumColumns};
pub use coverage::{AgencyCoverage, aggregate_coverage};
pub use engine::{Reconciliation, SccmRecord, TaniumRecord, compute_coverage, reconcile};
pub use errors::ReconcileError;
pub use join::{JoinPartitions, join_by_key};
pub use report::ReconcileReports;
pub use table::{Row, Table};
pub use types::{AgencyId, ColumnName, OsDescriptor, RenderedAgencies, WorkstationKey};
