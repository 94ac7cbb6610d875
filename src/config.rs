//! Configuration for column bindings, row filtering, and match policy.

use std::collections::HashSet;

use crate::constants::{columns, usage};
use crate::errors::ReconcileError;
use crate::table::Table;
use crate::types::ColumnName;

/// Column bindings for the Tanium-style export.
#[derive(Debug, Clone)]
pub struct TaniumColumns {
    /// Workstation key column.
    pub key_column: ColumnName,
    /// Operating-system column carried into reports.
    pub os_column: ColumnName,
    /// Tag slots scanned for `AgencyID-` encodings, in scan order.
    pub tag_columns: Vec<ColumnName>,
}

impl Default for TaniumColumns {
    fn default() -> Self {
        Self {
            key_column: columns::WORKSTATION_KEY.to_string(),
            os_column: columns::TANIUM_OS.to_string(),
            tag_columns: columns::TANIUM_TAG_SLOTS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

/// Column bindings for the SCCM-style export.
#[derive(Debug, Clone)]
pub struct SccmColumns {
    /// Workstation key column.
    pub key_column: ColumnName,
    /// Authoritative agency attribute column.
    pub agency_column: ColumnName,
    /// Operating-system column, present only in the full export.
    pub os_column: Option<ColumnName>,
}

impl Default for SccmColumns {
    fn default() -> Self {
        Self {
            key_column: columns::WORKSTATION_KEY.to_string(),
            agency_column: columns::SCCM_AGENCY.to_string(),
            os_column: Some(columns::SCCM_OS.to_string()),
        }
    }
}

/// Keeps only rows whose cell in `column` is present and in `allowed`.
#[derive(Debug, Clone)]
pub struct RowFilter {
    column: ColumnName,
    allowed: HashSet<String>,
}

impl RowFilter {
    /// Builds a filter over `column` accepting exactly `allowed` values.
    pub fn new(
        column: impl Into<ColumnName>,
        allowed: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            column: column.into(),
            allowed: allowed.into_iter().map(Into::into).collect(),
        }
    }

    /// The default usage-level filter applied to the Tanium export.
    pub fn default_usage() -> Self {
        Self::new(columns::TANIUM_USAGE, usage::VALID_USAGE_LEVELS)
    }

    /// Column this filter inspects.
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Returns a copy of `table` containing only the accepted rows.
    /// Rows with an absent cell in the filter column never pass.
    pub fn retain(&self, table: &Table) -> Result<Table, ReconcileError> {
        let idx = table.require_column(&self.column)?;
        let mut kept = Table::new(table.name(), table.columns().to_vec());
        for row in table.rows() {
            let accepted = row.cell(idx).is_some_and(|v| self.allowed.contains(v));
            if accepted {
                kept.push_row(row.cells().to_vec())?;
            }
        }
        Ok(kept)
    }
}

/// How to classify a record pair when one side carries no agency value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// A side with no value never contradicts the other; such pairs match.
    #[default]
    VacuousAbsent,
    /// Both sides must carry a value for the pair to match.
    RequireBothPresent,
}

/// Full reconciliation configuration, defaulting to the deployed layouts.
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// Tanium column bindings.
    pub tanium: TaniumColumns,
    /// SCCM column bindings.
    pub sccm: SccmColumns,
    /// Optional pre-collapse row filter on the Tanium export.
    pub usage_filter: Option<RowFilter>,
    /// Absent-value match policy.
    pub match_policy: MatchPolicy,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            tanium: TaniumColumns::default(),
            sccm: SccmColumns::default(),
            usage_filter: Some(RowFilter::default_usage()),
            match_policy: MatchPolicy::default(),
        }
    }
}

impl ReconcileConfig {
    /// Replaces the Tanium column bindings.
    pub fn with_tanium_columns(mut self, tanium: TaniumColumns) -> Self {
        self.tanium = tanium;
        self
    }

    /// Replaces the SCCM column bindings.
    pub fn with_sccm_columns(mut self, sccm: SccmColumns) -> Self {
        self.sccm = sccm;
        self
    }

    /// Sets or clears the pre-collapse row filter.
    pub fn with_usage_filter(mut self, filter: Option<RowFilter>) -> Self {
        self.usage_filter = filter;
        self
    }

    /// Sets the absent-value match policy.
    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = policy;
        self
    }
}
