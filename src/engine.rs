//! Reconciliation pipeline: extract, filter, collapse, join, report.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::collapse::{collapse_first_wins, row_key};
use crate::config::ReconcileConfig;
use crate::coverage::{AgencyCoverage, aggregate_coverage};
use crate::errors::ReconcileError;
use crate::join::{JoinPartitions, join_by_key};
use crate::normalize::normalize_tag;
use crate::report::{self, ReconcileReports};
use crate::table::Table;
use crate::types::{AgencyId, OsDescriptor, WorkstationKey};

/// Collapsed per-workstation view of the Tanium export, tags already
/// normalized to agency values slot by slot.
#[derive(Debug, Clone)]
pub struct TaniumRecord {
    /// Workstation key.
    pub key: WorkstationKey,
    /// Operating-system descriptor, carried into reports untouched.
    pub os: Option<OsDescriptor>,
    /// Normalized agency value per tag slot, in slot order.
    pub tags: Vec<Option<AgencyId>>,
}

impl TaniumRecord {
    /// Distinct non-absent agency values across the tag slots.
    pub fn agency_set(&self) -> BTreeSet<AgencyId> {
        self.tags.iter().flatten().cloned().collect()
    }
}

/// Collapsed per-workstation view of the SCCM export.
#[derive(Debug, Clone)]
pub struct SccmRecord {
    /// Workstation key.
    pub key: WorkstationKey,
    /// Authoritative agency value.
    pub agency: Option<AgencyId>,
    /// Operating-system descriptor, when the export carries one.
    pub os: Option<OsDescriptor>,
}

/// Prepared reconciliation state: both exports filtered, collapsed to
/// one record per key, and joined into the three partitions. Reports
/// and coverage statistics are both served from this state, so a caller
/// needing both pays for the pipeline once.
#[derive(Debug, Clone)]
pub struct Reconciliation {
    partitions: JoinPartitions<TaniumRecord, SccmRecord>,
    config: ReconcileConfig,
}

impl Reconciliation {
    /// Runs the pipeline up to the join.
    ///
    /// The usage filter, when configured, drops Tanium rows before
    /// collapsing, so a filtered-out row never shadows a later valid
    /// row with the same key. Unkeyed rows (absent or empty key cell)
    /// are excluded from both sources. Missing required columns abort
    /// here, before any output exists.
    pub fn prepare(
        tanium: &Table,
        sccm: &Table,
        config: &ReconcileConfig,
    ) -> Result<Self, ReconcileError> {
        let filtered;
        let tanium_table = match &config.usage_filter {
            Some(filter) => {
                filtered = filter.retain(tanium)?;
                debug!(
                    table = tanium.name(),
                    before = tanium.len(),
                    after = filtered.len(),
                    filter_column = filter.column(),
                    "usage filter applied"
                );
                &filtered
            }
            None => tanium,
        };

        let tanium_records = extract_tanium(tanium_table, config)?;
        let sccm_records = extract_sccm(sccm, config)?;

        let tanium_collapsed = collapse_first_wins(tanium_records, |r| r.key.clone());
        let sccm_collapsed = collapse_first_wins(sccm_records, |r| r.key.clone());
        debug!(
            tanium = tanium_collapsed.len(),
            sccm = sccm_collapsed.len(),
            "collapsed to one record per workstation"
        );

        let partitions = join_by_key(tanium_collapsed, sccm_collapsed);
        debug!(
            both = partitions.both.len(),
            tanium_only = partitions.left_only.len(),
            sccm_only = partitions.right_only.len(),
            "joined sources by workstation key"
        );

        Ok(Self {
            partitions,
            config: config.clone(),
        })
    }

    /// The three join partitions, left = Tanium, right = SCCM.
    pub fn partitions(&self) -> &JoinPartitions<TaniumRecord, SccmRecord> {
        &self.partitions
    }

    /// Configuration the pipeline was prepared with.
    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Builds the six reconciliation report tables.
    pub fn reports(&self) -> Result<ReconcileReports, ReconcileError> {
        report::build_reports(self)
    }

    /// Computes per-agency coverage statistics over all collapsed
    /// records from both sources, joined or not.
    pub fn coverage(&self) -> Result<Vec<AgencyCoverage>, ReconcileError> {
        let mut tanium_sets: IndexMap<WorkstationKey, BTreeSet<AgencyId>> = IndexMap::new();
        for (key, (record, _)) in &self.partitions.both {
            tanium_sets.insert(key.clone(), record.agency_set());
        }
        for (key, record) in &self.partitions.left_only {
            tanium_sets.insert(key.clone(), record.agency_set());
        }

        let mut sccm_values: IndexMap<WorkstationKey, Option<AgencyId>> = IndexMap::new();
        for (key, (_, record)) in &self.partitions.both {
            sccm_values.insert(key.clone(), record.agency.clone());
        }
        for (key, record) in &self.partitions.right_only {
            sccm_values.insert(key.clone(), record.agency.clone());
        }

        aggregate_coverage(&tanium_sets, &sccm_values)
    }
}

/// One-shot reconciliation: the six report tables from the raw exports.
pub fn reconcile(
    tanium: &Table,
    sccm: &Table,
    config: &ReconcileConfig,
) -> Result<ReconcileReports, ReconcileError> {
    Reconciliation::prepare(tanium, sccm, config)?.reports()
}

/// One-shot coverage statistics from the raw exports.
pub fn compute_coverage(
    tanium: &Table,
    sccm: &Table,
    config: &ReconcileConfig,
) -> Result<Vec<AgencyCoverage>, ReconcileError> {
    Reconciliation::prepare(tanium, sccm, config)?.coverage()
}

fn extract_tanium(
    table: &Table,
    config: &ReconcileConfig,
) -> Result<Vec<TaniumRecord>, ReconcileError> {
    let key_idx = table.require_column(&config.tanium.key_column)?;
    let os_idx = table.require_column(&config.tanium.os_column)?;
    let tag_idxs = config
        .tanium
        .tag_columns
        .iter()
        .map(|column| table.require_column(column))
        .collect::<Result<Vec<_>, _>>()?;

    let mut records = Vec::with_capacity(table.len());
    for row in table.rows() {
        let Some(key) = row_key(row.cell(key_idx)) else {
            continue;
        };
        let tags = tag_idxs
            .iter()
            .map(|&idx| normalize_tag(row.cell(idx)))
            .collect();
        records.push(TaniumRecord {
            key,
            os: row.cell(os_idx).map(str::to_string),
            tags,
        });
    }
    Ok(records)
}

fn extract_sccm(
    table: &Table,
    config: &ReconcileConfig,
) -> Result<Vec<SccmRecord>, ReconcileError> {
    let key_idx = table.require_column(&config.sccm.key_column)?;
    let agency_idx = table.require_column(&config.sccm.agency_column)?;
    let os_idx = config
        .sccm
        .os_column
        .as_deref()
        .map(|column| table.require_column(column))
        .transpose()?;

    let mut records = Vec::with_capacity(table.len());
    for row in table.rows() {
        let Some(key) = row_key(row.cell(key_idx)) else {
            continue;
        };
        records.push(SccmRecord {
            key,
            agency: row.cell(agency_idx).filter(|a| !a.is_empty()).map(str::to_string),
            os: os_idx.and_then(|idx| row.cell(idx)).map(str::to_string),
        });
    }
    Ok(records)
}
