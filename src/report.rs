//! Report tables built over the join partitions.
//!
//! Raw reports keep the partitions' first-seen row order; grouped
//! reports are sorted by group key for deterministic, diffable output.

use std::collections::BTreeMap;

use crate::classify::{classify, render_authoritative, render_candidates};
use crate::constants::reports;
use crate::engine::Reconciliation;
use crate::errors::ReconcileError;
use crate::table::Table;

/// The six reconciliation report tables, named by their file stems.
#[derive(Debug, Clone)]
pub struct ReconcileReports {
    /// Joined workstations whose sources agree.
    pub matching: Table,
    /// Joined workstations whose sources disagree.
    pub mismatching: Table,
    /// Mismatch pair counts, led by the SCCM agency.
    pub mismatch_by_sccm: Table,
    /// Mismatch pair counts, led by the Tanium candidate set.
    pub mismatch_by_tanium: Table,
    /// Workstations seen only in the Tanium export.
    pub tanium_only: Table,
    /// Workstations seen only in the SCCM export.
    pub sccm_only: Table,
}

impl ReconcileReports {
    /// The six tables in export order.
    pub fn tables(&self) -> [&Table; 6] {
        [
            &self.matching,
            &self.mismatching,
            &self.mismatch_by_sccm,
            &self.mismatch_by_tanium,
            &self.tanium_only,
            &self.sccm_only,
        ]
    }
}

/// Builds all six report tables from prepared reconciliation state.
pub fn build_reports(reconciliation: &Reconciliation) -> Result<ReconcileReports, ReconcileError> {
    let config = reconciliation.config();
    let parts = reconciliation.partitions();

    let sccm_os = config.sccm.os_column.as_deref();
    let mut joined_columns = vec![
        config.tanium.key_column.clone(),
        reports::COL_SCCM_AGENCY.to_string(),
        config.tanium.os_column.clone(),
    ];
    if let Some(os) = sccm_os {
        joined_columns.push(os.to_string());
    }
    joined_columns.push(reports::COL_TANIUM_AGENCIES.to_string());

    let mut matching = Table::new(reports::MATCHING_STEM, joined_columns.clone());
    let mut mismatching = Table::new(reports::MISMATCHING_STEM, joined_columns);
    let mut by_sccm: BTreeMap<(String, String), u64> = BTreeMap::new();
    let mut by_tanium: BTreeMap<(String, String), u64> = BTreeMap::new();

    for (key, (tanium, sccm)) in &parts.both {
        let result = classify(sccm.agency.as_deref(), &tanium.tags, config.match_policy);

        let mut cells = vec![
            Some(key.clone()),
            Some(result.authoritative.clone()),
            tanium.os.clone(),
        ];
        if sccm_os.is_some() {
            cells.push(sccm.os.clone());
        }
        cells.push(Some(result.candidates.clone()));

        if result.matching {
            matching.push_row(cells)?;
        } else {
            mismatching.push_row(cells)?;
            let pair = (result.authoritative, result.candidates);
            *by_tanium.entry((pair.1.clone(), pair.0.clone())).or_insert(0) += 1;
            *by_sccm.entry(pair).or_insert(0) += 1;
        }
    }

    let mut mismatch_by_sccm = Table::new(
        reports::MISMATCH_BY_SCCM_STEM,
        [
            reports::COL_SCCM_AGENCY,
            reports::COL_TANIUM_AGENCIES,
            reports::COL_COUNT,
        ],
    );
    for ((agency, candidates), count) in by_sccm {
        mismatch_by_sccm.push_row([Some(agency), Some(candidates), Some(count.to_string())])?;
    }

    let mut mismatch_by_tanium = Table::new(
        reports::MISMATCH_BY_TANIUM_STEM,
        [
            reports::COL_TANIUM_AGENCIES,
            reports::COL_SCCM_AGENCY,
            reports::COL_COUNT,
        ],
    );
    for ((candidates, agency), count) in by_tanium {
        mismatch_by_tanium.push_row([Some(candidates), Some(agency), Some(count.to_string())])?;
    }

    let mut tanium_only = Table::new(
        reports::TANIUM_ONLY_STEM,
        [
            config.tanium.key_column.clone(),
            config.tanium.os_column.clone(),
            reports::COL_TANIUM_AGENCIES.to_string(),
        ],
    );
    for (key, record) in &parts.left_only {
        tanium_only.push_row([
            Some(key.clone()),
            record.os.clone(),
            Some(render_candidates(&record.tags)),
        ])?;
    }

    let mut sccm_only_columns = vec![
        config.sccm.key_column.clone(),
        reports::COL_SCCM_AGENCY.to_string(),
    ];
    if let Some(os) = sccm_os {
        sccm_only_columns.push(os.to_string());
    }
    let mut sccm_only = Table::new(reports::SCCM_ONLY_STEM, sccm_only_columns);
    for (key, record) in &parts.right_only {
        let mut cells = vec![
            Some(key.clone()),
            Some(render_authoritative(record.agency.as_deref())),
        ];
        if sccm_os.is_some() {
            cells.push(record.os.clone());
        }
        sccm_only.push_row(cells)?;
    }

    Ok(ReconcileReports {
        matching,
        mismatching,
        mismatch_by_sccm,
        mismatch_by_tanium,
        tanium_only,
        sccm_only,
    })
}
