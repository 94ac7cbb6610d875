//! Per-agency coverage statistics over the union of both sources.

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::ReconcileError;
use crate::types::{AgencyId, WorkstationKey};

/// Coverage statistics for one agency, in report column order.
///
/// `shared_workstations` is computed by inclusion-exclusion over the
/// counts rather than by set intersection, so the arithmetic identity
/// `shared = tanium + sccm - total` holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyCoverage {
    /// Agency this row describes.
    #[serde(rename = "Agency ID")]
    pub agency_id: AgencyId,
    /// Workstations claimed by the agency in either source.
    #[serde(rename = "Total Workstations")]
    pub total_workstations: u64,
    /// Workstations whose SCCM agency attribute names this agency.
    #[serde(rename = "SCCM Workstations")]
    pub sccm_workstations: u64,
    /// `sccm_workstations / total_workstations`.
    #[serde(rename = "SCCM Workstations Proportion")]
    pub sccm_proportion: f64,
    /// Workstations carrying this agency in any Tanium tag slot.
    #[serde(rename = "Tanium Workstations")]
    pub tanium_workstations: u64,
    /// `tanium_workstations / total_workstations`.
    #[serde(rename = "Tanium Workstations Proportion")]
    pub tanium_proportion: f64,
    /// Workstations claimed by both sources.
    #[serde(rename = "Shared Workstations")]
    pub shared_workstations: i64,
    /// `shared_workstations / total_workstations`.
    #[serde(rename = "Shared Workstations Proportion")]
    pub shared_proportion: f64,
}

/// Aggregates coverage statistics over every agency observed in either
/// source, one row per agency, sorted by agency identifier ascending.
///
/// The inputs are the collapsed per-workstation memberships: the full
/// candidate set per Tanium workstation and the single optional agency
/// per SCCM workstation. A zero denominator cannot arise for an agency
/// drawn from these memberships; it is still guarded and surfaced as a
/// [`ReconcileError::DataInconsistency`] rather than a silent `NaN`.
pub fn aggregate_coverage(
    tanium: &IndexMap<WorkstationKey, BTreeSet<AgencyId>>,
    sccm: &IndexMap<WorkstationKey, Option<AgencyId>>,
) -> Result<Vec<AgencyCoverage>, ReconcileError> {
    let mut tanium_members: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (key, agencies) in tanium {
        for agency in agencies {
            tanium_members
                .entry(agency.as_str())
                .or_default()
                .insert(key.as_str());
        }
    }

    let mut sccm_members: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    for (key, agency) in sccm {
        if let Some(agency) = agency {
            sccm_members
                .entry(agency.as_str())
                .or_default()
                .insert(key.as_str());
        }
    }

    let agencies: BTreeSet<&str> = tanium_members
        .keys()
        .chain(sccm_members.keys())
        .copied()
        .collect();

    let mut stats = Vec::with_capacity(agencies.len());
    for agency in agencies {
        let in_tanium = tanium_members.get(agency);
        let in_sccm = sccm_members.get(agency);

        let tanium_count = in_tanium.map_or(0, BTreeSet::len) as u64;
        let sccm_count = in_sccm.map_or(0, BTreeSet::len) as u64;
        let total = match (in_tanium, in_sccm) {
            (Some(a), Some(b)) => a.union(b).count(),
            (Some(a), None) => a.len(),
            (None, Some(b)) => b.len(),
            (None, None) => 0,
        } as u64;

        if total == 0 {
            return Err(ReconcileError::DataInconsistency {
                details: format!("agency '{agency}' has no member workstations"),
            });
        }

        let shared = tanium_count as i64 + sccm_count as i64 - total as i64;
        stats.push(AgencyCoverage {
            agency_id: agency.to_string(),
            total_workstations: total,
            sccm_workstations: sccm_count,
            sccm_proportion: sccm_count as f64 / total as f64,
            tanium_workstations: tanium_count,
            tanium_proportion: tanium_count as f64 / total as f64,
            shared_workstations: shared,
            shared_proportion: shared as f64 / total as f64,
        });
    }

    Ok(stats)
}
