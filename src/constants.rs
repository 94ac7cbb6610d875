/// Constants used by tag normalization.
pub mod tags {
    /// Prefix marking a raw tag cell as an agency identifier.
    pub const AGENCY_ID_PREFIX: &str = "AgencyID-";
    /// Prefix family for mission-area tags; never an agency identifier.
    pub const MISSION_AREA_PREFIX: &str = "MissionArea";
}

/// Constants used when rendering agency values into report cells.
pub mod rendering {
    /// Separator joining a sorted candidate set (for example `ARS-FSA`).
    pub const CANDIDATE_SEPARATOR: &str = "-";
    /// Sentinel rendered for an absent agency value or an empty candidate set.
    pub const ABSENT_SENTINEL: &str = "None";
}

/// Default input column names, matching the deployed export layouts.
pub mod columns {
    /// Workstation key column shared by both source exports.
    pub const WORKSTATION_KEY: &str = "Encrypted Workstation Name";
    /// Operating-system column in the Tanium export.
    pub const TANIUM_OS: &str = "Operating System";
    /// Usage-level column in the Tanium export (row-filter input).
    pub const TANIUM_USAGE: &str = "Usage";
    /// Agency attribute column in the SCCM export.
    pub const SCCM_AGENCY: &str = "Agency";
    /// Operating-system column in the full SCCM export (absent in the
    /// compact export, hence optional in configuration).
    pub const SCCM_OS: &str = "OS";
    /// The eight nested custom-tag slots scanned for agency identifiers.
    pub const TANIUM_TAG_SLOTS: [&str; 8] = [
        "Asset - Custom Tags.2.1",
        "Asset - Custom Tags.2.2.1",
        "Asset - Custom Tags.2.2.2.1",
        "Asset - Custom Tags.2.2.2.2.1",
        "Asset - Custom Tags.2.2.2.2.2.1",
        "Asset - Custom Tags.2.2.2.2.2.2.1",
        "Asset - Custom Tags.2.2.2.2.2.2.2.1",
        "Asset - Custom Tags.2.2.2.2.2.2.2.2.2.1",
    ];
}

/// Constants used by the default Source-A usage filter.
pub mod usage {
    /// Usage levels accepted by the default row filter; rows with any
    /// other value (or an absent cell) are dropped before collapsing.
    pub const VALID_USAGE_LEVELS: [&str; 5] = [
        "Baselining",
        "Usage not detected",
        "Limited",
        "Normal",
        "High",
    ];
}

/// Constants used by report rendering and the packaged report runner.
pub mod reports {
    /// Rendered SCCM agency column in classification reports.
    pub const COL_SCCM_AGENCY: &str = "SCCM Agency ID";
    /// Rendered Tanium candidate-set column in classification reports.
    pub const COL_TANIUM_AGENCIES: &str = "Tanium Agency IDs";
    /// Frequency column in the grouped mismatch reports.
    pub const COL_COUNT: &str = "Count";

    /// Agency identifier column in the statistics report.
    pub const COL_AGENCY_ID: &str = "Agency ID";
    /// Outer-joined workstation total column in the statistics report.
    pub const COL_TOTAL: &str = "Total Workstations";
    /// SCCM membership count column in the statistics report.
    pub const COL_SCCM_COUNT: &str = "SCCM Workstations";
    /// SCCM membership proportion column in the statistics report.
    pub const COL_SCCM_PROPORTION: &str = "SCCM Workstations Proportion";
    /// Tanium membership count column in the statistics report.
    pub const COL_TANIUM_COUNT: &str = "Tanium Workstations";
    /// Tanium membership proportion column in the statistics report.
    pub const COL_TANIUM_PROPORTION: &str = "Tanium Workstations Proportion";
    /// Overlap count column in the statistics report.
    pub const COL_SHARED_COUNT: &str = "Shared Workstations";
    /// Overlap proportion column in the statistics report.
    pub const COL_SHARED_PROPORTION: &str = "Shared Workstations Proportion";

    /// File stem for the matching-classification report.
    pub const MATCHING_STEM: &str = "matching_raw";
    /// File stem for the mismatching-classification report.
    pub const MISMATCHING_STEM: &str = "mismatching_raw";
    /// File stem for mismatch pair counts led by the SCCM agency.
    pub const MISMATCH_BY_SCCM_STEM: &str = "mismatching_sccm_grouped";
    /// File stem for mismatch pair counts led by the Tanium candidate set.
    pub const MISMATCH_BY_TANIUM_STEM: &str = "mismatching_tanium_grouped";
    /// File stem for workstations seen only in Tanium.
    pub const TANIUM_ONLY_STEM: &str = "tanium_unique";
    /// File stem for workstations seen only in SCCM.
    pub const SCCM_ONLY_STEM: &str = "sccm_unique";
    /// File stem for the per-agency statistics report.
    pub const STATISTICS_STEM: &str = "workstation_statistics";
}
