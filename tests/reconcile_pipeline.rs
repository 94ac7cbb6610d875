use reconcile::constants::{columns, tags};
use reconcile::{MatchPolicy, ReconcileConfig, Table, compute_coverage, reconcile};

fn tanium_columns() -> Vec<String> {
    let mut cols = vec![
        columns::WORKSTATION_KEY.to_string(),
        columns::TANIUM_OS.to_string(),
        columns::TANIUM_USAGE.to_string(),
    ];
    cols.extend(columns::TANIUM_TAG_SLOTS.iter().map(|c| c.to_string()));
    cols
}

fn tanium_row(key: &str, usage: &str, tags: &[&str]) -> Vec<Option<String>> {
    let mut cells = vec![
        Some(key.to_string()),
        Some("Windows 10 Enterprise".to_string()),
        Some(usage.to_string()),
    ];
    for slot in 0..columns::TANIUM_TAG_SLOTS.len() {
        cells.push(tags.get(slot).map(|t| t.to_string()));
    }
    cells
}

fn mission_area_tag() -> String {
    format!("{}-FPAC", tags::MISSION_AREA_PREFIX)
}

fn sccm_table(rows: &[(&str, Option<&str>)]) -> Table {
    let mut table = Table::new(
        "sccm",
        [columns::WORKSTATION_KEY, columns::SCCM_AGENCY, columns::SCCM_OS],
    );
    for (key, agency) in rows {
        table
            .push_row([
                Some(key.to_string()),
                agency.map(str::to_string),
                Some("Windows 10 Enterprise".to_string()),
            ])
            .unwrap();
    }
    table
}

#[test]
fn three_workstation_scenario_lands_where_expected() {
    let mission_area = mission_area_tag();
    let mut tanium = Table::new("tanium", tanium_columns());
    tanium
        .push_row(tanium_row("WS1", "Normal", &["AgencyID-NRCS"]))
        .unwrap();
    tanium
        .push_row(tanium_row("WS2", "Normal", &["AgencyID-FSA"]))
        .unwrap();
    tanium
        .push_row(tanium_row("WS3", "Limited", &[mission_area.as_str()]))
        .unwrap();
    let sccm = sccm_table(&[("WS1", Some("NRCS")), ("WS2", Some("NRCS"))]);

    let config = ReconcileConfig::default();
    let reports = reconcile(&tanium, &sccm, &config).unwrap();

    assert_eq!(reports.matching.len(), 1);
    assert_eq!(reports.matching.rows()[0].cell(0), Some("WS1"));
    assert_eq!(reports.mismatching.len(), 1);
    assert_eq!(reports.mismatching.rows()[0].cell(0), Some("WS2"));
    assert_eq!(reports.tanium_only.len(), 1);
    assert_eq!(reports.tanium_only.rows()[0].cell(0), Some("WS3"));
    assert!(reports.sccm_only.is_empty());

    let stats = compute_coverage(&tanium, &sccm, &config).unwrap();
    let nrcs = stats.iter().find(|s| s.agency_id == "NRCS").unwrap();
    assert_eq!(nrcs.total_workstations, 2);
    assert_eq!(nrcs.sccm_workstations, 2);
    assert_eq!(nrcs.tanium_workstations, 1);
    assert_eq!(nrcs.shared_workstations, 1);
}

#[test]
fn joined_rows_render_both_sides_in_report_columns() {
    let mission_area = mission_area_tag();
    let mut tanium = Table::new("tanium", tanium_columns());
    tanium
        .push_row(tanium_row(
            "WS2",
            "Normal",
            &["AgencyID-FSA", mission_area.as_str(), "AgencyID-ARS"],
        ))
        .unwrap();
    let sccm = sccm_table(&[("WS2", Some("NRCS"))]);

    let reports = reconcile(&tanium, &sccm, &ReconcileConfig::default()).unwrap();

    assert_eq!(
        reports.mismatching.columns(),
        [
            columns::WORKSTATION_KEY,
            "SCCM Agency ID",
            columns::TANIUM_OS,
            columns::SCCM_OS,
            "Tanium Agency IDs",
        ]
    );
    let row = &reports.mismatching.rows()[0];
    assert_eq!(row.cell(1), Some("NRCS"));
    assert_eq!(row.cell(4), Some("ARS-FSA"));

    let grouped = &reports.mismatch_by_tanium;
    assert_eq!(grouped.rows()[0].cell(0), Some("ARS-FSA"));
    assert_eq!(grouped.rows()[0].cell(1), Some("NRCS"));
    assert_eq!(grouped.rows()[0].cell(2), Some("1"));
}

#[test]
fn usage_filter_removes_workstations_before_the_join() {
    let mut tanium = Table::new("tanium", tanium_columns());
    tanium
        .push_row(tanium_row("WS1", "Retired", &["AgencyID-NRCS"]))
        .unwrap();
    let sccm = sccm_table(&[("WS1", Some("NRCS"))]);

    let reports = reconcile(&tanium, &sccm, &ReconcileConfig::default()).unwrap();

    assert!(reports.matching.is_empty());
    assert_eq!(reports.sccm_only.len(), 1);
    assert_eq!(reports.sccm_only.rows()[0].cell(0), Some("WS1"));
}

#[test]
fn duplicate_keys_collapse_to_the_first_row() {
    let mut tanium = Table::new("tanium", tanium_columns());
    tanium
        .push_row(tanium_row("WS1", "Normal", &["AgencyID-NRCS"]))
        .unwrap();
    tanium
        .push_row(tanium_row("WS1", "Normal", &["AgencyID-FSA"]))
        .unwrap();
    let sccm = sccm_table(&[("WS1", Some("NRCS"))]);

    let reports = reconcile(&tanium, &sccm, &ReconcileConfig::default()).unwrap();

    assert_eq!(reports.matching.len(), 1);
    assert!(reports.mismatching.is_empty());
}

#[test]
fn duplicate_sccm_keys_keep_the_first_agency() {
    let mut tanium = Table::new("tanium", tanium_columns());
    tanium
        .push_row(tanium_row("WS1", "Normal", &["AgencyID-NRCS"]))
        .unwrap();
    let sccm = sccm_table(&[("WS1", Some("NRCS")), ("WS1", Some("FSA"))]);

    let config = ReconcileConfig::default();
    let reports = reconcile(&tanium, &sccm, &config).unwrap();
    assert_eq!(reports.matching.len(), 1);
    assert!(reports.mismatching.is_empty());

    let stats = compute_coverage(&tanium, &sccm, &config).unwrap();
    let ids: Vec<&str> = stats.iter().map(|s| s.agency_id.as_str()).collect();
    assert_eq!(ids, ["NRCS"]);
}

#[test]
fn hyphenated_tag_identifiers_compare_verbatim() {
    let mut tanium = Table::new("tanium", tanium_columns());
    tanium
        .push_row(tanium_row("WS1", "Normal", &["AgencyID-NRCS-East"]))
        .unwrap();
    let sccm = sccm_table(&[("WS1", Some("NRCS"))]);

    let reports = reconcile(&tanium, &sccm, &ReconcileConfig::default()).unwrap();

    assert!(reports.matching.is_empty());
    assert_eq!(reports.mismatching.len(), 1);
    let row = &reports.mismatching.rows()[0];
    assert_eq!(row.cell(1), Some("NRCS"));
    assert_eq!(row.cell(4), Some("NRCS-East"));

    let grouped = &reports.mismatch_by_sccm;
    assert_eq!(grouped.rows()[0].cell(0), Some("NRCS"));
    assert_eq!(grouped.rows()[0].cell(1), Some("NRCS-East"));
    assert_eq!(grouped.rows()[0].cell(2), Some("1"));
}

#[test]
fn empty_tag_remainders_mint_no_candidates() {
    let mut tanium = Table::new("tanium", tanium_columns());
    tanium
        .push_row(tanium_row("WS1", "Normal", &["AgencyID-"]))
        .unwrap();
    let sccm = sccm_table(&[("WS1", Some("NRCS"))]);

    let config = ReconcileConfig::default();
    let reports = reconcile(&tanium, &sccm, &config).unwrap();
    assert_eq!(reports.matching.len(), 1);
    assert_eq!(reports.matching.rows()[0].cell(4), Some("None"));

    let stats = compute_coverage(&tanium, &sccm, &config).unwrap();
    let ids: Vec<&str> = stats.iter().map(|s| s.agency_id.as_str()).collect();
    assert_eq!(ids, ["NRCS"]);
    assert_eq!(stats[0].tanium_workstations, 0);
}

#[test]
fn match_policy_decides_vacuous_agreements() {
    let mut tanium = Table::new("tanium", tanium_columns());
    tanium.push_row(tanium_row("WS1", "Normal", &[])).unwrap();
    let sccm = sccm_table(&[("WS1", Some("NRCS"))]);

    let default_reports = reconcile(&tanium, &sccm, &ReconcileConfig::default()).unwrap();
    assert_eq!(default_reports.matching.len(), 1);
    assert_eq!(default_reports.matching.rows()[0].cell(4), Some("None"));

    let strict = ReconcileConfig::default().with_match_policy(MatchPolicy::RequireBothPresent);
    let strict_reports = reconcile(&tanium, &sccm, &strict).unwrap();
    assert!(strict_reports.matching.is_empty());
    assert_eq!(strict_reports.mismatching.len(), 1);
}

#[test]
fn empty_inputs_yield_empty_reports_and_statistics() {
    let tanium = Table::new("tanium", tanium_columns());
    let sccm = sccm_table(&[]);
    let config = ReconcileConfig::default();

    let reports = reconcile(&tanium, &sccm, &config).unwrap();
    assert!(reports.matching.is_empty());
    assert!(reports.mismatching.is_empty());
    assert!(reports.tanium_only.is_empty());
    assert!(reports.sccm_only.is_empty());

    let stats = compute_coverage(&tanium, &sccm, &config).unwrap();
    assert!(stats.is_empty());
}
