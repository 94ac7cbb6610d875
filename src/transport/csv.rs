//! CSV reading and writing for inventory tables and report files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::constants::reports;
use crate::coverage::AgencyCoverage;
use crate::errors::ReconcileError;
use crate::table::Table;

/// Reads a CSV file into a table named `name`.
///
/// The first record is the header row. Empty fields load as absent
/// cells, mirroring how absent cells are written back out.
pub fn load_table(name: &str, path: &Path) -> Result<Table, ReconcileError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut table = Table::new(name, headers);
    for record in reader.records() {
        let record = record?;
        table.push_row(record.iter().map(|field| {
            if field.is_empty() {
                None
            } else {
                Some(field.to_string())
            }
        }))?;
    }
    debug!(
        table = name,
        rows = table.len(),
        path = %path.display(),
        "table loaded"
    );
    Ok(table)
}

/// Writes a table as CSV; absent cells become empty fields.
pub fn store_table(table: &Table, path: &Path) -> Result<(), ReconcileError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.cells().iter().map(|c| c.as_deref().unwrap_or("")))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes coverage statistics as CSV, headers included even when empty.
pub fn store_coverage(stats: &[AgencyCoverage], path: &Path) -> Result<(), ReconcileError> {
    let mut writer = csv::Writer::from_path(path)?;
    if stats.is_empty() {
        writer.write_record(coverage_headers())?;
    }
    for stat in stats {
        writer.serialize(stat)?;
    }
    writer.flush()?;
    Ok(())
}

fn coverage_headers() -> [&'static str; 8] {
    [
        reports::COL_AGENCY_ID,
        reports::COL_TOTAL,
        reports::COL_SCCM_COUNT,
        reports::COL_SCCM_PROPORTION,
        reports::COL_TANIUM_COUNT,
        reports::COL_TANIUM_PROPORTION,
        reports::COL_SHARED_COUNT,
        reports::COL_SHARED_PROPORTION,
    ]
}

/// Report output directory; created on construction if missing.
pub struct ReportDirectory {
    root: PathBuf,
}

impl ReportDirectory {
    /// Creates a writer rooted at `root`, creating the directory as needed.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self, ReconcileError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Path a report with this file stem is written to.
    pub fn path_for(&self, stem: &str) -> PathBuf {
        self.root.join(format!("{stem}.csv"))
    }

    /// Writes `table` to `<root>/<table name>.csv`, returning the path.
    pub fn write_table(&self, table: &Table) -> Result<PathBuf, ReconcileError> {
        let path = self.path_for(table.name());
        store_table(table, &path)?;
        debug!(
            report = table.name(),
            rows = table.len(),
            path = %path.display(),
            "report written"
        );
        Ok(path)
    }

    /// Writes coverage statistics to the statistics report file.
    pub fn write_coverage(&self, stats: &[AgencyCoverage]) -> Result<PathBuf, ReconcileError> {
        let path = self.path_for(reports::STATISTICS_STEM);
        store_coverage(stats, &path)?;
        debug!(
            report = reports::STATISTICS_STEM,
            rows = stats.len(),
            path = %path.display(),
            "report written"
        );
        Ok(path)
    }
}
