//! Packaged report runner shared by the `reconcile_reports` binary.

use std::error::Error;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Parser, error::ErrorKind};
use tracing::info;

use crate::config::{MatchPolicy, ReconcileConfig};
use crate::constants::reports;
use crate::engine::Reconciliation;
use crate::transport::csv::{ReportDirectory, load_table};

#[derive(Debug, Parser)]
#[command(
    name = "reconcile_reports",
    disable_help_subcommand = true,
    about = "Reconcile two workstation inventory exports",
    long_about = "Join a Tanium-style export against an SCCM-style export by workstation key, classify agency agreement, and write the seven CSV report files.",
    after_help = "Existing report files in the output directory are overwritten; the directory is created as needed."
)]
struct ReconcileReportsCli {
    #[arg(long, value_name = "PATH", help = "Tanium-style CSV export")]
    tanium: PathBuf,
    #[arg(long, value_name = "PATH", help = "SCCM-style CSV export")]
    sccm: PathBuf,
    #[arg(
        long = "out-dir",
        value_name = "DIR",
        default_value = "./data",
        help = "Directory the report files are written to"
    )]
    out_dir: PathBuf,
    #[arg(
        long = "skip-usage-filter",
        help = "Keep Tanium rows regardless of usage level"
    )]
    skip_usage_filter: bool,
    #[arg(
        long = "strict-absent",
        help = "Treat an agency absent on exactly one side as a mismatch"
    )]
    strict_absent: bool,
}

/// Loads both exports, runs the full pipeline, and writes the seven
/// report files. `args_iter` carries the process arguments without the
/// program name.
pub fn run_reconcile_reports<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<ReconcileReportsCli, _>(
        std::iter::once("reconcile_reports".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let started = Utc::now();

    let tanium = load_table("tanium", &cli.tanium)?;
    let sccm = load_table("sccm", &cli.sccm)?;

    let mut config = ReconcileConfig::default();
    if cli.skip_usage_filter {
        config = config.with_usage_filter(None);
    }
    if cli.strict_absent {
        config = config.with_match_policy(MatchPolicy::RequireBothPresent);
    }
    // The compact SCCM export ships without an OS column.
    if let Some(os) = config.sccm.os_column.as_deref()
        && sccm.column_index(os).is_none()
    {
        info!(column = os, "SCCM export has no OS column, reports omit it");
        config.sccm.os_column = None;
    }

    let prepared = Reconciliation::prepare(&tanium, &sccm, &config)?;
    let report_tables = prepared.reports()?;
    let stats = prepared.coverage()?;

    let out = ReportDirectory::new(&cli.out_dir)?;
    let tables = report_tables.tables();
    let total = tables.len() + 1;
    let mut written = Vec::with_capacity(total);
    for (idx, table) in tables.iter().enumerate() {
        info!(step = idx + 1, total, report = table.name(), "exporting report");
        written.push(out.write_table(table)?);
    }
    info!(
        step = total,
        total,
        report = reports::STATISTICS_STEM,
        "exporting report"
    );
    written.push(out.write_coverage(&stats)?);

    println!("=== reconciliation summary ===");
    println!("matching workstations   : {}", report_tables.matching.len());
    println!(
        "mismatching workstations: {}",
        report_tables.mismatching.len()
    );
    println!(
        "tanium-only workstations: {}",
        report_tables.tanium_only.len()
    );
    println!("sccm-only workstations  : {}", report_tables.sccm_only.len());
    println!("agencies covered        : {}", stats.len());
    for path in &written {
        println!("wrote {}", path.display());
    }
    println!(
        "finished in {} ms",
        (Utc::now() - started).num_milliseconds()
    );

    Ok(())
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
