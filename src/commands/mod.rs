//! Implementation of dirsweep subcommands.
//!
//! `mod.rs` is a thin dispatcher plus the presentation helpers the scan and
//! clean commands share; command logic lives in dedicated modules.

use std::path::Path;

use chrono::{DateTime, Local};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use crate::cli::{Cli, Commands};
use crate::config::ConfigStore;
use crate::error::Result;
use crate::logging::Logger;
use crate::sweep::{ScanResult, Sweep, TargetSet, format_size, parse_size};

pub(crate) mod clean;
pub(crate) mod config_cmd;
pub(crate) mod scan;


/// Execute commands based on the parsed CLI arguments.
pub fn execute(cli: &Cli) -> Result<()> {
    let quiet = cli.global_opts().quiet();
    let verbose = if quiet { 0 } else { cli.global_opts().verbose() };
    let log = Logger::new(verbose, quiet);

    let store = ConfigStore::new(cli.global_opts().config_path().map(Path::to_path_buf));

    match cli.command() {
        Commands::Scan {
            path,
            depth,
            min_size,
            targets,
        } => scan::run(path, *depth, min_size.as_deref(), targets, &store, log),
        Commands::Clean {
            path,
            depth,
            min_size,
            targets,
            yes,
        } => clean::run(path, *depth, min_size.as_deref(), targets, &store, *yes, log),
        Commands::Config { action } => config_cmd::run(action, &store, log),
    }
}

/// Resolve the effective target set: an explicit `--target` override wins,
/// otherwise the persisted configuration is consulted. Overrides are never
/// written back.
pub(crate) fn resolve_targets(overrides: &[String], store: &ConfigStore) -> TargetSet {
    if overrides.is_empty() {
        TargetSet::new(store.load().targets)
    } else {
        TargetSet::new(overrides)
    }
}

/// Run the configured sweep shared by the scan and clean commands.
pub(crate) fn run_sweep(
    path: &Path,
    depth: Option<usize>,
    min_size: Option<&str>,
    targets: &[String],
    store: &ConfigStore,
    log: Logger,
) -> Result<Vec<ScanResult>> {
    let min_size = min_size.map(parse_size).transpose()?;
    let targets = resolve_targets(targets, store);

    log.verbose(
        1,
        format!(
            "Scanning {} for {} target name(s)",
            path.display(),
            targets.len()
        ),
    );

    let sweep = Sweep::builder()
        .root(path)
        .max_depth(depth)
        .min_size(min_size)
        .targets(targets)
        .build();
    sweep.run()
}

/// Render the result table shared by the scan and clean commands. When
/// `numbered` is set, a leading index column is added so entries can be
/// picked at the selection prompt.
pub(crate) fn render_results(results: &[ScanResult], numbered: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec!["Path", "Size", "Last modified"];
    if numbered {
        header.insert(0, "#");
    }
    table.set_header(header);

    for (index, result) in results.iter().enumerate() {
        let mut row = vec![
            Cell::new(result.path().display()),
            Cell::new(format_size(result.size())).set_alignment(CellAlignment::Right),
            Cell::new(format_date(result)),
        ];
        if numbered {
            row.insert(0, Cell::new(index + 1).set_alignment(CellAlignment::Right));
        }
        table.add_row(row);
    }

    table
}

/// Print the result count and combined size after the table.
pub(crate) fn print_totals(results: &[ScanResult]) {
    let total: u64 = results.iter().map(ScanResult::size).sum();
    println!();
    println!(
        "Total: {} directories, {}",
        results.len(),
        format_size(total)
    );
}

fn format_date(result: &ScanResult) -> String {
    DateTime::<Local>::from(result.last_modified())
        .format("%Y-%m-%d")
        .to_string()
}
