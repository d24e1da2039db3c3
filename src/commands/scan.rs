use std::path::Path;

use super::{print_totals, render_results, run_sweep};
use crate::config::ConfigStore;
use crate::error::Result;
use crate::logging::Logger;

/// Scan for matching directories and print the result table.
pub(crate) fn run(
    path: &Path,
    depth: Option<usize>,
    min_size: Option<&str>,
    targets: &[String],
    store: &ConfigStore,
    log: Logger,
) -> Result<()> {
    let results = run_sweep(path, depth, min_size, targets, store, log)?;

    if results.is_empty() {
        log.info("No matching directories found.");
        return Ok(());
    }

    println!("{}", render_results(&results, false));
    print_totals(&results);

    Ok(())
}
