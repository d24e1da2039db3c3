use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use super::{print_totals, render_results, run_sweep};
use crate::config::ConfigStore;
use crate::error::{Result, SweepError};
use crate::logging::Logger;
use crate::sweep::{DeleteOutcome, DeleteSummary, ScanResult, delete_directory, format_size};

/// Scan, prompt for a selection, confirm, then delete sequentially.
pub(crate) fn run(
    path: &Path,
    depth: Option<usize>,
    min_size: Option<&str>,
    targets: &[String],
    store: &ConfigStore,
    yes: bool,
    log: Logger,
) -> Result<()> {
    let results = run_sweep(path, depth, min_size, targets, store, log)?;

    if results.is_empty() {
        log.info("No matching directories found.");
        return Ok(());
    }

    println!("{}", render_results(&results, true));
    print_totals(&results);
    println!();

    let selected: Vec<&ScanResult> = if yes {
        results.iter().collect()
    } else {
        let stdin = io::stdin();
        let indices = prompt_selection(&mut stdin.lock(), results.len())?;
        indices.iter().map(|&i| &results[i]).collect()
    };

    if selected.is_empty() {
        log.info("Nothing selected.");
        return Ok(());
    }

    let to_free: u64 = selected.iter().map(|result| result.size()).sum();
    if !yes {
        let stdin = io::stdin();
        if !confirm_deletion(&mut stdin.lock(), selected.len(), to_free)? {
            log.info("Aborted.");
            return Ok(());
        }
    }

    let summary = delete_selected(&selected, log);
    print_summary(&summary);

    Ok(())
}

/// Delete the selection one directory at a time, reporting each outcome.
///
/// Deliberately sequential: one recursive delete completes before the next
/// begins, keeping per-item reporting deterministic and bounding peak I/O.
fn delete_selected(selected: &[&ScanResult], log: Logger) -> DeleteSummary {
    let bar = if log.quiet() {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(selected.len() as u64)
    };
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut summary = DeleteSummary::default();

    for result in selected {
        bar.set_message(result.path().display().to_string());
        let outcome = DeleteOutcome {
            path: result.path().to_path_buf(),
            result: delete_directory(result.path()),
        };

        match &outcome.result {
            Ok(()) => bar.println(format!(
                "{} Deleted: {}",
                "✓".green(),
                outcome.path.display()
            )),
            Err(reason) => {
                bar.println(format!(
                    "{} Failed: {}",
                    "✗".red(),
                    outcome.path.display()
                ));
                bar.println(format!("  {reason}"));
            }
        }

        summary.record(&outcome, result.size());
        bar.inc(1);
    }

    bar.finish_and_clear();
    summary
}

fn print_summary(summary: &DeleteSummary) {
    println!();
    println!("{} {}", "Deleted:".bold(), summary.success_count);
    println!("{} {}", "Failed:".bold(), summary.failure_count);
    println!("{} {}", "Freed:".bold(), format_size(summary.bytes_freed));
}

/// Ask which entries to delete, re-prompting until the answer parses.
/// Returns zero-based indices; an empty answer selects nothing.
fn prompt_selection(input: &mut impl BufRead, count: usize) -> Result<Vec<usize>> {
    loop {
        print!("Select directories to delete (e.g. 1,3-5 or 'all', empty to skip): ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if input.read_line(&mut line).map_err(SweepError::PromptError)? == 0 {
            // EOF: treat as "select nothing"
            return Ok(Vec::new());
        }

        match parse_selection(line.trim(), count) {
            Ok(indices) => return Ok(indices),
            Err(message) => eprintln!("{message}"),
        }
    }
}

/// Parse a selection like "1,3-5" or "all" into zero-based indices.
fn parse_selection(input: &str, count: usize) -> std::result::Result<Vec<usize>, String> {
    if input.is_empty() {
        return Ok(Vec::new());
    }
    if input.eq_ignore_ascii_case("all") {
        return Ok((0..count).collect());
    }

    let mut indices = Vec::new();
    for part in input.split(',') {
        let part = part.trim();
        let (start, end) = match part.split_once('-') {
            Some((lo, hi)) => (parse_index(lo, count)?, parse_index(hi, count)?),
            None => {
                let index = parse_index(part, count)?;
                (index, index)
            }
        };
        if start > end {
            return Err(format!("Invalid range: '{part}'"));
        }
        for index in start..=end {
            if !indices.contains(&index) {
                indices.push(index);
            }
        }
    }
    Ok(indices)
}

fn parse_index(s: &str, count: usize) -> std::result::Result<usize, String> {
    let number: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Not a number: '{s}'"))?;
    if number < 1 || number > count {
        return Err(format!("Out of range (1-{count}): '{s}'"));
    }
    Ok(number - 1)
}

/// Final y/N gate before anything is removed. Defaults to no.
fn confirm_deletion(input: &mut impl BufRead, count: usize, bytes: u64) -> Result<bool> {
    print!(
        "About to delete {count} directories ({}). Continue? [y/N] ",
        format_size(bytes)
    );
    let _ = io::stdout().flush();

    let mut line = String::new();
    input.read_line(&mut line).map_err(SweepError::PromptError)?;
    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_single_and_list() {
        assert_eq!(parse_selection("1", 5).unwrap(), vec![0]);
        assert_eq!(parse_selection("1,3,5", 5).unwrap(), vec![0, 2, 4]);
        assert_eq!(parse_selection(" 2 , 4 ", 5).unwrap(), vec![1, 3]);
    }

    #[test]
    fn test_parse_selection_ranges() {
        assert_eq!(parse_selection("1-3", 5).unwrap(), vec![0, 1, 2]);
        assert_eq!(parse_selection("2-2", 5).unwrap(), vec![1]);
        assert_eq!(parse_selection("1,2-4", 5).unwrap(), vec![0, 1, 2, 3]);
        // Overlaps are deduplicated
        assert_eq!(parse_selection("1-3,2", 5).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_parse_selection_all_and_empty() {
        assert_eq!(parse_selection("all", 3).unwrap(), vec![0, 1, 2]);
        assert_eq!(parse_selection("ALL", 2).unwrap(), vec![0, 1]);
        assert_eq!(parse_selection("", 3).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_parse_selection_rejects_invalid() {
        assert!(parse_selection("0", 3).is_err());
        assert!(parse_selection("4", 3).is_err());
        assert!(parse_selection("x", 3).is_err());
        assert!(parse_selection("3-1", 3).is_err());
        assert!(parse_selection("1-9", 3).is_err());
    }

    #[test]
    fn test_confirm_deletion_defaults_to_no() {
        let mut yes = "y\n".as_bytes();
        assert!(confirm_deletion(&mut yes, 1, 100).unwrap());

        let mut yes_word = "YES\n".as_bytes();
        assert!(confirm_deletion(&mut yes_word, 1, 100).unwrap());

        let mut empty = "\n".as_bytes();
        assert!(!confirm_deletion(&mut empty, 1, 100).unwrap());

        let mut no = "n\n".as_bytes();
        assert!(!confirm_deletion(&mut no, 1, 100).unwrap());
    }

    #[test]
    fn test_prompt_selection_reprompts_until_valid() {
        let mut input = "bogus\n1,2\n".as_bytes();
        assert_eq!(prompt_selection(&mut input, 3).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_prompt_selection_eof_selects_nothing() {
        let mut input = "".as_bytes();
        assert!(prompt_selection(&mut input, 3).unwrap().is_empty());
    }
}
