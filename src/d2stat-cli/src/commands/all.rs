//! Batch export of every character on the server
//!
//! Walks `<charinfo>/<account>/<character>`, writes `<out>/<character>.json`
//! for each character and `<out>/all_char_all_acc.json` with all of them.

use anyhow::{bail, Context, Result};
use d2stat::CharacterReport;
use rayon::prelude::*;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

use crate::character::load_report;
use crate::cli::AllArgs;
use crate::config::{Config, SaveDirs};
use crate::file_io;
use crate::file_utils::{discover_characters, CharacterEntry};

/// Aggregate file written next to the per-character files
pub const AGGREGATE_FILE: &str = "all_char_all_acc.json";

/// Outcome of a batch run
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Characters decoded and included in the aggregate
    pub processed: usize,
    /// Characters whose save could not be read or decoded
    pub skipped: usize,
    /// Per-character JSON files that could not be written
    pub write_failures: usize,
    pub aggregate_written: bool,
}

/// Handle `all`
pub fn handle(args: &AllArgs, config: &Config) -> Result<()> {
    let dirs = config.resolve_dirs(&args.dirs);
    let output_dir = match args.output_dir.clone().or_else(|| config.output_dir.clone()) {
        Some(dir) => dir,
        None => prompt_output_dir()?,
    };

    if !output_dir.is_dir() {
        warn!(
            "Directory '{}' does not exist. Check permissions.",
            output_dir.display()
        );
    }

    println!(
        "Starting ALL MODE analysis in: {} (Output to: {})",
        dirs.charinfo.display(),
        output_dir.display()
    );

    let summary = run(&dirs, &output_dir)?;

    println!(
        "Processed {} character(s), skipped {}, {} write failure(s)",
        summary.processed, summary.skipped, summary.write_failures
    );

    if !summary.aggregate_written {
        bail!(
            "Failed to write {}",
            output_dir.join(AGGREGATE_FILE).display()
        );
    }

    Ok(())
}

/// Ask for the output directory on stdin
fn prompt_output_dir() -> Result<PathBuf> {
    print!("Please enter the output directory path for JSON files (e.g., /var/www/html/d2stats): ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read path input")?;

    let path = input.trim_end_matches(['\n', '\r']);
    if path.is_empty() {
        bail!("No output directory given");
    }

    Ok(PathBuf::from(path))
}

/// Process every character. Per-character failures are logged and skipped.
pub fn run(dirs: &SaveDirs, output_dir: &Path) -> Result<BatchSummary> {
    let characters = discover_characters(&dirs.charinfo)?;
    info!("Found {} character(s)", characters.len());

    let results: Vec<_> = characters
        .par_iter()
        .map(|entry| process_character(dirs, output_dir, entry))
        .collect();

    let mut summary = BatchSummary::default();
    let mut reports: Vec<CharacterReport> = Vec::with_capacity(results.len());

    for (entry, result) in characters.iter().zip(results) {
        match result {
            Ok((report, written)) => {
                if !written {
                    summary.write_failures += 1;
                }
                reports.push(report);
            }
            Err(err) => {
                warn!(
                    "Skipping character {}/{}: {:#}",
                    entry.account, entry.character, err
                );
                summary.skipped += 1;
            }
        }
    }
    summary.processed = reports.len();

    let aggregate_path = output_dir.join(AGGREGATE_FILE);
    info!("Generating aggregated JSON file: {}", aggregate_path.display());
    match file_io::write_json(Some(aggregate_path.as_path()), &reports) {
        Ok(()) => summary.aggregate_written = true,
        Err(err) => error!("{:#}", err),
    }

    Ok(summary)
}

/// Decode one character and write its JSON file.
///
/// A failed write does not drop the character from the aggregate.
fn process_character(
    dirs: &SaveDirs,
    output_dir: &Path,
    entry: &CharacterEntry,
) -> Result<(CharacterReport, bool)> {
    let report = load_report(dirs, &entry.character, &entry.account)?;

    let path = output_dir.join(format!("{}.json", entry.character));
    let written = match file_io::write_json(Some(path.as_path()), &report) {
        Ok(()) => true,
        Err(err) => {
            error!("{:#}", err);
            false
        }
    };

    Ok((report, written))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::fixtures::*;
    use std::fs;

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_batch_export() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dirs = pvpgn_tree(temp_dir.path());
        let out = temp_dir.path().join("out");
        fs::create_dir_all(&out).unwrap();

        let charinfo = charinfo_bytes("Sorsi", "Zgan");
        add_character(&dirs, "zgan", "sorsi", Some(save_bytes(1, 90)), Some(charinfo));
        add_character(&dirs, "abc", "tesla", Some(save_bytes(4, 12)), None);
        // Listed in charinfo but no save file
        add_character(&dirs, "abc", "ghost", None, None);

        let summary = run(&dirs, &out).unwrap();
        assert_eq!(
            summary,
            BatchSummary {
                processed: 2,
                skipped: 1,
                write_failures: 0,
                aggregate_written: true,
            }
        );

        let sorsi = read_json(&out.join("sorsi.json"));
        assert_eq!(sorsi["character_info"]["name"], "Sorsi");
        assert_eq!(sorsi["character_info"]["class"], "Sorceress");
        assert_eq!(sorsi["item_stats"]["soj_count"], 1);
        assert!(out.join("tesla.json").exists());
        assert!(!out.join("ghost.json").exists());

        let all = read_json(&out.join(AGGREGATE_FILE));
        let all = all.as_array().unwrap();
        assert_eq!(all.len(), 2);
        // Sorted by account, then character
        assert_eq!(all[0]["character_info"]["name"], "tesla");
        assert_eq!(all[0]["character_info"]["class"], "Barbarian");
        assert_eq!(all[1]["character_info"]["name"], "Sorsi");
        assert_eq!(all[1]["item_stats"]["total_items"], 2);
    }

    #[test]
    fn test_batch_empty_server() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dirs = pvpgn_tree(temp_dir.path());
        let out = temp_dir.path().to_path_buf();

        let summary = run(&dirs, &out).unwrap();
        assert_eq!(summary.processed, 0);
        assert!(summary.aggregate_written);
        assert_eq!(read_json(&out.join(AGGREGATE_FILE)), serde_json::json!([]));
    }

    #[test]
    fn test_batch_missing_output_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dirs = pvpgn_tree(temp_dir.path());
        add_character(&dirs, "abc", "tesla", Some(save_bytes(4, 12)), None);

        let summary = run(&dirs, &temp_dir.path().join("missing")).unwrap();
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.write_failures, 1);
        assert!(!summary.aggregate_written);
    }

    #[test]
    fn test_batch_missing_charinfo_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dirs = SaveDirs {
            charinfo: temp_dir.path().join("nope"),
            charsave: temp_dir.path().to_path_buf(),
        };
        assert!(run(&dirs, temp_dir.path()).is_err());
    }
}
