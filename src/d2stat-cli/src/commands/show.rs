//! Single character command handler

use anyhow::Result;
use d2stat::CharacterReport;
use std::fmt::Write as _;

use crate::character::load_report;
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::file_io;

/// Handle `show`: text report by default, JSON with --json or -f
pub fn handle(args: &ShowArgs, config: &Config) -> Result<()> {
    let dirs = config.resolve_dirs(&args.dirs);
    let report = load_report(&dirs, &args.character, &args.account)?;

    if let Some(path) = &args.file {
        file_io::write_json(Some(path.as_path()), &report)?;
        println!("JSON output successfully written to {}", path.display());
    } else if args.json {
        file_io::write_json(None, &report)?;
    } else {
        print!("{}", render_text(&report));
    }

    Ok(())
}

/// Human readable character analysis
pub fn render_text(report: &CharacterReport) -> String {
    let info = &report.character_info;
    let stats = &report.item_stats;
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "--- CHARACTER ANALYSIS ---");
    let _ = writeln!(out, "Character Name: {}", info.name);
    let _ = writeln!(out, "Account Name: {}", info.account_name);
    let _ = writeln!(out, "Level: {}", info.level);
    let _ = writeln!(out, "Class: {}", info.class);
    let _ = writeln!(out, "Status: {}", report.header.status());

    let _ = writeln!(out, "--- ITEM STATS ---");
    let _ = writeln!(out, "Total Items: {:4}", stats.total);
    let rows = [
        ("Low Quality", stats.low_quality),
        ("Normal", stats.normal),
        ("High Quality", stats.high_quality),
        ("Magic", stats.magic),
        ("Set", stats.set),
        ("Rare", stats.rare),
        ("Unique", stats.unique),
        ("Crafted", stats.crafted),
        ("SoJ", stats.named_ring_count),
    ];
    for (label, count) in rows {
        let _ = writeln!(out, "   -> {:<13} {:4}", format!("{}:", label), count);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::fixtures::*;
    use crate::cli::DirArgs;
    use crate::config::SaveDirs;
    use std::fs;
    use std::path::PathBuf;

    fn args(dirs: &SaveDirs, json: bool, file: Option<PathBuf>) -> ShowArgs {
        ShowArgs {
            character: "sorsi".to_string(),
            account: "zgan".to_string(),
            dirs: DirArgs {
                pvpdir: None,
                charinfo_dir: Some(dirs.charinfo.clone()),
                charsave_dir: Some(dirs.charsave.clone()),
            },
            json,
            file,
        }
    }

    #[test]
    fn test_render_text() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dirs = pvpgn_tree(temp_dir.path());
        add_character(&dirs, "zgan", "sorsi", Some(save_bytes(5, 42)), None);

        let report = load_report(&dirs, "sorsi", "zgan").unwrap();
        let text = render_text(&report);

        assert!(text.starts_with("--- CHARACTER ANALYSIS ---\n"));
        assert!(text.contains("Character Name: sorsi\n"));
        assert!(text.contains("Level: 42\n"));
        assert!(text.contains("Class: Druid\n"));
        assert!(text.contains("Status: Alive\n"));
        assert!(text.contains("Total Items:    2\n"));
        assert!(text.contains("   -> Unique:          1\n"));
        assert!(text.contains("   -> SoJ:             1\n"));
    }

    #[test]
    fn test_handle_writes_json_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dirs = pvpgn_tree(temp_dir.path());
        add_character(&dirs, "zgan", "sorsi", Some(save_bytes(3, 99)), None);
        let out = temp_dir.path().join("sorsi.json");

        handle(&args(&dirs, false, Some(out.clone())), &Config::default()).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["character_info"]["class"], "Paladin");
        assert_eq!(json["character_info"]["level"], 99);
        assert_eq!(json["item_stats"]["soj_count"], 1);
    }

    #[test]
    fn test_handle_missing_save_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dirs = pvpgn_tree(temp_dir.path());

        assert!(handle(&args(&dirs, true, None), &Config::default()).is_err());
    }
}
