//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up d2stat CLI defaults.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::cli::DirArgs;
use crate::config::Config;

/// Handle the configure command
///
/// # Arguments
/// * `config_path` - Config file override (`--config`)
/// * `dirs` - Directory defaults to store
/// * `output_dir` - Default output directory for `all`
/// * `show` - If true, show current configuration
pub fn handle(
    config_path: Option<&Path>,
    dirs: &DirArgs,
    output_dir: Option<PathBuf>,
    show: bool,
) -> Result<()> {
    let mut config = Config::load(config_path)?;

    if show {
        print!("{}", render_config(&config));
        if let Ok(path) = resolved_path(config_path) {
            println!("Config file: {}", path.display());
        }
        return Ok(());
    }

    let changed = dirs.pvpdir.is_some()
        || dirs.charinfo_dir.is_some()
        || dirs.charsave_dir.is_some()
        || output_dir.is_some();
    if !changed {
        show_usage();
        return Ok(());
    }

    config.set_dirs(dirs);
    if output_dir.is_some() {
        config.output_dir = output_dir;
    }
    let saved = config.save(config_path)?;

    print!("{}", render_config(&config));
    println!("Config saved to: {}", saved.display());

    Ok(())
}

fn resolved_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(path) => Ok(path.to_path_buf()),
        None => Config::config_path(),
    }
}

/// Display current configuration, including effective directories
fn render_config(config: &Config) -> String {
    let dirs = config.resolve_dirs(&DirArgs::default());
    let output = config
        .output_dir
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(prompt)".to_string());

    format!(
        "Charinfo directory: {}\nCharsave directory: {}\nOutput directory: {}\n",
        dirs.charinfo.display(),
        dirs.charsave.display(),
        output
    )
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: d2stat configure --pvpdir /usr/local/pvpgn/var/pvpgn");
    println!("   or: d2stat configure --charinfo-dir DIR --charsave-dir DIR");
    println!("   or: d2stat configure --output-dir /var/www/html/d2stats");
    println!("   or: d2stat configure --show");
}
