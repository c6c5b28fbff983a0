//! Configuration management for d2stat CLI

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::DirArgs;

/// Default PvPGN account metadata root
pub const DEFAULT_CHARINFO_DIR: &str = "/usr/local/pvpgn/var/pvpgn/charinfo";
/// Default PvPGN save file root
pub const DEFAULT_CHARSAVE_DIR: &str = "/usr/local/pvpgn/var/pvpgn/charsave";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    pub charinfo_dir: Option<PathBuf>,
    pub charsave_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Resolved character directories for one run
#[derive(Debug, Clone, PartialEq)]
pub struct SaveDirs {
    pub charinfo: PathBuf,
    pub charsave: PathBuf,
}

impl SaveDirs {
    /// Save files are flat: `<charsave>/<character>`
    pub fn save_path(&self, character: &str) -> PathBuf {
        self.charsave.join(character)
    }

    /// Metadata files are per account: `<charinfo>/<account>/<character>`
    pub fn charinfo_path(&self, account: &str, character: &str) -> PathBuf {
        self.charinfo.join(account).join(character)
    }
}

impl Config {
    /// Get the path to the default config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("d2stat");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self, path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(config_path)
    }

    /// Resolve directories: explicit flag, then --pvpdir, then config, then built-in default
    pub fn resolve_dirs(&self, args: &DirArgs) -> SaveDirs {
        let pick = |explicit: &Option<PathBuf>,
                    subdir: &str,
                    configured: &Option<PathBuf>,
                    default: &str| {
            explicit
                .clone()
                .or_else(|| args.pvpdir.as_ref().map(|p| p.join(subdir)))
                .or_else(|| configured.clone())
                .unwrap_or_else(|| PathBuf::from(default))
        };

        SaveDirs {
            charinfo: pick(
                &args.charinfo_dir,
                "charinfo",
                &self.charinfo_dir,
                DEFAULT_CHARINFO_DIR,
            ),
            charsave: pick(
                &args.charsave_dir,
                "charsave",
                &self.charsave_dir,
                DEFAULT_CHARSAVE_DIR,
            ),
        }
    }

    /// Apply directory flags to the stored configuration
    pub fn set_dirs(&mut self, args: &DirArgs) {
        if let Some(pvpdir) = &args.pvpdir {
            self.charinfo_dir = Some(pvpdir.join("charinfo"));
            self.charsave_dir = Some(pvpdir.join("charsave"));
        }
        if let Some(dir) = &args.charinfo_dir {
            self.charinfo_dir = Some(dir.clone());
        }
        if let Some(dir) = &args.charsave_dir {
            self.charsave_dir = Some(dir.clone());
        }
    }
}
