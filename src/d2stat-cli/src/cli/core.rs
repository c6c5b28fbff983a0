//! Core CLI definitions

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "d2stat")]
#[command(about = "Diablo II character statistics exporter for PvPGN", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "D2STAT_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single character
    #[command(visible_alias = "s")]
    Show(ShowArgs),

    /// Export every character of every account as JSON
    #[command(visible_alias = "a")]
    All(AllArgs),

    /// List item marker offsets in a save file
    Scan {
        /// Path to character save file
        input: PathBuf,

        /// Also list the item records counted for statistics
        #[arg(long)]
        items: bool,
    },

    /// Configure default directories
    #[command(visible_alias = "c")]
    Configure {
        #[command(flatten)]
        dirs: DirArgs,

        /// Default output directory for `all`
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}

/// Directory overrides shared by commands that read character files
#[derive(Args, Debug, Clone, Default)]
pub struct DirArgs {
    /// PvPGN var directory holding charinfo/ and charsave/
    #[arg(long, value_name = "DIR")]
    pub pvpdir: Option<PathBuf>,

    /// Account metadata root (<dir>/<account>/<character>)
    #[arg(long, visible_alias = "cid", value_name = "DIR")]
    pub charinfo_dir: Option<PathBuf>,

    /// Save file root (<dir>/<character>)
    #[arg(long, visible_alias = "csd", value_name = "DIR")]
    pub charsave_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Character name
    #[arg(short = 'c', long = "character", value_name = "NAME")]
    pub character: String,

    /// Account name
    #[arg(short = 'a', long = "account", value_name = "ACCOUNT")]
    pub account: String,

    #[command(flatten)]
    pub dirs: DirArgs,

    /// Print JSON instead of the text report
    #[arg(short = 'o', long)]
    pub json: bool,

    /// Write JSON to a file instead of stdout
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct AllArgs {
    /// Output directory for JSON files (prompts if not given or configured)
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub dirs: DirArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from([
            "d2stat", "show", "-c", "sorsi", "-a", "zgan", "-o", "-f=/tmp/sorsi.json",
        ])
        .unwrap();

        match cli.command {
            Commands::Show(args) => {
                assert_eq!(args.character, "sorsi");
                assert_eq!(args.account, "zgan");
                assert!(args.json);
                assert_eq!(args.file, Some(PathBuf::from("/tmp/sorsi.json")));
                assert!(args.dirs.pvpdir.is_none());
            }
            _ => panic!("expected show"),
        }
    }

    #[test]
    fn test_parse_show_requires_names() {
        assert!(Cli::try_parse_from(["d2stat", "show", "-c", "sorsi"]).is_err());
    }

    #[test]
    fn test_parse_all_with_dirs() {
        let cli = Cli::try_parse_from([
            "d2stat",
            "-vv",
            "all",
            "-o",
            "/var/www/d2stats",
            "--cid",
            "/srv/charinfo",
            "--charsave-dir",
            "/srv/charsave",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::All(args) => {
                assert_eq!(args.output_dir, Some(PathBuf::from("/var/www/d2stats")));
                assert_eq!(args.dirs.charinfo_dir, Some(PathBuf::from("/srv/charinfo")));
                assert_eq!(args.dirs.charsave_dir, Some(PathBuf::from("/srv/charsave")));
            }
            _ => panic!("expected all"),
        }
    }
}
