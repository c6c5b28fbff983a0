//! CLI argument definitions for d2stat
//!
//! This module contains all clap-derived structs and enums for CLI parsing.

mod core;

pub use core::{AllArgs, Cli, Commands, DirArgs, ShowArgs};
