//! Command handlers for d2stat CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod all;
pub mod configure;
pub mod scan;
pub mod show;
