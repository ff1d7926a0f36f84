//! Subcommand implementations for the `brewfest-ratings` binary.

pub mod catalog_cmd;
pub mod run_cmd;
