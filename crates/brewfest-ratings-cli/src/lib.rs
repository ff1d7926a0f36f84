//! BrewFest Ratings CLI — console front end for the ratings pipeline.

pub mod commands;
pub mod output;

pub use commands::run_cmd::RunOptions;
