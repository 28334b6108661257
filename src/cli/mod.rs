//! Command-line front end for `crudforge-gen`
//!
//! Thin glue only: argument parsing, config resolution, backend selection,
//! and result-map printing. The pipeline itself never writes to the console.

mod commands;

pub use commands::{run_cli, Cli, Commands};
