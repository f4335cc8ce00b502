//! Library exports for roombook-cli.
//!
//! The binary is a thin wrapper over these modules; exporting them lets
//! integration tests and tooling reuse the CLI definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;
pub mod utils;

pub use cli::Cli;
