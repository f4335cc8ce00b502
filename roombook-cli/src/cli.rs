//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ApproveCommand, CancelCommand, CheckCommand, CreateCommand, DeleteCommand, GetCommand,
    InitCommand, ListCommand, UpdateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for managing room reservations.
#[derive(Parser)]
#[command(name = "roombook")]
#[command(version, about = "Manage room reservations and their approval", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ROOMBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the configured lock wait (in seconds)
    #[arg(long, value_name = "SECONDS", global = true, env = "ROOMBOOK_BUSY_TIMEOUT")]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true)]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Submit a new PENDING reservation
    Create(CreateCommand),

    /// Show one reservation
    Get(GetCommand),

    /// List reservations, one page at a time
    List(ListCommand),

    /// Rewrite a PENDING reservation
    Update(UpdateCommand),

    /// Delete a reservation in any status
    Delete(DeleteCommand),

    /// Approve a PENDING reservation if the room is free
    Approve(ApproveCommand),

    /// Cancel an APPROVED reservation
    Cancel(CancelCommand),

    /// Check whether a room is free for a period
    Check(CheckCommand),

    /// Initialize the data directory and database
    Init(InitCommand),
}
