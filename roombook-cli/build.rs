//! Build script for roombook-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("roombook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage room reservations and their approval")
        .long_about(
            "Command-line tool for submitting, approving and cancelling room reservations",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("ROOMBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the configured lock wait (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("ROOMBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("create")
                .about("Submit a new PENDING reservation")
                .long_about("Create a reservation for a user, room and date range"),
            Command::new("get")
                .about("Show one reservation")
                .long_about("Display a reservation by id"),
            Command::new("list")
                .about("List reservations, one page at a time")
                .long_about("Page through reservations in id order, optionally by room or user"),
            Command::new("update")
                .about("Rewrite a PENDING reservation")
                .long_about("Replace the user, room and dates of a reservation awaiting approval"),
            Command::new("delete")
                .about("Delete a reservation in any status")
                .long_about("Remove a reservation and print the removed record"),
            Command::new("approve")
                .about("Approve a PENDING reservation if the room is free")
                .long_about(
                    "Approve a reservation unless an approved reservation overlaps it on the same room",
                ),
            Command::new("cancel")
                .about("Cancel an APPROVED reservation")
                .long_about("Withdraw an approved reservation, freeing the room"),
            Command::new("check")
                .about("Check whether a room is free for a period")
                .long_about("Report Available or Not available for a room and date range"),
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Set up the roombook database and optional configuration file"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main roombook.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("roombook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
