//! Main entry point for the roombook CLI.
//!
//! This is the command-line interface for the roombook reservation system.
//! Each subcommand maps to one lifecycle operation and each failure class
//! to its own exit code (see `CliError::exit_code`).

use clap::Parser;
use roombook_cli::cli::{Cli, Command};
use roombook_cli::error::CliError;
use roombook_cli::utils::GlobalOptions;

fn main() {
    // Argument errors share the invalid-arguments exit code
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() {
                CliError::InvalidArguments(String::new()).exit_code()
            } else {
                0
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    let logger = roombook::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
        logger,
    };

    let result = match cli.command {
        Command::Create(cmd) => cmd.execute(&global),
        Command::Get(cmd) => cmd.execute(&global),
        Command::List(cmd) => cmd.execute(&global),
        Command::Update(cmd) => cmd.execute(&global),
        Command::Delete(cmd) => cmd.execute(&global),
        Command::Approve(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::Check(cmd) => cmd.execute(&global),
        Command::Init(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
