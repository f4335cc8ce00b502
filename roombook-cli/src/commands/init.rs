//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the roombook data directory and database.

use crate::error::CliError;
use crate::utils::{resolve_data_dir, GlobalOptions};
use clap::Args;
use roombook::config::CONFIG_FILE_NAME;
use roombook::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use std::fs;
use std::path::Path;

/// Configuration written by `init --with-config`, spelling out every default.
pub const DEFAULT_CONFIG: &str = "\
# roombook configuration
pagination:
  default_page_size: 10
  max_page_size: 100
maximum_lock_wait_seconds: 5
reject_client_id: true
output_format: table
";

/// Initialize the roombook data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Remove an existing database and start empty
    #[arg(long)]
    overwrite: bool,

    /// Create a default configuration file
    #[arg(long)]
    with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` does not apply here.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global)?;
        let db_path = data_dir.join(DATABASE_FILE_NAME);
        let config_path = data_dir.join(CONFIG_FILE_NAME);

        if self.dry_run {
            self.preview(&data_dir, &db_path, &config_path);
            return Ok(());
        }

        let data_dir_created = !data_dir.exists();
        fs::create_dir_all(&data_dir)?;

        let database_existed = db_path.exists();
        if database_existed && self.overwrite {
            remove_database_files(&db_path)?;
        }

        let db = Database::open(DatabaseConfig::new(&db_path))?;
        db.verify_integrity()?;

        let config_created = self.with_config && !config_path.exists();
        if config_created {
            fs::write(&config_path, DEFAULT_CONFIG)?;
        }

        println!("Initialized roombook in: {}", data_dir.display());
        if data_dir_created {
            println!("  - Created data directory");
        }
        match (database_existed, self.overwrite) {
            (false, _) => println!("  - Created database"),
            (true, true) => println!("  - Recreated database"),
            (true, false) => println!("  - Database already exists"),
        }
        if config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }

    fn preview(&self, data_dir: &Path, db_path: &Path, config_path: &Path) {
        println!("Dry-run mode: no changes will be made");
        println!();
        println!("Would initialize roombook in: {}", data_dir.display());

        if data_dir.exists() {
            println!("  - Data directory already exists: {}", data_dir.display());
        } else {
            println!("  - Create data directory: {}", data_dir.display());
        }

        if !db_path.exists() {
            println!("  - Create database: {}", db_path.display());
        } else if self.overwrite {
            println!("  - Recreate database: {}", db_path.display());
        } else {
            println!("  - Keep existing database: {}", db_path.display());
        }

        if self.with_config {
            if config_path.exists() {
                println!(
                    "  - Configuration file already exists (will not overwrite): {}",
                    config_path.display()
                );
            } else {
                println!("  - Create configuration file: {}", config_path.display());
            }
        }
    }
}

/// Remove the database file and its WAL companions.
fn remove_database_files(db_path: &Path) -> Result<(), CliError> {
    fs::remove_file(db_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut companion = db_path.as_os_str().to_owned();
        companion.push(suffix);
        let companion = Path::new(&companion);
        if companion.exists() {
            fs::remove_file(companion)?;
        }
    }
    Ok(())
}
