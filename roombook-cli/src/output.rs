//! Rendering of reservations and availability reports.
//!
//! Every command that prints a reservation goes through here, so the
//! table, JSON, CSV and TSV layouts stay identical across commands.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use roombook::config::{Config, OutputFormat as ConfiguredFormat};
use roombook::{AvailabilityReport, Reservation};
use std::io::Write;

/// Column headers for tabular output.
pub const COLUMN_HEADERS: [&str; 6] = [
    "id",
    "user_id",
    "room_id",
    "start_date",
    "end_date",
    "status",
];

/// Output format selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table format (human-readable)
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// TSV format (tab-separated values)
    Tsv,
}

impl From<ConfiguredFormat> for OutputFormat {
    fn from(format: ConfiguredFormat) -> Self {
        match format {
            ConfiguredFormat::Table => Self::Table,
            ConfiguredFormat::Json => Self::Json,
            ConfiguredFormat::Csv => Self::Csv,
            ConfiguredFormat::Tsv => Self::Tsv,
        }
    }
}

/// `--format` flag shared by every printing command.
#[derive(Debug, Clone, Args)]
pub struct FormatArgs {
    /// Output format (default: configured `output_format`, else table)
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<OutputFormat>,
}

impl FormatArgs {
    /// The flag if given, otherwise the configured format.
    pub fn resolve(&self, config: &Config) -> OutputFormat {
        self.format
            .unwrap_or_else(|| config.output_format().into())
    }
}

fn record(reservation: &Reservation, missing: &str) -> [String; 6] {
    [
        reservation
            .id()
            .map_or_else(|| missing.to_string(), |id| id.to_string()),
        reservation.user_id().to_string(),
        reservation.room_id().to_string(),
        reservation.start_date().format("%F").to_string(),
        reservation.end_date().format("%F").to_string(),
        reservation.status().to_string(),
    ]
}

fn write_table<W: Write>(out: &mut W, reservations: &[Reservation]) -> Result<(), CliError> {
    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(out, "{header_line}")?;

    for reservation in reservations {
        writeln!(out, "{}", record(reservation, "-").join("\t"))?;
    }

    Ok(())
}

fn write_delimited<W: Write>(
    out: &mut W,
    reservations: &[Reservation],
    delimiter: u8,
) -> Result<(), CliError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    writer.write_record(COLUMN_HEADERS)?;
    for reservation in reservations {
        writer.write_record(record(reservation, ""))?;
    }
    writer.flush()?;

    Ok(())
}

/// Write a page of reservations. JSON output is an array.
pub fn write_reservations<W: Write>(
    out: &mut W,
    format: OutputFormat,
    reservations: &[Reservation],
) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => write_table(out, reservations),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, reservations)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Csv => write_delimited(out, reservations, b','),
        OutputFormat::Tsv => write_delimited(out, reservations, b'\t'),
    }
}

/// Write one reservation. JSON output is a single object.
pub fn write_reservation<W: Write>(
    out: &mut W,
    format: OutputFormat,
    reservation: &Reservation,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        serde_json::to_writer_pretty(&mut *out, reservation)?;
        writeln!(out)?;
        return Ok(());
    }
    write_reservations(out, format, std::slice::from_ref(reservation))
}

/// Write an availability report: the message, or `{message, status}` as
/// JSON.
pub fn write_availability<W: Write>(
    out: &mut W,
    format: OutputFormat,
    report: &AvailabilityReport,
) -> Result<(), CliError> {
    if format == OutputFormat::Json {
        let body = serde_json::json!({
            "message": report.message,
            "status": report.status,
        });
        serde_json::to_writer_pretty(&mut *out, &body)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report.message)?;
    }
    Ok(())
}

/// Print one reservation to stdout.
pub fn print_reservation(format: OutputFormat, reservation: &Reservation) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_reservation(&mut handle, format, reservation)
}

/// Print a page of reservations to stdout.
pub fn print_reservations(
    format: OutputFormat,
    reservations: &[Reservation],
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_reservations(&mut handle, format, reservations)
}

/// Print an availability report to stdout.
pub fn print_availability(format: OutputFormat, report: &AvailabilityReport) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    write_availability(&mut handle, format, report)
}
