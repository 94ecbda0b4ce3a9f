use chrono::Local;
use clap::{Args, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use babylog::export::{backup, export_file_name, table};
use babylog::Tracker;

#[derive(Clone, ValueEnum, Default)]
pub enum ExportFormat {
    /// Full backup, restorable with `backup restore`
    #[default]
    Json,
    /// Feeding log as a spreadsheet table
    Csv,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Args)]
pub struct BackupCommand {
    #[command(subcommand)]
    pub command: BackupSubcommand,
}

#[derive(Subcommand)]
pub enum BackupSubcommand {
    /// Export all data to a file
    Export {
        /// Export format
        #[arg(long, short, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file ("-" for stdout), defaults to a dated file in the current directory
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Replace all data with the contents of a JSON backup
    Restore {
        /// Backup file to restore
        file: PathBuf,

        /// Skip confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
}

impl BackupCommand {
    pub async fn run(&self, tracker: &Tracker) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            BackupSubcommand::Export { format, output } => {
                let data = tracker.get_data().await;
                let path = output.clone().unwrap_or_else(|| {
                    PathBuf::from(export_file_name(
                        Local::now().date_naive(),
                        format.extension(),
                    ))
                });

                let mut buf = Vec::new();
                match format {
                    ExportFormat::Json => {
                        buf.extend_from_slice(backup::to_backup_json(&data)?.as_bytes());
                        buf.push(b'\n');
                    }
                    ExportFormat::Csv => {
                        table::write_csv(&table::event_rows(&data), &mut buf)?;
                    }
                }

                if path.as_os_str() == "-" {
                    io::stdout().write_all(&buf)?;
                } else {
                    std::fs::write(&path, &buf)
                        .map_err(|e| format!("Failed to write '{}': {}", path.display(), e))?;
                    println!("Exported {} days to {}", data.len(), path.display());
                }
                Ok(())
            }

            BackupSubcommand::Restore { file, yes } => {
                let text = std::fs::read_to_string(file)
                    .map_err(|e| format!("Failed to read '{}': {}", file.display(), e))?;

                if !yes {
                    print!("Replace all recorded data with '{}'? [y/N] ", file.display());
                    io::stdout().flush()?;

                    let mut input = String::new();
                    io::stdin().read_line(&mut input)?;

                    if !input.trim().eq_ignore_ascii_case("y") {
                        println!("Restore cancelled.");
                        return Ok(());
                    }
                }

                let restore_error = |e: &dyn std::fmt::Display| {
                    format!(
                        "Error restoring data. Please make sure the file is valid: {}",
                        e
                    )
                };
                let payload = backup::parse_backup(&text).map_err(|e| restore_error(&e))?;
                tracker
                    .restore_data(payload)
                    .await
                    .map_err(|e| restore_error(&e))?;

                println!("Data restored successfully");
                Ok(())
            }
        }
    }
}
