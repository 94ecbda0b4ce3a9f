use clap::{Args, Subcommand};

use babylog::{Tracker, WeightMeasurement};

use super::{now_time, parse_day, OutputFormat};

#[derive(Args)]
pub struct WeightCommand {
    #[command(subcommand)]
    pub command: WeightSubcommand,
}

#[derive(Subcommand)]
pub enum WeightSubcommand {
    /// Record a weight measurement for today
    Add {
        /// Weight as read from the scale
        weight: String,

        /// Comment saved with the measurement
        #[arg(long)]
        comment: Option<String>,
    },

    /// Show the measurements of a day, newest first
    List {
        /// Date (D.M.YYYY or YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

impl WeightCommand {
    pub async fn run(&self, tracker: &Tracker) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            WeightSubcommand::Add { weight, comment } => {
                let weight = validate_weight(weight)?;
                let day = parse_day(&None)?;

                let mut measurement = WeightMeasurement::new(now_time(), weight);
                if let Some(c) = comment.as_ref().filter(|c| !c.is_empty()) {
                    measurement = measurement.with_comment(c);
                }

                tracker
                    .add_weight_measurement(day, measurement)
                    .await
                    .map_err(|e| format!("Error saving weight measurement: {}", e))?;

                println!("Weight measurement saved successfully");
                Ok(())
            }
            WeightSubcommand::List { date, format } => {
                let day = parse_day(date)?;
                let mut measurements = tracker
                    .get_day_data(&day)
                    .await
                    .map(|d| d.weight_log)
                    .unwrap_or_default();
                measurements.reverse();

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&measurements)?);
                    }
                    OutputFormat::Text => {
                        if measurements.is_empty() {
                            println!("No weight measurements for {}", day);
                            return Ok(());
                        }

                        println!("Weight measurements for {}", day);
                        println!("{}", "-".repeat(30));
                        for measurement in &measurements {
                            println!("  {}", measurement);
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

/// Checks that the value reads as a positive number and returns it trimmed.
fn validate_weight(weight: &str) -> Result<String, String> {
    let trimmed = weight.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(trimmed.to_string()),
        _ => Err(format!(
            "Invalid weight '{}'. Enter a positive number.",
            weight
        )),
    }
}
