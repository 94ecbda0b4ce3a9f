use clap::Args;

use babylog::{DayData, DayKey, Tracker, TrackingData};

use super::{parse_day, OutputFormat};

#[derive(Args)]
pub struct HistoryCommand {
    /// Only show this date (D.M.YYYY or YYYY-MM-DD)
    #[arg(long, short)]
    pub date: Option<String>,

    /// Output format
    #[arg(long, short, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

impl HistoryCommand {
    pub async fn run(&self, tracker: &Tracker) -> Result<(), Box<dyn std::error::Error>> {
        let data = match &self.date {
            Some(_) => {
                let day = parse_day(&self.date)?;
                tracker
                    .get_day_data(&day)
                    .await
                    .map(|d| TrackingData::from_iter([(day, d)]))
                    .unwrap_or_default()
            }
            None => tracker.get_data().await,
        };

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&data)?);
            }
            OutputFormat::Text => {
                if data.is_empty() {
                    println!("No records found.");
                    return Ok(());
                }

                for (day, day_data) in data.iter().rev() {
                    print_day(day, day_data);
                }
            }
        }
        Ok(())
    }
}

fn print_day(day: &DayKey, data: &DayData) {
    println!("{}", day);
    println!("{}", "-".repeat(40));

    for entry in &data.feeding_log {
        println!("  {}", entry);
    }
    if !data.weight_log.is_empty() {
        println!("  Weight:");
        for measurement in &data.weight_log {
            println!("    {}", measurement);
        }
    }

    println!(
        "  Total: {} feedings, {} diapers",
        data.feeding_count(),
        data.diaper_count()
    );
    println!();
}
