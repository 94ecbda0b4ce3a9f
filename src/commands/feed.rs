use chrono::Local;
use clap::{Args, Subcommand};
use std::io::{self, Write};
use std::time::Duration;

use babylog::{DayKey, FeedingSession, Side, Tracker};

use super::{now_time, parse_day, parse_time};

#[derive(Args)]
pub struct FeedCommand {
    #[command(subcommand)]
    pub command: FeedSubcommand,
}

#[derive(Subcommand)]
pub enum FeedSubcommand {
    /// Start a feeding timer; the session is saved when you press Enter
    Start {
        /// Breast (left or right)
        side: String,

        /// Comment saved with the session
        #[arg(long)]
        comment: Option<String>,
    },

    /// Record a finished feeding session
    Log {
        /// Breast(s) used, in order (left, right)
        #[arg(required = true)]
        sides: Vec<String>,

        /// Start time (HH:MM)
        #[arg(long)]
        start: String,

        /// End time (HH:MM)
        #[arg(long)]
        end: String,

        /// Date (D.M.YYYY or YYYY-MM-DD), defaults to today
        #[arg(long, short)]
        date: Option<String>,

        /// Comment saved with the session
        #[arg(long)]
        comment: Option<String>,
    },
}

impl FeedCommand {
    pub async fn run(&self, tracker: &Tracker) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            FeedSubcommand::Start { side, comment } => {
                let side: Side = side.parse()?;
                self.run_timer(side, comment, tracker).await
            }
            FeedSubcommand::Log {
                sides,
                start,
                end,
                date,
                comment,
            } => {
                let sides = sides
                    .iter()
                    .map(|s| s.parse::<Side>())
                    .collect::<Result<Vec<_>, _>>()?;
                let day = parse_day(date)?;

                let mut session =
                    FeedingSession::with_sides(parse_time(start)?, parse_time(end)?, sides);
                if let Some(c) = comment.as_ref().filter(|c| !c.is_empty()) {
                    session = session.with_comment(c);
                }

                tracker
                    .add_feeding_event(day, session.clone())
                    .await
                    .map_err(|e| format!("Error saving feeding session: {}", e))?;

                println!("Feeding session recorded on {}: {}", day, session);
                Ok(())
            }
        }
    }

    async fn run_timer(
        &self,
        side: Side,
        comment: &Option<String>,
        tracker: &Tracker,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let started = Local::now();
        let start = now_time();

        println!("Feeding started on {} breast at {}", side, start);
        println!("Press Enter to end the session.");

        let mut enter = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            io::stdin().read_line(&mut line).map(|_| ())
        });
        let mut ticker = tokio::time::interval(Duration::from_secs(1));

        loop {
            tokio::select! {
                result = &mut enter => {
                    result??;
                    break;
                }
                _ = ticker.tick() => {
                    let elapsed = (Local::now() - started).to_std().unwrap_or_default();
                    print!("\r{}", format_elapsed(elapsed));
                    io::stdout().flush()?;
                }
            }
        }
        println!();

        let mut session = FeedingSession::new(start, now_time(), side);
        if let Some(c) = comment.as_ref().filter(|c| !c.is_empty()) {
            session = session.with_comment(c);
        }

        tracker
            .add_feeding_event(DayKey::today(), session)
            .await
            .map_err(|e| format!("Error saving feeding session: {}", e))?;

        println!("Feeding session ended: {} breast", side);
        Ok(())
    }
}

/// Elapsed time as `MM:SS`; minutes keep counting past an hour.
fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_secs(0)), "00:00");
        assert_eq!(format_elapsed(Duration::from_secs(75)), "01:15");
        assert_eq!(format_elapsed(Duration::from_secs(3725)), "62:05");
    }
}
