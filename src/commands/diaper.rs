use clap::Args;

use babylog::{DiaperEvent, DiaperKind, Tracker};

use super::{now_time, parse_day, parse_time};

#[derive(Args)]
pub struct DiaperCommand {
    /// Diaper type (wet, poopy, both)
    pub kind: String,

    /// Time of the change (HH:MM), defaults to now
    #[arg(long, short)]
    pub time: Option<String>,

    /// Date (D.M.YYYY or YYYY-MM-DD), defaults to today
    #[arg(long, short)]
    pub date: Option<String>,

    /// Comment saved with the change
    #[arg(long)]
    pub comment: Option<String>,
}

impl DiaperCommand {
    pub async fn run(&self, tracker: &Tracker) -> Result<(), Box<dyn std::error::Error>> {
        let kind: DiaperKind = self.kind.parse()?;
        let day = parse_day(&self.date)?;
        let time = match &self.time {
            Some(t) => parse_time(t)?,
            None => now_time(),
        };

        let mut event = DiaperEvent::new(kind, time);
        if let Some(c) = self.comment.as_ref().filter(|c| !c.is_empty()) {
            event = event.with_comment(c);
        }
        let message = event.recorded_message();

        tracker
            .add_feeding_event(day, event)
            .await
            .map_err(|e| format!("Error recording diaper change: {}", e))?;

        println!("{}", message);
        Ok(())
    }
}
