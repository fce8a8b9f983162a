use chrono::{Local, NaiveDate};
use clap::Subcommand;
use mamada_core::model::TIME_FORMAT;
use mamada_core::{display_date, format_duration, parse_date, Config};

use super::open_tracker;

#[derive(Subcommand)]
pub enum SessionsAction {
    /// List recorded feedings, newest first
    List {
        /// Only today's feedings
        #[arg(long, conflicts_with = "date")]
        today: bool,
        /// Only feedings on this day (dd/mm/yyyy)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: SessionsAction) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker()?;

    match action {
        SessionsAction::List { today, date, json } => {
            let day = if today {
                Some(Local::now().date_naive())
            } else {
                date
            };
            let sessions = match day {
                Some(day) => tracker.today_sessions(day),
                None => tracker.sessions().clone(),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&sessions)?);
                return Ok(());
            }
            if sessions.is_empty() {
                println!("No feedings recorded.");
                return Ok(());
            }

            let labels = Config::load()?.report.language.labels();
            for session in &sessions {
                println!(
                    "{}  {}  {:<14} {}",
                    display_date(session.date),
                    session.time.format(TIME_FORMAT),
                    labels.side(session.side),
                    format_duration(session.duration_secs)
                );
            }
            println!(
                "{} feedings, {} total",
                sessions.len(),
                format_duration(sessions.total_duration_secs())
            );
        }
    }
    Ok(())
}
