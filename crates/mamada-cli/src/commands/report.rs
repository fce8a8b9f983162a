use chrono::{Local, NaiveDate};
use clap::Subcommand;
use mamada_core::{parse_date, BrowserSink, Config, RecordingSink, ShareSink, ShareTarget, View};

use super::open_tracker;

#[derive(Subcommand)]
pub enum ReportAction {
    /// Print the daily report
    Show {
        /// Day to report on (dd/mm/yyyy), default today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
    },
    /// Export the daily report through a messaging or email link
    Share {
        /// messaging or email (default from config)
        target: Option<ShareTarget>,
        /// Day to report on (dd/mm/yyyy), default today
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,
        /// Print the link instead of opening it
        #[arg(long)]
        print_url: bool,
    },
}

pub fn run(action: ReportAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = open_tracker()?;
    if !tracker.navigate(View::Reports) {
        return Err("profile incomplete; run `mamada-cli profile set` first".into());
    }
    let config = Config::load()?;
    let labels = config.report.language.labels();

    match action {
        ReportAction::Show { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            println!("{}", tracker.report(date, labels));
        }
        ReportAction::Share {
            target,
            date,
            print_url,
        } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let target = target.unwrap_or(config.share.default_target);
            let open = config.share.open_links && !print_url;

            let recorder = RecordingSink::new();
            let sink: &dyn ShareSink = if open { &BrowserSink } else { &recorder };
            let link = tracker.share_report(date, labels, target, sink);
            println!("{link}");
        }
    }
    Ok(())
}
