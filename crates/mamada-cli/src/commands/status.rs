use mamada_core::model::TIME_FORMAT;
use mamada_core::{display_date, format_duration, Config, View, ViewController};
use serde_json::json;

use super::open_tracker;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = open_tracker()?;
    let labels = Config::load()?.report.language.labels();
    let last = tracker.sessions().latest();
    let navigation = ViewController::shows_navigation(tracker.profile());

    if json {
        let status = json!({
            "view": tracker.view(),
            "navigation": navigation,
            "profile": tracker.profile(),
            "sessions": tracker.sessions().len(),
            "last_session": last,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    if tracker.view() == View::Profile {
        println!("No profile yet. Run `mamada-cli profile set --mother <NAME> --baby <NAME>`.");
        return Ok(());
    }

    let profile = tracker.profile();
    println!("Hello, {}! Feeding time for {}.", profile.mother_name, profile.baby_name);
    match last {
        Some(session) => println!(
            "Last feeding: {} on {} at {} ({})",
            labels.side(session.side),
            display_date(session.date),
            session.time.format(TIME_FORMAT),
            format_duration(session.duration_secs)
        ),
        None => println!("No feedings recorded yet."),
    }
    if navigation {
        println!("Screens: `track <side>`, `report show`, `profile set`.");
    }
    Ok(())
}
