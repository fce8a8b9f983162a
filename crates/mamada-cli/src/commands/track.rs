//! Interactive feeding timer.
//!
//! Reads one command per line from stdin while a [`Ticker`] advances the
//! engine once per second. The ticker lives only as long as the feeding.

use std::io::Write;

use clap::Args;
use mamada_core::{
    format_duration, Config, Event, KeyValueStore, Side, StopOutcome, Ticker, TimerState, Tracker,
    View,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use super::open_tracker;

#[derive(Args)]
pub struct TrackArgs {
    /// Side to start on: left or right
    pub side: Side,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    TogglePause,
    Stop,
    Unknown,
}

impl Input {
    fn parse(line: &str) -> Option<Input> {
        match line.trim().to_lowercase().as_str() {
            "" => None,
            "p" | "pause" | "resume" => Some(Input::TogglePause),
            "s" | "stop" | "q" | "quit" => Some(Input::Stop),
            _ => Some(Input::Unknown),
        }
    }
}

pub fn run(args: TrackArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = open_tracker()?;
    if !tracker.navigate(View::Home) {
        return Err("profile incomplete; run `mamada-cli profile set` first".into());
    }
    let labels = Config::load()?.report.language.labels();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(track(&mut tracker, args.side));
    // A pending stdin read cannot be cancelled; don't wait for it.
    runtime.shutdown_background();

    let outcome = finish(&mut tracker, result)?;
    println!();
    match (&outcome.recorded, &outcome.warning) {
        (Some(session), None) => println!(
            "Recorded {} - {}",
            labels.side(session.side),
            format_duration(session.duration_secs)
        ),
        (Some(session), Some(warning)) => {
            println!(
                "Recorded {} - {} (not saved: {warning})",
                labels.side(session.side),
                format_duration(session.duration_secs)
            );
        }
        (None, _) => println!("No time elapsed, nothing recorded."),
    }
    Ok(())
}

/// Stop the feeding and record it, then surface any error from the loop.
fn finish<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    result: Result<(), Box<dyn std::error::Error>>,
) -> Result<StopOutcome, Box<dyn std::error::Error>> {
    let outcome = tracker.stop();
    result?;
    Ok(outcome)
}

/// Run the timer until the user stops it. The engine is left active; the
/// caller stops it and records the session.
async fn track<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    side: Side,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(event) = tracker.start(side) {
        tracing::debug!(?event, "feeding started");
    }
    println!("Timing {side} side. Commands: p = pause/resume, s = stop.");
    render(tracker.engine().elapsed_secs(), tracker.engine().state())?;

    let (tx, mut ticks) = mpsc::unbounded_channel();
    let mut ticker = Ticker::spawn(Ticker::PERIOD, tx);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(_) = ticks.recv() => {
                if let Some(Event::TimerTicked { elapsed_secs }) = tracker.tick() {
                    render(elapsed_secs, TimerState::Running)?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match Input::parse(&line) {
                    Some(Input::TogglePause) => {
                        tracker.toggle_pause();
                        render(tracker.engine().elapsed_secs(), tracker.engine().state())?;
                    }
                    Some(Input::Stop) => break,
                    Some(Input::Unknown) => eprintln!("unknown command: {}", line.trim()),
                    None => {}
                }
            }
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    ticker.cancel();
    tracing::debug!(ticker_active = ticker.is_active(), "feeding loop finished");
    Ok(())
}

fn render(elapsed_secs: u64, state: TimerState) -> std::io::Result<()> {
    let suffix = if state == TimerState::Paused { " (paused)" } else { "         " };
    let mut stdout = std::io::stdout();
    write!(stdout, "\r{}{}", format_duration(elapsed_secs), suffix)?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mamada_core::{MemoryStore, Profile};

    #[test]
    fn input_commands() {
        assert_eq!(Input::parse("p"), Some(Input::TogglePause));
        assert_eq!(Input::parse(" Resume "), Some(Input::TogglePause));
        assert_eq!(Input::parse("stop"), Some(Input::Stop));
        assert_eq!(Input::parse("q"), Some(Input::Stop));
        assert_eq!(Input::parse("dance"), Some(Input::Unknown));
        assert_eq!(Input::parse("  "), None);
    }

    #[test]
    fn failed_loop_still_records_feeding() {
        let kv = MemoryStore::new();
        let mut tracker = Tracker::open(&kv);
        tracker.save_profile(&Profile::new("Ana", "Leo")).unwrap();
        tracker.start(Side::Left);
        for _ in 0..3 {
            tracker.tick();
        }

        let err = finish(&mut tracker, Err("stdout closed".into())).unwrap_err();
        assert_eq!(err.to_string(), "stdout closed");
        assert!(!tracker.engine().is_active());
        assert_eq!(tracker.sessions().len(), 1);
        assert_eq!(Tracker::open(&kv).sessions().latest().unwrap().duration_secs, 3);
    }
}
