//! End-to-end tests against the on-disk store.

use std::rc::Rc;

use chrono::{DateTime, Local, TimeZone};
use mamada_core::{
    parse_date, Database, Profile, RecordingSink, ReportLabels, ShareTarget, Side, Tracker,
    View,
};

fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2026, 10, 19, h, m, s).unwrap()
}

fn open(dir: &tempfile::TempDir) -> Tracker<Rc<Database>> {
    let db = Database::open_at(&dir.path().join("mamada.db")).unwrap();
    Tracker::open(Rc::new(db))
}

#[test]
fn test_single_feeding_report() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);
    assert_eq!(tracker.view(), View::Profile);

    tracker.save_profile(&Profile::new("Ana", "Leo")).unwrap();
    assert_eq!(tracker.view(), View::Home);

    tracker.start(Side::Left).unwrap();
    for _ in 0..125 {
        tracker.tick();
    }
    let outcome = tracker.stop_at(at(10, 0, 0));
    assert!(outcome.warning.is_none());

    // Fresh process
    let tracker = open(&dir);
    assert_eq!(tracker.view(), View::Home);
    assert_eq!(tracker.sessions().len(), 1);
    let session = tracker.sessions().latest().unwrap();
    assert_eq!(session.duration_secs, 125);
    assert_eq!(session.side, Side::Left);

    let report = tracker.report(parse_date("19/10/2026").unwrap(), &ReportLabels::EN);
    assert!(report.contains("1. 10:00:00 - Left breast - 02:05"));
    assert!(report.contains("⏱️ Total time: 02:05"));
}

#[test]
fn test_two_feedings_total() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);
    tracker.save_profile(&Profile::new("Ana", "Leo")).unwrap();

    tracker.start(Side::Left);
    (0..30).for_each(|_| {
        tracker.tick();
    });
    tracker.stop_at(at(8, 0, 0));

    tracker.start(Side::Right);
    (0..20).for_each(|_| {
        tracker.tick();
    });
    tracker.pause();
    (0..100).for_each(|_| {
        tracker.tick();
    });
    tracker.resume();
    (0..25).for_each(|_| {
        tracker.tick();
    });
    tracker.stop_at(at(11, 0, 0));

    let today = parse_date("19/10/2026").unwrap();
    let report = tracker.report(today, &ReportLabels::EN);
    assert!(report.contains("📈 Total feedings: 2"));
    assert!(report.contains("1. 11:00:00 - Right breast - 00:45"));
    assert!(report.contains("2. 08:00:00 - Left breast - 00:30"));
    assert!(report.contains("⏱️ Total time: 01:15"));

    let other_day = parse_date("20/10/2026").unwrap();
    assert!(tracker
        .report(other_day, &ReportLabels::EN)
        .contains("No feedings recorded today."));
}

#[test]
fn test_persisted_layout() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);
    tracker.save_profile(&Profile::new("Ana", "Leo")).unwrap();
    tracker.start(Side::Right);
    tracker.tick();
    tracker.stop_at(at(23, 59, 59));
    drop(tracker);

    let db = Database::open_at(&dir.path().join("mamada.db")).unwrap();
    let raw = db.kv_get("mamada-sessions").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &json.as_array().unwrap()[0];
    assert_eq!(first["date"], "19/10/2026");
    assert_eq!(first["time"], "23:59:59");
    assert_eq!(first["side"], "right");
    assert_eq!(first["duration"], 1);
    assert_eq!(first["motherName"], "Ana");
    assert_eq!(first["babyName"], "Leo");
    assert!(first["id"].is_i64());
}

#[test]
fn test_share_messaging_link() {
    let dir = tempfile::tempdir().unwrap();
    let mut tracker = open(&dir);
    tracker.save_profile(&Profile::new("Ana", "Leo")).unwrap();

    let sink = RecordingSink::new();
    let today = parse_date("19/10/2026").unwrap();
    let link = tracker.share_report(today, &ReportLabels::EN, ShareTarget::Messaging, &sink);
    assert!(link.starts_with("https://wa.me/?text="));
    assert!(link.contains("%0A"));
    assert!(!link.contains('\n'));
    assert_eq!(sink.links().len(), 1);
}
