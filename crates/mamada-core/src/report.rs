//! Daily feeding report.
//!
//! The report is plain text meant for chat apps and mail bodies. The
//! `*title*` markers render as bold in messaging apps.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::{display_date, Profile, SessionCollection, Side, TIME_FORMAT};

/// Report language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br")]
    PtBr,
}

impl Language {
    pub fn labels(&self) -> &'static ReportLabels {
        match self {
            Language::En => &ReportLabels::EN,
            Language::PtBr => &ReportLabels::PT_BR,
        }
    }
}

/// Fixed strings used by the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLabels {
    pub title: &'static str,
    pub mother: &'static str,
    pub baby: &'static str,
    pub no_sessions: &'static str,
    pub session_count: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub total_time: &'static str,
    pub signature: &'static str,
}

impl ReportLabels {
    pub const EN: ReportLabels = ReportLabels {
        title: "Feeding Report",
        mother: "Mother",
        baby: "Baby",
        no_sessions: "No feedings recorded today.",
        session_count: "Total feedings",
        left: "Left breast",
        right: "Right breast",
        total_time: "Total time",
        signature: "💜 Generated by Mamada Tracker",
    };

    pub const PT_BR: ReportLabels = ReportLabels {
        title: "Relatório de Mamadas",
        mother: "Mãe",
        baby: "Bebê",
        no_sessions: "Nenhuma mamada registrada hoje.",
        session_count: "Total de mamadas",
        left: "Seio Esquerdo",
        right: "Seio Direito",
        total_time: "Tempo total",
        signature: "💜 Gerado pelo Mamada Tracker",
    };

    pub fn side(&self, side: Side) -> &'static str {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Subject line for mail exports.
    pub fn subject(&self, date: NaiveDate) -> String {
        format!("{} - {}", self.title, display_date(date))
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::EN
    }
}

/// `MM:SS`, minutes uncapped (`6000` → `100:00`).
pub fn format_duration(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Render the report for `date`.
///
/// `sessions` must already be filtered to that date; they are listed in
/// the given order.
pub fn format_report(
    profile: &Profile,
    sessions: &SessionCollection,
    date: NaiveDate,
    labels: &ReportLabels,
) -> String {
    let mut report = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(report, "📊 *{} - {}*", labels.title, display_date(date));
    let _ = writeln!(report, "👩 {}: {}", labels.mother, profile.mother_name);
    let _ = writeln!(report, "👶 {}: {}", labels.baby, profile.baby_name);
    report.push('\n');

    if sessions.is_empty() {
        report.push_str(labels.no_sessions);
    } else {
        let _ = writeln!(report, "📈 {}: {}", labels.session_count, sessions.len());
        report.push('\n');
        for (index, session) in sessions.iter().enumerate() {
            let _ = writeln!(
                report,
                "{}. {} - {} - {}",
                index + 1,
                session.time.format(TIME_FORMAT),
                labels.side(session.side),
                format_duration(session.duration_secs)
            );
        }
        let _ = write!(
            report,
            "\n⏱️ {}: {}",
            labels.total_time,
            format_duration(sessions.total_duration_secs())
        );
    }

    report.push_str("\n\n");
    report.push_str(labels.signature);
    report
}
