//! Profile and session records.
//!
//! Field names on the wire follow the persisted layout (`motherName`,
//! `duration`, ...). Dates are held as calendar values and only rendered
//! in `dd/mm/yyyy` form when serialized or displayed.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Display form of a session date.
pub const DATE_FORMAT: &str = "%d/%m/%Y";
/// Display form of a session time.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Caregiver and infant names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub mother_name: String,
    #[serde(default)]
    pub baby_name: String,
}

impl Profile {
    pub fn new(mother_name: impl Into<String>, baby_name: impl Into<String>) -> Self {
        Self {
            mother_name: mother_name.into(),
            baby_name: baby_name.into(),
        }
    }

    /// Both names are non-empty after trimming.
    pub fn is_complete(&self) -> bool {
        !self.mother_name.trim().is_empty() && !self.baby_name.trim().is_empty()
    }

    /// Check completeness, returning a copy with trimmed names.
    pub fn validated(&self) -> Result<Profile, ValidationError> {
        let mother = self.mother_name.trim();
        let baby = self.baby_name.trim();

        let mut missing = Vec::new();
        if mother.is_empty() {
            missing.push("mother name");
        }
        if baby.is_empty() {
            missing.push("baby name");
        }
        if !missing.is_empty() {
            return Err(ValidationError::IncompleteProfile { missing });
        }

        Ok(Profile::new(mother, baby))
    }
}

/// Which breast a feeding used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" | "esquerdo" | "e" => Ok(Side::Left),
            "right" | "r" | "direito" | "d" => Ok(Side::Right),
            other => Err(ValidationError::InvalidValue {
                field: "side".into(),
                message: format!("expected 'left' or 'right', got '{other}'"),
            }),
        }
    }
}

/// One completed feeding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Creation timestamp in epoch milliseconds; strictly increasing.
    pub id: i64,
    #[serde(with = "date_format")]
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub time: NaiveTime,
    pub side: Side,
    /// Whole seconds spent running.
    #[serde(rename = "duration")]
    pub duration_secs: u64,
    pub mother_name: String,
    pub baby_name: String,
}

/// Parse a `dd/mm/yyyy` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|e| ValidationError::InvalidValue {
        field: "date".into(),
        message: format!("expected dd/mm/yyyy ({e})"),
    })
}

/// Render a date in `dd/mm/yyyy` form.
pub fn display_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(super::DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(&raw, super::DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}

mod time_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&time.format(super::TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveTime::parse_from_str(&raw, super::TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Completed sessions, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionCollection(Vec<Session>);

impl SessionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Session> {
        self.0.iter()
    }

    /// Most recent session, if any.
    pub fn latest(&self) -> Option<&Session> {
        self.0.first()
    }

    /// Add a session at the front.
    pub fn prepend(&mut self, session: Session) {
        self.0.insert(0, session);
    }

    /// Sessions recorded on `date`, in collection order.
    pub fn on(&self, date: NaiveDate) -> SessionCollection {
        SessionCollection(self.0.iter().filter(|s| s.date == date).cloned().collect())
    }

    pub fn total_duration_secs(&self) -> u64 {
        self.0
            .iter()
            .fold(0u64, |total, s| total.saturating_add(s.duration_secs))
    }
}

impl From<Vec<Session>> for SessionCollection {
    fn from(sessions: Vec<Session>) -> Self {
        Self(sessions)
    }
}

impl<'a> IntoIterator for &'a SessionCollection {
    type Item = &'a Session;
    type IntoIter = std::slice::Iter<'a, Session>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
