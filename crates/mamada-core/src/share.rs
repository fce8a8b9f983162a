//! Report export through messaging and email links.
//!
//! The core only builds the link. Opening it is delegated to a
//! [`ShareSink`], which is fire-and-forget: nothing it does is reported
//! back.

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Where a report goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    /// Chat app deep link.
    #[default]
    Messaging,
    /// Mail client link with subject and body.
    Email,
}

impl fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShareTarget::Messaging => f.write_str("messaging"),
            ShareTarget::Email => f.write_str("email"),
        }
    }
}

impl FromStr for ShareTarget {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "messaging" | "whatsapp" | "chat" => Ok(ShareTarget::Messaging),
            "email" | "mail" => Ok(ShareTarget::Email),
            other => Err(ValidationError::InvalidValue {
                field: "target".into(),
                message: format!("expected 'messaging' or 'email', got '{other}'"),
            }),
        }
    }
}

/// Build the link handing `report` to `target`.
pub fn share_link(target: ShareTarget, report: &str, subject: &str) -> String {
    match target {
        ShareTarget::Messaging => {
            format!("https://wa.me/?text={}", urlencoding::encode(report))
        }
        ShareTarget::Email => format!(
            "mailto:?subject={}&body={}",
            urlencoding::encode(subject),
            urlencoding::encode(report)
        ),
    }
}

/// Receiver of finished share links.
pub trait ShareSink {
    fn share(&self, target: ShareTarget, link: &str);
}

/// Opens links with the system handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSink;

impl ShareSink for BrowserSink {
    fn share(&self, target: ShareTarget, link: &str) {
        match open::that_detached(link) {
            Ok(()) => tracing::info!(%target, "opened share link"),
            Err(e) => tracing::warn!(%target, error = %e, "could not open share link"),
        }
    }
}

/// Keeps links instead of opening them.
#[derive(Debug, Default)]
pub struct RecordingSink {
    links: RefCell<Vec<(ShareTarget, String)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Links received so far, oldest first.
    pub fn links(&self) -> Vec<(ShareTarget, String)> {
        self.links.borrow().clone()
    }
}

impl ShareSink for RecordingSink {
    fn share(&self, target: ShareTarget, link: &str) {
        self.links.borrow_mut().push((target, link.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messaging_link_encodes_text() {
        let link = share_link(ShareTarget::Messaging, "a b\n*c*", "ignored");
        assert_eq!(link, "https://wa.me/?text=a%20b%0A%2Ac%2A");
    }

    #[test]
    fn email_link_has_subject_and_body() {
        let link = share_link(ShareTarget::Email, "line 1\nline 2", "Feeding Report - 19/10/2026");
        assert_eq!(
            link,
            "mailto:?subject=Feeding%20Report%20-%2019%2F10%2F2026&body=line%201%0Aline%202"
        );
    }

    #[test]
    fn target_parses_aliases() {
        assert_eq!("WhatsApp".parse::<ShareTarget>().unwrap(), ShareTarget::Messaging);
        assert_eq!("mail".parse::<ShareTarget>().unwrap(), ShareTarget::Email);
        assert!("fax".parse::<ShareTarget>().is_err());
    }

    #[test]
    fn recording_sink_keeps_links() {
        let sink = RecordingSink::new();
        sink.share(ShareTarget::Email, "mailto:?body=x");
        assert_eq!(
            sink.links(),
            vec![(ShareTarget::Email, "mailto:?body=x".to_string())]
        );
    }
}
