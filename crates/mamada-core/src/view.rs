//! Screen selection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::Profile;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Profile setup. Always reachable.
    #[default]
    Profile,
    /// Timer and last feeding.
    Home,
    /// Today's sessions and export.
    Reports,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            View::Profile => "profile",
            View::Home => "home",
            View::Reports => "reports",
        })
    }
}

/// Picks the visible screen, gated on profile completeness.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewController {
    current: View,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial screen for a freshly loaded profile.
    pub fn on_startup(profile: &Profile) -> Self {
        let current = if profile.is_complete() {
            View::Home
        } else {
            View::Profile
        };
        Self { current }
    }

    pub fn current(&self) -> View {
        self.current
    }

    /// Switch to `target`. Home and Reports need a complete profile;
    /// otherwise the request is ignored and `false` returned.
    pub fn navigate(&mut self, target: View, profile: &Profile) -> bool {
        if target != View::Profile && !profile.is_complete() {
            tracing::debug!(%target, "navigation ignored: profile incomplete");
            return false;
        }
        self.current = target;
        true
    }

    /// A valid profile was just saved.
    pub fn profile_saved(&mut self) {
        self.current = View::Home;
    }

    /// Navigation between screens is only offered once a profile exists.
    pub fn shows_navigation(profile: &Profile) -> bool {
        profile.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_depends_on_profile() {
        assert_eq!(ViewController::on_startup(&Profile::default()).current(), View::Profile);
        assert_eq!(
            ViewController::on_startup(&Profile::new("Ana", "Leo")).current(),
            View::Home
        );
    }

    #[test]
    fn incomplete_profile_blocks_home_and_reports() {
        let profile = Profile::new("Ana", "");
        let mut views = ViewController::on_startup(&profile);
        assert!(!views.navigate(View::Home, &profile));
        assert!(!views.navigate(View::Reports, &profile));
        assert_eq!(views.current(), View::Profile);
        assert!(!ViewController::shows_navigation(&profile));
    }

    #[test]
    fn complete_profile_navigates_freely() {
        let profile = Profile::new("Ana", "Leo");
        let mut views = ViewController::on_startup(&profile);
        assert!(views.navigate(View::Reports, &profile));
        assert_eq!(views.current(), View::Reports);
        assert!(views.navigate(View::Profile, &profile));
        assert_eq!(views.current(), View::Profile);
    }

    #[test]
    fn saving_profile_moves_to_home() {
        let mut views = ViewController::new();
        views.profile_saved();
        assert_eq!(views.current(), View::Home);
    }
}
