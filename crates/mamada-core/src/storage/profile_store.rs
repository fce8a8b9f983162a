//! Caregiver profile persistence.

use super::{KeyValueStore, PROFILE_KEY};
use crate::error::{CoreError, PersistenceError};
use crate::model::Profile;

/// Reads and writes the profile record.
pub struct ProfileStore<S> {
    kv: S,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Load the stored profile.
    ///
    /// A missing, unreadable or malformed record yields an empty profile.
    pub fn load(&self) -> Profile {
        match self.try_load() {
            Ok(Some(profile)) => profile,
            Ok(None) => Profile::default(),
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored profile");
                Profile::default()
            }
        }
    }

    fn try_load(&self) -> Result<Option<Profile>, PersistenceError> {
        let Some(raw) = self.kv.get(PROFILE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| PersistenceError::read(PROFILE_KEY, e))
    }

    /// Validate and persist `profile`, returning the stored (trimmed) copy.
    ///
    /// # Errors
    /// `ValidationError::IncompleteProfile` if a name is blank; nothing is
    /// written in that case. Storage failures are returned as-is.
    pub fn save(&self, profile: &Profile) -> Result<Profile, CoreError> {
        let profile = profile.validated()?;
        let json = serde_json::to_string(&profile)?;
        self.kv.set(PROFILE_KEY, &json)?;
        tracing::info!(mother = %profile.mother_name, baby = %profile.baby_name, "profile saved");
        Ok(profile)
    }
}
