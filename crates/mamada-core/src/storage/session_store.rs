//! Completed session persistence.
//!
//! The whole collection is re-serialized on every append. The in-memory
//! copy is authoritative for the running process: a failed write keeps the
//! new session in memory and hands the error back as a warning.

use chrono::NaiveDate;

use super::{KeyValueStore, SESSIONS_KEY};
use crate::error::PersistenceError;
use crate::model::{Session, SessionCollection};

/// Newest-first session log backed by a key-value store.
pub struct SessionStore<S> {
    kv: S,
    sessions: SessionCollection,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Open the store and load the persisted collection.
    pub fn open(kv: S) -> Self {
        let mut store = Self {
            kv,
            sessions: SessionCollection::new(),
        };
        store.sessions = store.load();
        store
    }

    /// Read the persisted collection.
    ///
    /// A missing, unreadable or malformed payload yields an empty
    /// collection. Individual malformed sessions are dropped and the rest
    /// kept, so the next append does not discard valid history.
    pub fn load(&self) -> SessionCollection {
        match self.try_load() {
            Ok(sessions) => sessions,
            Err(e) => {
                tracing::warn!(error = %e, "ignoring stored sessions");
                SessionCollection::new()
            }
        }
    }

    fn try_load(&self) -> Result<SessionCollection, PersistenceError> {
        match self.kv.get(SESSIONS_KEY)? {
            Some(raw) => {
                let records: Vec<serde_json::Value> = serde_json::from_str(&raw)
                    .map_err(|e| PersistenceError::read(SESSIONS_KEY, e))?;
                let sessions: Vec<Session> = records
                    .into_iter()
                    .enumerate()
                    .filter_map(|(index, record)| match serde_json::from_value::<Session>(record) {
                        Ok(session) => Some(session),
                        Err(e) => {
                            tracing::warn!(index, error = %e, "dropping malformed stored session");
                            None
                        }
                    })
                    .collect();
                Ok(sessions.into())
            }
            None => Ok(SessionCollection::new()),
        }
    }

    /// In-memory collection, newest first.
    pub fn sessions(&self) -> &SessionCollection {
        &self.sessions
    }

    /// Id for a session created at `now_ms`, kept above the newest id.
    pub fn next_id(&self, now_ms: i64) -> i64 {
        match self.sessions.latest() {
            Some(newest) if newest.id >= now_ms => newest.id.saturating_add(1),
            _ => now_ms,
        }
    }

    /// Prepend `session` and persist the full collection.
    ///
    /// # Errors
    /// Returns the write error. The session stays in memory either way.
    pub fn append(&mut self, session: Session) -> Result<&SessionCollection, PersistenceError> {
        tracing::debug!(id = session.id, side = %session.side, duration = session.duration_secs, "appending session");
        self.sessions.prepend(session);
        let json = serde_json::to_string(&self.sessions)
            .map_err(|e| PersistenceError::write(SESSIONS_KEY, e))?;
        self.kv.set(SESSIONS_KEY, &json)?;
        Ok(&self.sessions)
    }

    /// Sessions of `collection` recorded on `date`.
    pub fn today(collection: &SessionCollection, date: NaiveDate) -> SessionCollection {
        collection.on(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{parse_date, Side};
    use crate::storage::MemoryStore;
    use chrono::NaiveTime;

    fn session(id: i64, duration_secs: u64) -> Session {
        Session {
            id,
            date: parse_date("19/10/2026").unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            side: Side::Right,
            duration_secs,
            mother_name: "Ana".into(),
            baby_name: "Leo".into(),
        }
    }

    #[test]
    fn open_without_record_is_empty() {
        let store = SessionStore::open(MemoryStore::new());
        assert!(store.sessions().is_empty());
    }

    #[test]
    fn open_with_garbage_is_empty() {
        let kv = MemoryStore::new();
        kv.set(SESSIONS_KEY, "[{\"id\":").unwrap();
        let store = SessionStore::open(&kv);
        assert!(store.sessions().is_empty());
    }

    #[test]
    fn append_prepends_and_persists() {
        let kv = MemoryStore::new();
        let mut store = SessionStore::open(&kv);
        store.append(session(1, 10)).unwrap();
        let all = store.append(session(2, 20)).unwrap();
        assert_eq!(all.iter().map(|s| s.id).collect::<Vec<_>>(), vec![2, 1]);

        let reloaded = SessionStore::open(&kv);
        assert_eq!(reloaded.sessions(), store.sessions());
    }

    #[test]
    fn failed_write_keeps_session_in_memory() {
        let kv = MemoryStore::with_quota(8);
        let mut store = SessionStore::open(&kv);
        let err = store.append(session(1, 10)).unwrap_err();
        assert!(matches!(err, PersistenceError::QuotaExceeded { .. }));
        assert_eq!(store.sessions().len(), 1);
        assert!(store.load().is_empty());
    }

    #[test]
    fn next_id_stays_monotonic() {
        let mut store = SessionStore::open(MemoryStore::new());
        assert_eq!(store.next_id(1_000), 1_000);
        store.append(session(1_000, 5)).unwrap();
        assert_eq!(store.next_id(1_000), 1_001);
        assert_eq!(store.next_id(999), 1_001);
        assert_eq!(store.next_id(5_000), 5_000);
    }

    #[test]
    fn next_id_saturates_on_corrupt_newest_id() {
        let mut store = SessionStore::open(MemoryStore::new());
        store.append(session(i64::MAX, 5)).unwrap();
        assert_eq!(store.next_id(1_000), i64::MAX);
    }

    #[test]
    fn malformed_record_is_dropped_without_losing_the_rest() {
        let kv = MemoryStore::new();
        kv.set(
            SESSIONS_KEY,
            r#"[
                {"id":2,"date":"19/10/2026","time":"10:00","side":"left","duration":30,"motherName":"Ana","babyName":"Leo"},
                {"id":1,"date":"19/10/2026","time":"09:00:00","side":"right","duration":45,"motherName":"Ana","babyName":"Leo"}
            ]"#,
        )
        .unwrap();

        let mut store = SessionStore::open(&kv);
        assert_eq!(store.sessions().iter().map(|s| s.id).collect::<Vec<_>>(), vec![1]);

        store.append(session(3, 20)).unwrap();
        let raw = kv.get(SESSIONS_KEY).unwrap().unwrap();
        assert!(raw.contains("\"id\":1"), "stored: {raw}");
        assert!(raw.contains("\"id\":3"), "stored: {raw}");
        assert_eq!(
            SessionStore::open(&kv).sessions().iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![3, 1]
        );
    }
}
