//! Prediction history store
//!
//! Bounded, newest-first cache of recent verdicts, persisted as one JSON
//! record. A convenience cache, not a source of truth: overflow evicts
//! the oldest entries silently.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::AppResult;
use crate::models::{HistoryEntry, Label};

use super::kv::KvStore;
use super::session::SessionManager;

pub const HISTORY_RECORD: &str = "reviewguard_history";

/// Only the most recent entries are retained
pub const HISTORY_CAP: usize = 10;

pub struct HistoryStore {
    kv: Arc<KvStore>,
    sessions: Arc<SessionManager>,
    // Serializes read-modify-write cycles against the record
    write_lock: RwLock<()>,
}

impl HistoryStore {
    pub fn new(kv: Arc<KvStore>, sessions: Arc<SessionManager>) -> Self {
        Self {
            kv,
            sessions,
            write_lock: RwLock::new(()),
        }
    }

    /// Record a verdict. A silent no-op when no session is active.
    pub fn append(&self, review_text: &str, classification: Label, confidence: f64) -> AppResult<()> {
        if self.sessions.current().is_none() {
            return Ok(());
        }

        let _guard = self.write_lock.write();
        let mut entries = self.load()?;
        entries.insert(0, HistoryEntry::new(review_text, classification, confidence));
        entries.truncate(HISTORY_CAP);
        self.kv.set(HISTORY_RECORD, &entries)
    }

    /// Entries newest first, at most [`HISTORY_CAP`]
    pub fn list(&self) -> AppResult<Vec<HistoryEntry>> {
        let _guard = self.write_lock.read();
        self.load()
    }

    /// Drop every entry and the persisted record
    pub fn clear(&self) -> AppResult<()> {
        let _guard = self.write_lock.write();
        self.kv.delete(HISTORY_RECORD)
    }

    fn load(&self) -> AppResult<Vec<HistoryEntry>> {
        Ok(self.kv.get(HISTORY_RECORD)?.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Session, UserAccount, REVIEW_PREVIEW_CHARS};
    use chrono::Utc;
    use uuid::Uuid;

    fn stores(dir: &std::path::Path) -> (Arc<SessionManager>, HistoryStore) {
        let kv = Arc::new(KvStore::open(dir).unwrap());
        let sessions = Arc::new(SessionManager::new(kv.clone()).unwrap());
        let history = HistoryStore::new(kv, sessions.clone());
        (sessions, history)
    }

    fn sign_in(sessions: &SessionManager) {
        let account = UserAccount {
            id: Uuid::new_v4(),
            email: "demo@example.com".to_string(),
            name: "Demo User".to_string(),
            password_hash: "unused".to_string(),
            created_at: Utc::now(),
        };
        sessions.open(Session::started(&account)).unwrap();
    }

    #[test]
    fn test_append_without_session_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let (_sessions, history) = stores(dir.path());

        history.append("quiet review", Label::Genuine, 80.0).unwrap();
        assert!(history.list().unwrap().is_empty());
    }

    #[test]
    fn test_entries_listed_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let (sessions, history) = stores(dir.path());
        sign_in(&sessions);

        history.append("first review", Label::Genuine, 75.0).unwrap();
        history.append("second review", Label::Fake, 91.0).unwrap();

        let entries = history.list().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].review_text, "second review");
        assert_eq!(entries[1].review_text, "first review");
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let (sessions, history) = stores(dir.path());
        sign_in(&sessions);

        for i in 0..11 {
            history.append(&format!("review {}", i), Label::Genuine, 70.0).unwrap();
        }

        let entries = history.list().unwrap();
        assert_eq!(entries.len(), HISTORY_CAP);
        assert_eq!(entries[0].review_text, "review 10");
        // "review 0" was the oldest and is gone
        assert!(entries.iter().all(|e| e.review_text != "review 0"));
    }

    #[test]
    fn test_long_review_text_preview_truncated() {
        let dir = tempfile::tempdir().unwrap();
        let (sessions, history) = stores(dir.path());
        sign_in(&sessions);

        let long = "x".repeat(REVIEW_PREVIEW_CHARS + 30);
        history.append(&long, Label::Fake, 88.0).unwrap();

        let entries = history.list().unwrap();
        assert_eq!(entries[0].review_text.chars().count(), REVIEW_PREVIEW_CHARS + 3);
        assert!(entries[0].review_text.ends_with("..."));
    }

    #[test]
    fn test_clear_empties_history() {
        let dir = tempfile::tempdir().unwrap();
        let (sessions, history) = stores(dir.path());
        sign_in(&sessions);

        history.append("some review", Label::Genuine, 82.0).unwrap();
        history.clear().unwrap();
        assert!(history.list().unwrap().is_empty());
    }

    #[test]
    fn test_history_survives_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let (sessions, history) = stores(dir.path());
            sign_in(&sessions);
            history.append("durable review", Label::Fake, 93.0).unwrap();
        }

        let (_sessions, history) = stores(dir.path());
        let entries = history.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].review_text, "durable review");
    }
}
