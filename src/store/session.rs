//! Session manager
//!
//! Holds the current signed-in identity, persisted as one JSON record so
//! a session survives process restarts. Injected explicitly wherever
//! session state gates behavior; there is no ambient global.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::AppResult;
use crate::models::Session;

use super::kv::KvStore;

pub const SESSION_RECORD: &str = "reviewguard_user";

pub struct SessionManager {
    kv: Arc<KvStore>,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    /// Create the manager, loading any persisted session from a prior run
    pub fn new(kv: Arc<KvStore>) -> AppResult<Self> {
        let current = kv.get::<Session>(SESSION_RECORD)?;
        if let Some(session) = &current {
            tracing::info!("Restored session for {}", session.email);
        }

        Ok(Self {
            kv,
            current: RwLock::new(current),
        })
    }

    /// The active session, if any
    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }

    /// Persist and activate a session, replacing any previous one
    pub fn open(&self, session: Session) -> AppResult<()> {
        let mut current = self.current.write();
        self.kv.set(SESSION_RECORD, &session)?;
        *current = Some(session);
        Ok(())
    }

    /// Drop the active session and its persisted record
    pub fn close(&self) -> AppResult<()> {
        let mut current = self.current.write();
        self.kv.delete(SESSION_RECORD)?;
        *current = None;
        Ok(())
    }
}
