//! Session storage
//!
//! Maps opaque session identifiers to live `Session`s. The store is
//! responsible for serializing access to each session.

use super::Session;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::debug;
use uuid::Uuid;

/// Opaque session identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generate a fresh random identifier
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Key-value store of sessions
///
/// `with_session` must run `f` while no other call can touch the same session,
/// so that concurrent guesses for one identifier are applied one at a time.
pub trait SessionStore: Send + Sync {
    /// Store a session under `id`, replacing any previous one
    fn insert(&self, id: SessionId, session: Session);

    /// Run `f` against the session stored under `id`
    ///
    /// Returns `None` if there is no such session.
    fn with_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> Option<R>;

    /// Remove and return a session
    fn remove(&self, id: &SessionId) -> Option<Session>;

    /// Number of stored sessions
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local session store
///
/// Sessions live until removed; there is no expiry.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: Mutex<FxHashMap<SessionId, Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, FxHashMap<SessionId, Session>> {
        // Sessions stay consistent across a panic in `with_session`
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for MemorySessionStore {
    fn insert(&self, id: SessionId, session: Session) {
        let mut sessions = self.lock();
        sessions.insert(id, session);
        debug!(%id, total = sessions.len(), "session stored");
    }

    fn with_session<R>(&self, id: &SessionId, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
        self.lock().get_mut(id).map(f)
    }

    fn remove(&self, id: &SessionId) -> Option<Session> {
        let removed = self.lock().remove(id);
        if removed.is_some() {
            debug!(%id, "session removed");
        }
        removed
    }

    fn len(&self) -> usize {
        self.lock().len()
    }
}
