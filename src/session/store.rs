//! Sessions keyed by identifier.
//!
//! Each session owns its own state and its own RNG stream, derived from the
//! store seed and the session id. Nothing is shared between sessions. The
//! store itself is not synchronized; a server handling requests concurrently
//! wraps it in its own lock.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;

use crate::core::{EngineConfig, GameRng, Result};

use super::game::Session;
use super::outcome::RoundOutcome;

/// Opaque session identifier supplied by the caller (cookie, token, user id).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Collection of independent sessions.
#[derive(Debug)]
pub struct SessionStore {
    config: EngineConfig,
    root_rng: GameRng,
    sessions: FxHashMap<SessionId, Session>,
}

impl SessionStore {
    /// Create an empty store. New sessions start from `config`.
    pub fn new(config: EngineConfig) -> Self {
        config.log();
        let root_rng = GameRng::new(config.seed);
        Self {
            config,
            root_rng,
            sessions: FxHashMap::default(),
        }
    }

    /// Configuration applied to newly created sessions.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a new session under `id`, replacing any existing one.
    pub fn create(&mut self, id: &SessionId) -> &mut Session {
        let session = fresh_session(&self.config, &self.root_rng, id);
        match self.sessions.entry(id.clone()) {
            Entry::Occupied(mut entry) => {
                entry.insert(session);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(session),
        }
    }

    /// Get a session, creating it from the store config if absent.
    pub fn get_or_create(&mut self, id: &SessionId) -> &mut Session {
        let config = &self.config;
        let root_rng = &self.root_rng;
        self.sessions
            .entry(id.clone())
            .or_insert_with(|| fresh_session(config, root_rng, id))
    }

    #[must_use]
    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    /// Play a round in the given session, creating it if needed.
    pub fn play(&mut self, id: &SessionId, input: &str) -> Result<RoundOutcome> {
        self.get_or_create(id).play(input)
    }

    /// Reset a session. Returns false if it does not exist.
    pub fn reset(&mut self, id: &SessionId) -> bool {
        match self.sessions.get_mut(id) {
            Some(session) => {
                session.reset();
                true
            }
            None => false,
        }
    }

    /// Drop a session entirely.
    pub fn remove(&mut self, id: &SessionId) -> Option<Session> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            log::info!("removed session {}", id);
        }
        removed
    }

    pub fn ids(&self) -> impl Iterator<Item = &SessionId> {
        self.sessions.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

fn fresh_session(config: &EngineConfig, root_rng: &GameRng, id: &SessionId) -> Session {
    log::info!("creating session {}", id);
    Session::with_rng(config.clone(), root_rng.for_context(id.as_str()))
}
