//! Application state for the TJM Engine API.
//!
//! This module defines the shared application state available to all
//! request handlers: the loaded configuration, the upstream client and
//! the session store.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use uuid::Uuid;

use crate::client::OutreachClient;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{SessionState, UserType};

/// Shared application state.
///
/// Contains resources shared across all request handlers: the engine
/// configuration, the upstream HTTP client, and the in-memory session
/// store. Sessions carry all per-user mutable state; nothing else in the
/// state is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    client: Arc<OutreachClient>,
    sessions: Arc<RwLock<HashMap<Uuid, SessionState>>>,
}

impl AppState {
    /// Creates a new application state from the loaded configuration.
    pub fn new(config: ConfigLoader) -> EngineResult<Self> {
        let client = OutreachClient::from_config(&config)?;
        Ok(Self {
            config: Arc::new(config),
            client: Arc::new(client),
            sessions: Arc::new(RwLock::new(HashMap::new())),
        })
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the upstream client.
    pub fn client(&self) -> &OutreachClient {
        &self.client
    }

    /// Creates a fresh session and returns its id.
    pub fn create_session(&self, user_type: UserType) -> Uuid {
        let session_id = Uuid::new_v4();
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id, SessionState::new(user_type));
        session_id
    }

    /// Discards a session.
    pub fn remove_session(&self, session_id: Uuid) -> EngineResult<()> {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&session_id)
            .map(|_| ())
            .ok_or(EngineError::SessionNotFound { session_id })
    }

    /// Returns a snapshot of a session.
    pub fn session(&self, session_id: Uuid) -> EngineResult<SessionState> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&session_id)
            .cloned()
            .ok_or(EngineError::SessionNotFound { session_id })
    }

    /// Runs a closure against a session under the write lock.
    pub fn with_session<R>(
        &self,
        session_id: Uuid,
        f: impl FnOnce(&mut SessionState) -> EngineResult<R>,
    ) -> EngineResult<R> {
        let mut sessions = self.sessions.write().unwrap_or_else(PoisonError::into_inner);
        let session = sessions
            .get_mut(&session_id)
            .ok_or(EngineError::SessionNotFound { session_id })?;
        f(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/default").expect("Failed to load config");
        AppState::new(config).expect("Failed to build state")
    }

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_session_lifecycle() {
        let state = create_test_state();
        let session_id = state.create_session(UserType::Freelancer);

        let session = state.session(session_id).unwrap();
        assert_eq!(session.user_type, UserType::Freelancer);

        state.remove_session(session_id).unwrap();
        assert!(state.session(session_id).is_err());
    }

    #[test]
    fn test_unknown_session_errors() {
        let state = create_test_state();
        let missing = Uuid::new_v4();

        match state.session(missing).unwrap_err() {
            EngineError::SessionNotFound { session_id } => assert_eq!(session_id, missing),
            other => panic!("Expected SessionNotFound, got {:?}", other),
        }
        assert!(state.remove_session(missing).is_err());
    }

    #[test]
    fn test_with_session_mutates_in_place() {
        let state = create_test_state();
        let session_id = state.create_session(UserType::Freelancer);

        state
            .with_session(session_id, |session| {
                session.record_estimate(750);
                Ok(())
            })
            .unwrap();

        assert_eq!(state.session(session_id).unwrap().tjm, Some(750));
    }

    #[test]
    fn test_sessions_are_shared_across_clones() {
        let state = create_test_state();
        let clone = state.clone();
        let session_id = state.create_session(UserType::Company);

        assert!(clone.session(session_id).is_ok());
    }
}
