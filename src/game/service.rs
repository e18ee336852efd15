//! Game service
//!
//! Ties a session store, a word bank and a transliteration service together
//! behind the three operations a front end needs: start, guess and status.

use super::{GuessError, GuessReport, Session, SessionId, SessionStore, StatusReport};
use crate::config::GameConfig;
use crate::transliterate::{TransliterationError, Transliterator};
use crate::wordlists::WordBank;
use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

/// Error type for service operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("unknown session {0}")]
    UnknownSession(SessionId),
    #[error(transparent)]
    Guess(#[from] GuessError),
    #[error("failed to prepare target: {0}")]
    Start(#[from] TransliterationError),
}

/// Reply to a start request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StartReport {
    pub game_id: SessionId,
    pub max_attempts: u32,
}

/// Front-end facing game operations
pub struct GameService<S, T> {
    store: S,
    bank: WordBank,
    transliterator: T,
    config: GameConfig,
}

impl<S: SessionStore, T: Transliterator> GameService<S, T> {
    pub const fn new(store: S, bank: WordBank, transliterator: T, config: GameConfig) -> Self {
        Self {
            store,
            bank,
            transliterator,
            config,
        }
    }

    /// Start a new session with a random target
    ///
    /// # Errors
    /// Returns `GameError::Start` if the target cannot be decomposed.
    pub fn start(&self) -> Result<StartReport, GameError> {
        self.start_with_rng(&mut rand::rng())
    }

    /// Start a new session, drawing the target with `rng`
    ///
    /// # Errors
    /// Returns `GameError::Start` if the target cannot be decomposed.
    pub fn start_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<StartReport, GameError> {
        let session = Session::start(
            &self.bank,
            self.config.max_attempts,
            &self.transliterator,
            rng,
        )?;

        let game_id = SessionId::generate();
        self.store.insert(game_id, session);
        info!(%game_id, "new game");

        Ok(StartReport {
            game_id,
            max_attempts: self.config.max_attempts.get(),
        })
    }

    /// Submit a guess to a session
    ///
    /// # Errors
    /// Returns `GameError::UnknownSession` for an unknown id, or
    /// `GameError::Guess` if the session rejected the guess.
    pub fn guess(&self, id: &SessionId, word: &str) -> Result<GuessReport, GameError> {
        let report = self
            .store
            .with_session(id, |session| session.submit_guess(word, &self.transliterator))
            .ok_or(GameError::UnknownSession(*id))??;

        debug!(game_id = %id, attempts = report.attempts, state = ?report.state, "guess accepted");
        Ok(report)
    }

    /// Current state of a session
    ///
    /// # Errors
    /// Returns `GameError::UnknownSession` for an unknown id.
    pub fn status(&self, id: &SessionId) -> Result<StatusReport, GameError> {
        self.store
            .with_session(id, |session| session.status())
            .ok_or(GameError::UnknownSession(*id))
    }

    /// Drop a session; returns whether it existed
    pub fn end(&self, id: &SessionId) -> bool {
        self.store.remove(id).is_some()
    }

    #[must_use]
    pub const fn bank(&self) -> &WordBank {
        &self.bank
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.store.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{MemorySessionStore, SessionState};
    use crate::transliterate::TableTransliterator;
    use crate::transliterate::table::fixtures::sample_table;
    use crate::wordlists::loader::bank_from_slices;
    use std::num::NonZeroU32;

    fn service(words: &[&str], max_attempts: u32) -> GameService<MemorySessionStore, TableTransliterator> {
        GameService::new(
            MemorySessionStore::new(),
            bank_from_slices(&[words]).unwrap(),
            sample_table(),
            GameConfig::new(NonZeroU32::new(max_attempts).unwrap()),
        )
    }

    #[test]
    fn start_registers_session() {
        let service = service(&["春夏秋冬"], 15);
        let started = service.start().unwrap();

        assert_eq!(started.max_attempts, 15);
        assert_eq!(service.active_sessions(), 1);

        let status = service.status(&started.game_id).unwrap();
        assert_eq!(status.attempts, 0);
        assert!(!status.finished);
    }

    #[test]
    fn guess_and_win() {
        let service = service(&["春夏秋冬"], 15);
        let id = service.start().unwrap().game_id;

        let report = service.guess(&id, "东南西北").unwrap();
        assert_eq!(report.state, SessionState::InProgress);
        assert_eq!(report.remaining(), 14);

        let report = service.guess(&id, "春夏秋冬").unwrap();
        assert!(report.is_won());

        let status = service.status(&id).unwrap();
        assert_eq!(status.history.len(), 2);
        assert!(status.won);
    }

    #[test]
    fn unknown_session() {
        let service = service(&["春夏秋冬"], 15);
        let id = SessionId::generate();

        assert_eq!(
            service.guess(&id, "春夏秋冬"),
            Err(GameError::UnknownSession(id))
        );
        assert_eq!(service.status(&id), Err(GameError::UnknownSession(id)));
    }

    #[test]
    fn rejection_passes_through() {
        let service = service(&["春夏秋冬"], 15);
        let id = service.start().unwrap().game_id;

        assert!(matches!(
            service.guess(&id, "春夏"),
            Err(GameError::Guess(GuessError::InvalidLength(_)))
        ));
        assert_eq!(service.status(&id).unwrap().attempts, 0);
    }

    #[test]
    fn end_removes_session() {
        let service = service(&["春夏秋冬"], 15);
        let id = service.start().unwrap().game_id;

        assert!(service.end(&id));
        assert!(!service.end(&id));
        assert_eq!(service.active_sessions(), 0);
    }

    #[test]
    fn sessions_are_independent() {
        let service = service(&["春夏秋冬"], 2);
        let a = service.start().unwrap().game_id;
        let b = service.start().unwrap().game_id;

        service.guess(&a, "东南西北").unwrap();
        service.guess(&a, "东南西北").unwrap();

        assert!(service.status(&a).unwrap().finished);
        assert!(!service.status(&b).unwrap().finished);
        assert_eq!(service.status(&b).unwrap().attempts, 0);
    }
}
