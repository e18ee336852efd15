//! Game sessions
//!
//! The per-game state machine, session storage and the service the front ends
//! talk to.

mod service;
mod session;
mod store;

pub use service::{GameError, GameService, StartReport};
pub use session::{
    GuessError, GuessRecord, GuessReport, Reveal, Session, SessionState, StatusReport,
};
pub use store::{MemorySessionStore, SessionId, SessionStore};
