//! Rosterforge Core
//!
//! Platform-agnostic logic for the Rosterforge team-composition builder:
//! the team/character data model, the explanation reconciler that aligns
//! server-generated teams with their free-text rationale, and the wire
//! shapes of the generation service. No I/O and no browser dependencies.

pub mod canonical;
pub mod character;
pub mod protocol;
pub mod reconcile;
pub mod selection;
pub mod team;

// Re-export commonly used types
pub use canonical::{canonicalize, team_key};
pub use character::Character;
pub use protocol::{LoginRequest, SelectionRequest, SessionCookies, TeamsResponse};
pub use reconcile::{ExplainedTeam, NO_EXPLANATION, reconcile};
pub use selection::{MIN_SQUAD_SIZE, Selection};
pub use team::Team;
