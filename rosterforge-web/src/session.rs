//! Per-session persistence of the last generated result.
//!
//! The teams view can be opened in a fresh tab after generation; the last
//! response is kept in `sessionStorage` so it redisplays without re-fetching.
//! Stored as the structured team list plus the raw explanation text, rebuilt
//! wholesale on every new server response.

use crate::dom;
use rosterforge_core::{Team, TeamsResponse};
use thiserror::Error;

const TEAMS_KEY: &str = "rosterforge.teams";
const EXPLANATION_KEY: &str = "rosterforge.explanation";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session storage unavailable: {0}")]
    Unavailable(String),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persist a generation result, replacing whatever the session held before.
///
/// # Errors
///
/// Returns an error when `sessionStorage` is unavailable or rejects the write.
pub fn save_result(response: &TeamsResponse) -> Result<(), StorageError> {
    let storage = dom::session_storage()
        .map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))?;
    let teams = serde_json::to_string(&response.teams)?;
    storage
        .set_item(TEAMS_KEY, &teams)
        .map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))?;
    storage
        .set_item(EXPLANATION_KEY, &response.explanation)
        .map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))?;
    Ok(())
}

/// Restore the last persisted result, if the session holds one.
///
/// Any unreadable or stale entry is treated as absent rather than surfaced.
#[must_use]
pub fn load_result() -> Option<TeamsResponse> {
    let storage = dom::session_storage().ok()?;
    let teams_json = storage.get_item(TEAMS_KEY).ok()??;
    let teams: Vec<Team> = serde_json::from_str(&teams_json).ok()?;
    let explanation = storage
        .get_item(EXPLANATION_KEY)
        .ok()
        .flatten()
        .unwrap_or_default();
    Some(TeamsResponse {
        teams,
        explanation,
        status: String::new(),
    })
}

/// Drop the persisted result, e.g. when a new login starts.
pub fn clear_result() {
    if let Ok(storage) = dom::session_storage() {
        let _ = storage.remove_item(TEAMS_KEY);
        let _ = storage.remove_item(EXPLANATION_KEY);
    }
}
