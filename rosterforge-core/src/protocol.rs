//! Wire shapes for the team-generation service endpoints.

use crate::selection::Selection;
use crate::team::Team;
use serde::{Deserialize, Serialize};

/// Body of `POST /hoyolab_login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Auth cookies returned by login; sent back verbatim when fetching the
/// roster. The service treats `ltuid_v2` and `ltoken_v2` as required and
/// `ltmid_v2` as optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCookies {
    #[serde(default)]
    pub ltuid_v2: Option<String>,
    #[serde(default)]
    pub ltoken_v2: Option<String>,
    #[serde(default)]
    pub ltmid_v2: Option<String>,
}

impl SessionCookies {
    /// Whether the cookie set satisfies the service's auth requirements.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        let present = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.is_empty());
        present(&self.ltuid_v2) && present(&self.ltoken_v2)
    }
}

/// Body of `POST /generate_teams_from_selection`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionRequest {
    pub characters: Vec<String>,
}

impl From<&Selection> for SelectionRequest {
    fn from(selection: &Selection) -> Self {
        Self {
            characters: selection.names(),
        }
    }
}

/// Response of the team-generation endpoints: the structured team list plus
/// the free-form explanation blob the reconciler aligns with it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsResponse {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub status: String,
}

impl TeamsResponse {
    /// Parse a response from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not valid JSON for this shape.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The service reports `status: "failure"` when it could not build any
    /// team from the selection; `explanation` then carries the reason.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.status == "failure"
    }
}
