use crate::character::Character;
use serde::{Deserialize, Serialize};

/// A named group of characters returned by the generation service.
///
/// Member order is server-assigned and meaningful: it drives both display
/// order and the canonical key used for explanation matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "Team Name")]
    pub name: String,
    #[serde(rename = "Characters")]
    pub members: Vec<Character>,
}

impl Team {
    #[must_use]
    pub fn new(name: &str, members: Vec<Character>) -> Self {
        Self {
            name: name.to_string(),
            members,
        }
    }
}
