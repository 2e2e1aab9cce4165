//! Canonical-key construction for team/explanation matching.
//!
//! The generation service describes a team two ways that must compare equal:
//! the roster list in the JSON payload and a free-text header label inside the
//! explanation blob. Labels arrive with slash-separated names ("A/B/C"),
//! stray spaces around commas, or both. Both sides are normalized through the
//! same rule so lookups are exact string comparisons.

use crate::character::Character;
use crate::team::Team;
use once_cell::sync::Lazy;
use regex::Regex;

static COMMA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*,\s*").expect("valid regex"));

/// Normalize a roster label or derived key into its canonical form.
///
/// Every `/` becomes `, `, any run of whitespace around a comma collapses to
/// exactly `, `, and the ends are trimmed. Idempotent: applying it twice
/// yields the same string.
#[must_use]
pub fn canonicalize(label: &str) -> String {
    let unified = label.replace('/', ", ");
    COMMA_RUN.replace_all(&unified, ", ").trim().to_string()
}

/// Derive a team's canonical key from its member list.
///
/// Members' `"Name (Role)"` labels are joined with `", "` in server order,
/// then normalized with [`canonicalize`] so the result is comparable to a
/// canonicalized explanation header label.
#[must_use]
pub fn team_key(team: &Team) -> String {
    let joined = team
        .members
        .iter()
        .map(Character::display_label)
        .collect::<Vec<_>>()
        .join(", ");
    canonicalize(&joined)
}
