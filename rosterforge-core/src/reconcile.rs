//! Team/explanation reconciliation.
//!
//! The generation service returns two loosely-coupled pieces: a structured
//! list of teams and one unstructured explanation blob with segments delimited
//! by `**Team <n>: <label>**` headers. This module splits the blob, indexes
//! each segment under its canonicalized label, and pairs every team with its
//! matched segment or a fallback placeholder.
//!
//! The whole pipeline is total: it never fails for any input strings and
//! always returns exactly one entry per input team, in input order.

use crate::canonical::{canonicalize, team_key};
use crate::team::Team;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Placeholder shown for teams with no matching explanation segment.
pub const NO_EXPLANATION: &str = "No explanation available.";

// Label capture stays single-line; bodies run to the next header or the end
// of the blob, so multi-line segment text needs no DOTALL flag.
static TEAM_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\*\*team\s+\d+:\s*(.*?)\*\*").expect("valid regex"));

/// One team paired with its matched (or fallback) explanation text.
///
/// `text` keeps the segment's internal newlines; renderers expand them into
/// explicit line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplainedTeam {
    pub team: Team,
    pub text: String,
}

/// Split the blob into labeled segments and index them by canonical key.
///
/// Text before the first header is discarded. An empty or absent body stores
/// the fallback string. Duplicate canonical labels keep the later body.
fn explanation_index(explanation: &str) -> HashMap<String, String> {
    let headers: Vec<(usize, usize, &str)> = TEAM_HEADER
        .captures_iter(explanation)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let label = caps.get(1).map_or("", |m| m.as_str());
            Some((whole.start(), whole.end(), label))
        })
        .collect();

    let mut index = HashMap::new();
    for (position, (_, body_start, label)) in headers.iter().enumerate() {
        let body_end = headers
            .get(position + 1)
            .map_or(explanation.len(), |next| next.0);
        let body = explanation[*body_start..body_end].trim();
        let text = if body.is_empty() {
            NO_EXPLANATION.to_string()
        } else {
            body.to_string()
        };
        index.insert(canonicalize(label), text);
    }
    index
}

/// Pair every team with its explanation segment, in input order.
///
/// Teams whose canonical key matches no segment receive [`NO_EXPLANATION`];
/// segments matching no team are silently dropped. The result always has
/// exactly as many entries as `teams`.
#[must_use]
pub fn reconcile(teams: &[Team], explanation: &str) -> Vec<ExplainedTeam> {
    if teams.is_empty() {
        return Vec::new();
    }

    let index = explanation_index(explanation);
    teams
        .iter()
        .map(|team| {
            let text = index
                .get(&team_key(team))
                .cloned()
                .unwrap_or_else(|| NO_EXPLANATION.to_string());
            ExplainedTeam {
                team: team.clone(),
                text,
            }
        })
        .collect()
}
