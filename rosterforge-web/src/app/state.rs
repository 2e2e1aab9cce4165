use crate::app::phase::Phase;
use rosterforge_core::{ExplainedTeam, Selection, SessionCookies, TeamsResponse, reconcile};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub cookies: UseStateHandle<Option<SessionCookies>>,
    pub roster: UseStateHandle<Vec<String>>,
    pub selection: UseStateHandle<Selection>,
    pub result: UseStateHandle<Option<TeamsResponse>>,
    pub busy: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        phase: use_state(|| Phase::Login),
        cookies: use_state(|| None::<SessionCookies>),
        roster: use_state(Vec::<String>::new),
        selection: use_state(Selection::new),
        result: use_state(|| None::<TeamsResponse>),
        busy: use_state(|| false),
        error: use_state(|| None::<String>),
    }
}

impl AppState {
    /// Install a freshly authenticated session. Everything the previous
    /// account produced is dropped, including the held generation result,
    /// so the teams view cannot redisplay another account's squads.
    pub fn begin_session(&self, cookies: SessionCookies, roster: Vec<String>) {
        self.cookies.set(Some(cookies));
        self.roster.set(roster);
        self.selection.set(Selection::new());
        self.result.set(None);
        self.phase.set(Phase::Roster);
    }

    /// Reconciled view of the held result: every team paired with its
    /// explanation text, in server order.
    #[must_use]
    pub fn explained_teams(&self) -> Vec<ExplainedTeam> {
        self.result
            .as_ref()
            .map_or_else(Vec::new, |r| reconcile(&r.teams, &r.explanation))
    }

    #[must_use]
    pub fn has_roster(&self) -> bool {
        !self.roster.is_empty()
    }
}
