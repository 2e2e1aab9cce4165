//! Callback constructors wiring user actions to the service client.
//!
//! Each builder clones the state handles it needs so the callbacks stay
//! `'static`. Network work runs through `spawn_local`; the busy flag keeps a
//! single request in flight at a time.

use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::{dom, net, session};
use rosterforge_core::{MIN_SQUAD_SIZE, SessionCookies};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn build_login(state: &AppState) -> Callback<(String, String)> {
    let state = state.clone();
    Callback::from(move |(username, password): (String, String)| {
        if *state.busy {
            return;
        }
        if username.trim().is_empty() || password.is_empty() {
            state.error.set(Some(
                "Please enter both username and password.".to_string(),
            ));
            return;
        }
        state.busy.set(true);
        state.error.set(None);

        let state = state.clone();
        spawn_local(async move {
            match authenticate(&username, &password).await {
                Ok((session_cookies, names)) => {
                    // A new login invalidates whatever the previous session
                    // generated, both the stored copy and the held one.
                    session::clear_result();
                    state.begin_session(session_cookies, names);
                }
                Err(message) => {
                    dom::console_error(&format!("login flow failed: {message}"));
                    state.error.set(Some(message));
                }
            }
            state.busy.set(false);
        });
    })
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn authenticate(
    username: &str,
    password: &str,
) -> Result<(SessionCookies, Vec<String>), String> {
    let cookies = net::login(username, password)
        .await
        .map_err(|e| format!("Login failed: {e}"))?;
    if !cookies.is_complete() {
        return Err("Login did not return the required session cookies.".to_string());
    }
    let names = net::fetch_roster(&cookies)
        .await
        .map_err(|e| format!("Failed to fetch characters: {e}"))?;
    Ok((cookies, names))
}

pub fn build_toggle_character(state: &AppState) -> Callback<String> {
    let selection = state.selection.clone();
    Callback::from(move |name: String| {
        selection.set(selection.toggled(&name));
    })
}

pub fn build_generate(state: &AppState) -> Callback<()> {
    let phase = state.phase.clone();
    let result = state.result.clone();
    let selection = state.selection.clone();
    let busy = state.busy.clone();
    let error = state.error.clone();
    Callback::from(move |()| {
        if *busy {
            return;
        }
        let current = (*selection).clone();
        if !current.is_ready() {
            error.set(Some(format!(
                "Please select at least {MIN_SQUAD_SIZE} characters."
            )));
            return;
        }
        busy.set(true);
        error.set(None);

        let phase = phase.clone();
        let result = result.clone();
        let busy = busy.clone();
        let error = error.clone();
        spawn_local(async move {
            match net::generate_teams(&current).await {
                Ok(response) if response.is_failure() => {
                    let message = if response.explanation.is_empty() {
                        "The service could not generate teams from this selection.".to_string()
                    } else {
                        response.explanation
                    };
                    error.set(Some(message));
                }
                Ok(response) => {
                    if let Err(e) = session::save_result(&response) {
                        log::warn!("could not persist result for the teams tab: {e}");
                    }
                    result.set(Some(response));
                    phase.set(Phase::Teams);
                }
                Err(e) => {
                    dom::console_error(&format!("team generation failed: {e}"));
                    error.set(Some(format!("Failed to generate teams: {e}")));
                }
            }
            busy.set(false);
        });
    })
}

/// From the teams view, back to the roster when one is loaded, otherwise to
/// the login form (fresh-tab case, where only the stored result exists).
pub fn build_back(state: &AppState) -> Callback<()> {
    let phase = state.phase.clone();
    let roster = state.roster.clone();
    Callback::from(move |()| {
        if roster.is_empty() {
            phase.set(Phase::Login);
        } else {
            phase.set(Phase::Roster);
        }
    })
}
