//! HTTP client for the team-generation service.
//!
//! Thin typed wrappers over the browser fetch API. The host discipline is one
//! in-flight request at a time; callers guard with a busy flag before
//! spawning, so nothing here coordinates concurrency.

use crate::dom::{js_error_message, window};
use crate::paths::api_path;
use rosterforge_core::{LoginRequest, Selection, SelectionRequest, SessionCookies, TeamsResponse};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

const LOGIN_ENDPOINT: &str = "/hoyolab_login";
const CHARACTERS_ENDPOINT: &str = "/get_characters";
const GENERATE_ENDPOINT: &str = "/generate_teams_from_selection";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("invalid payload: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    fn from_js(value: &JsValue) -> Self {
        Self::Network(js_error_message(value))
    }
}

/// Authenticate against the third-party account service.
///
/// # Errors
///
/// Returns an error when the request fails, the server rejects the
/// credentials, or the response body is not the expected cookie shape.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn login(username: &str, password: &str) -> Result<SessionCookies, ApiError> {
    let body = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };
    post_json(LOGIN_ENDPOINT, &body).await
}

/// Fetch the account's roster of playable character names.
///
/// # Errors
///
/// Returns an error when the request fails or the payload is not a list of names.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_roster(cookies: &SessionCookies) -> Result<Vec<String>, ApiError> {
    post_json(CHARACTERS_ENDPOINT, cookies).await
}

/// Request server-generated team compositions for the selected characters.
///
/// # Errors
///
/// Returns an error when the request fails or the payload does not parse.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn generate_teams(selection: &Selection) -> Result<TeamsResponse, ApiError> {
    let body = SelectionRequest::from(selection);
    post_json(GENERATE_ENDPOINT, &body).await
}

#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
async fn post_json<B, T>(endpoint: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let payload = serde_json::to_string(body)?;

    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&payload));

    let request = Request::new_with_str_and_init(&api_path(endpoint), &init)
        .map_err(|e| ApiError::from_js(&e))?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::from_js(&e))?;

    let response_value = JsFuture::from(window().fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::from_js(&e))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|e| ApiError::from_js(&e))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let text_promise = response.text().map_err(|e| ApiError::from_js(&e))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|e| ApiError::from_js(&e))?;
    let text = text_value
        .as_string()
        .ok_or_else(|| ApiError::Network("response body was not text".to_string()))?;

    Ok(serde_json::from_str(&text)?)
}
