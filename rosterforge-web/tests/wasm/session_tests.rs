//! Browser-only tests for session persistence. Run with `wasm-pack test` or
//! `cargo test --target wasm32-unknown-unknown` under a wasm test runner.

use rosterforge_core::{Character, Team, TeamsResponse};
use rosterforge_web::session;
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn result_round_trips_through_session_storage() {
    let response = TeamsResponse {
        teams: vec![Team::new(
            "Team 1",
            vec![Character::new("Bennett", "Support", "Pyro", "SS")],
        )],
        explanation: "**Team 1: Bennett (Support)**\nBattery and healer.".to_string(),
        status: "success".to_string(),
    };

    session::save_result(&response).expect("save should succeed in browser");
    let restored = session::load_result().expect("stored result should load");
    assert_eq!(restored.teams, response.teams);
    assert_eq!(restored.explanation, response.explanation);

    session::clear_result();
    assert!(session::load_result().is_none());
}
