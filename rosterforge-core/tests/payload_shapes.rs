//! Fixture checks for the generation-service payload shape.

use rosterforge_core::{TeamsResponse, reconcile};

const SAMPLE_RESPONSE: &str = r#"{
    "teams": [
        {
            "Team Name": "Team 1",
            "Characters": [
                { "Name": "Raiden Shogun", "Role": "Main DPS", "Element": "Electro", "Tier": "SS" },
                { "Name": "Xiangling", "Role": "Sub-DPS", "Element": "Pyro", "Tier": "S" },
                { "Name": "Xingqiu", "Role": "Sub-DPS", "Element": "Hydro", "Tier": "S" },
                { "Name": "Bennett", "Role": "Support", "Element": "Pyro", "Tier": "SS" }
            ]
        },
        {
            "Team Name": "Team 2",
            "Characters": [
                { "Name": "Hu Tao", "Role": "Main DPS", "Element": "Pyro", "Tier": "SS" },
                { "Name": "Yelan", "Role": "Sub-DPS", "Element": "Hydro", "Tier": "SS" },
                { "Name": "Kazuha", "Role": "Support", "Element": "Anemo", "Tier": "SS" },
                { "Name": "Zhongli", "Role": "Support", "Element": "Geo", "Tier": "S" }
            ]
        }
    ],
    "explanation": "**Team 1: Raiden Shogun (Main DPS), Xiangling (Sub-DPS), Xingqiu (Sub-DPS), Bennett (Support)**\nRational national core.\nStrong off-field pressure.\n**Team 2: Hu Tao (Main DPS), Yelan (Sub-DPS), Kazuha (Support), Zhongli (Support)**\nVaporize carry with shielding.",
    "status": "success"
}"#;

#[test]
fn full_response_parses_and_reconciles() {
    let response = TeamsResponse::from_json(SAMPLE_RESPONSE).unwrap();
    assert_eq!(response.teams.len(), 2);
    assert!(!response.is_failure());

    let explained = reconcile(&response.teams, &response.explanation);
    assert_eq!(explained.len(), 2);
    assert_eq!(
        explained[0].text,
        "Rational national core.\nStrong off-field pressure."
    );
    assert_eq!(explained[1].text, "Vaporize carry with shielding.");
}

#[test]
fn failure_response_round_trips() {
    let json = r#"{
        "teams": [],
        "explanation": "Could not generate teams from selection. Ensure you provided at least 4 valid characters.",
        "status": "failure"
    }"#;
    let response = TeamsResponse::from_json(json).unwrap();
    assert!(response.is_failure());
    assert!(reconcile(&response.teams, &response.explanation).is_empty());
}
