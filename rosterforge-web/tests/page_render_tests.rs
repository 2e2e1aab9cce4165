//! Render tests for the full payload-to-markup path.

use futures::executor::block_on;
use rosterforge_web::pages::teams::{Props as TeamsProps, TeamsPage};
use rosterforge_core::{TeamsResponse, reconcile};
use yew::{Callback, LocalServerRenderer};

const RESPONSE_JSON: &str = r#"{
    "teams": [
        {
            "Team Name": "Team 1",
            "Characters": [
                { "Name": "Hu Tao", "Role": "Main DPS", "Element": "Pyro", "Tier": "SS" },
                { "Name": "Xingqiu", "Role": "Sub-DPS", "Element": "Hydro", "Tier": "S" },
                { "Name": "Yelan", "Role": "Sub-DPS", "Element": "Hydro", "Tier": "SS" },
                { "Name": "Zhongli", "Role": "Support", "Element": "Geo", "Tier": "S" }
            ]
        }
    ],
    "explanation": "**Team 1: Hu Tao (Main DPS), Xingqiu (Sub-DPS), Yelan (Sub-DPS), Zhongli (Support)**\nDouble hydro vaporize.\nShielded by Zhongli.",
    "status": "success"
}"#;

#[test]
fn reconciled_response_renders_explanation_with_line_breaks() {
    let response = TeamsResponse::from_json(RESPONSE_JSON).unwrap();
    let explained = reconcile(&response.teams, &response.explanation);

    let props = TeamsProps {
        teams: explained,
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TeamsPage>::with_props(props).render());

    assert!(html.contains("Team 1"));
    assert!(html.contains("Hu Tao (Main DPS)"));
    assert!(html.contains("Zhongli (Support)"));
    assert!(html.contains("Double hydro vaporize."));
    assert!(html.contains("Shielded by Zhongli."));
    assert!(html.contains("<br"));
    assert!(html.contains("hu_tao/icon-big.png"));
}

#[test]
fn unmatched_response_renders_fallback_text() {
    let mut response = TeamsResponse::from_json(RESPONSE_JSON).unwrap();
    response.explanation = "**Team 1: Somebody Else (Support)**\nirrelevant".to_string();
    let explained = reconcile(&response.teams, &response.explanation);

    let props = TeamsProps {
        teams: explained,
        on_back: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<TeamsPage>::with_props(props).render());

    assert!(html.contains("No explanation available."));
    assert!(!html.contains("irrelevant"));
}
