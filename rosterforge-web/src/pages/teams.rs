use crate::components::team_card::TeamCard;
use rosterforge_core::ExplainedTeam;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub teams: Vec<ExplainedTeam>,
    #[prop_or_default]
    pub on_back: Callback<()>,
}

/// Generated team compositions with their explanations. Also reachable in a
/// fresh tab, where the entries come from session storage.
#[function_component(TeamsPage)]
pub fn teams_page(props: &Props) -> Html {
    let on_back = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <section class="panel teams-panel">
            <h1>{ "Your team compositions" }</h1>
            if props.teams.is_empty() {
                <p class="empty-teams">
                    { "No generated teams in this session yet. Log in and pick characters to get started." }
                </p>
            } else {
                <ul id="teams-list" class="teams-list">
                    { for props.teams.iter().map(|entry| html! {
                        <TeamCard key={entry.team.name.clone()} entry={entry.clone()} />
                    }) }
                </ul>
            }
            <button type="button" class="back-button" onclick={on_back}>
                { "Back" }
            </button>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use rosterforge_core::{Character, Team};
    use yew::LocalServerRenderer;

    #[test]
    fn empty_session_shows_hint() {
        let props = Props {
            teams: vec![],
            on_back: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TeamsPage>::with_props(props).render());
        assert!(html.contains("No generated teams in this session yet."));
        assert!(!html.contains("teams-list"));
    }

    #[test]
    fn renders_cards_in_server_order() {
        let entry = |team_name: &str, member: &str| ExplainedTeam {
            team: Team::new(
                team_name,
                vec![Character::new(member, "Support", "Pyro", "S")],
            ),
            text: format!("{member} explanation"),
        };
        let props = Props {
            teams: vec![entry("Team 1", "Bennett"), entry("Team 2", "Xiangling")],
            on_back: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TeamsPage>::with_props(props).render());
        let first = html.find("Team 1").unwrap();
        let second = html.find("Team 2").unwrap();
        assert!(first < second);
        assert!(html.contains("Bennett explanation"));
        assert!(html.contains("Xiangling explanation"));
    }
}
