use rosterforge_core::ExplainedTeam;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub entry: ExplainedTeam,
}

/// A generated team: name, member lineup, and its explanation text.
#[function_component(TeamCard)]
pub fn team_card(p: &Props) -> Html {
    let members = p.entry.team.members.iter().map(|member| {
        let icon = crate::paths::character_icon(&member.name);
        html! {
            <div class="character-entry">
                <img src={icon} alt={member.name.clone()} class="character-icon" />
                <span class="character-name">{ member.display_label() }</span>
                <span class="character-element">{ member.element.clone() }</span>
                <span class="character-tier">{ format!("Tier {}", member.tier) }</span>
            </div>
        }
    });

    html! {
        <li class="team-card">
            <h3>{ p.entry.team.name.clone() }</h3>
            <div class="character-icons">{ for members }</div>
            <div class="team-explanation">
                <p>{ explanation_lines(&p.entry.text) }</p>
            </div>
        </li>
    }
}

/// Expand the explanation's internal newlines into explicit line breaks.
fn explanation_lines(text: &str) -> Html {
    let mut nodes: Vec<Html> = Vec::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            nodes.push(html! { <br/> });
        }
        nodes.push(html! { { line.trim_end().to_string() } });
    }
    html! { <>{ for nodes.into_iter() }</> }
}
