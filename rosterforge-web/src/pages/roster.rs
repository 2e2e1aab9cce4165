use crate::components::banner::ErrorBanner;
use crate::components::character_card::CharacterCard;
use rosterforge_core::{MIN_SQUAD_SIZE, Selection};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub roster: Vec<String>,
    pub selection: Selection,
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub on_toggle: Callback<String>,
    #[prop_or_default]
    pub on_generate: Callback<()>,
}

/// Character selection grid with the generate-teams action.
#[function_component(RosterPage)]
pub fn roster_page(props: &Props) -> Html {
    let on_generate = {
        let cb = props.on_generate.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    let can_generate = props.selection.is_ready() && !props.busy;
    let button_label = format!("Generate Teams ({} selected)", props.selection.len());

    let cards = props.roster.iter().map(|name| {
        html! {
            <CharacterCard
                key={name.clone()}
                name={AttrValue::from(name.clone())}
                selected={props.selection.contains(name)}
                on_toggle={props.on_toggle.clone()}
            />
        }
    });

    html! {
        <section class="panel roster-panel">
            <h1>{ "Pick your characters" }</h1>
            <p class="muted">
                { format!("Select at least {MIN_SQUAD_SIZE} characters to generate team compositions.") }
            </p>
            <ErrorBanner message={props.error.clone()} />
            if props.roster.is_empty() {
                <p class="empty-roster">{ "No characters found on this account." }</p>
            } else {
                <div class="character-grid">{ for cards }</div>
            }
            <button
                id="generate-teams"
                type="button"
                onclick={on_generate}
                disabled={!can_generate}
            >
                { button_label }
            </button>
            if props.busy {
                <div class="loading" role="status">{ "Generating teams..." }</div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props_with(roster: &[&str], selection: Selection, busy: bool) -> Props {
        Props {
            roster: roster.iter().map(ToString::to_string).collect(),
            selection,
            busy,
            error: None,
            on_toggle: Callback::noop(),
            on_generate: Callback::noop(),
        }
    }

    #[test]
    fn renders_one_card_per_roster_entry() {
        let props = props_with(&["Bennett", "Xingqiu", "Hu Tao"], Selection::new(), false);
        let html = block_on(LocalServerRenderer::<RosterPage>::with_props(props).render());
        assert!(html.contains("Bennett"));
        assert!(html.contains("Xingqiu"));
        assert!(html.contains("Hu Tao"));
        assert!(html.contains("Generate Teams (0 selected)"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn button_enables_at_minimum_selection() {
        let mut selection = Selection::new();
        for name in ["A", "B", "C", "D"] {
            selection = selection.toggled(name);
        }
        let props = props_with(&["A", "B", "C", "D"], selection, false);
        let html = block_on(LocalServerRenderer::<RosterPage>::with_props(props).render());
        assert!(html.contains("Generate Teams (4 selected)"));
        assert!(!html.contains("disabled"));
    }

    #[test]
    fn empty_roster_shows_message() {
        let props = props_with(&[], Selection::new(), false);
        let html = block_on(LocalServerRenderer::<RosterPage>::with_props(props).render());
        assert!(html.contains("No characters found on this account."));
        assert!(!html.contains("character-grid"));
    }
}
