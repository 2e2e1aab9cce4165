use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub name: AttrValue,
    pub selected: bool,
    #[prop_or_default]
    pub on_toggle: Callback<String>,
}

/// One roster entry: icon, name, and a selection checkbox.
#[function_component(CharacterCard)]
pub fn character_card(p: &Props) -> Html {
    let toggle = {
        let name = p.name.clone();
        let on_toggle = p.on_toggle.clone();
        Callback::from(move |_: Event| on_toggle.emit(name.to_string()))
    };

    let card_class = classes!("character-card", p.selected.then_some("selected"));
    let icon = crate::paths::character_icon(&p.name);

    html! {
        <div class={card_class}>
            <img src={icon} alt={p.name.clone()} class="character-icon" loading="lazy" />
            <div class="character-name">{ p.name.clone() }</div>
            <input
                type="checkbox"
                class="character-checkbox"
                value={p.name.clone()}
                checked={p.selected}
                onchange={toggle}
                aria-label={format!("Select {}", p.name)}
            />
        </div>
    }
}
