use yew::prelude::*;

/// Not-found page to show when routing fails to match a known view.
#[derive(Properties, PartialEq)]
pub struct Props {
    pub on_go_home: Callback<()>,
}

#[function_component(NotFoundPage)]
pub fn not_found_page(props: &Props) -> Html {
    let go_home = {
        let cb = props.on_go_home.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section class="panel not-found" aria-live="assertive">
            <h1>{ "Page not found" }</h1>
            <p>{ "Nothing lives at this address." }</p>
            <button type="button" onclick={go_home}>
                { "Back to login" }
            </button>
        </section>
    }
}
