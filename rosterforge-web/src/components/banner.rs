use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub message: Option<AttrValue>,
}

/// Inline error banner; renders nothing when there is no message.
#[function_component(ErrorBanner)]
pub fn error_banner(p: &Props) -> Html {
    match &p.message {
        Some(message) => html! {
            <div class="error-banner" role="alert" aria-live="assertive">
                { message }
            </div>
        },
        None => Html::default(),
    }
}
