use crate::components::banner::ErrorBanner;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub busy: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_submit: Callback<(String, String)>,
}

/// Account login form. Submitting hands the credentials to the host; field
/// validation and request lifecycle live in the app handlers.
#[function_component(LoginPage)]
pub fn login_page(props: &Props) -> Html {
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();

    let onsubmit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = username_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            let password = password_ref
                .cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default();
            on_submit.emit((username, password));
        })
    };

    html! {
        <section class="panel login-panel">
            <h1>{ "Sign in to your account" }</h1>
            <p class="muted">{ "Log in to fetch your character roster and build team compositions." }</p>
            <ErrorBanner message={props.error.clone()} />
            <form id="login-form" {onsubmit}>
                <label for="username">{ "Username" }</label>
                <input
                    id="username"
                    type="text"
                    ref={username_ref}
                    autocomplete="username"
                    disabled={props.busy}
                />
                <label for="password">{ "Password" }</label>
                <input
                    id="password"
                    type="password"
                    ref={password_ref}
                    autocomplete="current-password"
                    disabled={props.busy}
                />
                <button type="submit" disabled={props.busy}>
                    { if props.busy { "Signing in..." } else { "Log in" } }
                </button>
            </form>
            if props.busy {
                <div class="loading" role="status">{ "Loading your characters..." }</div>
            }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn renders_both_credential_fields() {
        let props = Props {
            busy: false,
            error: None,
            on_submit: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
        assert!(html.contains(r#"id="username""#));
        assert!(html.contains(r#"id="password""#));
        assert!(html.contains("Log in"));
        assert!(!html.contains("Loading your characters"));
    }

    #[test]
    fn busy_state_disables_form_and_shows_loading() {
        let props = Props {
            busy: true,
            error: None,
            on_submit: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
        assert!(html.contains("disabled"));
        assert!(html.contains("Signing in..."));
        assert!(html.contains("Loading your characters..."));
    }

    #[test]
    fn error_is_surfaced() {
        let props = Props {
            busy: false,
            error: Some(AttrValue::from("Login failed: server responded with status 401")),
            on_submit: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<LoginPage>::with_props(props).render());
        assert!(html.contains("status 401"));
    }
}
