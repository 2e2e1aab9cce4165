use crate::app::handlers;
use crate::app::phase::Phase;
use crate::app::state::AppState;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::roster::RosterPage;
use crate::pages::teams::TeamsPage;
use crate::router::Route;
use yew::prelude::*;

pub fn render_app(state: &AppState, route: Option<&Route>) -> Html {
    if matches!(route, Some(Route::NotFound)) {
        let phase = state.phase.clone();
        let on_go_home = Callback::from(move |()| phase.set(Phase::Login));
        return html! { <NotFoundPage {on_go_home} /> };
    }

    let error = (*state.error).clone().map(AttrValue::from);
    let main_view = match *state.phase {
        Phase::Login => html! {
            <LoginPage
                busy={*state.busy}
                error={error}
                on_submit={handlers::build_login(state)}
            />
        },
        Phase::Roster => html! {
            <RosterPage
                roster={(*state.roster).clone()}
                selection={(*state.selection).clone()}
                busy={*state.busy}
                error={error}
                on_toggle={handlers::build_toggle_character(state)}
                on_generate={handlers::build_generate(state)}
            />
        },
        Phase::Teams => html! {
            <TeamsPage
                teams={state.explained_teams()}
                on_back={handlers::build_back(state)}
            />
        },
    };

    html! {
        <main id="main" role="main" class="rosterforge-shell">
            { main_view }
        </main>
    }
}
