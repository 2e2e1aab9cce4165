#[cfg(target_arch = "wasm32")]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::*;

pub mod handlers;
pub mod phase;
pub mod routing;
pub mod state;
pub mod view;

pub use phase::Phase;

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[cfg(target_arch = "wasm32")]
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app_state = state::use_app_state();

    // Restore the last generated result so a fresh tab on /teams can
    // redisplay it without re-fetching.
    {
        let result = app_state.result.clone();
        use_effect_with((), move |_| {
            if result.is_none() {
                if let Some(stored) = crate::session::load_result() {
                    result.set(Some(stored));
                }
            }
        });
    }

    let navigator = use_navigator();
    let route = use_route::<Route>();

    routing::use_sync_route_with_phase(&app_state.phase, navigator, route.clone());
    routing::use_sync_phase_with_route(&app_state.phase, route.clone());

    view::render_app(&app_state, route.as_ref())
}
