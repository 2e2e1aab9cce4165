#[cfg(any(target_arch = "wasm32", test))]
use crate::app::phase::Phase;
#[cfg(any(target_arch = "wasm32", test))]
use crate::router::Route;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

#[cfg(any(target_arch = "wasm32", test))]
fn next_route_for_phase(phase: Phase, current_route: Option<&Route>) -> Option<Route> {
    let new_route = Route::from_phase(&phase);
    if Some(&new_route) == current_route {
        None
    } else {
        Some(new_route)
    }
}

#[cfg(any(target_arch = "wasm32", test))]
fn next_phase_for_route(current_phase: Phase, route: Option<Route>) -> Option<Phase> {
    let new_phase = route.and_then(|route| route.to_phase())?;
    if new_phase == current_phase {
        return None;
    }

    is_route_transition_allowed(current_phase, new_phase).then_some(new_phase)
}

// URL-driven transitions only; programmatic phase changes (successful login,
// generation) bypass this and push the matching route instead. The roster
// needs an authenticated fetch, so the address bar alone never reaches it;
// the teams view is reachable directly because it restores from session
// storage.
#[cfg(any(target_arch = "wasm32", test))]
const fn is_route_transition_allowed(current: Phase, next: Phase) -> bool {
    match current {
        Phase::Login => matches!(next, Phase::Teams),
        Phase::Roster | Phase::Teams => matches!(next, Phase::Login | Phase::Roster | Phase::Teams),
    }
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_route_with_phase(
    phase: &UseStateHandle<Phase>,
    navigator: Option<Navigator>,
    active_route: Option<Route>,
) {
    let phase = phase.clone();
    use_effect_with((phase, active_route), move |(phase, current_route)| {
        if let (Some(nav), Some(new_route)) = (
            navigator.as_ref(),
            next_route_for_phase(**phase, current_route.as_ref()),
        ) {
            nav.push(&new_route);
        }
    });
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_sync_phase_with_route(phase: &UseStateHandle<Phase>, route: Option<Route>) {
    let phase = phase.clone();
    use_effect_with(route, move |route| {
        if let Some(new_phase) = next_phase_for_route(*phase, route.clone()) {
            phase.set(new_phase);
        }
    });
}
