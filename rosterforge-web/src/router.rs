use crate::app::Phase;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/roster")]
    Roster,
    #[at("/teams")]
    Teams,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_phase(phase: &Phase) -> Self {
        match phase {
            Phase::Login => Self::Login,
            Phase::Roster => Self::Roster,
            Phase::Teams => Self::Teams,
        }
    }

    #[must_use]
    pub const fn to_phase(&self) -> Option<Phase> {
        match self {
            Self::Login => Some(Phase::Login),
            Self::Roster => Some(Phase::Roster),
            Self::Teams => Some(Phase::Teams),
            Self::NotFound => None, // Preserve current phase on 404 routes.
        }
    }
}
