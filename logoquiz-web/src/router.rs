use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Lobby,
    #[at("/play")]
    Play,
    #[at("/results")]
    Results,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    #[must_use]
    pub const fn from_phase(phase: &crate::app::Phase) -> Self {
        match phase {
            crate::app::Phase::Lobby => Self::Lobby,
            crate::app::Phase::Playing => Self::Play,
            crate::app::Phase::Ended => Self::Results,
        }
    }

    #[must_use]
    pub const fn to_phase(&self) -> Option<crate::app::Phase> {
        match self {
            Self::Lobby => Some(crate::app::Phase::Lobby),
            Self::Play => Some(crate::app::Phase::Playing),
            Self::Results => Some(crate::app::Phase::Ended),
            Self::NotFound => None, // Preserve current phase on 404 routes.
        }
    }
}
