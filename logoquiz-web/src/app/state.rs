use crate::app::phase::Phase;
use logoquiz_game::{Leaderboard, SessionState};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub phase: UseStateHandle<Phase>,
    pub session: UseStateHandle<Option<SessionState>>,
    pub leaderboard: UseStateHandle<Leaderboard>,
    /// Transient wrong-guess flash; cleared by a deferred timer.
    pub wrong_flash: UseStateHandle<bool>,
    /// User-visible precondition message (e.g. no active player).
    pub guess_error: UseStateHandle<Option<AttrValue>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        phase: use_state(|| Phase::Lobby),
        session: use_state(|| None::<SessionState>),
        leaderboard: use_state(Leaderboard::default),
        wrong_flash: use_state(|| false),
        guess_error: use_state(|| None::<AttrValue>),
    }
}
