mod guess;
mod session;

use crate::app::state::AppState;
use yew::prelude::*;

pub use guess::{build_clear_flash, build_submit_guess};
pub use session::{build_advance_hint, build_next_round, build_restart, build_start_game};

/// Every state transition the views can trigger, built once per render.
#[derive(Clone)]
pub struct AppHandlers {
    pub start_game: Callback<String>,
    pub submit_guess: Callback<String>,
    pub advance_hint: Callback<()>,
    pub next_round: Callback<()>,
    pub restart: Callback<()>,
    pub clear_flash: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            start_game: build_start_game(state),
            submit_guess: build_submit_guess(state),
            advance_hint: build_advance_hint(state),
            next_round: build_next_round(state),
            restart: build_restart(state),
            clear_flash: build_clear_flash(state),
        }
    }
}
