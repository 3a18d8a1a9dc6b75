use crate::app::phase::Phase;
use crate::app::state::AppState;
use logoquiz_game::{Catalog, HintOutcome, RoundAdvance, SessionState};
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
fn next_entropy() -> u64 {
    js_sys::Date::now().to_bits()
}

#[cfg(not(target_arch = "wasm32"))]
fn next_entropy() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0x5EED, |elapsed| {
            #[allow(clippy::cast_possible_truncation)]
            {
                elapsed.as_nanos() as u64
            }
        })
}

pub fn build_start_game(state: &AppState) -> Callback<String> {
    let session_handle = state.session.clone();
    let phase_handle = state.phase.clone();
    let wrong_flash = state.wrong_flash.clone();
    let guess_error = state.guess_error.clone();
    Callback::from(move |name: String| {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            // The lobby form disables submission; stay put regardless.
            return;
        }
        let seed = next_entropy();
        let session = SessionState::start(&Catalog::builtin(), trimmed, seed);
        log::info!("session started with seed {seed:#x}");
        guess_error.set(None);
        wrong_flash.set(false);
        phase_handle.set(Phase::Playing);
        session_handle.set(Some(session));
    })
}

pub fn build_advance_hint(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    Callback::from(move |()| {
        let Some(mut sess) = (*session_handle).clone() else {
            return;
        };
        if sess.advance_hint() == HintOutcome::AnswerRevealed {
            crate::a11y::set_status("Out of points. The answer is revealed.");
        }
        session_handle.set(Some(sess));
    })
}

pub fn build_next_round(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let phase_handle = state.phase.clone();
    let wrong_flash = state.wrong_flash.clone();
    Callback::from(move |()| {
        let Some(mut sess) = (*session_handle).clone() else {
            return;
        };
        match sess.advance_round() {
            RoundAdvance::Advanced(_) => {
                wrong_flash.set(false);
                session_handle.set(Some(sess));
            }
            RoundAdvance::Ended => {
                wrong_flash.set(false);
                phase_handle.set(Phase::Ended);
                session_handle.set(Some(sess));
            }
            RoundAdvance::Ignored => {}
        }
    })
}

pub fn build_restart(state: &AppState) -> Callback<()> {
    let session_handle = state.session.clone();
    let phase_handle = state.phase.clone();
    let wrong_flash = state.wrong_flash.clone();
    let guess_error = state.guess_error.clone();
    Callback::from(move |()| {
        session_handle.set(None);
        wrong_flash.set(false);
        guess_error.set(None);
        phase_handle.set(Phase::Lobby);
    })
}
