use crate::app::phase::{Phase, display_players};
use crate::app::state::AppState;
use crate::app::view::handlers::AppHandlers;
use crate::components::ui::game_board::GameBoard;
use crate::components::ui::lobby::Lobby;
use crate::components::ui::podium::Podium;
use yew::prelude::*;

pub fn render_main_view(state: &AppState, handlers: &AppHandlers) -> Html {
    match *state.phase {
        Phase::Lobby => render_lobby(handlers),
        Phase::Playing => render_board(state, handlers),
        Phase::Ended => render_podium(state, handlers),
    }
}

fn render_lobby(handlers: &AppHandlers) -> Html {
    html! { <Lobby on_start={handlers.start_game.clone()} /> }
}

fn render_board(state: &AppState, handlers: &AppHandlers) -> Html {
    let Some(session) = (*state.session).clone() else {
        // Phase and session drifted apart (e.g. a stale route); the lobby
        // is the only screen that can recover.
        return render_lobby(handlers);
    };
    let players = display_players(&state.leaderboard, session.player.as_ref());
    html! {
        <GameBoard
            session={session}
            players={players}
            wrong_flash={*state.wrong_flash}
            guess_error={(*state.guess_error).clone()}
            on_guess={handlers.submit_guess.clone()}
            on_hint={handlers.advance_hint.clone()}
            on_next_round={handlers.next_round.clone()}
            on_clear_flash={handlers.clear_flash.clone()}
        />
    }
}

fn render_podium(state: &AppState, handlers: &AppHandlers) -> Html {
    let session = (*state.session).clone();
    let current = session.as_ref().and_then(|sess| sess.player.as_ref());
    let players = display_players(&state.leaderboard, current);
    let current_player_id = current.map(|player| AttrValue::from(player.id.as_str().to_string()));
    html! {
        <Podium
            players={players}
            current_player_id={current_player_id}
            on_restart={handlers.restart.clone()}
        />
    }
}
