mod helpers;
mod interactions;

use crate::components::ui::logo_art::LogoArt;
use crate::components::ui::player_list::PlayerList;
use helpers::{Feedback, feedback_for, hint_button_label, next_button_label, revealed_mask};
use interactions::{use_flash_timer, use_refocus};
use logoquiz_game::constants::FULL_REVEAL_STAGE;
use logoquiz_game::{LeaderboardEntry, SessionState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Snapshot of the running session; the board itself holds no game
    /// state beyond the guess input.
    pub session: SessionState,
    pub players: Vec<LeaderboardEntry>,
    pub wrong_flash: bool,
    #[prop_or_default]
    pub guess_error: Option<AttrValue>,
    pub on_guess: Callback<String>,
    pub on_hint: Callback<()>,
    pub on_next_round: Callback<()>,
    pub on_clear_flash: Callback<()>,
}

#[function_component(GameBoard)]
pub fn game_board(p: &Props) -> Html {
    let guess = use_state(String::new);
    let input_ref = use_node_ref();

    let item_key = p
        .session
        .current_item()
        .map_or_else(|| AttrValue::from(""), |item| AttrValue::from(item.id.clone()));
    let stage = p.session.round().map_or(0, |round| round.reveal_stage());
    let round_over = p.session.round().is_none_or(|round| round.is_over());

    use_flash_timer(p.wrong_flash, p.on_clear_flash.clone());
    use_refocus(input_ref.clone(), (item_key, stage, round_over));

    let (Some(round), Some(item)) = (p.session.round(), p.session.current_item()) else {
        return Html::default();
    };

    let oninput = {
        let guess = guess.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            guess.set(input.value());
        })
    };

    let onsubmit = {
        let guess = guess.clone();
        let on_guess = p.on_guess.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = (*guess).clone();
            if text.trim().is_empty() {
                return;
            }
            on_guess.emit(text);
            guess.set(String::new());
        })
    };

    let onclick_hint = {
        let on_hint = p.on_hint.clone();
        Callback::from(move |_: MouseEvent| on_hint.emit(()))
    };

    let onclick_next = {
        let on_next_round = p.on_next_round.clone();
        Callback::from(move |_: MouseEvent| on_next_round.emit(()))
    };

    let mask = revealed_mask(round);
    let feedback = feedback_for(round, p.wrong_flash);
    let score_flashing = matches!(feedback, Some(Feedback::Wrong));

    let overlay = match feedback {
        Some(Feedback::Correct) => html! {
            <div class="board-overlay overlay-correct">
                <span class="overlay-mark">{ "O" }</span>
                <span class="overlay-title">{ "Correct!" }</span>
                <span class="overlay-answer">{ item.display_name() }</span>
            </div>
        },
        Some(Feedback::Wrong) => html! {
            <div class="board-overlay overlay-wrong">
                <span class="overlay-mark">{ "X" }</span>
                <span class="overlay-title">{ "Wrong!" }</span>
                <span class="overlay-sub">{ "Try again!" }</span>
            </div>
        },
        Some(Feedback::Timeout) => html! {
            <div class="board-overlay overlay-timeout">
                <span class="overlay-title">{ "The answer was" }</span>
                <span class="overlay-answer">{ item.display_name() }</span>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="game-board">
            <aside class="board-side">
                <PlayerList
                    players={p.players.clone()}
                    active_id={p.session.player.as_ref().map(|player| AttrValue::from(player.id.as_str().to_string()))}
                />
            </aside>

            <section class="board-main" aria-labelledby="board-round">
                <header class="board-header">
                    <span id="board-round" class="round-badge">
                        { format!("Round {}/{}", p.session.round_index + 1, p.session.total_rounds()) }
                    </span>
                    <span class={classes!("score-badge", score_flashing.then_some("score-badge-flash"))}>
                        { format!("{} pts", round.remaining_score()) }
                    </span>
                </header>

                <div class="logo-frame">
                    <div class="logo-art">
                        <LogoArt art={AttrValue::from(item.art.clone())} />
                    </div>
                    <div class="reveal-grid" aria-hidden="true">
                        { for mask.iter().map(|revealed| html! {
                            <div class={classes!("cell", revealed.then_some("cell-revealed"))} />
                        }) }
                    </div>
                    { overlay }
                </div>

                { if let Some(msg) = &p.guess_error {
                    html! { <p class="guess-error" role="alert">{ msg.clone() }</p> }
                } else {
                    html! {}
                } }

                <form class="guess-form" {onsubmit}>
                    <input
                        id="guess-input"
                        ref={input_ref}
                        type="text"
                        value={(*guess).clone()}
                        {oninput}
                        placeholder="Type the app name and press Enter"
                        disabled={round.is_over()}
                        autocomplete="off"
                        spellcheck="false"
                        aria-label="Your guess"
                    />
                </form>

                <div class="board-actions">
                    <button
                        class="hint-btn"
                        onclick={onclick_hint}
                        disabled={round.is_over() || round.reveal_stage() >= FULL_REVEAL_STAGE}
                    >
                        { hint_button_label(round) }
                    </button>
                    <button class="next-btn" onclick={onclick_next}>
                        { next_button_label(p.session.round_index, p.session.total_rounds()) }
                    </button>
                </div>

                <p id="guess-helper" aria-live="polite" class="sr-only"></p>
            </section>
        </div>
    }
}
