use crate::components::ui::player_list::PlayerList;
use logoquiz_game::LeaderboardEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub players: Vec<LeaderboardEntry>,
    #[prop_or_default]
    pub current_player_id: Option<AttrValue>,
    pub on_restart: Callback<()>,
}

const fn podium_class(rank: usize) -> &'static str {
    match rank {
        0 => "podium-first",
        1 => "podium-second",
        _ => "podium-third",
    }
}

/// Final results: top-three podium, full ranking, and the way back to the
/// lobby. The leaderboard itself persists independently of the restart.
#[function_component(Podium)]
pub fn podium(p: &Props) -> Html {
    let mut ranked = p.players.clone();
    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    let current_rank = p.current_player_id.as_ref().and_then(|id| {
        ranked
            .iter()
            .position(|entry| entry.id == id.as_str())
            .map(|idx| idx + 1)
    });

    // Second place stands left of the winner, third to the right.
    let display_order = [1_usize, 0, 2];
    let blocks = display_order.iter().filter_map(|&rank| {
        ranked.get(rank).map(|entry| {
            html! {
                <div class={classes!("podium-block", podium_class(rank))}>
                    <span class="podium-rank">{ rank + 1 }</span>
                    <span class="podium-name">{ &entry.name }</span>
                    <span class="podium-score">{ entry.score }</span>
                </div>
            }
        })
    });

    let onclick_restart = {
        let on_restart = p.on_restart.clone();
        Callback::from(move |_: MouseEvent| on_restart.emit(()))
    };

    html! {
        <section class="podium" aria-labelledby="podium-title">
            <h1 id="podium-title">{ "Final results" }</h1>

            { if let Some(rank) = current_rank {
                html! { <p class="podium-callout">{ format!("You finished in place {rank}") }</p> }
            } else {
                html! {}
            } }

            <div class="podium-stage">
                { for blocks }
            </div>

            <PlayerList players={ranked} active_id={p.current_player_id.clone()} />

            <button class="restart-btn" onclick={onclick_restart}>
                { "Play again" }
            </button>
        </section>
    }
}
