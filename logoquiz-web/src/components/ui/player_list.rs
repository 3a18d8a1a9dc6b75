use logoquiz_game::LeaderboardEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub players: Vec<LeaderboardEntry>,
    #[prop_or_default]
    pub active_id: Option<AttrValue>,
}

const fn rank_class(rank: usize) -> &'static str {
    match rank {
        0 => "rank-gold",
        1 => "rank-silver",
        2 => "rank-bronze",
        _ => "rank-plain",
    }
}

/// Ranked score rows, shared by the game board and the podium screen.
#[function_component(PlayerList)]
pub fn player_list(p: &Props) -> Html {
    let rows = if p.players.is_empty() {
        html! { <p class="player-list-empty muted">{ "No records yet." }</p> }
    } else {
        html! {
            <ol class="player-rows">
                { for p.players.iter().enumerate().map(|(idx, entry)| {
                    let active = p
                        .active_id
                        .as_ref()
                        .is_some_and(|id| id.as_str() == entry.id);
                    html! {
                        <li class={classes!("player-row", active.then_some("player-row-active"))}>
                            <span class={classes!("player-rank", rank_class(idx))}>{ idx + 1 }</span>
                            <span class="player-name">{ &entry.name }</span>
                            <span class="player-score">{ entry.score }</span>
                        </li>
                    }
                }) }
            </ol>
        }
    };

    html! {
        <section class="player-list" aria-label="Ranking">
            <h2 class="player-list-title">{ "Ranking" }</h2>
            { rows }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn entry(id: &str, name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            id: id.to_string(),
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let props = Props {
            players: Vec::new(),
            active_id: None,
        };
        let html = block_on(LocalServerRenderer::<PlayerList>::with_props(props).render());
        assert!(html.contains("No records yet."));
    }

    #[test]
    fn rows_mark_the_active_player() {
        let props = Props {
            players: vec![entry("a", "Grace", 7), entry("b", "Ada", 3)],
            active_id: Some(AttrValue::from("b")),
        };
        let html = block_on(LocalServerRenderer::<PlayerList>::with_props(props).render());
        assert!(html.contains("Grace"));
        assert!(html.contains("player-row-active"));
        assert!(html.contains("rank-gold"));
    }
}
