use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Maximum nickname length, matching the input's `maxlength`.
const MAX_NICKNAME_LEN: usize = 10;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_start: Callback<String>,
}

/// Entry screen: pick a nickname, start a session.
///
/// The session controller does not validate names; this form is the gate
/// that keeps empty nicknames out.
#[function_component(Lobby)]
pub fn lobby(p: &Props) -> Html {
    let nickname = use_state(String::new);

    let oninput = {
        let nickname = nickname.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value: String = input.value().chars().take(MAX_NICKNAME_LEN).collect();
            nickname.set(value);
        })
    };

    let can_start = !nickname.trim().is_empty();

    let onsubmit = {
        let nickname = nickname.clone();
        let on_start = p.on_start.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = nickname.trim().to_string();
            if !trimmed.is_empty() {
                on_start.emit(trimmed);
            }
        })
    };

    html! {
        <section class="lobby" aria-labelledby="lobby-title">
            <h1 id="lobby-title" class="lobby-title">{ "Logoquiz" }</h1>
            <p class="lobby-tagline">{ "Which app is hiding behind the mask?" }</p>

            <form class="lobby-form" {onsubmit}>
                <input
                    id="nickname-input"
                    type="text"
                    value={(*nickname).clone()}
                    {oninput}
                    placeholder="Enter a nickname"
                    maxlength="10"
                    autocomplete="off"
                    spellcheck="false"
                    aria-label="Nickname"
                />
                <button type="submit" class="lobby-start-btn" disabled={!can_start}>
                    { "Start game" }
                </button>
            </form>

            <p class="lobby-hint muted">{ "Press Enter to start" }</p>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn lobby_renders_form_with_disabled_start() {
        let props = Props {
            on_start: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<Lobby>::with_props(props).render());
        assert!(html.contains("nickname-input"));
        assert!(html.contains("Start game"));
        assert!(html.contains("disabled"));
        assert!(html.contains("Logoquiz"));
    }
}
