mod handlers;
mod phases;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let main_view = phases::render_main_view(state, &handlers);

    html! {
        <main id="main" role="main" class="app-shell">
            <style>{ crate::a11y::visible_focus_css() }</style>
            { main_view }
        </main>
    }
}
