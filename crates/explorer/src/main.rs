use dioxus::prelude::*;

mod action_log;
mod config;
mod routes;
mod stories;

use action_log::ActionLog;
use routes::Route;

/// Theme picked in the shell, shared with every story.
#[derive(Clone, Copy)]
pub struct ThemeChoice(pub Signal<kit_ui::Theme>);

fn main() {
    let loaded = config::load_config();
    let settings = config::config();

    // A subscriber that is already installed keeps receiving events.
    if let Err(err) = dioxus::logger::init(config::log_level(settings)) {
        tracing::warn!(%err, "keeping the existing tracing subscriber");
    }
    match loaded {
        Ok(settings) => tracing::info!(title = %settings.explorer.title, "explorer config loaded"),
        Err(err) => tracing::warn!(%err, "explorer.toml rejected, using defaults"),
    }

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let settings = config::config();
    let limit = settings.stories.action_log_limit;
    let initial = config::initial_theme(settings);

    use_context_provider(|| Signal::new(ActionLog::new(limit)));
    let theme = use_context_provider(|| ThemeChoice(Signal::new(initial)));

    rsx! {
        document::Title { "{settings.explorer.title}" }
        kit_ui::ThemeScope { theme: theme.0,
            Router::<Route> {}
        }
    }
}
