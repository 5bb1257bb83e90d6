use dioxus::prelude::*;
use kit_ui::{Theme, ALL_THEMES};

use crate::action_log::ActionLogPanel;
use crate::config;
use crate::stories::{
    BadgeStory, CheckboxStory, DividerStory, PillStory, ProgressBarStory, SliderStory,
    SwitchToggleStory, ToastStory,
};
use crate::ThemeChoice;

/// Explorer routes. Every story renders inside [`Shell`].
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Overview {},
    #[route("/badge")]
    BadgeStory {},
    #[route("/checkbox")]
    CheckboxStory {},
    #[route("/divider")]
    DividerStory {},
    #[route("/pill")]
    PillStory {},
    #[route("/progress-bar")]
    ProgressBarStory {},
    #[route("/slider")]
    SliderStory {},
    #[route("/switch-toggle")]
    SwitchToggleStory {},
    #[route("/toast")]
    ToastStory {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Sidebar entries in display order.
pub const STORIES: &[(&str, Route)] = &[
    ("Badge", Route::BadgeStory {}),
    ("Checkbox", Route::CheckboxStory {}),
    ("Divider", Route::DividerStory {}),
    ("Pill", Route::PillStory {}),
    ("Progress bar", Route::ProgressBarStory {}),
    ("Slider", Route::SliderStory {}),
    ("Switch toggle", Route::SwitchToggleStory {}),
    ("Toast", Route::ToastStory {}),
];

/// Title shown above the story area.
pub fn page_title(route: &Route) -> &'static str {
    match route {
        Route::Overview {} => "Overview",
        Route::NotFound { .. } => "Not found",
        other => STORIES
            .iter()
            .find(|(_, story)| story == other)
            .map(|(name, _)| *name)
            .unwrap_or(""),
    }
}

#[component]
fn Shell() -> Element {
    let route: Route = use_route();
    let ThemeChoice(mut theme) = use_context();
    let title = &config::config().explorer.title;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "explorer",
            nav { class: "explorer-sidebar",
                div { class: "explorer-brand", "{title}" }
                ul { class: "explorer-nav",
                    for (name, target) in STORIES.iter().cloned() {
                        li { key: "{name}",
                            Link {
                                to: target,
                                class: "explorer-nav-link",
                                active_class: "active",
                                "{name}"
                            }
                        }
                    }
                }
                label { class: "explorer-theme",
                    span { "Theme" }
                    select {
                        value: theme().as_str(),
                        onchange: move |e: FormEvent| {
                            let next = Theme::from_key(&e.value());
                            tracing::debug!(theme = next.as_str(), "theme selected");
                            theme.set(next);
                        },
                        for choice in ALL_THEMES.iter() {
                            option { key: "{choice.as_str()}", value: choice.as_str(), "{choice.display_name()}" }
                        }
                    }
                }
            }
            main { class: "explorer-main",
                h1 { class: "explorer-title", "{page_title(&route)}" }
                Outlet::<Route> {}
            }
            ActionLogPanel {}
        }
    }
}

#[component]
fn Overview() -> Element {
    rsx! {
        p { class: "explorer-lede",
            "Pick a component on the left. Every story shows its variants, and the inputs come in "
            "both controlled and uncontrolled form. Change events land in the action log."
        }
        ul { class: "explorer-overview",
            for (name, target) in STORIES.iter().cloned() {
                li { key: "{name}", Link { to: target, "{name}" } }
            }
        }
    }
}

#[component]
fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx! {
        p { "No story at /{path}." }
        Link { to: Route::Overview {}, "Back to the overview" }
    }
}
