use dioxus::prelude::*;

mod badge;
mod checkbox;
mod divider;
mod pill;
mod progress_bar;
mod slider;
mod switch_toggle;
mod toast;

pub use badge::BadgeStory;
pub use checkbox::CheckboxStory;
pub use divider::DividerStory;
pub use pill::PillStory;
pub use progress_bar::ProgressBarStory;
pub use slider::SliderStory;
pub use switch_toggle::SwitchToggleStory;
pub use toast::ToastStory;

/// Titled block inside a story page.
#[component]
pub fn StorySection(
    title: String,
    #[props(default)] note: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "story-section",
            h2 { "{title}" }
            if let Some(note) = note {
                p { class: "story-note", "{note}" }
            }
            {children}
        }
    }
}
