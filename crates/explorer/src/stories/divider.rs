use dioxus::prelude::*;
use kit_ui::{Divider, DividerVariant, Orientation};

use super::StorySection;

#[component]
pub fn DividerStory() -> Element {
    rsx! {
        StorySection { title: "Horizontal",
            div { class: "story-column",
                Divider {}
                Divider { variant: DividerVariant::Dashed }
                Divider { label: "or continue with" }
            }
        }
        StorySection {
            title: "Vertical",
            note: "Labels are ignored on vertical dividers.",
            div { class: "story-row", style: "height: 32px",
                span { "Left" }
                Divider { orientation: Orientation::Vertical }
                span { "Middle" }
                Divider { orientation: Orientation::Vertical, variant: DividerVariant::Dashed }
                span { "Right" }
            }
        }
    }
}
