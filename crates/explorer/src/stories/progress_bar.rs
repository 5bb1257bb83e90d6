use dioxus::prelude::*;
use kit_ui::{ProgressBar, ProgressVariant};

use super::StorySection;

#[component]
pub fn ProgressBarStory() -> Element {
    let mut uploaded = use_signal(|| 3.0_f64);

    rsx! {
        StorySection {
            title: "Tiers",
            note: "Values are clamped to 0..=100. Below 40 is low, from 40 mid, at 100 complete.",
            div { class: "story-column",
                for value in [-10.0, 25.0, 40.0, 75.0, 100.0, 130.0] {
                    ProgressBar { key: "{value}", value, show_label: true }
                }
            }
        }
        StorySection { title: "Generic",
            div { class: "story-column",
                ProgressBar { value: 20.0, variant: ProgressVariant::Generic, show_label: true }
                ProgressBar { value: 100.0, variant: ProgressVariant::Generic, show_label: true }
            }
        }
        StorySection {
            title: "Part of a total",
            note: "{uploaded} of 8 files uploaded.",
            div { class: "story-column",
                ProgressBar { value: uploaded(), total: 8.0, show_label: true }
                div { class: "story-row",
                    button {
                        r#type: "button",
                        onclick: move |_| uploaded.set((uploaded() - 1.0).max(0.0)),
                        "Remove file"
                    }
                    button {
                        r#type: "button",
                        onclick: move |_| uploaded.set((uploaded() + 1.0).min(8.0)),
                        "Add file"
                    }
                }
            }
        }
    }
}
