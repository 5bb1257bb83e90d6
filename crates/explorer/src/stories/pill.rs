use dioxus::prelude::*;
use kit_ui::{Pill, PillSize, PillVariant};

use super::StorySection;
use crate::action_log::use_recorder;

const VARIANTS: &[PillVariant] = &[
    PillVariant::Default,
    PillVariant::Brand,
    PillVariant::Outline,
    PillVariant::Subtle,
];

const TAGS: &[&str] = &["rust", "dioxus", "wasm", "accessibility"];

#[component]
pub fn PillStory() -> Element {
    let mut record = use_recorder("pill");
    let mut tags = use_signal(|| TAGS.iter().map(|t| t.to_string()).collect::<Vec<_>>());
    let mut selected = use_signal(|| None::<PillVariant>);

    rsx! {
        StorySection {
            title: "Variants",
            note: "Click a pill to select it.",
            div { class: "story-row",
                for variant in VARIANTS.iter().copied() {
                    Pill {
                        key: "{variant.as_str()}",
                        variant,
                        selected: selected() == Some(variant),
                        onclick: move |_| {
                            record(format!("selected {}", variant.as_str()));
                            selected.set(Some(variant));
                        },
                        "{variant.as_str()}"
                    }
                }
            }
        }
        StorySection { title: "Sizes",
            div { class: "story-row",
                Pill { size: PillSize::Sm, "Small" }
                Pill { size: PillSize::Md, "Medium" }
            }
        }
        StorySection {
            title: "Removable",
            note: "The remove button only appears when a handler is attached.",
            div { class: "story-row",
                for tag in tags() {
                    Pill {
                        key: "{tag}",
                        variant: PillVariant::Subtle,
                        remove_label: format!("Remove {tag}"),
                        on_remove: {
                            let tag = tag.clone();
                            move |_| {
                                record(format!("removed {tag}"));
                                tags.write().retain(|t| *t != tag);
                            }
                        },
                        "{tag}"
                    }
                }
                if tags.read().len() < TAGS.len() {
                    button {
                        r#type: "button",
                        onclick: move |_| tags.set(TAGS.iter().map(|t| t.to_string()).collect()),
                        "Restore"
                    }
                }
            }
        }
    }
}
