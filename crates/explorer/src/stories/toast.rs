use dioxus::prelude::*;
use kit_ui::{Toast, ToastVariant};

use super::StorySection;
use crate::action_log::use_recorder;

const VARIANTS: &[ToastVariant] = &[
    ToastVariant::Info,
    ToastVariant::Success,
    ToastVariant::Warning,
    ToastVariant::Error,
];

fn title_for(variant: ToastVariant) -> &'static str {
    match variant {
        ToastVariant::Info => "New version available",
        ToastVariant::Success => "Changes saved",
        ToastVariant::Warning => "Storage almost full",
        ToastVariant::Error => "Upload failed",
    }
}

#[component]
pub fn ToastStory() -> Element {
    let mut record = use_recorder("toast");
    let mut visible = use_signal(|| VARIANTS.to_vec());

    rsx! {
        StorySection {
            title: "Variants",
            note: "Warnings and errors use role=alert, the others role=status.",
            div { class: "story-column",
                for variant in visible() {
                    Toast {
                        key: "{variant.as_str()}",
                        variant,
                        title: title_for(variant).to_string(),
                        description: format!("A {} notification.", variant.as_str()),
                        on_dismiss: move |_| {
                            record(format!("dismissed {}", variant.as_str()));
                            visible.write().retain(|v| *v != variant);
                        },
                    }
                }
                if visible.read().len() < VARIANTS.len() {
                    button {
                        r#type: "button",
                        onclick: move |_| visible.set(VARIANTS.to_vec()),
                        "Show all again"
                    }
                }
            }
        }
        StorySection { title: "With action",
            Toast {
                variant: ToastVariant::Success,
                title: "Message archived",
                action: rsx! {
                    button {
                        r#type: "button",
                        onclick: move |_| record("undo archive".to_string()),
                        "Undo"
                    }
                },
            }
        }
    }
}
