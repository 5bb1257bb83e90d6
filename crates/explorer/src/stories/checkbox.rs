use dioxus::prelude::*;
use kit_ui::{CheckedState, Checkbox, CheckboxSize};

use super::StorySection;
use crate::action_log::use_recorder;

#[component]
pub fn CheckboxStory() -> Element {
    let mut record = use_recorder("checkbox");
    let mut accepted = use_signal(|| CheckedState::Indeterminate);

    rsx! {
        StorySection {
            title: "Uncontrolled",
            note: "Each checkbox keeps its own value and reports changes.",
            div { class: "story-row",
                for size in [CheckboxSize::Sm, CheckboxSize::Md, CheckboxSize::Lg] {
                    label { key: "{size:?}", class: "story-row",
                        Checkbox {
                            size,
                            on_checked_change: move |next: CheckedState| record(format!("{size:?} -> {}", next.aria_checked())),
                        }
                        "{size:?}"
                    }
                }
                label { class: "story-row",
                    Checkbox { default_checked: CheckedState::Checked, name: "newsletter" }
                    "Checked by default"
                }
            }
        }
        StorySection {
            title: "Controlled",
            note: "The story owns the value. Toggling an indeterminate box checks it.",
            div { class: "story-row",
                label { class: "story-row",
                    Checkbox {
                        checked: accepted(),
                        on_checked_change: move |next: CheckedState| {
                            record(format!("controlled -> {}", next.aria_checked()));
                            accepted.set(next);
                        },
                    }
                    "Accept terms ({accepted().aria_checked()})"
                }
                button {
                    r#type: "button",
                    onclick: move |_| accepted.set(CheckedState::Indeterminate),
                    "Reset to mixed"
                }
            }
        }
        StorySection { title: "Disabled",
            div { class: "story-row",
                Checkbox { disabled: true, aria_label: "Disabled" }
                Checkbox { disabled: true, default_checked: CheckedState::Checked, aria_label: "Disabled checked" }
            }
        }
    }
}
