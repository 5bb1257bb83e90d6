use dioxus::prelude::*;
use kit_ui::{SwitchToggle, SwitchToggleSize, ToggleOption};

use super::StorySection;
use crate::action_log::use_recorder;

fn view_options() -> Vec<ToggleOption> {
    vec![ToggleOption::new("List", "list"), ToggleOption::new("Grid", "grid")]
}

#[component]
pub fn SwitchToggleStory() -> Element {
    let mut record = use_recorder("switch toggle");
    let mut billing = use_signal(|| "monthly".to_string());

    rsx! {
        StorySection {
            title: "Uncontrolled",
            note: "Starts on the first option unless a default is given.",
            div { class: "story-row",
                SwitchToggle {
                    options: view_options(),
                    on_value_change: move |value: String| record(format!("view {value}")),
                }
                SwitchToggle {
                    options: view_options(),
                    default_value: "grid",
                    size: SwitchToggleSize::Sm,
                    on_value_change: move |value: String| record(format!("small view {value}")),
                }
            }
        }
        StorySection {
            title: "Controlled",
            note: "Billing: {billing}.",
            div { class: "story-row",
                SwitchToggle {
                    options: vec![ToggleOption::new("Monthly", "monthly"), ToggleOption::new("Yearly", "yearly")],
                    value: billing(),
                    on_value_change: move |value: String| {
                        record(format!("billing {value}"));
                        billing.set(value);
                    },
                }
            }
        }
        StorySection {
            title: "Disabled and invalid",
            note: "Options that are not two distinct values render an empty, disabled group.",
            div { class: "story-row",
                SwitchToggle { options: view_options(), disabled: true }
                SwitchToggle {
                    options: vec![ToggleOption::new("A", "same"), ToggleOption::new("B", "same")],
                }
            }
        }
    }
}
