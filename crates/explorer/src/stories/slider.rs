use dioxus::prelude::*;
use kit_ui::{Orientation, Slider};

use super::StorySection;
use crate::action_log::use_recorder;
use crate::config;

fn describe(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

#[component]
pub fn SliderStory() -> Element {
    let mut record = use_recorder("slider");
    let show_tooltip = config::config().stories.show_tooltips;
    let mut volume = use_signal(|| vec![30.0]);

    rsx! {
        StorySection {
            title: "Uncontrolled",
            div { class: "story-column",
                Slider {
                    label: "Brightness",
                    default_value: vec![50.0],
                    show_tooltip,
                    on_value_change: move |values: Vec<f64>| record(format!("brightness {}", describe(&values))),
                }
                Slider {
                    label: "Price",
                    default_value: vec![20.0, 80.0],
                    step: 5.0,
                    show_tooltip,
                    show_min_max: true,
                    format_value: |value: f64| format!("${value}"),
                    on_value_change: move |values: Vec<f64>| record(format!("price {}", describe(&values))),
                }
            }
        }
        StorySection {
            title: "Controlled",
            note: "Volume is {describe(&volume())}.",
            div { class: "story-column",
                Slider {
                    label: "Volume",
                    value: volume(),
                    start_label: "Quiet",
                    end_label: "Loud",
                    show_tooltip,
                    on_value_change: move |values: Vec<f64>| {
                        record(format!("volume {}", describe(&values)));
                        volume.set(values);
                    },
                }
                button { r#type: "button", onclick: move |_| volume.set(vec![30.0]), "Reset" }
            }
        }
        StorySection { title: "Fractional step",
            div { class: "story-column",
                Slider {
                    label: "Opacity",
                    min: 0.0,
                    max: 1.0,
                    step: 0.1,
                    default_value: vec![0.5],
                    show_tooltip,
                    on_value_change: move |values: Vec<f64>| record(format!("opacity {}", describe(&values))),
                }
            }
        }
        StorySection { title: "Vertical, inverted and disabled",
            div { class: "story-row",
                Slider { label: "Level", orientation: Orientation::Vertical, default_value: vec![60.0], show_tooltip }
                Slider { label: "Countdown", inverted: true, default_value: vec![25.0], show_tooltip }
                Slider { label: "Locked", disabled: true, default_value: vec![40.0] }
            }
        }
    }
}
