use dioxus::prelude::*;
use dioxus_primitives::progress as prim;
use kit_core::{ratio_percent, ProgressReading};

use crate::style::class_names;

pub use kit_core::{ProgressTier, ProgressVariant};

/// Horizontal progress indicator over the primitive progress bar.
///
/// `value` is a percentage. When `total` is set, `value` is read as a part
/// of that total instead. Either way the result is clamped to `[0, 100]`
/// before anything is rendered.
#[component]
pub fn ProgressBar(
    #[props(default = 0.0)] value: f64,
    #[props(default)] total: Option<f64>,
    #[props(default)] variant: ProgressVariant,
    #[props(default = false)] show_label: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let percent = match total {
        Some(total) => ratio_percent(value, total),
        None => value,
    };
    let reading = ProgressReading::new(percent, variant);
    let tier = reading.tier.as_str();

    let base = vec![
        Attribute::new("class", "progress-bar", None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
        Attribute::new("data-tier", tier, None, false),
        Attribute::new("data-percent", reading.percent.to_string(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let fill = vec![
        Attribute::new(
            "class",
            class_names(["progress-bar-fill", tier_class(reading.tier)]),
            None,
            false,
        ),
        Attribute::new("style", format!("width: {}", reading.width()), None, false),
    ];

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            prim::Progress {
                value: Some(reading.percent),
                attributes: vec![Attribute::new("class", "progress-bar-track", None, false)],
                prim::ProgressIndicator { attributes: fill }
            }
            if show_label {
                span { class: "progress-bar-label", {reading.label()} }
            }
        }
    }
}

fn tier_class(tier: ProgressTier) -> &'static str {
    match tier {
        ProgressTier::Low => "bg-danger",
        ProgressTier::Mid => "bg-warning",
        ProgressTier::Complete => "bg-success",
        ProgressTier::Neutral => "bg-brand",
    }
}
