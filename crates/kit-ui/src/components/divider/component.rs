use dioxus::prelude::*;
use dioxus_primitives::separator as prim;

use crate::style::class_names;

pub use kit_core::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DividerVariant {
    #[default]
    Solid,
    Dashed,
}

impl DividerVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DividerVariant::Solid => "solid",
            DividerVariant::Dashed => "dashed",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "dashed" => DividerVariant::Dashed,
            _ => DividerVariant::Solid,
        }
    }
}

/// Separator line between groups of content.
///
/// A label is only shown on horizontal dividers; it sits centered between
/// two line segments.
#[component]
pub fn Divider(
    #[props(default)] orientation: Orientation,
    #[props(default)] variant: DividerVariant,
    #[props(default)] label: Option<String>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let horizontal = orientation == Orientation::Horizontal;
    let line = class_names(["divider-line", variant_class(variant)]);

    let base = vec![
        Attribute::new("class", "divider", None, false),
        Attribute::new("data-orientation", orientation.as_str(), None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    match label.filter(|_| horizontal) {
        Some(label) => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div {
                ..merged,
                prim::Separator { class: line.clone(), horizontal: true }
                span { class: "divider-label", "{label}" }
                prim::Separator { class: line, horizontal: true }
            }
        },
        None => rsx! {
            document::Link { rel: "stylesheet", href: asset!("./style.css") }
            div {
                ..merged,
                prim::Separator { class: line, horizontal }
            }
        },
    }
}

fn variant_class(variant: DividerVariant) -> &'static str {
    match variant {
        DividerVariant::Solid => "divider-solid",
        DividerVariant::Dashed => "divider-dashed",
    }
}
