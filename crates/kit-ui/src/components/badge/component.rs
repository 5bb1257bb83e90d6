use dioxus::prelude::*;

use crate::style::{class_names, Tone};

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Neutral,
    Info,
    Success,
    Warning,
    Error,
}

impl BadgeVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeVariant::Neutral => "neutral",
            BadgeVariant::Info => "info",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Error => "error",
        }
    }

    /// Unknown keys render as the neutral badge.
    pub fn from_key(s: &str) -> Self {
        match s {
            "info" => BadgeVariant::Info,
            "success" => BadgeVariant::Success,
            "warning" => BadgeVariant::Warning,
            "error" => BadgeVariant::Error,
            _ => BadgeVariant::Neutral,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            BadgeVariant::Neutral => Tone::Neutral,
            BadgeVariant::Info => Tone::Info,
            BadgeVariant::Success => Tone::Success,
            BadgeVariant::Warning => Tone::Warning,
            BadgeVariant::Error => Tone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeSize {
    Sm,
    #[default]
    Md,
}

impl BadgeSize {
    fn class(&self) -> &'static str {
        match self {
            BadgeSize::Sm => "badge-sm",
            BadgeSize::Md => "badge-md",
        }
    }
}

/// Inline label for statuses and counts.
///
/// Slots render in a fixed order: status dot, leading icon, label,
/// trailing icon.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] size: BadgeSize,
    #[props(default = false)] status_dot: bool,
    leading_icon: Option<Element>,
    trailing_icon: Option<Element>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let bundle = variant.tone().subtle();
    let base = vec![
        Attribute::new(
            "class",
            class_names(["badge", size.class(), bundle.classes().as_str()]),
            None,
            false,
        ),
        Attribute::new("data-variant", variant.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            if status_dot {
                span { class: class_names(["badge-dot", bundle.icon]), "aria-hidden": "true" }
            }
            if let Some(icon) = leading_icon {
                span { class: class_names(["badge-icon", bundle.icon]), {icon} }
            }
            span { class: "badge-label", {children} }
            if let Some(icon) = trailing_icon {
                span { class: class_names(["badge-icon", bundle.icon]), {icon} }
            }
        }
    }
}
