use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;

use crate::style::{class_names, StyleBundle, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PillVariant {
    #[default]
    Default,
    Brand,
    Outline,
    Subtle,
}

impl PillVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            PillVariant::Default => "default",
            PillVariant::Brand => "brand",
            PillVariant::Outline => "outline",
            PillVariant::Subtle => "subtle",
        }
    }

    /// Unknown keys render as the default pill.
    pub fn from_key(s: &str) -> Self {
        match s {
            "brand" => PillVariant::Brand,
            "outline" => PillVariant::Outline,
            "subtle" => PillVariant::Subtle,
            _ => PillVariant::Default,
        }
    }

    pub fn bundle(&self) -> StyleBundle {
        match self {
            PillVariant::Default => Tone::Neutral.solid(),
            PillVariant::Brand => Tone::Brand.solid(),
            PillVariant::Outline => StyleBundle {
                surface: "bg-transparent",
                text: "text-neutral-strong",
                border: "border-neutral",
                icon: "text-neutral",
            },
            PillVariant::Subtle => Tone::Neutral.subtle(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PillSize {
    Sm,
    #[default]
    Md,
}

impl PillSize {
    fn class(&self) -> &'static str {
        match self {
            PillSize::Sm => "pill-sm",
            PillSize::Md => "pill-md",
        }
    }

    fn icon_px(&self) -> u32 {
        match self {
            PillSize::Sm => 10,
            PillSize::Md => 12,
        }
    }
}

/// Rounded tag for filters and selections.
///
/// The remove button is only rendered when `on_remove` is supplied.
#[component]
pub fn Pill(
    #[props(default)] variant: PillVariant,
    #[props(default)] size: PillSize,
    #[props(default = false)] selected: bool,
    leading_icon: Option<Element>,
    trailing_icon: Option<Element>,
    #[props(default)] on_remove: Option<EventHandler<()>>,
    /// Accessible name of the remove button.
    #[props(default = "Remove".to_string())]
    remove_label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let bundle = variant.bundle();
    let base = vec![
        Attribute::new(
            "class",
            class_names(["pill", size.class(), bundle.classes().as_str()]),
            None,
            false,
        ),
        Attribute::new("data-variant", variant.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let icon_px = size.icon_px();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            "data-selected": selected.then_some("true"),
            ..merged,
            if let Some(icon) = leading_icon {
                span { class: class_names(["pill-icon", bundle.icon]), {icon} }
            }
            span { class: "pill-label", {children} }
            if let Some(icon) = trailing_icon {
                span { class: class_names(["pill-icon", bundle.icon]), {icon} }
            }
            if let Some(handler) = on_remove {
                button {
                    r#type: "button",
                    class: "pill-remove",
                    "aria-label": "{remove_label}",
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        tracing::debug!("pill removed");
                        handler.call(());
                    },
                    Icon::<LdX> { icon: LdX, width: icon_px, height: icon_px }
                }
            }
        }
    }
}
