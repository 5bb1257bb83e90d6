use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBan, LdBell, LdCheck, LdInfo, LdX};
use dioxus_free_icons::Icon;

use crate::style::{class_names, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ToastVariant {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Info => "info",
            ToastVariant::Success => "success",
            ToastVariant::Warning => "warning",
            ToastVariant::Error => "error",
        }
    }

    pub fn from_key(s: &str) -> Self {
        match s {
            "success" => ToastVariant::Success,
            "warning" => ToastVariant::Warning,
            "error" => ToastVariant::Error,
            _ => ToastVariant::Info,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            ToastVariant::Info => Tone::Info,
            ToastVariant::Success => Tone::Success,
            ToastVariant::Warning => Tone::Warning,
            ToastVariant::Error => Tone::Danger,
        }
    }

    /// Warnings and errors interrupt assistive technology; the rest are
    /// announced politely.
    pub fn role(&self) -> &'static str {
        match self {
            ToastVariant::Warning | ToastVariant::Error => "alert",
            ToastVariant::Info | ToastVariant::Success => "status",
        }
    }
}

fn default_icon(variant: ToastVariant) -> Element {
    match variant {
        ToastVariant::Info => rsx! { Icon::<LdInfo> { icon: LdInfo, width: 16, height: 16 } },
        ToastVariant::Success => rsx! { Icon::<LdCheck> { icon: LdCheck, width: 16, height: 16 } },
        ToastVariant::Warning => rsx! { Icon::<LdBell> { icon: LdBell, width: 16, height: 16 } },
        ToastVariant::Error => rsx! { Icon::<LdBan> { icon: LdBan, width: 16, height: 16 } },
    }
}

/// Notification card. Placement and timing are left to the caller.
#[component]
pub fn Toast(
    #[props(default)] variant: ToastVariant,
    /// Replaces the variant's default icon.
    icon: Option<Element>,
    #[props(default)] title: Option<String>,
    #[props(default)] description: Option<String>,
    action: Option<Element>,
    #[props(default)] on_dismiss: Option<EventHandler<()>>,
    #[props(default = "Dismiss".to_string())] dismiss_label: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let bundle = variant.tone().subtle();
    let base = vec![
        Attribute::new(
            "class",
            class_names(["toast", bundle.classes().as_str()]),
            None,
            false,
        ),
        Attribute::new("role", variant.role(), None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let icon = icon.unwrap_or_else(|| default_icon(variant));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            span { class: class_names(["toast-icon", bundle.icon]), "aria-hidden": "true", {icon} }
            div {
                class: "toast-body",
                if let Some(title) = title {
                    p { class: "toast-title", "{title}" }
                }
                if let Some(description) = description {
                    p { class: "toast-description", "{description}" }
                }
            }
            if let Some(action) = action {
                div { class: "toast-action", {action} }
            }
            if let Some(handler) = on_dismiss {
                button {
                    r#type: "button",
                    class: "toast-dismiss",
                    "aria-label": "{dismiss_label}",
                    onclick: move |_| {
                        tracing::debug!("toast dismissed");
                        handler.call(());
                    },
                    Icon::<LdX> { icon: LdX, width: 14, height: 14 }
                }
            }
        }
    }
}
