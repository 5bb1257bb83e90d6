use dioxus::prelude::*;
use kit_ui::{
    Badge, BadgeVariant, Divider, DividerVariant, Pill, PillVariant, Toast, ToastVariant,
};
use pretty_assertions::assert_eq;

use crate::common;

#[test]
fn test_unknown_variant_keys_fall_back_to_defaults() {
    assert_eq!(BadgeVariant::from_key("fuchsia"), BadgeVariant::Neutral);
    assert_eq!(PillVariant::from_key(""), PillVariant::Default);
    assert_eq!(ToastVariant::from_key("fatal"), ToastVariant::Info);
    assert_eq!(DividerVariant::from_key("double"), DividerVariant::Solid);
}

fn status_row() -> Element {
    rsx! {
        Badge { variant: BadgeVariant::Warning, status_dot: true, "Degraded" }
        Pill { variant: PillVariant::Brand, selected: true, "Owner" }
        Divider { label: "details" }
        Toast { variant: ToastVariant::Warning, title: "Heads up" }
        Toast { variant: ToastVariant::Success, title: "Done" }
    }
}

#[test]
fn test_status_row_markup() {
    let html = common::render_app(status_row);

    assert!(html.contains("bg-warning-subtle"), "warning badge uses the subtle warning tone");
    assert!(html.contains("bg-brand"), "brand pill uses the solid brand tone");
    assert!(html.contains(r#"data-selected="true""#));
    assert!(html.contains(r#"<span class="divider-label">details</span>"#));
    assert_eq!(common::attr_values(&html, "role").iter().filter(|r| *r == "alert").count(), 1);
    assert_eq!(common::attr_values(&html, "role").iter().filter(|r| *r == "status").count(), 1);
}

fn removable_pills() -> Element {
    rsx! {
        Pill { "Static" }
        Pill { on_remove: move |_| {}, "Removable" }
    }
}

#[test]
fn test_remove_button_only_with_handler() {
    let html = common::render_app(removable_pills);
    assert_eq!(common::count(&html, "pill-remove"), 1);
}
