use dioxus::prelude::*;
use kit_core::ExplorerConfig;
use kit_ui::{Badge, Theme, ThemeScope, ALL_THEMES};
use pretty_assertions::assert_eq;

use crate::common;

#[test]
fn test_config_theme_keys_resolve() {
    let config = ExplorerConfig::from_toml_str("[explorer]\ntheme = \"dark\"").unwrap();
    assert_eq!(Theme::from_key(&config.explorer.theme), Theme::Dark);

    let keys: Vec<_> = ALL_THEMES.iter().map(Theme::as_str).collect();
    assert_eq!(keys, vec!["light", "dark", "high-contrast"]);
}

fn themed_app() -> Element {
    rsx! {
        ThemeScope { theme: Theme::HighContrast,
            Badge { "Inside" }
        }
    }
}

#[test]
fn test_scope_wraps_children_with_theme_attribute() {
    let html = common::render_app(themed_app);

    let scope = html.find(r#"data-theme="high-contrast""#).expect("scope renders its theme");
    let badge = html.find("Inside").expect("children render");
    assert!(scope < badge);
}
