use dioxus::prelude::*;

/// Design-token themes shipped with the library.
///
/// Each theme is a set of CSS custom properties in `tokens.css`, selected by
/// the `data-theme` attribute on the document root.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    HighContrast,
}

/// All available themes in display order.
pub const ALL_THEMES: &[Theme] = &[Theme::Light, Theme::Dark, Theme::HighContrast];

impl Theme {
    /// Value of the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::HighContrast => "high-contrast",
        }
    }

    /// Human-readable name for display in UI.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::HighContrast => "High contrast",
        }
    }

    /// Parse a theme key, falling back to Light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            "high-contrast" => Theme::HighContrast,
            _ => Theme::Light,
        }
    }
}

fn apply_script(theme: &str) -> String {
    format!(
        r#"
        (function() {{
            var root = document.documentElement;
            if (root.dataset.themePrev === undefined) {{
                root.dataset.themePrev = root.getAttribute('data-theme') || '';
            }}
            root.setAttribute('data-theme', '{theme}');
        }})();
        "#,
    )
}

const RESTORE_SCRIPT: &str = r#"
    (function() {
        var root = document.documentElement;
        var prev = root.dataset.themePrev;
        if (prev) {
            root.setAttribute('data-theme', prev);
        } else {
            root.removeAttribute('data-theme');
        }
        delete root.dataset.themePrev;
    })();
"#;

/// Apply a theme to the document root for as long as this component is
/// mounted.
///
/// The previous `data-theme` value is restored when the scope unmounts.
/// Children render inside a wrapper carrying the same attribute, so server
/// rendered markup is themed before any script runs.
#[component]
pub fn ThemeScope(theme: ReadSignal<Theme>, children: Element) -> Element {
    use_effect(move || {
        let key = theme().as_str();
        tracing::debug!(theme = key, "applying theme");
        document::eval(&apply_script(key));
    });

    use_drop(|| {
        document::eval(RESTORE_SCRIPT);
    });

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./tokens.css") }
        div {
            class: "theme-scope",
            "data-theme": theme().as_str(),
            {children}
        }
    }
}
