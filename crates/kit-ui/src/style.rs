/// Join class fragments with single spaces, skipping empty ones.
pub fn class_names<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Semantic color family. Each tone maps to a fixed set of token-driven
/// utility classes defined in `tokens.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Brand,
    Info,
    Success,
    Warning,
    Danger,
}

/// Utility classes for one visual variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleBundle {
    pub surface: &'static str,
    pub text: &'static str,
    pub border: &'static str,
    pub icon: &'static str,
}

impl StyleBundle {
    /// Container classes: surface, text and border.
    pub fn classes(&self) -> String {
        class_names([self.surface, self.text, self.border])
    }
}

impl Tone {
    /// Subtle (tinted) treatment used by badges, toasts and pills.
    pub const fn subtle(self) -> StyleBundle {
        match self {
            Tone::Neutral => StyleBundle {
                surface: "bg-neutral-subtle",
                text: "text-neutral-strong",
                border: "border-neutral",
                icon: "text-neutral",
            },
            Tone::Brand => StyleBundle {
                surface: "bg-brand-subtle",
                text: "text-brand-strong",
                border: "border-brand",
                icon: "text-brand",
            },
            Tone::Info => StyleBundle {
                surface: "bg-info-subtle",
                text: "text-info-strong",
                border: "border-info",
                icon: "text-info",
            },
            Tone::Success => StyleBundle {
                surface: "bg-success-subtle",
                text: "text-success-strong",
                border: "border-success",
                icon: "text-success",
            },
            Tone::Warning => StyleBundle {
                surface: "bg-warning-subtle",
                text: "text-warning-strong",
                border: "border-warning",
                icon: "text-warning",
            },
            Tone::Danger => StyleBundle {
                surface: "bg-danger-subtle",
                text: "text-danger-strong",
                border: "border-danger",
                icon: "text-danger",
            },
        }
    }

    /// Filled treatment for high-emphasis variants.
    pub const fn solid(self) -> StyleBundle {
        match self {
            Tone::Neutral => StyleBundle {
                surface: "bg-neutral",
                text: "text-on-neutral",
                border: "border-transparent",
                icon: "text-on-neutral",
            },
            Tone::Brand => StyleBundle {
                surface: "bg-brand",
                text: "text-on-brand",
                border: "border-transparent",
                icon: "text-on-brand",
            },
            Tone::Info => StyleBundle {
                surface: "bg-info",
                text: "text-on-info",
                border: "border-transparent",
                icon: "text-on-info",
            },
            Tone::Success => StyleBundle {
                surface: "bg-success",
                text: "text-on-success",
                border: "border-transparent",
                icon: "text-on-success",
            },
            Tone::Warning => StyleBundle {
                surface: "bg-warning",
                text: "text-on-warning",
                border: "border-transparent",
                icon: "text-on-warning",
            },
            Tone::Danger => StyleBundle {
                surface: "bg-danger",
                text: "text-on-danger",
                border: "border-transparent",
                icon: "text-on-danger",
            },
        }
    }
}
