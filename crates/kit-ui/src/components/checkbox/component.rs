use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdMinus};
use dioxus_free_icons::Icon;
use dioxus_primitives::checkbox as prim;
use kit_core::{checkbox_value, ChangeOutcome, Controllable};

use crate::hooks::{use_model, ModelHandle};
use crate::style::class_names;

pub use kit_core::CheckedState;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CheckboxSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl CheckboxSize {
    fn class(&self) -> &'static str {
        match self {
            CheckboxSize::Sm => "checkbox-sm",
            CheckboxSize::Md => "checkbox-md",
            CheckboxSize::Lg => "checkbox-lg",
        }
    }

    fn icon_px(&self) -> u32 {
        match self {
            CheckboxSize::Sm => 10,
            CheckboxSize::Md => 12,
            CheckboxSize::Lg => 16,
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    /// Current value. Supplying it on first render makes the checkbox
    /// controlled for its whole lifetime.
    #[props(default)]
    pub checked: Option<CheckedState>,
    /// Seed for an uncontrolled checkbox.
    #[props(default)]
    pub default_checked: Option<CheckedState>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub size: CheckboxSize,
    /// Form field name for the primitive's hidden native input.
    #[props(default)]
    pub name: Option<String>,
    #[props(default)]
    pub on_checked_change: Option<EventHandler<CheckedState>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Checkbox value held by the component.
pub type CheckboxModel = Controllable<CheckedState>;

/// Same value in the primitive's vocabulary.
pub fn to_primitive(state: CheckedState) -> prim::CheckboxState {
    match state {
        CheckedState::Checked => prim::CheckboxState::Checked,
        CheckedState::Unchecked => prim::CheckboxState::Unchecked,
        CheckedState::Indeterminate => prim::CheckboxState::Indeterminate,
    }
}

/// One click. The next value comes from the model, not from the
/// primitive, so the mixed state always resolves to checked.
pub fn click_checkbox(
    model: &ModelHandle<CheckboxModel>,
    external: Option<CheckedState>,
    disabled: bool,
    on_change: Option<EventHandler<CheckedState>>,
) -> ChangeOutcome {
    let mut emitted = None;
    let outcome =
        model.update(|value| value.toggle(external.as_ref(), disabled, |next| emitted = Some(next)));
    if let (ChangeOutcome::Notified, Some(next)) = (outcome, emitted) {
        tracing::debug!(?next, "checkbox changed");
        if let Some(handler) = on_change {
            handler.call(next);
        }
    }
    outcome
}

/// A tri-state checkbox over the primitive checkbox.
///
/// Accessible labelling comes through the usual attributes
/// (`aria_label`, `aria_labelledby`, `id` paired with a `label`).
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let model = use_model(|| checkbox_value(props.checked, props.default_checked));

    if let Some(violation) = model.sync(|value| value.sync(props.checked.as_ref())) {
        tracing::warn!(?violation, "checkbox changed control mode after mount");
    }
    let state = model.read(|value| value.resolve(props.checked.as_ref()));

    let external = props.checked;
    let disabled = props.disabled;
    let on_change = props.on_checked_change;

    let mut base = vec![
        Attribute::new(
            "class",
            class_names(["checkbox", props.size.class()]),
            None,
            false,
        ),
        Attribute::new("data-state", state.data_state(), None, false),
    ];
    if disabled {
        base.push(Attribute::new("data-disabled", "true", None, false));
    }
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);
    let icon_px = props.size.icon_px();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Checkbox {
            checked: Some(to_primitive(state)),
            disabled,
            name: props.name.unwrap_or_default(),
            on_checked_change: move |_: prim::CheckboxState| {
                click_checkbox(&model, external, disabled, on_change);
            },
            attributes: merged,
            prim::CheckboxIndicator {
                attributes: vec![
                    Attribute::new("class", "checkbox-indicator", None, false),
                    Attribute::new("data-state", state.data_state(), None, false),
                ],
                {match state {
                    CheckedState::Checked => rsx! {
                        Icon::<LdCheck> { icon: LdCheck, width: icon_px, height: icon_px }
                    },
                    CheckedState::Indeterminate => rsx! {
                        Icon::<LdMinus> { icon: LdMinus, width: icon_px, height: icon_px }
                    },
                    CheckedState::Unchecked => rsx! {},
                }}
            }
        }
    }
}
