use std::collections::HashSet;

use dioxus::prelude::*;
use dioxus_primitives::toggle_group as prim;
use kit_core::{ChangeOutcome, OptionPair, SwitchToggleState, UiError};

use crate::hooks::{use_model, ModelHandle};
use crate::style::class_names;

pub use kit_core::ToggleOption;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SwitchToggleSize {
    Sm,
    #[default]
    Md,
}

impl SwitchToggleSize {
    fn class(&self) -> &'static str {
        match self {
            SwitchToggleSize::Sm => "switch-toggle-sm",
            SwitchToggleSize::Md => "switch-toggle-md",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SwitchToggleProps {
    /// Exactly two options with distinct values. Read once at mount.
    pub options: Vec<ToggleOption>,
    /// Selected value. Supplying it on first render makes the toggle
    /// controlled for its whole lifetime.
    #[props(default)]
    pub value: Option<String>,
    /// Seed for an uncontrolled toggle. Defaults to the first option.
    #[props(default)]
    pub default_value: Option<String>,
    #[props(default = false)]
    pub disabled: bool,
    #[props(default)]
    pub size: SwitchToggleSize,
    #[props(default)]
    pub on_value_change: Option<EventHandler<String>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Toggle state held by the component. Invalid options keep their error.
pub type ToggleModel = Result<SwitchToggleState, UiError>;

fn commit(
    model: &ModelHandle<ToggleModel>,
    on_change: Option<EventHandler<String>>,
    apply: impl FnOnce(&mut SwitchToggleState, &mut Option<String>) -> ChangeOutcome,
) -> ChangeOutcome {
    let mut emitted = None;
    let outcome = model.update(|state| match state {
        Ok(state) => apply(state, &mut emitted),
        Err(_) => ChangeOutcome::Ignored,
    });
    if let (ChangeOutcome::Notified, Some(next)) = (outcome, emitted) {
        tracing::debug!(value = %next, "switch toggle changed");
        if let Some(handler) = on_change {
            handler.call(next);
        }
    }
    outcome
}

/// Option picked by a press, given the set the toggle group reports.
///
/// The group un-presses an item that is pressed again, which arrives as an
/// empty set; that is a re-selection of the current option.
pub fn pressed_option(pressed: &HashSet<usize>, current: Option<usize>) -> Option<usize> {
    pressed
        .iter()
        .copied()
        .find(|index| Some(*index) != current)
        .or(current)
}

/// Pointer selection of one option.
pub fn choose_switch_option(
    model: &ModelHandle<ToggleModel>,
    index: usize,
    disabled: bool,
    on_change: Option<EventHandler<String>>,
) -> ChangeOutcome {
    commit(model, on_change, |state, emitted| {
        state.select(index, disabled, |next| *emitted = Some(next))
    })
}

/// Arrow-key step to the other option.
pub fn step_switch_toggle(
    model: &ModelHandle<ToggleModel>,
    external: Option<&String>,
    disabled: bool,
    on_change: Option<EventHandler<String>>,
) -> ChangeOutcome {
    commit(model, on_change, |state, emitted| {
        state.flip(external, disabled, |next| *emitted = Some(next))
    })
}

/// A segmented control choosing between two options, built on the
/// primitive toggle group.
///
/// Options that are not exactly two distinct values are rejected at mount:
/// the toggle renders empty and disabled, and the error is logged.
#[component]
pub fn SwitchToggle(props: SwitchToggleProps) -> Element {
    let model = use_model(|| {
        OptionPair::try_from(props.options.clone())
            .map(|pair| {
                SwitchToggleState::new(pair, props.value.clone(), props.default_value.clone())
            })
            .inspect_err(|err| tracing::warn!(%err, "switch toggle rejected its options"))
    });

    let external = props.value.clone();
    if let Some(violation) = model.sync(|state| {
        state
            .as_mut()
            .ok()
            .and_then(|state| state.value_mut().sync(external.as_ref()))
    }) {
        tracing::warn!(?violation, "switch toggle changed control mode after mount");
    }

    let (options, selected) = model.read(|state| match state {
        Ok(state) => (
            state.options().options().to_vec(),
            state.selected_index(external.as_ref()),
        ),
        Err(_) => (Vec::new(), None),
    });
    let invalid = options.is_empty();
    let disabled = props.disabled || invalid;
    let on_change = props.on_value_change;

    let base = vec![Attribute::new(
        "class",
        class_names(["switch-toggle", props.size.class()]),
        None,
        false,
    )];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes]);

    let items: Vec<_> = options
        .into_iter()
        .enumerate()
        .map(|(index, option)| {
            let on = selected == Some(index);
            let attributes = vec![
                Attribute::new("class", "switch-toggle-option", None, false),
                Attribute::new("data-state", if on { "on" } else { "off" }, None, false),
                Attribute::new("data-selected", if on { "true" } else { "false" }, None, false),
                Attribute::new("data-value", option.value.clone(), None, false),
            ];
            (index, option, attributes)
        })
        .collect();
    let pressed: HashSet<usize> = selected.into_iter().collect();
    let press_model = model.clone();
    let key_model = model.clone();
    let key_external = external.clone();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            "aria-disabled": disabled.then_some("true"),
            "data-disabled": disabled.then_some("true"),
            "data-invalid": invalid.then_some("true"),
            onkeydown: move |e: KeyboardEvent| {
                if matches!(
                    e.key(),
                    Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown
                ) {
                    step_switch_toggle(&key_model, key_external.as_ref(), disabled, on_change);
                }
            },
            ..merged,
            prim::ToggleGroup {
                horizontal: true,
                pressed: Some(pressed),
                disabled,
                on_pressed_change: move |next: HashSet<usize>| {
                    if let Some(index) = pressed_option(&next, selected) {
                        choose_switch_option(&press_model, index, disabled, on_change);
                    }
                },
                attributes: vec![Attribute::new("class", "switch-toggle-group", None, false)],
                for (index, option, attributes) in items {
                    prim::ToggleItem {
                        key: "{option.value}",
                        index,
                        disabled,
                        attributes,
                        "{option.label}"
                    }
                }
            }
        }
    }
}
