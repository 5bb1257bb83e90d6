use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

use crate::controllable::{ChangeOutcome, Controllable};

/// Checkbox value: `true`, `false`, or the mixed state.
///
/// Serializes as `true`, `false` or `"indeterminate"`, the same shape the
/// change notification carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckedState {
    #[default]
    Unchecked,
    Checked,
    Indeterminate,
}

impl CheckedState {
    pub fn from_bool(checked: bool) -> Self {
        if checked {
            CheckedState::Checked
        } else {
            CheckedState::Unchecked
        }
    }

    /// State after one click. The mixed state resolves to checked.
    pub fn toggled(self) -> Self {
        match self {
            CheckedState::Checked => CheckedState::Unchecked,
            CheckedState::Unchecked | CheckedState::Indeterminate => CheckedState::Checked,
        }
    }

    pub fn is_checked(self) -> bool {
        self == CheckedState::Checked
    }

    /// Value for `aria-checked`.
    pub fn aria_checked(self) -> &'static str {
        match self {
            CheckedState::Checked => "true",
            CheckedState::Unchecked => "false",
            CheckedState::Indeterminate => "mixed",
        }
    }

    /// Value for `data-state`, which the stylesheet keys on.
    pub fn data_state(self) -> &'static str {
        match self {
            CheckedState::Checked => "checked",
            CheckedState::Unchecked => "unchecked",
            CheckedState::Indeterminate => "indeterminate",
        }
    }
}

impl From<bool> for CheckedState {
    fn from(checked: bool) -> Self {
        CheckedState::from_bool(checked)
    }
}

impl Serialize for CheckedState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CheckedState::Checked => serializer.serialize_bool(true),
            CheckedState::Unchecked => serializer.serialize_bool(false),
            CheckedState::Indeterminate => serializer.serialize_str("indeterminate"),
        }
    }
}

impl<'de> Deserialize<'de> for CheckedState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CheckedVisitor;

        impl Visitor<'_> for CheckedVisitor {
            type Value = CheckedState;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean or \"indeterminate\"")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<CheckedState, E> {
                Ok(CheckedState::from_bool(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<CheckedState, E> {
                match v {
                    "indeterminate" => Ok(CheckedState::Indeterminate),
                    other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
                }
            }
        }

        deserializer.deserialize_any(CheckedVisitor)
    }
}

impl Controllable<CheckedState> {
    /// One click on the checkbox.
    ///
    /// Always proposes `current.toggled()`, so clicking an already checked
    /// box proposes unchecked and still notifies once.
    pub fn toggle(
        &mut self,
        external: Option<&CheckedState>,
        disabled: bool,
        notify: impl FnOnce(CheckedState),
    ) -> ChangeOutcome {
        let next = self.resolve(external).toggled();
        self.change(next, disabled, notify)
    }
}

/// Resolver for a checkbox, defaulting to unchecked.
pub fn checkbox_value(
    checked: Option<CheckedState>,
    default_checked: Option<CheckedState>,
) -> Controllable<CheckedState> {
    Controllable::new(checked, default_checked, CheckedState::default)
}
