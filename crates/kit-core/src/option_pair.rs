use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// One selectable entry of a switch toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToggleOption {
    pub label: String,
    pub value: String,
}

impl ToggleOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Exactly two options with distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionPair([ToggleOption; 2]);

impl OptionPair {
    pub fn new(first: ToggleOption, second: ToggleOption) -> Result<Self, UiError> {
        if first.value == second.value {
            return Err(UiError::DuplicateOptionValue(first.value));
        }
        Ok(Self([first, second]))
    }

    pub fn options(&self) -> &[ToggleOption; 2] {
        &self.0
    }

    /// The value selected when nothing else is specified.
    pub fn first_value(&self) -> &str {
        &self.0[0].value
    }

    pub fn get(&self, index: usize) -> Option<&ToggleOption> {
        self.0.get(index)
    }

    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.0.iter().position(|opt| opt.value == value)
    }

    /// The value of the option that is not `value`.
    ///
    /// Values outside the pair resolve to the first option.
    pub fn other(&self, value: &str) -> &str {
        match self.index_of(value) {
            Some(0) => &self.0[1].value,
            _ => &self.0[0].value,
        }
    }
}

impl TryFrom<Vec<ToggleOption>> for OptionPair {
    type Error = UiError;

    fn try_from(options: Vec<ToggleOption>) -> Result<Self, Self::Error> {
        let count = options.len();
        let mut iter = options.into_iter();
        match (iter.next(), iter.next(), iter.next()) {
            (Some(first), Some(second), None) => OptionPair::new(first, second),
            _ => Err(UiError::OptionCount(count)),
        }
    }
}

impl<'de> Deserialize<'de> for OptionPair {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let options = Vec::<ToggleOption>::deserialize(deserializer)?;
        OptionPair::try_from(options).map_err(serde::de::Error::custom)
    }
}
