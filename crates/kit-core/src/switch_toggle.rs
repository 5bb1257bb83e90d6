use crate::controllable::{ChangeOutcome, Controllable};
use crate::option_pair::OptionPair;

/// Selection state of a two-option switch toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchToggleState {
    options: OptionPair,
    value: Controllable<String>,
}

impl SwitchToggleState {
    /// Without a current or initial value the first option is selected.
    pub fn new(options: OptionPair, value: Option<String>, default_value: Option<String>) -> Self {
        let first = options.first_value().to_string();
        Self {
            value: Controllable::new(value, default_value, || first),
            options,
        }
    }

    pub fn options(&self) -> &OptionPair {
        &self.options
    }

    pub fn value(&self) -> &Controllable<String> {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut Controllable<String> {
        &mut self.value
    }

    pub fn selected(&self, external: Option<&String>) -> String {
        self.value.resolve(external)
    }

    /// Index of the selected option, or `None` when the owner supplied a
    /// value that matches neither option.
    pub fn selected_index(&self, external: Option<&String>) -> Option<usize> {
        self.options.index_of(&self.selected(external))
    }

    /// Pointer selection of an option. Re-selecting the current option is
    /// still an accepted interaction.
    pub fn select(
        &mut self,
        index: usize,
        disabled: bool,
        notify: impl FnOnce(String),
    ) -> ChangeOutcome {
        let Some(option) = self.options.get(index) else {
            return ChangeOutcome::Ignored;
        };
        let next = option.value.clone();
        self.value.change(next, disabled, notify)
    }

    /// Keyboard step: move to the other option.
    pub fn flip(
        &mut self,
        external: Option<&String>,
        disabled: bool,
        notify: impl FnOnce(String),
    ) -> ChangeOutcome {
        let current = self.selected(external);
        let next = self.options.other(&current).to_string();
        self.value.change(next, disabled, notify)
    }
}
