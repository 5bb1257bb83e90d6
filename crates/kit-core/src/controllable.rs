/// Who owns the source of truth for a control's value.
///
/// Decided once, when the control is created, and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlMode {
    /// The owner supplies the value on every render.
    Controlled,
    /// The control keeps its own value and reports changes.
    Uncontrolled,
}

/// An owner broke the mode contract after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeViolation {
    /// A controlled instance stopped receiving a value. It stays frozen at
    /// the last value it was given.
    ControlledToUncontrolled,
    /// An uncontrolled instance started receiving a value. The value is
    /// honored for reads but the instance keeps its uncontrolled mode.
    UncontrolledToControlled,
}

/// Result of feeding a user interaction into a [`Controllable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The control is disabled; nothing was notified or stored.
    Ignored,
    /// The owner was notified exactly once.
    Notified,
}

/// Reconciles an owner-supplied value with internally tracked state.
///
/// ```
/// use kit_core::{ChangeOutcome, Controllable};
///
/// let mut value = Controllable::new(None, Some(false), || false);
/// let mut seen = Vec::new();
/// assert_eq!(value.change(true, false, |v| seen.push(v)), ChangeOutcome::Notified);
/// assert!(value.resolve(None));
/// assert_eq!(seen, vec![true]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Controllable<T> {
    mode: ControlMode,
    internal: T,
}

impl<T: Clone> Controllable<T> {
    /// Create the resolver. `external` is the owner's value at first render,
    /// `initial` the uncontrolled seed, `fallback` the component default.
    pub fn new(external: Option<T>, initial: Option<T>, fallback: impl FnOnce() -> T) -> Self {
        match external {
            Some(value) => Self {
                mode: ControlMode::Controlled,
                internal: value,
            },
            None => Self {
                mode: ControlMode::Uncontrolled,
                internal: initial.unwrap_or_else(fallback),
            },
        }
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn is_controlled(&self) -> bool {
        self.mode == ControlMode::Controlled
    }

    /// The value to display. An external value always wins.
    pub fn resolve(&self, external: Option<&T>) -> T {
        external.cloned().unwrap_or_else(|| self.internal.clone())
    }

    /// The internally held value, ignoring any external one.
    pub fn internal(&self) -> &T {
        &self.internal
    }

    /// Record the owner's value for this render.
    ///
    /// Controlled instances remember the latest external value so that a
    /// later omission freezes the display instead of jumping back to the
    /// construction seed.
    pub fn sync(&mut self, external: Option<&T>) -> Option<ModeViolation> {
        match (self.mode, external) {
            (ControlMode::Controlled, Some(value)) => {
                self.internal = value.clone();
                None
            }
            (ControlMode::Controlled, None) => Some(ModeViolation::ControlledToUncontrolled),
            (ControlMode::Uncontrolled, Some(_)) => Some(ModeViolation::UncontrolledToControlled),
            (ControlMode::Uncontrolled, None) => None,
        }
    }

    /// Apply a user interaction.
    ///
    /// Disabled controls never notify. Otherwise `notify` runs exactly once
    /// with `next`, and the internal value moves only when uncontrolled.
    pub fn change(&mut self, next: T, disabled: bool, notify: impl FnOnce(T)) -> ChangeOutcome {
        if disabled {
            return ChangeOutcome::Ignored;
        }
        if self.mode == ControlMode::Uncontrolled {
            self.internal = next.clone();
        }
        notify(next);
        ChangeOutcome::Notified
    }
}
