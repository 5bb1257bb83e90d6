use thiserror::Error;

/// Construction-time validation failures.
///
/// Interactions never fail; a disabled control simply ignores them. These
/// errors only surface when a component is handed inputs that break its
/// preconditions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UiError {
    #[error("a switch toggle needs exactly 2 options, got {0}")]
    OptionCount(usize),

    #[error("switch toggle options must have distinct values, `{0}` appears twice")]
    DuplicateOptionValue(String),

    #[error("slider range is empty or not finite (min {min}, max {max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("slider step must be a positive number, got {0}")]
    InvalidStep(f64),

    #[error("invalid explorer config: {0}")]
    Config(String),
}

impl From<toml::de::Error> for UiError {
    fn from(err: toml::de::Error) -> Self {
        UiError::Config(err.message().to_string())
    }
}
