use std::sync::OnceLock;

use kit_core::{ExplorerConfig, UiError};
use kit_ui::Theme;

static CONFIG: OnceLock<ExplorerConfig> = OnceLock::new();

/// Settings compiled into the binary.
const EMBEDDED: &str = include_str!("../explorer.toml");

/// Parse the embedded `explorer.toml` and store it in the global
/// `OnceLock`. Only the first call has effect.
///
/// A file that fails to parse is replaced by the defaults; the error is
/// handed back so it can be logged once logging is up.
pub fn load_config() -> Result<&'static ExplorerConfig, UiError> {
    let mut rejected = None;
    let config = CONFIG.get_or_init(|| {
        ExplorerConfig::from_toml_str(EMBEDDED).unwrap_or_else(|err| {
            rejected = Some(err);
            ExplorerConfig::default()
        })
    });
    match rejected {
        Some(err) => Err(err),
        None => Ok(config),
    }
}

/// The loaded config, or defaults if `load_config()` hasn't run.
pub fn config() -> &'static ExplorerConfig {
    CONFIG.get_or_init(ExplorerConfig::default)
}

/// Configured log level. Unknown names fall back to `INFO`.
pub fn log_level(config: &ExplorerConfig) -> tracing::Level {
    config
        .explorer
        .log_level
        .parse()
        .unwrap_or(tracing::Level::INFO)
}

pub fn initial_theme(config: &ExplorerConfig) -> Theme {
    Theme::from_key(&config.explorer.theme)
}
