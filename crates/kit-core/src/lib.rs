//! Headless state for the tokenkit components.
//!
//! Nothing in this crate knows about Dioxus. The component crate feeds
//! user interactions into these models and renders whatever they resolve.

pub mod checkbox;
pub mod config;
pub mod controllable;
pub mod error;
pub mod option_pair;
pub mod progress;
pub mod slider;
pub mod switch_toggle;

pub use checkbox::*;
pub use config::*;
pub use controllable::*;
pub use error::*;
pub use option_pair::*;
pub use progress::*;
pub use slider::*;
pub use switch_toggle::*;
