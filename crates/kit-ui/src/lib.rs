pub mod components;
pub mod hooks;
pub mod style;
pub mod theme;

pub use components::*;
pub use theme::*;
