// Presentation wrappers (stateless)
pub mod badge;
pub mod divider;
pub mod pill;
pub mod progress_bar;
pub mod toast;

// Controlled/uncontrolled inputs
pub mod checkbox;
pub mod slider;
pub mod switch_toggle;

// Re-exports for convenience
pub use badge::*;
pub use checkbox::*;
pub use divider::*;
pub use pill::*;
pub use progress_bar::*;
pub use slider::*;
pub use switch_toggle::*;
pub use toast::*;
