//! Configuration value types.

mod keybinding;
mod log_level;

pub use keybinding::KeyBinding;
pub use log_level::LogLevel;
