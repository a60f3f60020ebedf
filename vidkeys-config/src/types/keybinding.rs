//! Keybinding configuration entry.

use serde::{Deserialize, Serialize};

/// A keybinding configuration entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Trigger descriptor, e.g., "Alt+ArrowUp", "Alt+Digit1", "3"
    pub key: String,
    /// Action name, e.g., "speed_up", "jump_to_decile_3"
    pub action: String,
}

impl KeyBinding {
    /// Convenience constructor used by the default table.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}
