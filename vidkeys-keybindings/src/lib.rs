//! Keybinding system for vidkeys.
//!
//! This crate turns configured trigger descriptors into an ordered binding
//! table and matches keyboard input against it.
//!
//! Features:
//! - Descriptor parsing (Alt+ArrowUp, Shift+ArrowLeft, Alt+Digit1, 3, ...)
//! - Exact-modifier matching; Meta always disqualifies an event
//! - Physical key support for layout-independent digit/letter bindings
//! - Ordered registry: the first matching binding wins

mod keys;
mod matcher;
pub mod parser;

pub use keys::{
    named_key_from_dom, named_key_from_str, physical_code_from_dom, physical_code_from_str,
};
pub use matcher::{KeyInput, KeybindingMatcher, LogicalKey};
pub use parser::{KeyCombo, Modifiers, ParseError, ParsedKey, parse_key_combo};

use std::fmt::Display;
use vidkeys_config::KeyBinding;

/// Ordered table of key combinations and the actions they trigger.
///
/// Bindings are tried in insertion order and the first match wins, so
/// overlapping combos resolve by position rather than by specificity.
#[derive(Debug)]
pub struct KeybindingRegistry<A> {
    bindings: Vec<(KeyCombo, A)>,
}

impl<A> Default for KeybindingRegistry<A> {
    fn default() -> Self {
        Self {
            bindings: Vec::new(),
        }
    }
}

impl<A> KeybindingRegistry<A> {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from config keybindings, resolving each action name
    /// with `resolve`.
    ///
    /// Entries whose key or action fails to parse are logged and skipped;
    /// the remaining entries keep their config order.
    pub fn from_config_with<E, F>(keybindings: &[KeyBinding], mut resolve: F) -> Self
    where
        E: Display,
        F: FnMut(&str) -> Result<A, E>,
    {
        let mut registry = Self::new();

        log::info!(
            "Building keybinding registry from {} config keybindings",
            keybindings.len()
        );
        for binding in keybindings {
            let combo = match parser::parse_key_combo(&binding.key) {
                Ok(combo) => combo,
                Err(e) => {
                    log::warn!(
                        "Invalid keybinding '{}' for action '{}': {}",
                        binding.key,
                        binding.action,
                        e
                    );
                    continue;
                }
            };
            match resolve(&binding.action) {
                Ok(action) => {
                    log::info!(
                        "Registered keybinding: {:?} -> {} (parsed as: {})",
                        binding.key,
                        binding.action,
                        combo
                    );
                    registry.bindings.push((combo, action));
                }
                Err(e) => {
                    log::warn!(
                        "Unknown action '{}' for keybinding '{}': {}",
                        binding.action,
                        binding.key,
                        e
                    );
                }
            }
        }

        log::info!(
            "Keybinding registry initialized with {} bindings",
            registry.bindings.len()
        );
        registry
    }

    /// Look up the action of the first binding that matches `input`.
    pub fn lookup(&self, input: &KeyInput) -> Option<&A> {
        let matcher = KeybindingMatcher::from_input(input);

        self.bindings
            .iter()
            .find(|(combo, _)| matcher.matches(combo))
            .map(|(_, action)| action)
    }

    /// Iterate over bindings in match order.
    pub fn iter(&self) -> impl Iterator<Item = (&KeyCombo, &A)> {
        self.bindings.iter().map(|(combo, action)| (combo, action))
    }

    /// Check if the registry has any bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }
}
