//! Key event matching.
//!
//! Matches keyboard input against parsed KeyCombos. Modifier matching is
//! exact: every modifier held must be required by the combo and vice versa,
//! and an event carrying Meta never matches anything.

use super::keys::{named_key_from_dom, physical_code_from_dom};
use super::parser::{KeyCombo, Modifiers, ParsedKey};
use winit::keyboard::{KeyCode, NamedKey};

/// Logical key carried by an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalKey {
    Character(char),
    Named(NamedKey),
}

/// A keyboard event, as delivered by the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyInput {
    /// Logical key (`KeyboardEvent.key`), if recognized
    pub key: Option<LogicalKey>,
    /// Physical key (`KeyboardEvent.code`), if recognized
    pub code: Option<KeyCode>,
    /// Ctrl/Alt/Shift state
    pub modifiers: Modifiers,
    /// Meta/Super/Cmd state
    pub meta: bool,
}

impl KeyInput {
    /// Build an input from DOM `KeyboardEvent.key` and `KeyboardEvent.code` values.
    ///
    /// Values are compared with their exact W3C spelling. Unrecognized
    /// values (e.g. "Unidentified", "Dead", "Up") leave the corresponding
    /// field empty, so only the other field can match.
    pub fn from_dom(key: &str, code: &str) -> Self {
        let mut chars = key.chars();
        let key = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(LogicalKey::Character(c)),
            _ => named_key_from_dom(key).map(LogicalKey::Named),
        };

        Self {
            key,
            code: physical_code_from_dom(code),
            modifiers: Modifiers::default(),
            meta: false,
        }
    }

    /// Set the Ctrl/Alt/Shift state.
    pub fn with_modifiers(mut self, ctrl: bool, alt: bool, shift: bool) -> Self {
        self.modifiers = Modifiers::new(ctrl, alt, shift);
        self
    }

    /// Set the Meta state.
    pub fn with_meta(mut self, meta: bool) -> Self {
        self.meta = meta;
        self
    }
}

/// Matcher for comparing key input against keybindings.
#[derive(Debug)]
pub struct KeybindingMatcher {
    /// Active modifiers from the event
    modifiers: Modifiers,
    /// Meta held; disqualifies every binding
    meta: bool,
    /// The logical key from the event
    key: Option<LogicalKey>,
    /// The physical key code from the event
    physical_key: Option<KeyCode>,
}

impl KeybindingMatcher {
    /// Create a matcher from a key input.
    pub fn from_input(input: &KeyInput) -> Self {
        Self {
            modifiers: input.modifiers,
            meta: input.meta,
            key: input.key,
            physical_key: input.code,
        }
    }

    /// Check if this event matches the given key combo.
    pub fn matches(&self, combo: &KeyCombo) -> bool {
        if self.meta {
            return false;
        }

        // Any held modifier the combo does not ask for rejects immediately
        if !self.modifiers.is_subset_of(combo.modifiers) {
            return false;
        }

        let key_matches = match &combo.key {
            ParsedKey::Physical(combo_code) => self.physical_key.as_ref() == Some(combo_code),
            ParsedKey::Character(combo_char) => {
                matches!(self.key, Some(LogicalKey::Character(c)) if c == *combo_char)
            }
            ParsedKey::Named(combo_named) => {
                matches!(self.key, Some(LogicalKey::Named(n)) if n == *combo_named)
            }
        };

        key_matches && self.modifiers_match(&combo.modifiers)
    }

    /// Exact comparison of all three modifier flags.
    fn modifiers_match(&self, combo_mods: &Modifiers) -> bool {
        self.modifiers.ctrl == combo_mods.ctrl
            && self.modifiers.alt == combo_mods.alt
            && self.modifiers.shift == combo_mods.shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_key_combo;

    fn matcher(key: &str, code: &str, ctrl: bool, alt: bool, shift: bool) -> KeybindingMatcher {
        KeybindingMatcher::from_input(
            &KeyInput::from_dom(key, code).with_modifiers(ctrl, alt, shift),
        )
    }

    #[test]
    fn test_from_dom_character() {
        let input = KeyInput::from_dom("3", "Digit3");
        assert_eq!(input.key, Some(LogicalKey::Character('3')));
        assert_eq!(input.code, Some(KeyCode::Digit3));
    }

    #[test]
    fn test_from_dom_space_is_character() {
        let input = KeyInput::from_dom(" ", "Space");
        assert_eq!(input.key, Some(LogicalKey::Character(' ')));
        assert_eq!(input.code, Some(KeyCode::Space));
    }

    #[test]
    fn test_from_dom_named_and_unidentified() {
        let input = KeyInput::from_dom("ArrowLeft", "ArrowLeft");
        assert_eq!(input.key, Some(LogicalKey::Named(NamedKey::ArrowLeft)));

        let input = KeyInput::from_dom("Unidentified", "");
        assert_eq!(input.key, None);
        assert_eq!(input.code, None);
    }

    #[test]
    fn test_from_dom_rejects_descriptor_aliases() {
        let input = KeyInput::from_dom("Up", "arrowup");
        assert_eq!(input.key, None);
        assert_eq!(input.code, None);

        let combo = parse_key_combo("Alt+ArrowUp").unwrap();
        assert!(!matcher("Up", "ArrowUp", false, true, false).matches(&combo));
        assert!(!matcher("arrowup", "ArrowUp", false, true, false).matches(&combo));

        let escape = parse_key_combo("Escape").unwrap();
        assert!(matcher("Escape", "Escape", false, false, false).matches(&escape));
        assert!(!matcher("Esc", "Escape", false, false, false).matches(&escape));
    }

    #[test]
    fn test_character_matching_is_case_sensitive() {
        let combo = parse_key_combo("a").unwrap();
        assert!(matcher("a", "KeyA", false, false, false).matches(&combo));
        assert!(!matcher("A", "KeyA", false, false, false).matches(&combo));
    }

    #[test]
    fn test_named_key_matching() {
        let combo = parse_key_combo("Alt+ArrowUp").unwrap();
        assert!(matcher("ArrowUp", "ArrowUp", false, true, false).matches(&combo));
        assert!(!matcher("ArrowDown", "ArrowDown", false, true, false).matches(&combo));
    }

    #[test]
    fn test_extra_modifier_rejected() {
        let combo = parse_key_combo("Shift+ArrowLeft").unwrap();
        assert!(matcher("ArrowLeft", "ArrowLeft", false, false, true).matches(&combo));
        assert!(!matcher("ArrowLeft", "ArrowLeft", true, false, true).matches(&combo));
        assert!(!matcher("ArrowLeft", "ArrowLeft", false, true, true).matches(&combo));
    }

    #[test]
    fn test_missing_modifier_rejected() {
        let combo = parse_key_combo("Ctrl+Shift+B").unwrap();
        assert!(!matcher("B", "KeyB", true, false, false).matches(&combo));
        assert!(matcher("B", "KeyB", true, false, true).matches(&combo));
    }

    #[test]
    fn test_meta_always_rejected() {
        let combo = parse_key_combo("5").unwrap();
        let input = KeyInput::from_dom("5", "Digit5").with_meta(true);
        assert!(!KeybindingMatcher::from_input(&input).matches(&combo));
    }

    #[test]
    fn test_physical_key_ignores_logical_character() {
        // Alt+1 produces '¡' on some layouts; the code still identifies the key
        let combo = parse_key_combo("Alt+Digit1").unwrap();
        assert!(matcher("¡", "Digit1", false, true, false).matches(&combo));
        assert!(!matcher("1", "Digit2", false, true, false).matches(&combo));
    }

    #[test]
    fn test_character_binding_ignores_code() {
        // AZERTY digit row produces '"' on Digit3 without Shift
        let combo = parse_key_combo("3").unwrap();
        assert!(matcher("3", "Digit3", false, false, false).matches(&combo));
        assert!(!matcher("\"", "Digit3", false, false, false).matches(&combo));
    }

    #[test]
    fn test_space_binding() {
        let combo = parse_key_combo("Alt+ ").unwrap();
        assert!(matcher(" ", "Space", false, true, false).matches(&combo));
        assert!(!matcher(" ", "Space", false, false, false).matches(&combo));
    }
}
