//! Trigger descriptor parser.
//!
//! Parses human-readable descriptors like "Alt+ArrowUp" or "Shift+ArrowLeft"
//! into KeyCombo structs. Digit and letter keys can be bound by physical
//! position with the bare code form ("Alt+Digit1", "Alt+KeyI"); any other
//! physical code uses the bracketed form ("Ctrl+[ArrowLeft]").

use crate::keys::{
    ModifierName, is_bare_code_form, modifier_from_str, named_key_from_str,
    physical_code_from_str,
};
use std::fmt;
use winit::keyboard::{KeyCode, NamedKey};

/// Error type for descriptor parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ParseError(String);

/// Set of modifiers required by a key combination.
///
/// Meta is deliberately absent: an event carrying Meta never matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// Create a modifier set from individual flags.
    pub const fn new(ctrl: bool, alt: bool, shift: bool) -> Self {
        Self { ctrl, alt, shift }
    }

    /// True when every modifier in `self` is also present in `other`.
    pub fn is_subset_of(self, other: Modifiers) -> bool {
        (!self.ctrl || other.ctrl) && (!self.alt || other.alt) && (!self.shift || other.shift)
    }
}

/// A parsed key combination (modifiers + key).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    pub key: ParsedKey,
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        if self.modifiers.ctrl {
            parts.push("Ctrl".to_string());
        }
        if self.modifiers.alt {
            parts.push("Alt".to_string());
        }
        if self.modifiers.shift {
            parts.push("Shift".to_string());
        }

        match &self.key {
            ParsedKey::Character(' ') => parts.push("Space".to_string()),
            ParsedKey::Character('+') => parts.push("Plus".to_string()),
            ParsedKey::Character(c) => parts.push(c.to_string()),
            ParsedKey::Named(n) => parts.push(format!("{:?}", n)),
            ParsedKey::Physical(k) => {
                let name = format!("{:?}", k);
                if is_bare_code_form(&name) {
                    parts.push(name);
                } else {
                    parts.push(format!("[{}]", name));
                }
            }
        }

        write!(f, "{}", parts.join("+"))
    }
}

/// The key a combination triggers on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParsedKey {
    /// A logical character, compared case-sensitively (e.g., 'a', 'B', '1', ' ')
    Character(char),
    /// A named logical key (e.g., ArrowUp, Enter, Escape)
    Named(NamedKey),
    /// A physical key code (e.g., Digit1, KeyI). Matches by key position
    /// rather than the character produced.
    Physical(KeyCode),
}

/// Parse a key combination string into a KeyCombo.
///
/// Supported format: "Modifier+Modifier+Key"
///
/// Modifiers:
/// - `Ctrl`, `Control` - Control key
/// - `Alt`, `Option` - Alt/Option key
/// - `Shift` - Shift key
///
/// `Meta`/`Super`/`Cmd` are rejected because meta events never match.
///
/// Keys:
/// - Single characters: `a`, `B`, `1`, etc. (case-sensitive)
/// - `Space` or a literal space, `Plus` or a literal `+`
/// - Named keys: `ArrowUp`, `Enter`, `Escape`, `F1`-`F12`, etc.
/// - Physical codes: `Digit0`-`Digit9`, `KeyA`-`KeyZ`, or `[Code]`
pub fn parse_key_combo(s: &str) -> Result<KeyCombo, ParseError> {
    if s.is_empty() {
        return Err(ParseError("Empty key combination".to_string()));
    }

    let (modifier_part, key_part) = split_descriptor(s);

    let mut modifiers = Modifiers::default();
    if let Some(modifier_part) = modifier_part {
        for part in modifier_part.split('+').map(str::trim) {
            match modifier_from_str(part) {
                Some(ModifierName::Ctrl) => modifiers.ctrl = true,
                Some(ModifierName::Alt) => modifiers.alt = true,
                Some(ModifierName::Shift) => modifiers.shift = true,
                Some(ModifierName::Meta) => {
                    return Err(ParseError(format!(
                        "Modifier '{}' cannot be bound: meta key events never match",
                        part
                    )));
                }
                None if part.is_empty() => {
                    return Err(ParseError(format!("Empty modifier in '{}'", s)));
                }
                None => {
                    return Err(ParseError(format!(
                        "Multiple keys specified: '{}' is not a modifier",
                        part
                    )));
                }
            }
        }
    }

    // A whitespace-only key is the space bar ("Alt+ ").
    let key_str = if key_part.trim().is_empty() && !key_part.is_empty() {
        " "
    } else {
        key_part.trim()
    };

    if key_str.is_empty() || modifier_from_str(key_str).is_some() {
        return Err(ParseError(
            "Key combination ends with modifier, no key specified".to_string(),
        ));
    }

    let key = parse_key(key_str)?;

    Ok(KeyCombo { modifiers, key })
}

/// Split a descriptor into its modifier prefix and key, handling a literal
/// `+` key ("Shift++", "+").
fn split_descriptor(s: &str) -> (Option<&str>, &str) {
    if s == "+" {
        return (None, "+");
    }
    if let Some(prefix) = s.strip_suffix("++") {
        return (Some(prefix), "+");
    }
    match s.rsplit_once('+') {
        Some((prefix, key)) => (Some(prefix), key),
        None => (None, s),
    }
}

/// Parse a key string into a ParsedKey.
fn parse_key(s: &str) -> Result<ParsedKey, ParseError> {
    // Bracketed physical key syntax: [KeyCode] (e.g., [ArrowLeft], [KeyA])
    if s.starts_with('[') && s.ends_with(']') && s.len() > 2 {
        let code_str = &s[1..s.len() - 1];
        if let Some(code) = physical_code_from_str(code_str) {
            return Ok(ParsedKey::Physical(code));
        }
        return Err(ParseError(format!(
            "Unknown physical key code: '{}'",
            code_str
        )));
    }

    // Bare DigitN / KeyX forms bind by physical position
    if is_bare_code_form(s) {
        if let Some(code) = physical_code_from_str(s) {
            return Ok(ParsedKey::Physical(code));
        }
        return Err(ParseError(format!("Unknown physical key code: '{}'", s)));
    }

    match s.to_lowercase().as_str() {
        "space" => return Ok(ParsedKey::Character(' ')),
        "plus" => return Ok(ParsedKey::Character('+')),
        _ => {}
    }

    if let Some(named) = named_key_from_str(s) {
        return Ok(ParsedKey::Named(named));
    }

    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(ParsedKey::Character(c));
    }

    Err(ParseError(format!("Unknown key: '{}'", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_key() {
        let combo = parse_key_combo("a").unwrap();
        assert_eq!(combo.modifiers, Modifiers::default());
        assert_eq!(combo.key, ParsedKey::Character('a'));
    }

    #[test]
    fn test_character_case_preserved() {
        assert_eq!(
            parse_key_combo("B").unwrap().key,
            ParsedKey::Character('B')
        );
        assert_eq!(
            parse_key_combo("b").unwrap().key,
            ParsedKey::Character('b')
        );
    }

    #[test]
    fn test_digit_character() {
        let combo = parse_key_combo("3").unwrap();
        assert_eq!(combo.key, ParsedKey::Character('3'));
    }

    #[test]
    fn test_alt_named_key() {
        let combo = parse_key_combo("Alt+ArrowUp").unwrap();
        assert!(combo.modifiers.alt);
        assert!(!combo.modifiers.ctrl);
        assert!(!combo.modifiers.shift);
        assert_eq!(combo.key, ParsedKey::Named(NamedKey::ArrowUp));
    }

    #[test]
    fn test_ctrl_shift_key() {
        let combo = parse_key_combo("Ctrl+Shift+B").unwrap();
        assert!(combo.modifiers.ctrl);
        assert!(combo.modifiers.shift);
        assert_eq!(combo.key, ParsedKey::Character('B'));
    }

    #[test]
    fn test_bare_physical_digit() {
        let combo = parse_key_combo("Alt+Digit1").unwrap();
        assert!(combo.modifiers.alt);
        assert_eq!(combo.key, ParsedKey::Physical(KeyCode::Digit1));
    }

    #[test]
    fn test_bare_physical_letter() {
        let combo = parse_key_combo("Alt+KeyI").unwrap();
        assert_eq!(combo.key, ParsedKey::Physical(KeyCode::KeyI));
    }

    #[test]
    fn test_bracketed_physical_key() {
        let combo = parse_key_combo("Ctrl+[ArrowLeft]").unwrap();
        assert!(combo.modifiers.ctrl);
        assert_eq!(combo.key, ParsedKey::Physical(KeyCode::ArrowLeft));
    }

    #[test]
    fn test_literal_space_key() {
        let combo = parse_key_combo("Alt+ ").unwrap();
        assert!(combo.modifiers.alt);
        assert_eq!(combo.key, ParsedKey::Character(' '));
    }

    #[test]
    fn test_space_alias() {
        let combo = parse_key_combo("Alt+Space").unwrap();
        assert_eq!(combo.key, ParsedKey::Character(' '));
    }

    #[test]
    fn test_plus_key() {
        let combo = parse_key_combo("Shift++").unwrap();
        assert!(combo.modifiers.shift);
        assert_eq!(combo.key, ParsedKey::Character('+'));
        assert_eq!(parse_key_combo("+").unwrap().key, ParsedKey::Character('+'));
    }

    #[test]
    fn test_modifier_aliases() {
        assert!(parse_key_combo("Control+a").unwrap().modifiers.ctrl);
        assert!(parse_key_combo("Option+a").unwrap().modifiers.alt);
        assert!(parse_key_combo("shift+a").unwrap().modifiers.shift);
    }

    #[test]
    fn test_meta_rejected() {
        assert!(parse_key_combo("Meta+a").is_err());
        assert!(parse_key_combo("Cmd+a").is_err());
        assert!(parse_key_combo("Super+a").is_err());
    }

    #[test]
    fn test_invalid_empty() {
        assert!(parse_key_combo("").is_err());
    }

    #[test]
    fn test_invalid_modifier_only() {
        assert!(parse_key_combo("Ctrl").is_err());
        assert!(parse_key_combo("Ctrl+Shift").is_err());
        assert!(parse_key_combo("Alt+").is_err());
    }

    #[test]
    fn test_invalid_unknown_key() {
        assert!(parse_key_combo("Ctrl+UnknownKey").is_err());
        assert!(parse_key_combo("Alt+Digit").is_err());
        assert!(parse_key_combo("Ctrl+[Unknown]").is_err());
    }

    #[test]
    fn test_two_keys_rejected() {
        assert!(parse_key_combo("a+b").is_err());
    }

    #[test]
    fn test_display_round_trips_through_parser() {
        for s in ["Alt+Digit1", "Alt+Space", "Shift+ArrowLeft", "Ctrl+[ArrowUp]", "7"] {
            let combo = parse_key_combo(s).unwrap();
            let reparsed = parse_key_combo(&combo.to_string()).unwrap();
            assert_eq!(combo, reparsed, "display of '{}' was '{}'", s, combo);
        }
    }

    #[test]
    fn test_subset() {
        let alt = Modifiers::new(false, true, false);
        let alt_shift = Modifiers::new(false, true, true);
        assert!(alt.is_subset_of(alt_shift));
        assert!(!alt_shift.is_subset_of(alt));
        assert!(Modifiers::default().is_subset_of(alt));
    }
}
