//! Key name tables.
//!
//! Contains:
//! - Modifier name recognition
//! - Named key alias table (string → `NamedKey`)
//! - Physical key code table (string → `KeyCode`)
//!
//! The `KeyCode` and `NamedKey` variant names follow the W3C UI Events
//! `code` and `key` values, so the same tables serve both descriptor parsing
//! and conversion of DOM `KeyboardEvent` fields.

use winit::keyboard::{KeyCode, NamedKey};

/// Modifier named in a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModifierName {
    Ctrl,
    Alt,
    Shift,
    /// Meta/Super/Cmd. Recognized so it can be rejected with a clear error.
    Meta,
}

/// Recognize a modifier name (case-insensitive).
pub(crate) fn modifier_from_str(s: &str) -> Option<ModifierName> {
    match s.to_lowercase().as_str() {
        "ctrl" | "control" => Some(ModifierName::Ctrl),
        "alt" | "option" => Some(ModifierName::Alt),
        "shift" => Some(ModifierName::Shift),
        "meta" | "super" | "cmd" | "command" | "win" | "os" => Some(ModifierName::Meta),
        _ => None,
    }
}

/// Parse a named logical key (case-insensitive, with short aliases).
pub fn named_key_from_str(s: &str) -> Option<NamedKey> {
    match s.to_lowercase().as_str() {
        "f1" => Some(NamedKey::F1),
        "f2" => Some(NamedKey::F2),
        "f3" => Some(NamedKey::F3),
        "f4" => Some(NamedKey::F4),
        "f5" => Some(NamedKey::F5),
        "f6" => Some(NamedKey::F6),
        "f7" => Some(NamedKey::F7),
        "f8" => Some(NamedKey::F8),
        "f9" => Some(NamedKey::F9),
        "f10" => Some(NamedKey::F10),
        "f11" => Some(NamedKey::F11),
        "f12" => Some(NamedKey::F12),

        "enter" | "return" => Some(NamedKey::Enter),
        "escape" | "esc" => Some(NamedKey::Escape),
        "tab" => Some(NamedKey::Tab),
        "backspace" => Some(NamedKey::Backspace),
        "delete" | "del" => Some(NamedKey::Delete),
        "insert" | "ins" => Some(NamedKey::Insert),
        "home" => Some(NamedKey::Home),
        "end" => Some(NamedKey::End),
        "pageup" | "pgup" => Some(NamedKey::PageUp),
        "pagedown" | "pgdn" => Some(NamedKey::PageDown),

        "up" | "arrowup" => Some(NamedKey::ArrowUp),
        "down" | "arrowdown" => Some(NamedKey::ArrowDown),
        "left" | "arrowleft" => Some(NamedKey::ArrowLeft),
        "right" | "arrowright" => Some(NamedKey::ArrowRight),

        "mediaplaypause" => Some(NamedKey::MediaPlayPause),
        "mediatracknext" => Some(NamedKey::MediaTrackNext),
        "mediatrackprevious" => Some(NamedKey::MediaTrackPrevious),

        _ => None,
    }
}

/// Parse a physical key code name such as "KeyA", "Digit1" or "ArrowLeft".
/// Matching is case-insensitive.
pub fn physical_code_from_str(s: &str) -> Option<KeyCode> {
    match s.to_lowercase().as_str() {
        "keya" => Some(KeyCode::KeyA),
        "keyb" => Some(KeyCode::KeyB),
        "keyc" => Some(KeyCode::KeyC),
        "keyd" => Some(KeyCode::KeyD),
        "keye" => Some(KeyCode::KeyE),
        "keyf" => Some(KeyCode::KeyF),
        "keyg" => Some(KeyCode::KeyG),
        "keyh" => Some(KeyCode::KeyH),
        "keyi" => Some(KeyCode::KeyI),
        "keyj" => Some(KeyCode::KeyJ),
        "keyk" => Some(KeyCode::KeyK),
        "keyl" => Some(KeyCode::KeyL),
        "keym" => Some(KeyCode::KeyM),
        "keyn" => Some(KeyCode::KeyN),
        "keyo" => Some(KeyCode::KeyO),
        "keyp" => Some(KeyCode::KeyP),
        "keyq" => Some(KeyCode::KeyQ),
        "keyr" => Some(KeyCode::KeyR),
        "keys" => Some(KeyCode::KeyS),
        "keyt" => Some(KeyCode::KeyT),
        "keyu" => Some(KeyCode::KeyU),
        "keyv" => Some(KeyCode::KeyV),
        "keyw" => Some(KeyCode::KeyW),
        "keyx" => Some(KeyCode::KeyX),
        "keyy" => Some(KeyCode::KeyY),
        "keyz" => Some(KeyCode::KeyZ),

        "digit0" => Some(KeyCode::Digit0),
        "digit1" => Some(KeyCode::Digit1),
        "digit2" => Some(KeyCode::Digit2),
        "digit3" => Some(KeyCode::Digit3),
        "digit4" => Some(KeyCode::Digit4),
        "digit5" => Some(KeyCode::Digit5),
        "digit6" => Some(KeyCode::Digit6),
        "digit7" => Some(KeyCode::Digit7),
        "digit8" => Some(KeyCode::Digit8),
        "digit9" => Some(KeyCode::Digit9),

        "minus" => Some(KeyCode::Minus),
        "equal" => Some(KeyCode::Equal),
        "bracketleft" => Some(KeyCode::BracketLeft),
        "bracketright" => Some(KeyCode::BracketRight),
        "backslash" => Some(KeyCode::Backslash),
        "semicolon" => Some(KeyCode::Semicolon),
        "quote" => Some(KeyCode::Quote),
        "backquote" => Some(KeyCode::Backquote),
        "comma" => Some(KeyCode::Comma),
        "period" => Some(KeyCode::Period),
        "slash" => Some(KeyCode::Slash),

        "f1" => Some(KeyCode::F1),
        "f2" => Some(KeyCode::F2),
        "f3" => Some(KeyCode::F3),
        "f4" => Some(KeyCode::F4),
        "f5" => Some(KeyCode::F5),
        "f6" => Some(KeyCode::F6),
        "f7" => Some(KeyCode::F7),
        "f8" => Some(KeyCode::F8),
        "f9" => Some(KeyCode::F9),
        "f10" => Some(KeyCode::F10),
        "f11" => Some(KeyCode::F11),
        "f12" => Some(KeyCode::F12),

        "arrowup" => Some(KeyCode::ArrowUp),
        "arrowdown" => Some(KeyCode::ArrowDown),
        "arrowleft" => Some(KeyCode::ArrowLeft),
        "arrowright" => Some(KeyCode::ArrowRight),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "pageup" => Some(KeyCode::PageUp),
        "pagedown" => Some(KeyCode::PageDown),
        "insert" => Some(KeyCode::Insert),
        "delete" => Some(KeyCode::Delete),

        "enter" => Some(KeyCode::Enter),
        "escape" => Some(KeyCode::Escape),
        "space" => Some(KeyCode::Space),
        "tab" => Some(KeyCode::Tab),
        "backspace" => Some(KeyCode::Backspace),

        _ => None,
    }
}

/// Resolve a DOM `KeyboardEvent.key` value.
///
/// Only the exact W3C spelling is accepted ("ArrowUp", not "Up" or
/// "arrowup"). The winit variant names are those spellings.
pub fn named_key_from_dom(key: &str) -> Option<NamedKey> {
    named_key_from_str(key).filter(|named| format!("{named:?}") == key)
}

/// Resolve a DOM `KeyboardEvent.code` value, exact W3C spelling only.
pub fn physical_code_from_dom(code: &str) -> Option<KeyCode> {
    physical_code_from_str(code).filter(|physical| format!("{physical:?}") == code)
}

/// True for codes that may be written without brackets in a descriptor
/// (the digit row and the letter keys).
pub(crate) fn is_bare_code_form(s: &str) -> bool {
    s.starts_with("Digit") || s.starts_with("Key")
}
