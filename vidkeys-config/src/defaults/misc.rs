//! Default keybindings, site gating lists, and boolean helpers.

use crate::types::KeyBinding;

pub fn bool_false() -> bool {
    false
}

pub fn bool_true() -> bool {
    true
}

/// Default keybinding table, in match order.
///
/// Digit jumps use the logical character so that Shift+digit (which
/// produces a symbol) never jumps. The frame shortcut uses the physical
/// code because Alt+1 produces a different character on some layouts.
pub fn keybindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("Alt+Digit1", "open_frame_in_new_tab"),
        KeyBinding::new("Alt+Space", "fullscreen"),
        KeyBinding::new("Alt+ArrowUp", "speed_up"),
        KeyBinding::new("Alt+ArrowDown", "speed_down"),
        KeyBinding::new("Shift+ArrowLeft", "seek_backward"),
        KeyBinding::new("Shift+ArrowRight", "seek_forward"),
    ];
    bindings.extend((1..=9).map(|n| KeyBinding::new(n.to_string(), format!("jump_to_decile_{n}"))));
    bindings
}

/// Hostname substrings on which keyboard handling is disabled.
pub fn excluded_sites() -> Vec<String> {
    vec!["web.telegram.org".to_string()]
}

/// URL patterns (trailing `*` glob) on which nothing is installed.
pub fn excluded_urls() -> Vec<String> {
    vec![
        "http://srv:8123*".to_string(),
        "http://192.168.1.50:8123*".to_string(),
    ]
}

/// Frame id skipped when picking the frame to open in a new tab.
pub fn excluded_frame_id() -> String {
    "cmdline_iframe".to_string()
}
