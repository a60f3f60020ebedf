//! Named actions a keybinding can trigger.
//!
//! Config files refer to actions by their snake_case name
//! (`speed_up`, `jump_to_decile_3`, ...). Names are resolved once when the
//! binding table is built; unknown names are rejected there.

use std::fmt;
use std::str::FromStr;

/// An action bound to a key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Open the first embedded frame (other than the excluded one) in a new tab
    OpenFrameInNewTab,
    /// Present the first video fullscreen
    Fullscreen,
    SpeedUp,
    SpeedDown,
    SeekBackward,
    SeekForward,
    /// Jump to `duration * N / 10`, N in 1..=9
    JumpToDecile(u8),
    /// Enter or leave picture-in-picture through the page-context bridge
    TogglePictureInPicture,
}

impl Action {
    /// Whether the action operates on the first video and fails without one.
    pub fn needs_media(self) -> bool {
        !matches!(
            self,
            Action::OpenFrameInNewTab | Action::TogglePictureInPicture
        )
    }
}

/// Action name not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let action = match s {
            "open_frame_in_new_tab" => Action::OpenFrameInNewTab,
            "fullscreen" => Action::Fullscreen,
            "speed_up" => Action::SpeedUp,
            "speed_down" => Action::SpeedDown,
            "seek_backward" => Action::SeekBackward,
            "seek_forward" => Action::SeekForward,
            "toggle_picture_in_picture" => Action::TogglePictureInPicture,
            other => match other
                .strip_prefix("jump_to_decile_")
                .and_then(|n| n.parse::<u8>().ok())
            {
                Some(n @ 1..=9) => Action::JumpToDecile(n),
                _ => return Err(UnknownAction(s.to_string())),
            },
        };
        Ok(action)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::OpenFrameInNewTab => f.write_str("open_frame_in_new_tab"),
            Action::Fullscreen => f.write_str("fullscreen"),
            Action::SpeedUp => f.write_str("speed_up"),
            Action::SpeedDown => f.write_str("speed_down"),
            Action::SeekBackward => f.write_str("seek_backward"),
            Action::SeekForward => f.write_str("seek_forward"),
            Action::JumpToDecile(n) => write!(f, "jump_to_decile_{n}"),
            Action::TogglePictureInPicture => f.write_str("toggle_picture_in_picture"),
        }
    }
}
