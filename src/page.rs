//! Page capabilities the dispatcher is driven through.
//!
//! The hotkey logic never touches a DOM directly. Hosts implement these
//! traits over whatever page they control; [`crate::sim::SimulatedPage`]
//! implements them in memory for tests and replays.

use serde::{Deserialize, Serialize};

/// A playable media element (`<video>`).
pub trait MediaElement {
    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    fn set_current_time(&mut self, secs: f64);

    /// Media length in seconds. May be NaN before metadata loads.
    fn duration(&self) -> f64;

    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);

    /// Ask the host to present this element fullscreen.
    fn request_fullscreen(&mut self);
}

/// An embedded frame on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInfo {
    /// Element id, if the frame has one
    #[serde(default)]
    pub id: Option<String>,
    /// Frame source URL; may be empty
    #[serde(default)]
    pub src: String,
}

/// Why a frame's videos could not be reached.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameAccessError {
    #[error("frame {index} is cross-origin")]
    CrossOrigin { index: usize },

    #[error("no frame at index {index}")]
    NoSuchFrame { index: usize },
}

/// Finds media on the page.
pub trait MediaLocator {
    /// The first `<video>` of the top-level document, in document order.
    fn first_video(&mut self) -> Option<&mut dyn MediaElement>;

    /// Visit every top-level `<video>` in document order.
    fn for_each_video(&mut self, f: &mut dyn FnMut(&mut dyn MediaElement));

    /// Frames of the top-level document, in document order.
    fn frames(&self) -> Vec<FrameInfo>;

    /// Visit every `<video>` inside frame `index`.
    ///
    /// # Errors
    ///
    /// Fails when the frame's document is not reachable from the top-level
    /// page, typically because it is cross-origin.
    fn for_each_frame_video(
        &mut self,
        index: usize,
        f: &mut dyn FnMut(&mut dyn MediaElement),
    ) -> Result<(), FrameAccessError>;
}

/// The document's title and its ability to open new top-level contexts.
pub trait DocumentSurface {
    fn title(&self) -> String;

    fn set_title(&mut self, title: &str);

    /// Open `url` in a new top-level browsing context (tab).
    fn open_in_new_context(&mut self, url: &str);
}

/// Runs a script in the page's own context, with page privileges.
///
/// One-shot and fire-and-forget: nothing comes back.
pub trait PrivilegedActionBridge {
    fn inject(&mut self, script: &str);
}

/// Everything the dispatcher needs from a page.
pub trait PageContext: MediaLocator + DocumentSurface + PrivilegedActionBridge {}

impl<T: MediaLocator + DocumentSurface + PrivilegedActionBridge + ?Sized> PageContext for T {}
