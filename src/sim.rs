//! In-memory page.
//!
//! [`SimulatedPage`] implements every page capability over plain data so the
//! dispatcher can be exercised without a browser: by the `replay`
//! subcommand and by tests. It records what the page was asked to do (tabs
//! opened, scripts injected) instead of doing it.

use crate::page::{
    DocumentSurface, FrameAccessError, FrameInfo, MediaElement, MediaLocator,
    PrivilegedActionBridge,
};
use serde::{Deserialize, Serialize};

/// A `<video>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimVideo {
    pub current_time: f64,
    pub duration: f64,
    pub playback_rate: f64,
    pub fullscreen: bool,
}

impl Default for SimVideo {
    fn default() -> Self {
        Self {
            current_time: 0.0,
            duration: 0.0,
            playback_rate: 1.0,
            fullscreen: false,
        }
    }
}

impl SimVideo {
    pub fn new(current_time: f64, duration: f64, playback_rate: f64) -> Self {
        Self {
            current_time,
            duration,
            playback_rate,
            fullscreen: false,
        }
    }
}

impl MediaElement for SimVideo {
    fn current_time(&self) -> f64 {
        self.current_time
    }

    fn set_current_time(&mut self, secs: f64) {
        self.current_time = secs;
    }

    fn duration(&self) -> f64 {
        self.duration
    }

    fn playback_rate(&self) -> f64 {
        self.playback_rate
    }

    fn set_playback_rate(&mut self, rate: f64) {
        self.playback_rate = rate;
    }

    fn request_fullscreen(&mut self) {
        self.fullscreen = true;
    }
}

/// An embedded frame and its document's videos.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimFrame {
    #[serde(flatten)]
    pub info: FrameInfo,
    /// Frame document not reachable from the top-level page
    pub cross_origin: bool,
    pub videos: Vec<SimVideo>,
}

/// A page held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatedPage {
    pub title: String,
    pub videos: Vec<SimVideo>,
    pub frames: Vec<SimFrame>,
    /// URLs passed to `open_in_new_context`, in order
    pub opened: Vec<String>,
    /// Scripts passed to `inject`, in order
    pub injected: Vec<String>,
}

impl SimulatedPage {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_video(mut self, video: SimVideo) -> Self {
        self.videos.push(video);
        self
    }

    pub fn with_frame(mut self, frame: SimFrame) -> Self {
        self.frames.push(frame);
        self
    }
}

impl MediaLocator for SimulatedPage {
    fn first_video(&mut self) -> Option<&mut dyn MediaElement> {
        self.videos
            .first_mut()
            .map(|video| video as &mut dyn MediaElement)
    }

    fn for_each_video(&mut self, f: &mut dyn FnMut(&mut dyn MediaElement)) {
        for video in &mut self.videos {
            f(video);
        }
    }

    fn frames(&self) -> Vec<FrameInfo> {
        self.frames.iter().map(|frame| frame.info.clone()).collect()
    }

    fn for_each_frame_video(
        &mut self,
        index: usize,
        f: &mut dyn FnMut(&mut dyn MediaElement),
    ) -> Result<(), FrameAccessError> {
        let frame = self
            .frames
            .get_mut(index)
            .ok_or(FrameAccessError::NoSuchFrame { index })?;
        if frame.cross_origin {
            return Err(FrameAccessError::CrossOrigin { index });
        }
        for video in &mut frame.videos {
            f(video);
        }
        Ok(())
    }
}

impl DocumentSurface for SimulatedPage {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn open_in_new_context(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}

impl PrivilegedActionBridge for SimulatedPage {
    fn inject(&mut self, script: &str) {
        self.injected.push(script.to_string());
    }
}
