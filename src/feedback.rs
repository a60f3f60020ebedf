//! Transient playback-rate indicator in the document title.
//!
//! Each speed change shows `[ 1.5 ]` as the title and (re)arms a short
//! restore deadline. The title in place before the first change of a burst
//! is what gets restored, however many changes land inside the window.

use crate::page::DocumentSurface;
use std::time::{Duration, Instant};

/// Format the indicator title for `rate`, one decimal, ties rounded up.
pub fn indicator_title(rate: f64) -> String {
    format!("[ {:.1} ]", round_tenths_half_up(rate))
}

/// `{:.1}` rounds exact ties to even. The only binary values that sit
/// exactly on a hundredths tie are odd quarters (1.25, 2.75), so those are
/// bumped up before formatting.
fn round_tenths_half_up(rate: f64) -> f64 {
    let quarters = rate * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        (rate * 10.0).ceil() / 10.0
    } else {
        rate
    }
}

/// Titles that look like an indicator are not re-captured as the original
/// once one is held.
pub fn is_indicator(title: &str) -> bool {
    title.starts_with("[ ") || title.ends_with(" ]")
}

/// Title flash state with an injected clock.
#[derive(Debug, Clone)]
pub struct TitleFeedback {
    hold: Duration,
    original: Option<String>,
    restore_at: Option<Instant>,
}

impl TitleFeedback {
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            original: None,
            restore_at: None,
        }
    }

    /// Show `rate` in the title and restart the restore timer.
    pub fn flash<D: DocumentSurface + ?Sized>(&mut self, doc: &mut D, rate: f64, now: Instant) {
        let current = doc.title();
        if self.original.is_none() || !is_indicator(&current) {
            self.original = Some(current);
        }
        doc.set_title(&indicator_title(rate));
        self.restore_at = Some(now + self.hold);
    }

    /// Restore the original title once the deadline has passed.
    ///
    /// Returns `true` on the call that restored it; later calls are no-ops
    /// until the next flash.
    pub fn tick<D: DocumentSurface + ?Sized>(&mut self, doc: &mut D, now: Instant) -> bool {
        match self.restore_at {
            Some(deadline) if now >= deadline => {
                self.restore_at = None;
                if let Some(original) = &self.original {
                    doc.set_title(original);
                }
                true
            }
            _ => false,
        }
    }

    /// When the next restore is due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.restore_at
    }
}
