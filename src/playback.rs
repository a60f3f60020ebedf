//! Playback arithmetic and the broadcast speed setter.

use crate::feedback::TitleFeedback;
use crate::page::{MediaElement, PageContext};
use std::time::Instant;

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Clamp a media position to `[0, duration]`.
///
/// A NaN duration (metadata not loaded yet) only bounds from below.
pub fn clamp_time(secs: f64, duration: f64) -> f64 {
    secs.max(0.0).min(duration)
}

/// Position of decile `n` (1..=9) of `duration`.
pub fn decile_time(duration: f64, n: u8) -> f64 {
    duration * f64::from(n) / 10.0
}

/// Keyboard speed up: `round2(rate + step)`.
pub fn faster(rate: f64, step: f64) -> f64 {
    round2(rate + step)
}

/// Keyboard speed down: `max(floor, round2(rate - step))`.
pub fn slower(rate: f64, step: f64, floor: f64) -> f64 {
    round2(rate - step).max(floor)
}

/// Seek by `seconds_per_rate * rate` in the given direction, clamped.
pub fn seek_by_rate(video: &mut dyn MediaElement, sign: f64, seconds_per_rate: f64) {
    let target = video.current_time() + sign * seconds_per_rate * video.playback_rate();
    video.set_current_time(clamp_time(target, video.duration()));
}

/// Set `rate` (floored at `min_rate`) on every video of the page.
///
/// Top-level videos are always set. Videos inside frames are set where the
/// frame is reachable; unreachable frames are skipped. When `feedback` is
/// given the new rate is flashed in the title. Returns the applied rate.
pub fn set_all_videos_speed<P: PageContext + ?Sized>(
    page: &mut P,
    rate: f64,
    min_rate: f64,
    feedback: Option<&mut TitleFeedback>,
    now: Instant,
) -> f64 {
    let rate = rate.max(min_rate);

    page.for_each_video(&mut |video| video.set_playback_rate(rate));

    for index in 0..page.frames().len() {
        if let Err(e) = page.for_each_frame_video(index, &mut |video| video.set_playback_rate(rate))
        {
            log::debug!("Skipping frame videos: {}", e);
        }
    }

    if let Some(feedback) = feedback {
        feedback.flash(page, rate, now);
    }
    log::info!("Set video speed to {}", rate);
    rate
}
