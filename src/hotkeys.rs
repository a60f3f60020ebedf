//! Keyboard and wheel dispatcher for page videos.
//!
//! [`VideoHotkeys`] owns everything that persists between events: the
//! resolved binding table, both wheel accumulators and the title indicator
//! state. Hosts forward `keydown` and `wheel` events plus periodic
//! [`VideoHotkeys::tick`] calls and apply the returned dispositions
//! (`preventDefault` / `stopPropagation`) themselves.

use crate::actions::Action;
use crate::feedback::TitleFeedback;
use crate::gesture::{Direction, GestureAccumulator, WheelInput};
use crate::page::{DocumentSurface, PageContext};
use crate::pip;
use crate::playback::{self, clamp_time, decile_time, faster, seek_by_rate, slower};
use std::time::{Duration, Instant};
use vidkeys_config::{Config, KeyBinding, PlaybackConfig, WheelConfig};
use vidkeys_keybindings::{KeyInput, KeybindingRegistry};

/// Errors from running a bound action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotkeyError {
    #[error("no video on the page for '{action}'")]
    NoMediaTarget { action: Action },
}

/// What a key event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// A binding matched and ran; the host should `preventDefault`.
    Handled(Action),
    /// Nothing matched; the event is left alone.
    Ignored,
}

impl KeyOutcome {
    pub fn prevent_default(self) -> bool {
        matches!(self, KeyOutcome::Handled(_))
    }
}

/// A wheel gesture that crossed its threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelGesture {
    /// Ctrl+Shift+wheel; `position` is the new media time
    Seek { direction: Direction, position: f64 },
    /// Shift+wheel; `rate` is the applied playback rate
    Speed { direction: Direction, rate: f64 },
}

/// What a wheel event did.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelOutcome {
    /// The host should `stopPropagation`
    pub stop_propagation: bool,
    /// Set when this event completed a gesture
    pub gesture: Option<WheelGesture>,
}

/// Build the ordered binding table, dropping entries with unknown actions.
pub fn build_registry(keybindings: &[KeyBinding]) -> KeybindingRegistry<Action> {
    KeybindingRegistry::from_config_with(keybindings, str::parse::<Action>)
}

/// Hotkey and wheel gesture dispatcher for one page.
#[derive(Debug)]
pub struct VideoHotkeys {
    registry: KeybindingRegistry<Action>,
    wheel: WheelConfig,
    playback: PlaybackConfig,
    excluded_frame_id: String,
    seek: GestureAccumulator,
    speed: GestureAccumulator,
    feedback: Option<TitleFeedback>,
}

impl VideoHotkeys {
    pub fn new(config: &Config) -> Self {
        let feedback = config
            .feedback
            .title_flash
            .then(|| TitleFeedback::new(Duration::from_millis(config.feedback.title_flash_ms)));

        Self {
            registry: build_registry(&config.keybindings),
            wheel: config.wheel.clone(),
            playback: config.playback.clone(),
            excluded_frame_id: config.sites.excluded_frame_id.clone(),
            seek: GestureAccumulator::new(config.wheel.threshold),
            speed: GestureAccumulator::new(config.wheel.threshold),
            feedback,
        }
    }

    pub fn registry(&self) -> &KeybindingRegistry<Action> {
        &self.registry
    }

    /// Handle a `keydown` event.
    ///
    /// The first binding matching `input` runs. Actions read the page's live
    /// state when they run.
    ///
    /// # Errors
    ///
    /// [`HotkeyError::NoMediaTarget`] when the matched action needs a video
    /// and the page has none. The event must not be default-prevented then.
    pub fn handle_key_down<P: PageContext + ?Sized>(
        &mut self,
        input: &KeyInput,
        page: &mut P,
        now: Instant,
    ) -> Result<KeyOutcome, HotkeyError> {
        if input.modifiers.alt {
            log::debug!(
                "keydown: key={:?} code={:?} alt={} ctrl={} shift={}",
                input.key,
                input.code,
                input.modifiers.alt,
                input.modifiers.ctrl,
                input.modifiers.shift
            );
        }

        let Some(&action) = self.registry.lookup(input) else {
            return Ok(KeyOutcome::Ignored);
        };

        self.run(action, page, now)?;
        Ok(KeyOutcome::Handled(action))
    }

    /// Run `action` against the page.
    ///
    /// # Errors
    ///
    /// See [`VideoHotkeys::handle_key_down`].
    pub fn run<P: PageContext + ?Sized>(
        &mut self,
        action: Action,
        page: &mut P,
        now: Instant,
    ) -> Result<(), HotkeyError> {
        let missing = || HotkeyError::NoMediaTarget { action };

        match action {
            Action::OpenFrameInNewTab => {
                let frame = page
                    .frames()
                    .into_iter()
                    .find(|f| f.id.as_deref() != Some(self.excluded_frame_id.as_str()));
                match frame {
                    Some(frame) if !frame.src.is_empty() => {
                        log::info!("Opening frame {} in a new tab", frame.src);
                        page.open_in_new_context(&frame.src);
                    }
                    _ => log::debug!("No frame with a source to open"),
                }
            }
            Action::Fullscreen => page.first_video().ok_or_else(missing)?.request_fullscreen(),
            Action::SpeedUp | Action::SpeedDown => {
                let rate = page.first_video().ok_or_else(missing)?.playback_rate();
                let step = self.playback.keyboard_speed_step;
                let target = if action == Action::SpeedUp {
                    faster(rate, step)
                } else {
                    slower(rate, step, self.playback.keyboard_min_rate)
                };
                self.set_speed(page, target, now);
            }
            Action::SeekBackward | Action::SeekForward => {
                let sign = if action == Action::SeekForward { 1.0 } else { -1.0 };
                let video = page.first_video().ok_or_else(missing)?;
                seek_by_rate(video, sign, self.playback.seek_seconds_per_rate);
            }
            Action::JumpToDecile(n) => {
                let video = page.first_video().ok_or_else(missing)?;
                let target = decile_time(video.duration(), n);
                video.set_current_time(target);
            }
            Action::TogglePictureInPicture => pip::toggle_picture_in_picture(page),
        }
        Ok(())
    }

    /// Handle a `wheel` event.
    ///
    /// Only Shift-held events on pages with a video are considered; all
    /// others are ignored without touching either accumulator.
    pub fn handle_wheel<P: PageContext + ?Sized>(
        &mut self,
        input: &WheelInput,
        page: &mut P,
        now: Instant,
    ) -> WheelOutcome {
        if !input.shift {
            return WheelOutcome::default();
        }
        let Some(rate) = page.first_video().map(|v| v.playback_rate()) else {
            return WheelOutcome::default();
        };
        let delta = input.delta(self.wheel.delta_multiplier);

        if input.ctrl {
            let gesture = self.seek.accumulate(delta).and_then(|direction| {
                let video = page.first_video()?;
                let position = clamp_time(
                    video.current_time() + direction.signum() * self.wheel.seek_step_secs,
                    video.duration(),
                );
                video.set_current_time(position);
                log::debug!("Wheel seek {:?} to {:.2}s", direction, position);
                Some(WheelGesture::Seek {
                    direction,
                    position,
                })
            });
            return WheelOutcome {
                stop_propagation: self.wheel.suppress_seek_propagation,
                gesture,
            };
        }

        let gesture = self.speed.accumulate(delta).map(|direction| {
            let target = rate + direction.signum() * self.wheel.speed_step;
            let rate = self.set_speed(page, target, now);
            WheelGesture::Speed { direction, rate }
        });
        WheelOutcome {
            stop_propagation: self.wheel.suppress_speed_propagation,
            gesture,
        }
    }

    /// Restore the title once the indicator has been shown long enough.
    ///
    /// Returns `true` when this call restored it.
    pub fn tick<D: DocumentSurface + ?Sized>(&mut self, doc: &mut D, now: Instant) -> bool {
        self.feedback
            .as_mut()
            .is_some_and(|feedback| feedback.tick(doc, now))
    }

    /// When [`VideoHotkeys::tick`] next has work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.feedback.as_ref().and_then(TitleFeedback::next_deadline)
    }

    /// Accumulated wheel delta not yet fired, as `(seek, speed)`.
    pub fn pending_wheel(&self) -> (f64, f64) {
        (self.seek.value(), self.speed.value())
    }

    fn set_speed<P: PageContext + ?Sized>(&mut self, page: &mut P, rate: f64, now: Instant) -> f64 {
        playback::set_all_videos_speed(
            page,
            rate,
            self.playback.min_rate,
            self.feedback.as_mut(),
            now,
        )
    }
}
