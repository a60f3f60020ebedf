//! Scripted event replay against a [`SimulatedPage`].
//!
//! A replay script is YAML:
//!
//! ```yaml
//! url: https://video.example/watch
//! page:
//!   title: Movie
//!   videos:
//!     - { current_time: 95, duration: 100 }
//! events:
//!   - { type: key, key: ArrowRight, code: ArrowRight, shift: true }
//!   - { type: wheel, delta_y: -40, shift: true, at_ms: 50 }
//!   - { type: tick, at_ms: 400 }
//! ```
//!
//! `at_ms` is an offset from the start of the replay and must not go
//! backwards. Before each event the dispatcher is ticked at that instant, so
//! title restores happen where they would on a live page.

use crate::gesture::WheelInput;
use crate::hotkeys::{KeyOutcome, VideoHotkeys, WheelOutcome};
use crate::sim::SimulatedPage;
use crate::site::SiteGate;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{Duration, Instant};
use vidkeys_config::Config;
use vidkeys_keybindings::KeyInput;

fn default_url() -> String {
    "https://video.example/".to_string()
}

/// A replay script.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    /// Page URL, used for site gating
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default)]
    pub page: SimulatedPage,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

/// One scripted host event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    Key {
        key: String,
        #[serde(default)]
        code: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        alt: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        meta: bool,
        #[serde(default)]
        at_ms: u64,
    },
    Wheel {
        #[serde(default)]
        wheel_delta: Option<f64>,
        #[serde(default)]
        delta_y: f64,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        #[serde(default)]
        at_ms: u64,
    },
    Tick {
        #[serde(default)]
        at_ms: u64,
    },
}

impl ReplayEvent {
    pub fn at_ms(&self) -> u64 {
        match self {
            ReplayEvent::Key { at_ms, .. }
            | ReplayEvent::Wheel { at_ms, .. }
            | ReplayEvent::Tick { at_ms } => *at_ms,
        }
    }
}

/// What happened for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub at_ms: u64,
    pub event: String,
    pub outcome: String,
}

/// Final state after a replay.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub steps: Vec<StepRecord>,
    pub page: SimulatedPage,
}

impl ReplayScript {
    pub fn from_yaml(contents: &str) -> Result<Self> {
        let script: Self =
            serde_yaml_ng::from_str(contents).context("Failed to parse replay script")?;

        let mut last = 0;
        for (index, event) in script.events.iter().enumerate() {
            if event.at_ms() < last {
                bail!(
                    "event {} at {}ms is earlier than the previous event at {}ms",
                    index,
                    event.at_ms(),
                    last
                );
            }
            last = event.at_ms();
        }
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read replay script {}", path.display()))?;
        Self::from_yaml(&contents)
    }

    /// Run every event through a fresh dispatcher built from `config`.
    pub fn run(self, config: &Config) -> ReplayReport {
        let installation = SiteGate::from_config(&config.sites).installation(&self.url);
        let mut hotkeys = VideoHotkeys::new(config);
        let mut page = self.page;
        let start = Instant::now();
        let mut steps = Vec::with_capacity(self.events.len());

        for event in self.events {
            let at_ms = event.at_ms();
            let now = start + Duration::from_millis(at_ms);
            let restored = hotkeys.tick(&mut page, now);

            let (description, outcome) = match event {
                ReplayEvent::Key {
                    key,
                    code,
                    ctrl,
                    alt,
                    shift,
                    meta,
                    ..
                } => {
                    let description = format!(
                        "key {}{}{}{}{:?}/{:?}",
                        if ctrl { "Ctrl+" } else { "" },
                        if alt { "Alt+" } else { "" },
                        if shift { "Shift+" } else { "" },
                        if meta { "Meta+" } else { "" },
                        key,
                        code
                    );
                    let outcome = if installation.keyboard {
                        let input = KeyInput::from_dom(&key, &code)
                            .with_modifiers(ctrl, alt, shift)
                            .with_meta(meta);
                        match hotkeys.handle_key_down(&input, &mut page, now) {
                            Ok(KeyOutcome::Handled(action)) => {
                                format!("{action} (default prevented)")
                            }
                            Ok(KeyOutcome::Ignored) => "ignored".to_string(),
                            Err(e) => {
                                log::warn!("Hotkey failed: {}", e);
                                format!("error: {e}")
                            }
                        }
                    } else {
                        "keyboard handler not installed".to_string()
                    };
                    (description, outcome)
                }
                ReplayEvent::Wheel {
                    wheel_delta,
                    delta_y,
                    ctrl,
                    shift,
                    ..
                } => {
                    let input = WheelInput {
                        wheel_delta,
                        delta_y,
                        ctrl,
                        shift,
                    };
                    let description = format!(
                        "wheel {}{}delta={}",
                        if ctrl { "Ctrl+" } else { "" },
                        if shift { "Shift+" } else { "" },
                        input.delta(config.wheel.delta_multiplier)
                    );
                    let outcome = if installation.wheel {
                        describe_wheel(hotkeys.handle_wheel(&input, &mut page, now))
                    } else {
                        "wheel handler not installed".to_string()
                    };
                    (description, outcome)
                }
                ReplayEvent::Tick { .. } => ("tick".to_string(), String::new()),
            };

            let outcome = match (restored, outcome.is_empty()) {
                (true, true) => "title restored".to_string(),
                (true, false) => format!("title restored; {outcome}"),
                (false, true) => "nothing due".to_string(),
                (false, false) => outcome,
            };
            steps.push(StepRecord {
                at_ms,
                event: description,
                outcome,
            });
        }

        ReplayReport { steps, page }
    }
}

fn describe_wheel(outcome: WheelOutcome) -> String {
    let mut text = match outcome.gesture {
        Some(gesture) => format!("{gesture:?}"),
        None => "accumulated".to_string(),
    };
    if outcome.stop_propagation {
        text.push_str(" (propagation stopped)");
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let script = ReplayScript::from_yaml(
            r#"
page:
  title: Movie
  videos:
    - { current_time: 95, duration: 100 }
events:
  - { type: key, key: ArrowRight, code: ArrowRight, shift: true }
  - { type: wheel, wheel_delta: 120, shift: true, at_ms: 10 }
  - { type: tick, at_ms: 500 }
"#,
        )
        .unwrap();
        assert_eq!(script.url, "https://video.example/");
        assert_eq!(script.events.len(), 3);
        assert_eq!(script.events[2], ReplayEvent::Tick { at_ms: 500 });
    }

    #[test]
    fn test_time_must_not_go_backwards() {
        let err = ReplayScript::from_yaml(
            r#"
events:
  - { type: tick, at_ms: 100 }
  - { type: tick, at_ms: 50 }
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("earlier"));
    }

    #[test]
    fn test_unknown_event_type() {
        assert!(ReplayScript::from_yaml("events:\n  - { type: scroll }\n").is_err());
    }
}
