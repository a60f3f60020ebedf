//! File logger behind the `log` facade.
//!
//! All `log::info!()` etc. output goes to `vidkeys_debug.log` in the
//! system temp dir (`/tmp` on Unix/macOS, `%TEMP%` on Windows). When
//! `RUST_LOG` is set the same lines are mirrored to stderr.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then the config
//! file's `log_level`. At `off` no file is created. The logger goes in
//! before the config is read, so lines from config loading are held until
//! the config's level decides whether they are written.

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};
use vidkeys_config::LogLevel;

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

/// Path of the debug log file.
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("vidkeys_debug.log")
}

struct LogBridge {
    state: Mutex<BridgeState>,
}

struct BridgeState {
    level: log::LevelFilter,
    file: Option<File>,
    mirror_stderr: bool,
    /// Lines logged before the level is known, held until it is.
    pending: Option<Vec<(log::Level, String)>>,
}

impl BridgeState {
    /// Fix the level and open the log file (none at `off`).
    fn open(&mut self, level: log::LevelFilter) {
        self.level = level;
        if level == log::LevelFilter::Off {
            return;
        }
        // Silently run without a file if it can't be opened
        self.file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(log_path())
            .ok();
        self.write_line(&format!(
            "{}\nvidkeys {} session started at {} (level={})\n{}\n",
            "=".repeat(80),
            crate::VERSION,
            get_timestamp(),
            level,
            "=".repeat(80)
        ));
    }

    /// Settle on the config level and write out held lines that pass it.
    /// Returns `false` when the level was already fixed.
    fn release(&mut self, level: log::LevelFilter) -> bool {
        let Some(pending) = self.pending.take() else {
            return false;
        };
        self.open(level);
        for (record_level, line) in pending {
            if record_level <= level {
                self.write_line(&line);
            }
        }
        true
    }

    fn write_line(&mut self, line: &str) {
        if let Some(file) = self.file.as_mut() {
            let _ = file.write_all(line.as_bytes());
            let _ = file.flush();
        }
        if self.mirror_stderr {
            eprint!("{line}");
        }
    }
}

impl log::Log for LogBridge {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        let state = self.state.lock();
        state.pending.is_some() || metadata.level() <= state.level
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!(
            "[{}] [{:<5}] [{}] {}\n",
            get_timestamp(),
            record.level(),
            record.target(),
            record.args()
        );
        let mut state = self.state.lock();
        match state.pending.as_mut() {
            Some(pending) => pending.push((record.level(), line)),
            None => state.write_line(&line),
        }
    }

    fn flush(&self) {
        if let Some(file) = self.state.lock().file.as_mut() {
            let _ = file.flush();
        }
    }
}

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

/// Level forced by the CLI flag or `RUST_LOG`, if either names one.
pub fn override_level(
    cli_level: Option<LogLevel>,
    rust_log: Option<&str>,
) -> Option<log::LevelFilter> {
    cli_level
        .or_else(|| rust_log.and_then(|v| v.parse::<LogLevel>().ok()))
        .map(LogLevel::to_level_filter)
}

/// Pick the effective level from the CLI flag, `RUST_LOG` and the config.
pub fn resolve_level(
    cli_level: Option<LogLevel>,
    rust_log: Option<&str>,
    config_level: LogLevel,
) -> log::LevelFilter {
    override_level(cli_level, rust_log).unwrap_or_else(|| config_level.to_level_filter())
}

/// Install the file logger before the config is read.
///
/// With `--log-level` or a usable `RUST_LOG` the level is fixed now.
/// Otherwise records are held until [`apply_config_level`] supplies the
/// config's level, so config loading is logged too. Later calls are ignored.
pub fn init_log_bridge(cli_level: Option<LogLevel>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let forced = override_level(cli_level, rust_log.as_deref());

    let bridge = BRIDGE.get_or_init(|| {
        let mut state = BridgeState {
            level: log::LevelFilter::Off,
            file: None,
            mirror_stderr: rust_log.is_some(),
            pending: None,
        };
        match forced {
            Some(level) => state.open(level),
            None => state.pending = Some(Vec::new()),
        }
        LogBridge {
            state: Mutex::new(state),
        }
    });

    if log::set_logger(bridge).is_ok() {
        log::set_max_level(forced.unwrap_or(log::LevelFilter::Trace));
    }
}

/// Apply the config file's level unless the CLI or `RUST_LOG` already set
/// one, then write out the records held since startup.
pub fn apply_config_level(config_level: LogLevel) {
    let Some(bridge) = BRIDGE.get() else {
        return;
    };
    let level = config_level.to_level_filter();
    if bridge.state.lock().release(level) {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        assert_eq!(
            resolve_level(Some(LogLevel::Trace), Some("error"), LogLevel::Info),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_rust_log_over_config() {
        assert_eq!(
            resolve_level(None, Some("debug"), LogLevel::Info),
            log::LevelFilter::Debug
        );
        // module-filter syntax is not understood; fall back to config
        assert_eq!(
            resolve_level(None, Some("vidkeys=debug"), LogLevel::Warn),
            log::LevelFilter::Warn
        );
    }

    #[test]
    fn test_override_only_from_cli_or_rust_log() {
        assert_eq!(override_level(None, None), None);
        assert_eq!(override_level(None, Some("vidkeys=debug")), None);
        assert_eq!(
            override_level(None, Some("warn")),
            Some(log::LevelFilter::Warn)
        );
        assert_eq!(
            override_level(Some(LogLevel::Off), Some("trace")),
            Some(log::LevelFilter::Off)
        );
    }

    #[test]
    fn test_held_lines_release_once() {
        let mut state = BridgeState {
            level: log::LevelFilter::Off,
            file: None,
            mirror_stderr: false,
            pending: Some(vec![(log::Level::Info, "Config path\n".to_string())]),
        };
        assert!(state.release(log::LevelFilter::Off));
        assert!(state.pending.is_none());
        assert!(state.file.is_none());

        // A level fixed at startup is not replaced by the config's
        assert!(!state.release(log::LevelFilter::Trace));
        assert_eq!(state.level, log::LevelFilter::Off);
    }

    #[test]
    fn test_config_default_is_off() {
        assert_eq!(
            resolve_level(None, None, LogLevel::default()),
            log::LevelFilter::Off
        );
    }
}
