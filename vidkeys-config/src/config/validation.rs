//! Value and path validation for `Config`.

use super::config_struct::Config;
use crate::error::ConfigError;
use chrono::format::{Item, StrftimeItems};
use std::fs;
use std::path::{Path, PathBuf};

/// Playback rates below this are never applied, whatever the config says.
pub const RATE_FLOOR: f64 = 0.1;

impl Config {
    /// Check semantic constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn positive(name: &str, value: f64) -> Result<(), ConfigError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::Validation(format!(
                    "{name} must be a positive number, got {value}"
                )))
            }
        }

        positive("wheel.threshold", self.wheel.threshold)?;
        positive("wheel.delta_multiplier", self.wheel.delta_multiplier)?;
        positive("wheel.seek_step_secs", self.wheel.seek_step_secs)?;
        positive("wheel.speed_step", self.wheel.speed_step)?;
        positive("playback.keyboard_speed_step", self.playback.keyboard_speed_step)?;
        positive("playback.seek_seconds_per_rate", self.playback.seek_seconds_per_rate)?;

        if !self.playback.min_rate.is_finite() || self.playback.min_rate < RATE_FLOOR {
            return Err(ConfigError::Validation(format!(
                "playback.min_rate must be at least {RATE_FLOOR}, got {}",
                self.playback.min_rate
            )));
        }
        if !self.playback.keyboard_min_rate.is_finite()
            || self.playback.keyboard_min_rate < self.playback.min_rate
        {
            return Err(ConfigError::Validation(format!(
                "playback.keyboard_min_rate ({}) must not be below playback.min_rate ({})",
                self.playback.keyboard_min_rate, self.playback.min_rate
            )));
        }

        for pattern in &self.sites.excluded_urls {
            if let Some(pos) = pattern.find('*')
                && pos != pattern.len() - 1
            {
                return Err(ConfigError::Validation(format!(
                    "sites.excluded_urls entry '{pattern}': '*' is only allowed at the end"
                )));
            }
        }

        if StrftimeItems::new(&self.listing.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(ConfigError::Validation(format!(
                "listing.date_format '{}' is not a valid strftime format",
                self.listing.date_format
            )));
        }

        Ok(())
    }

    /// Verify that `path` (after resolving symlinks) lives inside `expected_base`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::PathTraversal` when the canonical path does not
    /// start with the canonical `expected_base`.
    /// Returns `ConfigError::Io` if `path` cannot be canonicalized.
    pub fn validate_config_path(path: &Path, expected_base: &Path) -> Result<PathBuf, ConfigError> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("cannot canonicalize {}: {e}", path.display()),
            )
        })?;

        // If the base doesn't exist yet (first run), use the un-resolved path.
        let canonical_base =
            fs::canonicalize(expected_base).unwrap_or_else(|_| expected_base.to_path_buf());

        if !canonical.starts_with(&canonical_base) {
            return Err(ConfigError::PathTraversal(format!(
                "path '{}' resolves to '{}' which is outside the expected directory '{}'",
                path.display(),
                canonical.display(),
                canonical_base.display(),
            )));
        }

        Ok(canonical)
    }
}
