//! This module defines the parameters of a single video trial, including
//! loading and saving trial definitions from a TOML file.
//!
//! # Examples
//!
//! ```
//! use video_trial::config::TrialConfig;
//!
//! let mut config = TrialConfig::new(vec!["clip.mp4".to_string()], 640, 480);
//! config.stop = Some(4.0);
//!
//! assert!(config.autoplay); // defaults on
//! assert!(config.validate().is_ok());
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod defaults;

pub use defaults::{
    DEFAULT_AUTOPLAY, DEFAULT_CONTROLS, DEFAULT_INDICATE_LOADING, DEFAULT_PROMPT_ENABLE_AUTOPLAY,
};

/// Parameters for one video trial, supplied by the host sequencer.
///
/// Optional fields fall back to the defaults in [`defaults`] when a trial
/// definition leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialConfig {
    /// Ordered alternate encodings of the stimulus; the first playable one wins.
    pub sources: Vec<String>,
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default = "default_controls")]
    pub controls: bool,
    /// Content shown below the media element, verbatim.
    #[serde(default)]
    pub prompt: Option<String>,
    /// Playback window lower bound in seconds.
    #[serde(default)]
    pub start: Option<f64>,
    /// Playback window upper bound in seconds.
    #[serde(default)]
    pub stop: Option<f64>,
    #[serde(default = "default_indicate_loading")]
    pub indicate_loading: bool,
    #[serde(default = "default_prompt_enable_autoplay")]
    pub prompt_enable_autoplay: bool,
}

fn default_autoplay() -> bool {
    DEFAULT_AUTOPLAY
}

fn default_controls() -> bool {
    DEFAULT_CONTROLS
}

fn default_indicate_loading() -> bool {
    DEFAULT_INDICATE_LOADING
}

fn default_prompt_enable_autoplay() -> bool {
    DEFAULT_PROMPT_ENABLE_AUTOPLAY
}

impl TrialConfig {
    /// Creates a trial configuration with the required fields and all
    /// optional fields at their defaults.
    pub fn new(sources: Vec<String>, width: u32, height: u32) -> Self {
        Self {
            sources,
            width,
            height,
            autoplay: DEFAULT_AUTOPLAY,
            controls: DEFAULT_CONTROLS,
            prompt: None,
            start: None,
            stop: None,
            indicate_loading: DEFAULT_INDICATE_LOADING,
            prompt_enable_autoplay: DEFAULT_PROMPT_ENABLE_AUTOPLAY,
        }
    }

    /// Checks the configuration for degenerate input.
    ///
    /// The playback controller has no error channel of its own, so bad
    /// parameters are rejected here, before a trial starts.
    pub fn validate(&self) -> Result<()> {
        if self.sources.is_empty() {
            return Err(Error::Config("at least one source is required".into()));
        }
        if self.width == 0 || self.height == 0 {
            return Err(Error::Config(format!(
                "display dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if let Some(start) = self.start {
            if start < 0.0 {
                return Err(Error::Config(format!(
                    "start must not be negative, got {start}"
                )));
            }
        }
        if let Some(stop) = self.stop {
            if stop < 0.0 {
                return Err(Error::Config(format!(
                    "stop must not be negative, got {stop}"
                )));
            }
        }
        if let (Some(start), Some(stop)) = (self.start, self.stop) {
            if stop <= start {
                return Err(Error::Config(format!(
                    "stop ({stop}) must exceed start ({start})"
                )));
            }
        }
        Ok(())
    }
}

pub fn load_from_path(path: &Path) -> Result<TrialConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &TrialConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_applies_documented_defaults() {
        let config = TrialConfig::new(vec!["clip.mp4".to_string()], 640, 480);

        assert!(config.autoplay);
        assert!(!config.controls);
        assert!(config.prompt.is_none());
        assert!(config.start.is_none());
        assert!(config.stop.is_none());
        assert!(!config.indicate_loading);
        assert!(!config.prompt_enable_autoplay);
    }

    #[test]
    fn save_and_load_round_trip_preserves_window() {
        let mut config = TrialConfig::new(vec!["clip.mp4".to_string()], 640, 480);
        config.start = Some(2.0);
        config.stop = Some(4.0);
        config.prompt = Some("<p>Watch carefully.</p>".to_string());
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("trial.toml");

        save_to_path(&config, &config_path).expect("failed to save trial definition");
        let loaded = load_from_path(&config_path).expect("failed to load trial definition");

        assert_eq!(loaded.sources, config.sources);
        assert_eq!(loaded.start, config.start);
        assert_eq!(loaded.stop, config.stop);
        assert_eq!(loaded.prompt, config.prompt);
    }

    #[test]
    fn load_from_path_fills_missing_fields_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("trial.toml");
        fs::write(
            &config_path,
            "sources = [\"clip.mp4\"]\nwidth = 640\nheight = 480\n",
        )
        .expect("failed to write trial definition");

        let loaded = load_from_path(&config_path).expect("load should succeed");
        assert!(loaded.autoplay);
        assert!(!loaded.indicate_loading);
        assert!(loaded.stop.is_none());
    }

    #[test]
    fn load_from_path_rejects_missing_required_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("trial.toml");
        fs::write(&config_path, "width = 640\nheight = 480\n")
            .expect("failed to write trial definition");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn validate_rejects_empty_sources() {
        let config = TrialConfig::new(vec![], 640, 480);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let config = TrialConfig::new(vec!["clip.mp4".to_string()], 0, 480);
        assert!(config.validate().is_err());

        let config = TrialConfig::new(vec!["clip.mp4".to_string()], 640, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_times() {
        let mut config = TrialConfig::new(vec!["clip.mp4".to_string()], 640, 480);
        config.start = Some(-1.0);
        assert!(config.validate().is_err());

        let mut config = TrialConfig::new(vec!["clip.mp4".to_string()], 640, 480);
        config.stop = Some(-0.5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_stop_not_after_start() {
        let mut config = TrialConfig::new(vec!["clip.mp4".to_string()], 640, 480);
        config.start = Some(4.0);
        config.stop = Some(4.0);
        assert!(config.validate().is_err());

        config.stop = Some(2.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_well_formed_window() {
        let mut config = TrialConfig::new(vec!["clip.mp4".to_string()], 640, 480);
        config.start = Some(2.0);
        config.stop = Some(4.0);
        assert!(config.validate().is_ok());
    }
}
