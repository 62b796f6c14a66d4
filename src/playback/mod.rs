// SPDX-License-Identifier: MPL-2.0
//! Playback lifecycle control for video trials.
//!
//! This module decides when a trial ends: it enforces the optional bounded
//! time window against the media clock, reacts to the natural end of
//! stream, and drives the autoplay-permission retry loop.

mod command;
mod controller;

pub use command::{MediaCommand, MediaCommandSender, MediaEvent};
pub use controller::{TrialController, TrialPhase, TrialResult};

use crate::config::TrialConfig;
use crate::error::Result;

/// Validates the trial parameters and attaches a playback controller to the
/// rendered media element.
pub fn begin_trial(config: TrialConfig, commands: MediaCommandSender) -> Result<TrialController> {
    config.validate()?;
    Ok(TrialController::new(config, commands))
}
