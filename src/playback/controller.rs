// SPDX-License-Identifier: MPL-2.0
//! Playback lifecycle controller for a video trial.
//!
//! The controller owns the end-of-trial decision: it watches the media
//! clock against the optional stop time, reacts to the natural end of
//! stream, drives the autoplay-permission retry loop and toggles the
//! loading indicator. On the first terminal signal it clears the display
//! and hands exactly one [`TrialResult`] back to the host.

use super::command::{MediaCommand, MediaCommandSender, MediaEvent};
use crate::config::TrialConfig;
use serde::Serialize;

/// Phase of the trial lifecycle.
///
/// There is no re-entry: a trial moves from `Watching` to `Ended` once and
/// stays there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPhase {
    /// Observers armed, waiting for the stop time or the natural end.
    Watching,
    /// Terminal. Entered exactly once.
    Ended,
}

/// Mutable per-trial playback state. Owned solely by the controller,
/// lifetime = one trial.
#[derive(Debug, Clone, PartialEq)]
struct PlaybackSession {
    /// Last observed media clock position in seconds.
    position_secs: f64,
    /// Whether the stop-time observer is armed.
    watching_stop: bool,
    /// Set exactly once; guards against double emission of the result even
    /// if the stop-watch and the natural-end signal fire in the same
    /// dispatch cycle.
    ended: bool,
}

/// The single record a trial hands back to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrialResult {
    /// JSON-serialized list of the source URIs supplied to the trial.
    pub stimulus: String,
}

impl TrialResult {
    fn new(sources: &[String]) -> Self {
        Self {
            stimulus: serde_json::to_string(sources).unwrap_or_default(),
        }
    }
}

/// State machine deciding when a trial ends.
///
/// Construct via [`super::begin_trial`]; feed it host events through
/// [`TrialController::handle_event`] until it returns a result.
#[derive(Debug)]
pub struct TrialController {
    config: TrialConfig,
    phase: TrialPhase,
    session: PlaybackSession,
    commands: MediaCommandSender,
    /// Number of play requests issued so far, manual retries included.
    play_attempts: u32,
}

impl TrialController {
    /// Attaches to the rendered media element and starts monitoring:
    /// arms the stop-watch, applies the initial seek and, when autoplay is
    /// on, issues the first playback attempt.
    pub(crate) fn new(config: TrialConfig, commands: MediaCommandSender) -> Self {
        let mut controller = Self {
            phase: TrialPhase::Watching,
            session: PlaybackSession {
                position_secs: config.start.unwrap_or(0.0),
                watching_stop: config.stop.is_some(),
                ended: false,
            },
            config,
            commands,
            play_attempts: 0,
        };

        // Browsers may ignore this seek before metadata has loaded; it is
        // re-applied when an autoplay attempt succeeds.
        if let Some(start) = controller.config.start {
            let _ = controller.commands.send(MediaCommand::Seek {
                position_secs: start,
            });
        }

        if controller.config.autoplay {
            controller.attempt_playback();
        }

        controller
    }

    /// Feeds one host-dispatched event into the state machine.
    ///
    /// Returns the trial result exactly once, on the event that ends the
    /// trial. Every event after that is ignored.
    pub fn handle_event(&mut self, event: MediaEvent) -> Option<TrialResult> {
        if self.session.ended {
            return None;
        }

        match event {
            MediaEvent::TimeUpdate { position_secs } => self.handle_time_update(position_secs),
            MediaEvent::Ended => {
                // The video may end before the stop time is reached.
                self.session.watching_stop = false;
                self.end_trial()
            }
            MediaEvent::LoadStart => {
                if self.config.indicate_loading {
                    let _ = self
                        .commands
                        .send(MediaCommand::SetLoadingVisible { visible: true });
                }
                None
            }
            MediaEvent::CanPlayThrough => {
                if self.config.indicate_loading {
                    let _ = self
                        .commands
                        .send(MediaCommand::SetLoadingVisible { visible: false });
                }
                None
            }
            MediaEvent::PlayOutcome { allowed } => {
                self.handle_play_outcome(allowed);
                None
            }
            MediaEvent::PlayButtonPressed => {
                self.attempt_playback();
                None
            }
        }
    }

    fn handle_time_update(&mut self, position_secs: f64) -> Option<TrialResult> {
        self.session.position_secs = position_secs;

        match self.config.stop {
            Some(stop) if self.session.watching_stop && position_secs >= stop => {
                self.session.watching_stop = false;
                self.end_trial()
            }
            _ => None,
        }
    }

    /// Issues a play request. Re-entered on every manual "Play" activation;
    /// retries are unbounded.
    fn attempt_playback(&mut self) {
        self.play_attempts += 1;
        let _ = self.commands.send(MediaCommand::Play);
    }

    /// Reacts to the resolution of an asynchronous play request.
    ///
    /// Only meaningful when the autoplay prompt is enabled; otherwise the
    /// outcome is not inspected and playback either proceeds or silently
    /// fails to start. In the silent-failure case a trial without a
    /// reachable stop time or natural end stalls until the host tears it
    /// down; there is no timeout fallback.
    fn handle_play_outcome(&mut self, allowed: bool) {
        if !self.config.prompt_enable_autoplay {
            return;
        }

        if allowed {
            // Re-apply the start seek; the browser may have ignored it
            // before playback began.
            if let Some(start) = self.config.start {
                let _ = self.commands.send(MediaCommand::Seek {
                    position_secs: start,
                });
            }
            let _ = self
                .commands
                .send(MediaCommand::SetAutoplayPromptVisible { visible: false });
        } else {
            let _ = self
                .commands
                .send(MediaCommand::SetAutoplayPromptVisible { visible: true });
        }
    }

    /// Terminal transition: disarms the observers, clears the display and
    /// builds the result. The `ended` flag makes this run at most once.
    fn end_trial(&mut self) -> Option<TrialResult> {
        if self.session.ended {
            return None;
        }
        self.session.ended = true;
        self.session.watching_stop = false;
        self.phase = TrialPhase::Ended;

        let _ = self.commands.send(MediaCommand::ClearDisplay);

        Some(TrialResult::new(&self.config.sources))
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> TrialPhase {
        self.phase
    }

    /// Returns the last observed media clock position in seconds.
    pub fn position_secs(&self) -> f64 {
        self.session.position_secs
    }

    /// Returns true if the stop-time observer is still armed.
    pub fn is_watching_stop(&self) -> bool {
        self.session.watching_stop
    }

    /// Returns how many play requests have been issued so far.
    pub fn play_attempts(&self) -> u32 {
        self.play_attempts
    }

    /// Returns the trial parameters this controller runs with.
    pub fn config(&self) -> &TrialConfig {
        &self.config
    }
}
