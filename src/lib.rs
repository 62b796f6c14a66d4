// SPDX-License-Identifier: MPL-2.0
//! `video_trial` presents a single timed video-playback trial for an
//! experiment-running host.
//!
//! The host builds a [`config::TrialConfig`], renders the markup produced by
//! [`presentation::build`], then drives a [`playback::TrialController`] with
//! media events until it hands back one [`playback::TrialResult`].

pub mod config;
pub mod error;
pub mod playback;
pub mod presentation;
