// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for trial parameters.
//!
//! This module serves as the single source of truth for the parameter
//! defaults a host gets when a trial definition leaves a field out.

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Whether playback starts automatically once the media element exists.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Whether native transport controls are shown on the media element.
pub const DEFAULT_CONTROLS: bool = false;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Whether a loading indicator is shown while the media buffers.
pub const DEFAULT_INDICATE_LOADING: bool = false;

/// Whether the user is prompted to enable autoplay when the browser
/// blocks the automatic play request.
pub const DEFAULT_PROMPT_ENABLE_AUTOPLAY: bool = false;
