// SPDX-License-Identifier: MPL-2.0
//! Render description for a video trial.
//!
//! [`build`] turns a [`TrialConfig`] into a [`Presentation`]: a structured
//! description of the media element, the optional loading indicator, the
//! optional caption and the optional autoplay-permission prompt. Building is
//! pure construction; nothing here touches the display or the network.

use crate::config::TrialConfig;

/// Element id of the media element in the assembled markup.
pub const PLAYER_ID: &str = "trial-video-player";
/// Element id of the hidden loading indicator.
pub const LOADING_ID: &str = "trial-video-loading";
/// Element id of the hidden autoplay-permission prompt block.
pub const AUTOPLAY_PROMPT_ID: &str = "trial-video-autoprompt";
/// Element id of the manual "Play" button inside the autoplay prompt.
pub const PLAY_BUTTON_ID: &str = "trial-video-apbutton";

const LOADING_TEXT: &str = "Loading...";
const AUTOPLAY_PROMPT_TEXT: &str =
    "Please enable autoplay in your browser, or click the 'Play' button:";
const PLAY_BUTTON_LABEL: &str = "Play";

/// One alternate encoding of the stimulus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    /// The URI exactly as supplied by the host.
    pub uri: String,
    /// MIME-style tag derived from the filename extension, e.g. `video/mp4`.
    /// Empty when the URI carries no usable extension.
    pub type_tag: String,
}

/// The media element itself: dimensions, transport controls, sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaElementSpec {
    pub width: u32,
    pub height: u32,
    pub controls: bool,
    pub sources: Vec<SourceEntry>,
}

/// Structured render description for one trial.
///
/// Parts appear in display order: loading indicator, media element,
/// caption, autoplay prompt. Optional parts are `None` when the
/// corresponding trial parameter is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Hidden loading-indicator markup, present iff `indicate_loading`.
    pub loading_indicator: Option<String>,
    pub media: MediaElementSpec,
    /// Caption shown below the media, verbatim from the config.
    pub prompt: Option<String>,
    /// Hidden autoplay prompt markup, present iff `prompt_enable_autoplay`.
    pub autoplay_prompt: Option<String>,
}

impl Presentation {
    /// Assembles the full markup string for the display surface.
    pub fn markup(&self) -> String {
        let mut html = String::new();

        if let Some(loading) = &self.loading_indicator {
            html.push_str(loading);
        }

        html.push_str(&format!(
            "<video id=\"{PLAYER_ID}\" width=\"{}\" height=\"{}\" ",
            self.media.width, self.media.height
        ));
        if self.media.controls {
            html.push_str("controls ");
        }
        html.push('>');
        for source in &self.media.sources {
            html.push_str(&format!(
                "<source src=\"{}\" type=\"{}\">",
                source.uri, source.type_tag
            ));
        }
        html.push_str("</video>");

        if let Some(prompt) = &self.prompt {
            html.push_str(prompt);
        }

        if let Some(autoplay_prompt) = &self.autoplay_prompt {
            html.push_str(autoplay_prompt);
        }

        html
    }
}

/// Builds the render description for a trial. Pure; no side effects.
pub fn build(config: &TrialConfig) -> Presentation {
    let sources = config
        .sources
        .iter()
        .map(|uri| SourceEntry {
            uri: uri.clone(),
            type_tag: source_type_tag(uri),
        })
        .collect();

    let loading_indicator = config.indicate_loading.then(|| {
        format!("<p id='{LOADING_ID}' style='display: none;'>{LOADING_TEXT}</p>\n")
    });

    let autoplay_prompt = config.prompt_enable_autoplay.then(|| {
        format!(
            "<div id='{AUTOPLAY_PROMPT_ID}' style='display: none;'><p>{AUTOPLAY_PROMPT_TEXT} \
             <button id='{PLAY_BUTTON_ID}'>{PLAY_BUTTON_LABEL}</button></p></div>\n"
        )
    });

    Presentation {
        loading_indicator,
        media: MediaElementSpec {
            width: config.width,
            height: config.height,
            controls: config.controls,
            sources,
        },
        prompt: config.prompt.clone(),
        autoplay_prompt,
    }
}

/// Derives the `video/<ext>` type tag from a source URI.
///
/// The query string (everything from the first `?`) is stripped first, the
/// extension is lower-cased and used verbatim as the subtype. A dot inside a
/// directory name does not count as an extension. URIs without a usable
/// extension yield an empty tag; the playback primitive decides what to do
/// with those.
fn source_type_tag(uri: &str) -> String {
    let stripped = uri.split('?').next().unwrap_or(uri);
    let name = stripped.rsplit('/').next().unwrap_or(stripped);
    match name.rfind('.') {
        Some(idx) if idx + 1 < name.len() => {
            format!("video/{}", name[idx + 1..].to_lowercase())
        }
        _ => String::new(),
    }
}
