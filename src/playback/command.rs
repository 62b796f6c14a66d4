// SPDX-License-Identifier: MPL-2.0
//! Commands and events exchanged between the trial controller and the host.
//!
//! The controller never blocks: it pushes [`MediaCommand`]s into an
//! unbounded mailbox the host drains, and is re-entered once per
//! [`MediaEvent`] the host dispatches.

use tokio::sync::mpsc;

/// Commands the controller issues toward the host's media and display layer.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaCommand {
    /// Move the media clock to the given position.
    Seek { position_secs: f64 },

    /// Issue a play request against the playback primitive.
    Play,

    /// Show or hide the loading indicator.
    SetLoadingVisible { visible: bool },

    /// Show or hide the autoplay-permission prompt.
    SetAutoplayPromptVisible { visible: bool },

    /// Remove the rendered presentation from the display surface.
    ClearDisplay,
}

/// Events the host feeds into the controller, one per dispatch cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// The media clock advanced.
    TimeUpdate { position_secs: f64 },

    /// Natural end of stream.
    Ended,

    /// The media began attempting to fetch data.
    LoadStart,

    /// The media buffered enough to play through without interruption.
    CanPlayThrough,

    /// Resolution of an asynchronous play request. Hosts whose playback
    /// primitive plays synchronously and reports no pending outcome never
    /// deliver this event.
    PlayOutcome { allowed: bool },

    /// The manual "Play" button in the autoplay prompt was activated.
    PlayButtonPressed,
}

/// Handle for sending commands to the host's media layer.
/// This is cloneable and is stored in the trial controller.
#[derive(Clone)]
pub struct MediaCommandSender {
    tx: mpsc::UnboundedSender<MediaCommand>,
}

impl MediaCommandSender {
    /// Wraps an existing channel endpoint supplied by the host.
    pub fn new(tx: mpsc::UnboundedSender<MediaCommand>) -> Self {
        Self { tx }
    }

    /// Creates a sender together with the receiving end for the host.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<MediaCommand>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Sends a command to the media layer.
    pub fn send(&self, command: MediaCommand) -> Result<(), String> {
        self.tx
            .send(command)
            .map_err(|_| "Media surface not running".to_string())
    }
}

impl std::fmt::Debug for MediaCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCommandSender")
            .field("closed", &self.tx.is_closed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_delivers_commands_in_order() {
        let (sender, mut rx) = MediaCommandSender::channel();

        sender.send(MediaCommand::Play).expect("send should succeed");
        sender
            .send(MediaCommand::Seek { position_secs: 2.0 })
            .expect("send should succeed");

        assert_eq!(rx.try_recv(), Ok(MediaCommand::Play));
        assert_eq!(rx.try_recv(), Ok(MediaCommand::Seek { position_secs: 2.0 }));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_fails_when_receiver_is_gone() {
        let (sender, rx) = MediaCommandSender::channel();
        drop(rx);

        let result = sender.send(MediaCommand::ClearDisplay);
        assert!(result.is_err());
    }

    #[test]
    fn cloned_senders_share_the_mailbox() {
        let (sender, mut rx) = MediaCommandSender::channel();
        let clone = sender.clone();

        sender.send(MediaCommand::Play).expect("send should succeed");
        clone
            .send(MediaCommand::ClearDisplay)
            .expect("send should succeed");

        assert_eq!(rx.try_recv(), Ok(MediaCommand::Play));
        assert_eq!(rx.try_recv(), Ok(MediaCommand::ClearDisplay));
    }
}
