use crate::error::LandingError;
use crate::platform::{MediaPlayer, Viewport};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { source: String },
}

/// Video preview overlay.
///
/// While closed the player never keeps a source loaded: every close pauses,
/// rewinds and unloads, whatever state the media element is in.
pub struct VideoModal<P: MediaPlayer> {
    player: P,
    state: ModalState,
    missing_notice: String,
}

impl<P: MediaPlayer> VideoModal<P> {
    pub fn new(player: P, missing_notice: impl Into<String>) -> Self {
        Self {
            player,
            state: ModalState::Closed,
            missing_notice: missing_notice.into(),
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open { .. })
    }

    pub fn aria_hidden(&self) -> &'static str {
        if self.is_open() {
            "false"
        } else {
            "true"
        }
    }

    /// Open with the source carried by a play control.
    ///
    /// A control without a source gets the blocking notice and the modal stays closed.
    pub fn open(
        &mut self,
        source: Option<&str>,
        viewport: &dyn Viewport,
    ) -> Result<(), LandingError> {
        let Some(source) = source.map(str::trim).filter(|s| !s.is_empty()) else {
            log::warn!("Play control has no video source");
            viewport.alert(&self.missing_notice);
            return Err(LandingError::VideoNotFound);
        };

        if let Err(e) = self.player.set_source(source).and_then(|_| self.player.load()) {
            log::error!("Failed to load video {}: {}", source, e);
            self.teardown();
            return Err(e);
        }
        // autoplay restrictions are not the user's problem
        if let Err(e) = self.player.play() {
            log::debug!("Playback did not start: {}", e);
        }

        self.state = ModalState::Open {
            source: source.to_string(),
        };
        viewport.set_scroll_locked(true);
        log::info!("Opened video preview {}", source);
        Ok(())
    }

    /// Close and unload. Never fails.
    pub fn close(&mut self, viewport: &dyn Viewport) {
        self.teardown();
        self.state = ModalState::Closed;
        viewport.set_scroll_locked(false);
    }

    fn teardown(&self) {
        let steps = [
            ("pause", self.player.pause()),
            ("rewind", self.player.rewind()),
            ("clear source", self.player.set_source("")),
            ("reload", self.player.load()),
        ];
        for (step, result) in steps {
            if let Err(e) = result {
                log::debug!("Ignoring {} failure during modal close: {}", step, e);
            }
        }
    }
}
