//! Load state of a lazily fetched image.

/// `Loaded` and `Errored` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaPhase {
    Pending,
    WaitingForVisibility,
    Loading,
    Loaded,
    Errored,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MediaState {
    pub loaded: bool,
    pub errored: bool,
    pub visible: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaView {
    Placeholder,
    /// `shown` drives the opacity fade.
    Resource { shown: bool },
    Unavailable,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaLoad {
    phase: MediaPhase,
    attempt: u32,
}

impl Default for MediaLoad {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaLoad {
    pub fn new() -> Self {
        Self {
            phase: MediaPhase::Pending,
            attempt: 0,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> MediaPhase {
        self.phase
    }

    /// Leaves `Pending`. Returns `true` when the caller should start the fetch
    /// right away (priority images); otherwise it should watch for visibility.
    pub fn start(&mut self, priority: bool) -> bool {
        if self.phase != MediaPhase::Pending {
            return false;
        }
        self.phase = if priority {
            MediaPhase::Loading
        } else {
            MediaPhase::WaitingForVisibility
        };
        priority
    }

    /// Starts over for a new source. Outcomes reported for any other
    /// `attempt` are dropped from here on.
    pub fn restart(&mut self, attempt: u32, priority: bool) -> bool {
        self.attempt = attempt;
        self.phase = MediaPhase::Pending;
        self.start(priority)
    }

    pub fn reveal(&mut self) -> bool {
        if self.phase != MediaPhase::WaitingForVisibility {
            return false;
        }
        self.phase = MediaPhase::Loading;
        true
    }

    pub fn finish(&mut self, attempt: u32, succeeded: bool) -> bool {
        if attempt != self.attempt || self.phase != MediaPhase::Loading {
            return false;
        }
        self.phase = if succeeded {
            MediaPhase::Loaded
        } else {
            MediaPhase::Errored
        };
        true
    }

    pub fn state(&self) -> MediaState {
        MediaState {
            loaded: self.phase == MediaPhase::Loaded,
            errored: self.phase == MediaPhase::Errored,
            visible: matches!(
                self.phase,
                MediaPhase::Loading | MediaPhase::Loaded | MediaPhase::Errored
            ),
        }
    }

    pub fn view(&self) -> MediaView {
        match self.phase {
            MediaPhase::Pending | MediaPhase::WaitingForVisibility => MediaView::Placeholder,
            MediaPhase::Loading => MediaView::Resource { shown: false },
            MediaPhase::Loaded => MediaView::Resource { shown: true },
            MediaPhase::Errored => MediaView::Unavailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lazy_media_shows_placeholder_until_revealed() {
        let mut media = MediaLoad::new();

        assert!(!media.start(false));
        assert_eq!(media.phase(), MediaPhase::WaitingForVisibility);
        assert_eq!(media.view(), MediaView::Placeholder);
        assert!(!media.state().visible);

        assert!(media.reveal());
        assert_eq!(media.view(), MediaView::Resource { shown: false });
        assert!(media.state().visible);
    }

    #[test]
    fn priority_media_loads_without_visibility() {
        let mut media = MediaLoad::new();

        assert!(media.start(true));
        assert_eq!(media.phase(), MediaPhase::Loading);
        assert!(!media.reveal());
    }

    #[test]
    fn successful_load_fades_in() {
        let mut media = MediaLoad::new();
        media.start(true);

        assert!(media.finish(0, true));
        assert_eq!(media.view(), MediaView::Resource { shown: true });
        assert_eq!(
            media.state(),
            MediaState {
                loaded: true,
                errored: false,
                visible: true
            }
        );
    }

    #[test]
    fn error_is_terminal() {
        let mut media = MediaLoad::new();
        media.start(false);
        media.reveal();
        media.finish(0, false);

        assert_eq!(media.view(), MediaView::Unavailable);
        assert!(!media.finish(0, true));
        assert!(!media.reveal());
        assert!(!media.start(true));
        assert_eq!(media.phase(), MediaPhase::Errored);
    }

    #[test]
    fn outcome_before_fetch_is_ignored() {
        let mut media = MediaLoad::new();
        media.start(false);

        assert!(!media.finish(0, true));
        assert_eq!(media.phase(), MediaPhase::WaitingForVisibility);
    }

    #[test]
    fn outcome_of_superseded_source_is_ignored() {
        let mut media = MediaLoad::new();
        media.restart(1, true);
        media.restart(2, true);

        assert!(!media.finish(1, false));
        assert_eq!(media.view(), MediaView::Resource { shown: false });

        assert!(media.finish(2, true));
        assert!(media.state().loaded);
    }

    #[test]
    fn restart_leaves_terminal_state() {
        let mut media = MediaLoad::new();
        media.restart(1, true);
        media.finish(1, false);
        assert_eq!(media.view(), MediaView::Unavailable);

        assert!(!media.restart(2, false));
        assert_eq!(media.phase(), MediaPhase::WaitingForVisibility);
    }
}
