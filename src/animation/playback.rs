//! Play/pause state

/// Whether the animator advances the scene.
///
/// The clock itself never stops; pausing only freezes the pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    #[default]
    Playing,
    Paused,
}

impl Playback {
    /// Flips between playing and paused and returns the new state.
    pub fn toggle(&mut self) -> Playback {
        *self = match self {
            Playback::Playing => Playback::Paused,
            Playback::Paused => Playback::Playing,
        };
        *self
    }

    /// Clears the pause state.
    pub fn reset(&mut self) {
        *self = Playback::Playing;
    }

    pub fn is_paused(self) -> bool {
        self == Playback::Paused
    }

    /// Status line shown next to the category badge.
    pub fn status_label(self) -> &'static str {
        match self {
            Playback::Playing => "Live Animation",
            Playback::Paused => "Paused",
        }
    }

    /// Label of the button that would toggle out of this state.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Playback::Playing => "Pause",
            Playback::Paused => "Play",
        }
    }
}

impl From<bool> for Playback {
    fn from(paused: bool) -> Self {
        if paused {
            Playback::Paused
        } else {
            Playback::Playing
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_playing() {
        assert_eq!(Playback::default(), Playback::Playing);
        assert!(!Playback::default().is_paused());
    }

    #[test]
    fn test_toggle_alternates() {
        let mut playback = Playback::default();
        assert_eq!(playback.toggle(), Playback::Paused);
        assert_eq!(playback.toggle(), Playback::Playing);
        assert_eq!(playback.toggle(), Playback::Paused);
        assert!(playback.is_paused());
    }

    #[test]
    fn test_reset_resumes() {
        let mut playback = Playback::Paused;
        playback.reset();
        assert_eq!(playback, Playback::Playing);
        playback.reset();
        assert_eq!(playback, Playback::Playing);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Playback::Playing.status_label(), "Live Animation");
        assert_eq!(Playback::Paused.toggle_label(), "Play");
        assert_eq!(Playback::from(true), Playback::Paused);
    }
}
