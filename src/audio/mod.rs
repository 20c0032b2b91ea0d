use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::http::models::Track;

pub const VOLUME_STEP: u8 = 5;
pub const MAX_VOLUME: u8 = 100;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing(Track),
    Paused(Track),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSnapshot {
    pub state: PlaybackState,
    pub progress_secs: u64,
    pub volume: u8,
}

impl Default for PlayerSnapshot {
    fn default() -> Self {
        Self {
            state: PlaybackState::Stopped,
            progress_secs: 0,
            volume: 80,
        }
    }
}

impl PlayerSnapshot {
    pub fn current_track(&self) -> Option<&Track> {
        match &self.state {
            PlaybackState::Playing(track) | PlaybackState::Paused(track) => Some(track),
            PlaybackState::Stopped => None,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing(_))
    }
}

/// Facade over the playback engine. Cheap to clone; its lifetime is tied to
/// the process, not to any view, so navigation never disturbs it.
#[derive(Clone)]
pub struct AudioHandle {
    inner: Arc<ArcSwap<PlayerSnapshot>>,
}

impl AudioHandle {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(PlayerSnapshot::default())),
        }
    }

    pub fn snapshot(&self) -> Arc<PlayerSnapshot> {
        self.inner.load_full()
    }

    pub fn play(&self, track: Track) {
        self.update(|snap| PlayerSnapshot {
            state: PlaybackState::Playing(track.clone()),
            progress_secs: 0,
            volume: snap.volume,
        });
    }

    pub fn play_pause(&self) {
        self.update(|snap| {
            let state = match snap.state.clone() {
                PlaybackState::Playing(track) => PlaybackState::Paused(track),
                PlaybackState::Paused(track) => PlaybackState::Playing(track),
                PlaybackState::Stopped => PlaybackState::Stopped,
            };
            PlayerSnapshot { state, ..snap.clone() }
        });
    }

    pub fn stop(&self) {
        self.update(|snap| PlayerSnapshot {
            state: PlaybackState::Stopped,
            progress_secs: 0,
            volume: snap.volume,
        });
    }

    pub fn volume_up(&self) {
        self.update(|snap| PlayerSnapshot {
            volume: snap.volume.saturating_add(VOLUME_STEP).min(MAX_VOLUME),
            ..snap.clone()
        });
    }

    pub fn volume_down(&self) {
        self.update(|snap| PlayerSnapshot {
            volume: snap.volume.saturating_sub(VOLUME_STEP),
            ..snap.clone()
        });
    }

    /// Advances playback by `secs` while a track is playing; stops at the
    /// end of the track. Driven by the shell's one-second ticker.
    pub fn advance(&self, secs: u64) {
        self.update(|snap| {
            let PlaybackState::Playing(track) = &snap.state else {
                return snap.clone();
            };
            let progress = snap.progress_secs + secs;
            if track.duration_secs > 0 && progress >= track.duration_secs {
                PlayerSnapshot {
                    state: PlaybackState::Stopped,
                    progress_secs: 0,
                    volume: snap.volume,
                }
            } else {
                PlayerSnapshot {
                    progress_secs: progress,
                    ..snap.clone()
                }
            }
        });
    }

    pub fn current_track(&self) -> Option<Track> {
        self.snapshot().current_track().cloned()
    }

    pub fn is_playing(&self) -> bool {
        self.snapshot().is_playing()
    }

    fn update(&self, f: impl Fn(&PlayerSnapshot) -> PlayerSnapshot) {
        self.inner.rcu(|snap| f(snap));
    }
}

impl Default for AudioHandle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(duration_secs: u64) -> Track {
        Track {
            id: "t1".to_string(),
            title: "Midnight".to_string(),
            artist: "Aurora".to_string(),
            duration_secs,
            liked: false,
        }
    }

    #[test]
    fn test_play_pause_toggles_without_losing_track() {
        let audio = AudioHandle::new();
        audio.play(track(180));
        assert!(audio.is_playing());

        audio.play_pause();
        assert!(!audio.is_playing());
        assert_eq!(audio.current_track().unwrap().id, "t1");

        audio.play_pause();
        assert!(audio.is_playing());
    }

    #[test]
    fn test_play_pause_on_stopped_is_a_no_op() {
        let audio = AudioHandle::new();
        audio.play_pause();
        assert_eq!(audio.snapshot().state, PlaybackState::Stopped);
    }

    #[test]
    fn test_volume_clamps_at_bounds() {
        let audio = AudioHandle::new();
        for _ in 0..30 {
            audio.volume_up();
        }
        assert_eq!(audio.snapshot().volume, MAX_VOLUME);
        for _ in 0..30 {
            audio.volume_down();
        }
        assert_eq!(audio.snapshot().volume, 0);
    }

    #[test]
    fn test_advance_stops_at_end_of_track() {
        let audio = AudioHandle::new();
        audio.play(track(3));
        audio.advance(2);
        assert_eq!(audio.snapshot().progress_secs, 2);
        audio.advance(1);
        assert_eq!(audio.snapshot().state, PlaybackState::Stopped);
    }
}
