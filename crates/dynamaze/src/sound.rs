//! Music and sound cue engine
//!
//! The engine owns which track should be playing and how loud, and drives
//! a host-provided [`AudioBackend`] that does the actual playback.

use std::sync::{Mutex, PoisonError};

use crate::options::{self, GameOptions};

const MUSIC_VOLUME: f32 = 0.6;
const SOUND_VOLUME: f32 = 0.4;

/// Looping music tracks.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Music {
    /// Menu theme
    Menu,
    /// In-game theme
    InGame,
}

impl Music {
    /// Asset path for this track.
    pub fn asset_path(self) -> &'static str {
        match self {
            Music::Menu => "assets/BlueEther.mp3",
            Music::InGame => "assets/ElectricSweater.mp3",
        }
    }
}

/// One-shot sound cues.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Sound {
    /// Ping when a player's turn begins
    YourTurn,
}

impl Sound {
    /// Asset path for this cue.
    pub fn asset_path(self) -> &'static str {
        match self {
            Sound::YourTurn => "assets/TurnPing.wav",
        }
    }
}

/// Playback operations a host must provide.
pub trait AudioBackend {
    /// Start a music track, looping.
    fn play_looping(&self, music: Music);

    /// Pause a music track.
    fn pause(&self, music: Music);

    /// Fire a one-shot sound.
    fn play_once(&self, sound: Sound);

    /// Ramp the music channel gain.
    fn set_music_gain(&self, gain: f32);

    /// Ramp the sound channel gain.
    fn set_sound_gain(&self, gain: f32);

    /// Resume audio if the host suspended it. Returns whether playback
    /// was actually suspended.
    fn resume_suspended(&self) -> bool {
        false
    }
}

fn calc_gain(global_scale: f32, options_level: u8) -> f32 {
    global_scale * f32::from(options_level) / 100.0
}

/// Tracks current music and volume, driving an [`AudioBackend`].
pub struct SoundEngine<B> {
    backend: B,
    current_music: Mutex<Option<Music>>,
}

impl<B: AudioBackend> SoundEngine<B> {
    /// Create an engine, setting the channel gains from the current options.
    pub fn new(backend: B) -> SoundEngine<B> {
        let options = options::HANDLE.fetch();
        backend.set_music_gain(calc_gain(MUSIC_VOLUME, options.music_level));
        backend.set_sound_gain(calc_gain(SOUND_VOLUME, options.sound_level));
        SoundEngine {
            backend,
            current_music: Mutex::new(None),
        }
    }

    /// The backend this engine drives.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Resume playback after a host-side suspension, restarting the
    /// remembered track.
    pub fn unpause(&self) {
        if self.backend.resume_suspended() {
            let music = self
                .current_music
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            if let Some(music) = music {
                self.play_music(music);
            }
        }
    }

    /// Switch to a music track. A request for the already-playing track
    /// is a no-op; otherwise the previous track is paused first.
    pub fn play_music(&self, music: Music) {
        let mut current_music = self
            .current_music
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if *current_music == Some(music) {
            return;
        }
        if let Some(old_music) = *current_music {
            self.backend.pause(old_music);
        }
        self.backend.play_looping(music);
        *current_music = Some(music);
    }

    /// Fire a one-shot sound cue.
    pub fn play_sound(&self, snd: Sound) {
        self.backend.play_once(snd);
    }

    /// The track currently playing, if any.
    pub fn current_music(&self) -> Option<Music> {
        *self
            .current_music
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Re-read the process-wide options and ramp both channel gains.
    pub fn fetch_volume(&self) {
        self.poke_options(&options::HANDLE.fetch());
    }

    /// Ramp both channel gains from the given options.
    pub fn poke_options(&self, new_options: &GameOptions) {
        self.backend
            .set_music_gain(calc_gain(MUSIC_VOLUME, new_options.music_level));
        self.backend
            .set_sound_gain(calc_gain(SOUND_VOLUME, new_options.sound_level));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_gain_scales_linearly() {
        assert_eq!(calc_gain(0.6, 100), 0.6);
        assert_eq!(calc_gain(0.4, 0), 0.0);
        assert!((calc_gain(0.6, 50) - 0.3).abs() < 1e-6);
    }
}
