//! Sound engine tests with a recording backend

use std::sync::Mutex;

use pretty_assertions::assert_eq;

use dynamaze::{AudioBackend, GameOptions, Music, Sound, SoundEngine};

/// What the engine asked the backend to do.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    PlayLooping(Music),
    Pause(Music),
    PlayOnce(Sound),
    MusicGain(f32),
    SoundGain(f32),
}

#[derive(Default)]
struct Recorder {
    calls: Mutex<Vec<Call>>,
    suspended: Mutex<bool>,
}

impl Recorder {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn suspend(&self) {
        *self.suspended.lock().unwrap() = true;
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl AudioBackend for Recorder {
    fn play_looping(&self, music: Music) {
        self.record(Call::PlayLooping(music));
    }

    fn pause(&self, music: Music) {
        self.record(Call::Pause(music));
    }

    fn play_once(&self, sound: Sound) {
        self.record(Call::PlayOnce(sound));
    }

    fn set_music_gain(&self, gain: f32) {
        self.record(Call::MusicGain(gain));
    }

    fn set_sound_gain(&self, gain: f32) {
        self.record(Call::SoundGain(gain));
    }

    fn resume_suspended(&self) -> bool {
        let mut suspended = self.suspended.lock().unwrap();
        std::mem::take(&mut *suspended)
    }
}

#[test]
fn test_new_engine_sets_gains_from_options() {
    let engine = SoundEngine::new(Recorder::default());
    // default levels are 100, scaled by the channel constants
    assert_eq!(
        engine.backend().calls(),
        vec![Call::MusicGain(0.6), Call::SoundGain(0.4)]
    );
    assert_eq!(engine.current_music(), None);
}

#[test]
fn test_play_music_is_idempotent_per_track() {
    let engine = SoundEngine::new(Recorder::default());
    engine.play_music(Music::Menu);
    engine.play_music(Music::Menu);

    let plays: Vec<Call> = engine
        .backend()
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::PlayLooping(_)))
        .collect();
    assert_eq!(plays, vec![Call::PlayLooping(Music::Menu)]);
    assert_eq!(engine.current_music(), Some(Music::Menu));
}

#[test]
fn test_switching_tracks_pauses_the_old_one() {
    let engine = SoundEngine::new(Recorder::default());
    engine.play_music(Music::Menu);
    engine.play_music(Music::InGame);

    let calls = engine.backend().calls();
    let switch: Vec<&Call> = calls
        .iter()
        .filter(|call| !matches!(call, Call::MusicGain(_) | Call::SoundGain(_)))
        .collect();
    assert_eq!(
        switch,
        vec![
            &Call::PlayLooping(Music::Menu),
            &Call::Pause(Music::Menu),
            &Call::PlayLooping(Music::InGame),
        ]
    );
    assert_eq!(engine.current_music(), Some(Music::InGame));
}

#[test]
fn test_unpause_restarts_the_remembered_track() {
    let engine = SoundEngine::new(Recorder::default());
    engine.play_music(Music::InGame);
    engine.backend().suspend();
    engine.unpause();

    let plays: Vec<Call> = engine
        .backend()
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::PlayLooping(_)))
        .collect();
    // once for the original start, once for the resume
    assert_eq!(
        plays,
        vec![
            Call::PlayLooping(Music::InGame),
            Call::PlayLooping(Music::InGame),
        ]
    );
}

#[test]
fn test_unpause_without_suspension_does_nothing() {
    let engine = SoundEngine::new(Recorder::default());
    engine.play_music(Music::Menu);
    let before = engine.backend().calls();
    engine.unpause();
    assert_eq!(engine.backend().calls(), before);
}

#[test]
fn test_poke_options_ramps_both_channels() {
    let engine = SoundEngine::new(Recorder::default());
    engine.poke_options(&GameOptions {
        music_level: 50,
        sound_level: 0,
    });

    let calls = engine.backend().calls();
    assert!(calls.contains(&Call::MusicGain(0.6 * 50.0 / 100.0)));
    assert!(calls.contains(&Call::SoundGain(0.0)));
}

#[test]
fn test_play_sound_fires_the_cue() {
    let engine = SoundEngine::new(Recorder::default());
    engine.play_sound(Sound::YourTurn);
    assert!(engine
        .backend()
        .calls()
        .contains(&Call::PlayOnce(Sound::YourTurn)));
}

#[test]
fn test_asset_paths_are_stable() {
    assert_eq!(Music::Menu.asset_path(), "assets/BlueEther.mp3");
    assert_eq!(Music::InGame.asset_path(), "assets/ElectricSweater.mp3");
    assert_eq!(Sound::YourTurn.asset_path(), "assets/TurnPing.wav");
}
