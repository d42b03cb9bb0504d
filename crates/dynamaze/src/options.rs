//! Persisted game options

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::error::OptionsError;

/// User-tunable game options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// Music volume, 0-100
    pub music_level: u8,
    /// Sound effect volume, 0-100
    pub sound_level: u8,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            music_level: 100,
            sound_level: 100,
        }
    }
}

/// Process-wide options cell.
///
/// Reads take a snapshot; writers replace the whole value. A corrupt or
/// missing options file loads as the defaults rather than failing.
pub struct OptionsHandle {
    inner: RwLock<GameOptions>,
}

impl OptionsHandle {
    /// Create a handle holding the default options.
    pub const fn new() -> OptionsHandle {
        OptionsHandle {
            inner: RwLock::new(GameOptions {
                music_level: 100,
                sound_level: 100,
            }),
        }
    }

    /// Snapshot the current options.
    pub fn fetch(&self) -> GameOptions {
        *self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the current options.
    pub fn poke(&self, new_options: GameOptions) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = new_options;
    }

    /// Load options from a JSON file.
    ///
    /// A missing or unparsable file resets to the defaults.
    pub fn load(&self, path: &Path) -> Result<(), OptionsError> {
        let options = match fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text).unwrap_or_default(),
            Err(err) if err.kind() == ErrorKind::NotFound => GameOptions::default(),
            Err(err) => return Err(err.into()),
        };
        self.poke(options);
        Ok(())
    }

    /// Save the current options to a JSON file.
    pub fn save(&self, path: &Path) -> Result<(), OptionsError> {
        let text = serde_json::to_string_pretty(&self.fetch())?;
        fs::write(path, text)?;
        Ok(())
    }
}

impl Default for OptionsHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide options handle.
pub static HANDLE: OptionsHandle = OptionsHandle::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let handle = OptionsHandle::new();
        assert_eq!(handle.fetch(), GameOptions::default());
    }

    #[test]
    fn test_poke_then_fetch() {
        let handle = OptionsHandle::new();
        handle.poke(GameOptions {
            music_level: 30,
            sound_level: 70,
        });
        assert_eq!(handle.fetch().music_level, 30);
        assert_eq!(handle.fetch().sound_level, 70);
    }
}
