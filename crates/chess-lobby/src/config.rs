//! Lobby configuration loaded from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// A room in the surrounding world, as `[x, y, z]` coordinates.
pub type Room = [i32; 3];

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Lobby settings.
///
/// ```toml
/// game_room = [0, 0, 0]
/// thinking_delay_ms = 1000
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LobbyConfig {
    /// The only room in which games may be started.
    #[serde(default)]
    pub game_room: Room,
    /// Pause before the computer's reply is played.
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,
}

fn default_thinking_delay_ms() -> u64 {
    1000
}

impl Default for LobbyConfig {
    fn default() -> Self {
        LobbyConfig {
            game_room: [0, 0, 0],
            thinking_delay_ms: default_thinking_delay_ms(),
        }
    }
}

impl LobbyConfig {
    /// Loads the configuration at `path`, or the defaults if there is no
    /// such file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] if the file exists but cannot be read,
    /// or [`ConfigError::Parse`] if it is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }
}
