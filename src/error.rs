//! Top-level error type for the arena binary.

use std::fmt;

/// Errors that can stop the arena from starting or running
#[derive(Debug)]
pub enum GameError {
    /// SDL2 reported a failure (init, window, canvas or draw call)
    Sdl(String),

    /// Reading the config file failed
    Io(std::io::Error),

    /// Config file exists but is not valid JSON for `ArenaConfig`
    Config(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::Sdl(msg) => write!(f, "SDL error: {}", msg),
            GameError::Io(e) => write!(f, "IO error: {}", e),
            GameError::Config(e) => write!(f, "Invalid arena config: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Sdl(_) => None,
            GameError::Io(e) => Some(e),
            GameError::Config(e) => Some(e),
        }
    }
}

impl From<String> for GameError {
    fn from(msg: String) -> Self {
        GameError::Sdl(msg)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Io(err)
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::Config(err)
    }
}
