use std::fmt;
use std::io;
use std::path::PathBuf;

// Failures that end a round or abort startup.
#[derive(Debug)]
pub enum GameError {
    Io(io::Error),
    /// The landmark feed ended before the round did.
    SourceExhausted,
    MalformedFrame { line: u64, reason: String },
    Asset { path: PathBuf, reason: String },
    Config(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "i/o error: {e}"),
            GameError::SourceExhausted => write!(f, "frame source exhausted"),
            GameError::MalformedFrame { line, reason } => {
                write!(f, "malformed landmark frame on line {line}: {reason}")
            }
            GameError::Asset { path, reason } => {
                write!(f, "could not load asset {}: {reason}", path.display())
            }
            GameError::Config(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GameError {
    fn from(e: io::Error) -> Self {
        GameError::Io(e)
    }
}
