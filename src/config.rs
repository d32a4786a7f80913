use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::GameError;

// Runtime settings read from the environment (not gameplay tuning).

pub const INPUT_VAR: &str = "GESTURE_SHOOTER_INPUT";
pub const WIDTH_VAR: &str = "GESTURE_SHOOTER_WIDTH";
pub const HEIGHT_VAR: &str = "GESTURE_SHOOTER_HEIGHT";
pub const FPS_VAR: &str = "GESTURE_SHOOTER_FPS";
pub const SEED_VAR: &str = "GESTURE_SHOOTER_SEED";
pub const SPRITES_VAR: &str = "GESTURE_SHOOTER_SPRITES";
pub const GAME_BIN_VAR: &str = "GESTURE_SHOOTER_GAME_BIN";

const DEFAULT_WIDTH: i32 = 640;
const DEFAULT_HEIGHT: i32 = 480;
const DEFAULT_FPS: u32 = 30;
const MIN_WIDTH: i32 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Landmark feed; stdin when unset.
    pub input: Option<PathBuf>,
    /// Capture resolution the landmarks are scaled to.
    pub width: i32,
    pub height: i32,
    /// Frame pacing; 0 disables.
    pub fps: u32,
    pub seed: Option<u64>,
    pub sprites: Option<PathBuf>,
}

impl GameConfig {
    pub fn from_env() -> Result<Self, GameError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key → value lookup.  Unset keys take defaults;
    /// unparseable ones are rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, GameError> {
        let width = parse_or(&lookup, WIDTH_VAR, DEFAULT_WIDTH)?;
        let height = parse_or(&lookup, HEIGHT_VAR, DEFAULT_HEIGHT)?;
        if width < MIN_WIDTH {
            return Err(GameError::Config(format!(
                "{WIDTH_VAR} must be at least {MIN_WIDTH}, got {width}"
            )));
        }
        if height <= 0 {
            return Err(GameError::Config(format!(
                "{HEIGHT_VAR} must be positive, got {height}"
            )));
        }

        Ok(Self {
            input: lookup(INPUT_VAR).map(PathBuf::from),
            width,
            height,
            fps: parse_or(&lookup, FPS_VAR, DEFAULT_FPS)?,
            seed: lookup(SEED_VAR).map(|v| parse(SEED_VAR, &v)).transpose()?,
            sprites: lookup(SPRITES_VAR).map(PathBuf::from),
        })
    }

    pub fn frame_interval(&self) -> Option<Duration> {
        (self.fps > 0).then(|| Duration::from_secs(1) / self.fps)
    }
}

/// Launcher: path of the game executable.  Defaults to `gesture_shooter`
/// next to the running binary.
pub fn game_binary() -> PathBuf {
    if let Ok(path) = env::var(GAME_BIN_VAR) {
        return PathBuf::from(path);
    }
    let name = format!("gesture_shooter{}", env::consts::EXE_SUFFIX);
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&name)))
        .unwrap_or_else(|| PathBuf::from(name))
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, GameError> {
    value
        .trim()
        .parse()
        .map_err(|_| GameError::Config(format!("{key}: cannot parse {value:?}")))
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, GameError> {
    match lookup(key) {
        Some(value) => parse(key, &value),
        None => Ok(default),
    }
}
