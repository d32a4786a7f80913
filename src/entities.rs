/// All game entity types — pure data, no logic.

use std::time::Duration;

use glam::{IVec2, Vec2};

use crate::tuning::RoundTuning;

/// Number of hand slots; one in-flight projectile per slot.
pub const MAX_HANDS: usize = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetSprite {
    Blue,
    Red,
    Green,
}

impl TargetSprite {
    pub const ALL: [TargetSprite; 3] = [TargetSprite::Blue, TargetSprite::Red, TargetSprite::Green];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Running,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        self != Outcome::Running
    }
}

/// Which side of the hand faces the camera, judged from wrist vs fingertip height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Front,
    Back,
}

impl Orientation {
    pub fn label(self) -> &'static str {
        match self {
            Orientation::Front => "Front",
            Orientation::Back => "Back",
        }
    }
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// One detected hand in frame-pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandObservation {
    pub wrist: IVec2,
    pub index_tip: IVec2,
}

/// Everything the core reads from one external frame.
///
/// Hands are in detection order; index 0/1 is the slot, not a tracked identity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub hands: Vec<HandObservation>,
}

// ── Targets & projectiles ─────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Target {
    pub pos: IVec2,
    /// Pixels per tick, fixed until the next respawn.
    pub fall_speed: i32,
    pub sprite: TargetSprite,
}

/// A hand slot's projectile. Inactive slots keep their last values.
#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub active: bool,
    pub pos: IVec2,
    pub direction: Vec2,
    /// Round time of the last accepted shot; `None` until the slot first fires.
    pub last_fired: Option<Duration>,
}

impl Default for Projectile {
    fn default() -> Self {
        Self {
            active: false,
            pos: IVec2::ZERO,
            direction: Vec2::ZERO,
            last_fired: None,
        }
    }
}

// ── Master game state ─────────────────────────────────────────────────────────

/// The entire state of one round.  Cloneable so pure update functions can
/// return a new copy without mutating the original.
#[derive(Clone, Debug)]
pub struct GameState {
    pub targets: Vec<Target>,
    pub projectiles: [Projectile; MAX_HANDS],
    /// Where targets were struck during the latest tick.
    pub hit_markers: Vec<IVec2>,
    pub score: u32,
    pub outcome: Outcome,
    /// Time since round start as of the latest evaluation.
    pub elapsed: Duration,
    pub remaining: Duration,
    pub frame: u64,
    pub width: i32,
    pub height: i32,
    pub tuning: RoundTuning,
}
