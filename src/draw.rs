/// Draw requests handed to the renderer each tick.

use glam::IVec2;

use crate::entities::{GameState, HandObservation, Orientation, Outcome, TargetSprite};
use crate::gesture::GestureFrame;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Target(TargetSprite),
    Projectile,
    Hit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpritePlacement {
    /// Sprite centre in frame pixels.
    pub pos: IVec2,
    pub sprite: SpriteId,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandOverlay {
    pub wrist: IVec2,
    pub index_tip: IVec2,
    pub orientation: Orientation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Banner {
    Win,
    Lose,
}

impl Banner {
    pub fn text(self) -> &'static str {
        match self {
            Banner::Win => "YOU WIN",
            Banner::Lose => "YOU LOSE",
        }
    }
}

/// Everything visible in one frame plus the audio trigger.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawRequest {
    pub width: i32,
    pub height: i32,
    pub targets: Vec<SpritePlacement>,
    pub projectiles: Vec<SpritePlacement>,
    pub hits: Vec<SpritePlacement>,
    pub hands: Vec<HandOverlay>,
    pub score: u32,
    /// Whole seconds left, truncated.
    pub remaining_secs: u64,
    pub banner: Option<Banner>,
    /// Play the lose alert with this frame.
    pub play_alert: bool,
}

impl DrawRequest {
    pub fn from_state(state: &GameState, hands: &[HandObservation], gestures: &GestureFrame) -> Self {
        let targets = state
            .targets
            .iter()
            .map(|t| SpritePlacement {
                pos: t.pos,
                sprite: SpriteId::Target(t.sprite),
            })
            .collect();
        let projectiles = state
            .projectiles
            .iter()
            .filter(|p| p.active)
            .map(|p| SpritePlacement {
                pos: p.pos,
                sprite: SpriteId::Projectile,
            })
            .collect();
        let hits = state
            .hit_markers
            .iter()
            .map(|&pos| SpritePlacement {
                pos,
                sprite: SpriteId::Hit,
            })
            .collect();
        let hands = hands
            .iter()
            .zip(&gestures.orientations)
            .map(|(hand, &orientation)| HandOverlay {
                wrist: hand.wrist,
                index_tip: hand.index_tip,
                orientation,
            })
            .collect();
        let banner = match state.outcome {
            Outcome::Running => None,
            Outcome::Won => Some(Banner::Win),
            Outcome::Lost => Some(Banner::Lose),
        };

        DrawRequest {
            width: state.width,
            height: state.height,
            targets,
            projectiles,
            hits,
            hands,
            score: state.score,
            remaining_secs: state.remaining.as_secs(),
            banner,
            play_alert: state.outcome == Outcome::Lost,
        }
    }
}
