/// Hand landmarks → aim and fire intents.
///
/// Slots are bound to detection order within the current frame: the first
/// hand reported drives slot 0, the second slot 1.  A hand that leaves and
/// comes back simply takes whichever slot its position in the list gives it;
/// there is no identity tracking across frames.

use std::time::Duration;

use glam::{IVec2, Vec2};
use tracing::debug;

use crate::entities::{GameState, HandObservation, Orientation, Projectile, MAX_HANDS};
use crate::geometry::aim_direction;

/// An accepted shot for one slot, ready to be applied to the state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FireEvent {
    pub slot: usize,
    pub origin: IVec2,
    pub direction: Vec2,
    pub at: Duration,
}

/// What the mapper read from one frame's hands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GestureFrame {
    pub fire_events: Vec<FireEvent>,
    /// Per-slot orientation of the hands present this frame.
    pub orientations: Vec<Orientation>,
}

/// Front when the wrist sits above the fingertip in image space.
pub fn orientation(hand: &HandObservation) -> Orientation {
    if hand.wrist.y < hand.index_tip.y {
        Orientation::Front
    } else {
        Orientation::Back
    }
}

fn slot_ready(projectile: &Projectile, now: Duration, cooldown: Duration) -> bool {
    if projectile.active {
        return false;
    }
    match projectile.last_fired {
        Some(last) => now.saturating_sub(last) >= cooldown,
        None => true,
    }
}

/// Read up to `MAX_HANDS` hands and decide which slots fire this tick.
///
/// A slot fires when it has no projectile in flight and its cooldown has
/// elapsed.  When wrist and fingertip coincide there is no aim, so the shot
/// is suppressed and the slot's cooldown is left untouched.
pub fn read_gestures(state: &GameState, hands: &[HandObservation], now: Duration) -> GestureFrame {
    let mut frame = GestureFrame::default();

    for (slot, hand) in hands.iter().take(MAX_HANDS).enumerate() {
        frame.orientations.push(orientation(hand));

        if !slot_ready(&state.projectiles[slot], now, state.tuning.fire_cooldown) {
            continue;
        }

        match aim_direction(hand.wrist, hand.index_tip) {
            Some(direction) => {
                debug!(slot, origin = ?hand.index_tip, ?direction, "fire");
                frame.fire_events.push(FireEvent {
                    slot,
                    origin: hand.index_tip,
                    direction,
                    at: now,
                });
            }
            None => debug!(slot, "wrist and fingertip coincide, shot suppressed"),
        }
    }

    frame
}

/// Launch a projectile for every fire event.  Events for a slot that is
/// already in flight are dropped.
pub fn apply_fire_events(state: &GameState, events: &[FireEvent]) -> GameState {
    let mut projectiles = state.projectiles.clone();

    for event in events {
        let Some(projectile) = projectiles.get_mut(event.slot) else {
            continue;
        };
        if projectile.active {
            continue;
        }
        *projectile = Projectile {
            active: true,
            pos: event.origin,
            direction: event.direction,
            last_fired: Some(event.at),
        };
    }

    GameState {
        projectiles,
        ..state.clone()
    }
}
