/// Pure game-logic functions for target and projectile motion.
///
/// Every public function takes an immutable reference to the current
/// `GameState` (and, where needed, an RNG handle) and returns a brand-new
/// `GameState`.  Side effects are limited to the injected RNG.

use std::time::Duration;

use glam::IVec2;
use rand::Rng;
use tracing::info;

use crate::entities::{GameState, Outcome, Target, TargetSprite};
use crate::geometry::{advance, inside_frame, within_box};
use crate::tuning::RoundTuning;

// ── Spawning ──────────────────────────────────────────────────────────────────

fn random_spawn_point(width: i32, tuning: &RoundTuning, rng: &mut impl Rng) -> IVec2 {
    let lo = tuning.spawn_margin_x;
    // Narrow frames collapse the range onto the margin instead of panicking.
    let hi = (width - tuning.spawn_margin_x).max(lo);
    IVec2::new(
        rng.gen_range(lo..=hi),
        rng.gen_range(tuning.spawn_y_min..=tuning.spawn_y_max),
    )
}

fn random_sprite(rng: &mut impl Rng) -> TargetSprite {
    TargetSprite::ALL[rng.gen_range(0..TargetSprite::ALL.len())]
}

/// Put a target back above the frame with a fresh position and sprite.
/// Fall speed is kept.
pub fn respawn_target(
    target: &Target,
    width: i32,
    tuning: &RoundTuning,
    rng: &mut impl Rng,
) -> Target {
    Target {
        pos: random_spawn_point(width, tuning, rng),
        sprite: random_sprite(rng),
        ..target.clone()
    }
}

// ── Constructors ─────────────────────────────────────────────────────────────

/// Build the initial round state: a full target pool above the frame and
/// two idle hand slots.
pub fn init_state(
    tuning: RoundTuning,
    width: i32,
    height: i32,
    rng: &mut impl Rng,
) -> GameState {
    let targets = (0..tuning.target_count)
        .map(|_| Target {
            pos: random_spawn_point(width, &tuning, rng),
            fall_speed: rng.gen_range(tuning.fall_speed_min..=tuning.fall_speed_max),
            sprite: random_sprite(rng),
        })
        .collect();

    GameState {
        targets,
        projectiles: Default::default(),
        hit_markers: Vec::new(),
        score: 0,
        outcome: Outcome::Running,
        elapsed: Duration::ZERO,
        remaining: tuning.round_duration,
        frame: 0,
        width,
        height,
        tuning,
    }
}

// ── Per-tick motion (nearly pure — RNG is injected) ─────────────────────────

/// Drop every target by its fall speed; targets below the frame respawn on top.
pub fn advance_targets(state: &GameState, rng: &mut impl Rng) -> GameState {
    let targets = state
        .targets
        .iter()
        .map(|t| {
            let fallen = Target {
                pos: t.pos + IVec2::new(0, t.fall_speed),
                ..t.clone()
            };
            if fallen.pos.y > state.height {
                respawn_target(&fallen, state.width, &state.tuning, rng)
            } else {
                fallen
            }
        })
        .collect();

    GameState {
        targets,
        ..state.clone()
    }
}

/// Move every active projectile, retire the ones leaving the frame, and
/// resolve hits.
///
/// A projectile is tested against targets in pool order and stops at the
/// first hit: one point, that target respawns, the slot goes idle.
pub fn advance_projectiles(state: &GameState, rng: &mut impl Rng) -> GameState {
    let mut targets = state.targets.clone();
    let mut projectiles = state.projectiles.clone();
    let mut hit_markers = Vec::new();
    let mut score = state.score;

    for (slot, projectile) in projectiles.iter_mut().enumerate() {
        if !projectile.active {
            continue;
        }

        let pos = advance(
            projectile.pos,
            projectile.direction,
            state.tuning.projectile_speed,
        );
        projectile.pos = pos;
        if !inside_frame(pos, state.width, state.height) {
            projectile.active = false;
            continue;
        }

        let struck = targets
            .iter()
            .position(|t| within_box(pos, t.pos, state.tuning.hit_half_extent));
        if let Some(index) = struck {
            score += 1;
            hit_markers.push(targets[index].pos);
            targets[index] = respawn_target(&targets[index], state.width, &state.tuning, rng);
            projectile.active = false;
            info!(slot, target = index, score, "target hit");
        }
    }

    GameState {
        targets,
        projectiles,
        hit_markers,
        score,
        ..state.clone()
    }
}
