use std::time::Duration;

use gesture_shooter::compute::*;
use gesture_shooter::entities::*;
use gesture_shooter::geometry::*;
use gesture_shooter::tuning::RoundTuning;

use glam::{IVec2, Vec2};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn make_state() -> GameState {
    let tuning = RoundTuning::default();
    GameState {
        targets: Vec::new(),
        projectiles: Default::default(),
        hit_markers: Vec::new(),
        score: 0,
        outcome: Outcome::Running,
        elapsed: Duration::ZERO,
        remaining: tuning.round_duration,
        frame: 0,
        width: 640,
        height: 480,
        tuning,
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn target_at(x: i32, y: i32) -> Target {
    Target {
        pos: IVec2::new(x, y),
        fall_speed: 8,
        sprite: TargetSprite::Red,
    }
}

/// Active projectile in `slot` that lands on `landing` after one tick.
fn shot_landing_at(slot: usize, landing: IVec2) -> (usize, Projectile) {
    (
        slot,
        Projectile {
            active: true,
            pos: landing - IVec2::new(20, 0),
            direction: Vec2::X,
            last_fired: Some(Duration::ZERO),
        },
    )
}

fn with_shot(mut state: GameState, shot: (usize, Projectile)) -> GameState {
    state.projectiles[shot.0] = shot.1;
    state
}

fn assert_in_spawn_bounds(t: &Target, width: i32) {
    assert!((50..=width - 50).contains(&t.pos.x), "x out of bounds: {:?}", t.pos);
    assert!((-500..=-50).contains(&t.pos.y), "y out of bounds: {:?}", t.pos);
}

// ── geometry ──────────────────────────────────────────────────────────────────

#[test]
fn aim_direction_is_unit_length() {
    let d = aim_direction(IVec2::new(10, 10), IVec2::new(13, 14)).unwrap();
    assert!((d.length() - 1.0).abs() < 1e-6);
    assert!((d.x - 0.6).abs() < 1e-6);
    assert!((d.y - 0.8).abs() < 1e-6);
}

#[test]
fn aim_direction_degenerate_is_none() {
    assert_eq!(aim_direction(IVec2::new(5, 5), IVec2::new(5, 5)), None);
}

#[test]
fn distance_between_points() {
    assert_eq!(distance(IVec2::new(0, 0), IVec2::new(3, 4)), 5.0);
}

#[test]
fn advance_rounds_each_axis() {
    // 20 * (0.6, 0.8) = (12, 16); 20 * (0.71, 0.71) = (14.2, 14.2) → 14
    assert_eq!(advance(IVec2::ZERO, Vec2::new(0.6, 0.8), 20.0), IVec2::new(12, 16));
    assert_eq!(advance(IVec2::ZERO, Vec2::new(0.71, 0.71), 20.0), IVec2::new(14, 14));
    assert_eq!(advance(IVec2::ZERO, Vec2::new(-0.6, 0.8), 20.0), IVec2::new(-12, 16));
}

#[test]
fn within_box_is_strict() {
    let c = IVec2::new(100, 100);
    assert!(within_box(IVec2::new(119, 119), c, 20));
    assert!(within_box(IVec2::new(81, 81), c, 20));
    assert!(!within_box(IVec2::new(120, 100), c, 20));
    assert!(!within_box(IVec2::new(100, 80), c, 20));
}

#[test]
fn inside_frame_is_inclusive() {
    assert!(inside_frame(IVec2::new(0, 0), 640, 480));
    assert!(inside_frame(IVec2::new(640, 480), 640, 480));
    assert!(!inside_frame(IVec2::new(641, 10), 640, 480));
    assert!(!inside_frame(IVec2::new(10, -1), 640, 480));
}

// ── init_state ────────────────────────────────────────────────────────────────

#[test]
fn init_state_fills_target_pool() {
    let s = init_state(RoundTuning::default(), 640, 480, &mut seeded_rng());
    assert_eq!(s.targets.len(), 5);
    for t in &s.targets {
        assert!((7..=10).contains(&t.fall_speed));
        assert_in_spawn_bounds(t, 640);
    }
}

#[test]
fn init_state_starts_idle() {
    let s = init_state(RoundTuning::default(), 640, 480, &mut seeded_rng());
    assert_eq!(s.score, 0);
    assert_eq!(s.outcome, Outcome::Running);
    assert_eq!(s.remaining, Duration::from_secs(60));
    assert_eq!(s.frame, 0);
    assert!(s.projectiles.iter().all(|p| !p.active && p.last_fired.is_none()));
    assert!(s.hit_markers.is_empty());
}

// ── advance_targets ───────────────────────────────────────────────────────────

#[test]
fn targets_fall_by_their_speed() {
    let mut s = make_state();
    s.targets.push(target_at(100, 100));
    let s2 = advance_targets(&s, &mut seeded_rng());
    assert_eq!(s2.targets[0].pos, IVec2::new(100, 108));
}

#[test]
fn target_at_bottom_edge_does_not_respawn() {
    let mut s = make_state();
    s.targets.push(target_at(100, 472)); // lands exactly on 480
    let s2 = advance_targets(&s, &mut seeded_rng());
    assert_eq!(s2.targets[0].pos, IVec2::new(100, 480));
}

#[test]
fn target_below_frame_respawns_above() {
    let mut s = make_state();
    s.targets.push(target_at(100, 475));
    let s2 = advance_targets(&s, &mut seeded_rng());
    assert_eq!(s2.targets.len(), 1);
    assert_in_spawn_bounds(&s2.targets[0], 640);
    assert_eq!(s2.targets[0].fall_speed, 8);
}

#[test]
fn respawn_stays_in_bounds() {
    let mut rng = seeded_rng();
    let tuning = RoundTuning::default();
    let t = target_at(0, 600);
    for _ in 0..1000 {
        let r = respawn_target(&t, 640, &tuning, &mut rng);
        assert_in_spawn_bounds(&r, 640);
    }
}

#[test]
fn respawn_on_narrow_frame_does_not_panic() {
    let r = respawn_target(&target_at(0, 0), 60, &RoundTuning::default(), &mut seeded_rng());
    assert_eq!(r.pos.x, 50);
}

#[test]
fn pool_size_is_constant_over_many_ticks() {
    let mut rng = seeded_rng();
    let mut s = init_state(RoundTuning::default(), 640, 480, &mut rng);
    for _ in 0..500 {
        s = advance_targets(&s, &mut rng);
        assert_eq!(s.targets.len(), 5);
        assert!(s.targets.iter().all(|t| t.pos.y <= 480));
    }
}

// ── advance_projectiles ───────────────────────────────────────────────────────

#[test]
fn projectile_moves_by_speed_along_direction() {
    let mut s = make_state();
    s.projectiles[0] = Projectile {
        active: true,
        pos: IVec2::new(100, 100),
        direction: Vec2::new(0.6, 0.8),
        last_fired: Some(Duration::ZERO),
    };
    let s2 = advance_projectiles(&s, &mut seeded_rng());
    assert!(s2.projectiles[0].active);
    assert_eq!(s2.projectiles[0].pos, IVec2::new(112, 116));
}

#[test]
fn projectile_leaving_frame_deactivates_within_one_tick() {
    let mut s = make_state();
    s.projectiles[1] = Projectile {
        active: true,
        pos: IVec2::new(640 - 5, 240),
        direction: Vec2::X,
        last_fired: Some(Duration::ZERO),
    };
    let s2 = advance_projectiles(&s, &mut seeded_rng());
    assert!(!s2.projectiles[1].active);
    assert_eq!(s2.score, 0);
}

#[test]
fn inactive_projectile_is_left_alone() {
    let mut s = make_state();
    s.projectiles[0].pos = IVec2::new(10, 10);
    let s2 = advance_projectiles(&s, &mut seeded_rng());
    assert_eq!(s2.projectiles[0], s.projectiles[0]);
}

#[test]
fn hit_inside_box_corner_scores() {
    for (dx, dy) in [(19, 19), (-19, -19), (19, -19), (-19, 19)] {
        let mut s = make_state();
        s.targets.push(target_at(300, 200));
        let s = with_shot(s, shot_landing_at(0, IVec2::new(300 + dx, 200 + dy)));
        let s2 = advance_projectiles(&s, &mut seeded_rng());
        assert_eq!(s2.score, 1, "offset ({dx}, {dy}) should hit");
        assert!(!s2.projectiles[0].active);
        assert_in_spawn_bounds(&s2.targets[0], 640);
    }
}

#[test]
fn hit_box_boundary_misses() {
    for (dx, dy) in [(20, 0), (-20, 0), (0, 20), (0, -20)] {
        let mut s = make_state();
        s.targets.push(target_at(300, 200));
        let s = with_shot(s, shot_landing_at(0, IVec2::new(300 + dx, 200 + dy)));
        let s2 = advance_projectiles(&s, &mut seeded_rng());
        assert_eq!(s2.score, 0, "offset ({dx}, {dy}) should miss");
        assert!(s2.projectiles[0].active);
        assert_eq!(s2.targets[0].pos, IVec2::new(300, 200));
    }
}

#[test]
fn first_matching_target_in_pool_order_wins() {
    let mut s = make_state();
    s.targets.push(target_at(300, 200));
    s.targets.push(target_at(305, 205));
    let s = with_shot(s, shot_landing_at(0, IVec2::new(302, 202)));
    let s2 = advance_projectiles(&s, &mut seeded_rng());
    assert_eq!(s2.score, 1);
    assert_ne!(s2.targets[0].pos, IVec2::new(300, 200));
    assert_eq!(s2.targets[1].pos, IVec2::new(305, 205));
    assert_eq!(s2.hit_markers, vec![IVec2::new(300, 200)]);
}

#[test]
fn two_slots_hit_two_targets_in_one_tick() {
    let mut s = make_state();
    s.targets.push(target_at(100, 100));
    s.targets.push(target_at(400, 300));
    let s = with_shot(s, shot_landing_at(0, IVec2::new(100, 100)));
    let s = with_shot(s, shot_landing_at(1, IVec2::new(400, 300)));
    let s2 = advance_projectiles(&s, &mut seeded_rng());
    assert_eq!(s2.score, 2);
    assert!(s2.projectiles.iter().all(|p| !p.active));
    assert_eq!(s2.hit_markers.len(), 2);
}

#[test]
fn projectile_leaving_frame_cannot_score() {
    let mut s = make_state();
    // Target hangs over the right edge; the shot lands past it, outside the frame.
    s.targets.push(target_at(645, 240));
    s.projectiles[0] = Projectile {
        active: true,
        pos: IVec2::new(630, 240),
        direction: Vec2::X,
        last_fired: Some(Duration::ZERO),
    };
    let s2 = advance_projectiles(&s, &mut seeded_rng());
    assert_eq!(s2.score, 0);
    assert!(!s2.projectiles[0].active);
}

#[test]
fn hit_markers_reset_each_tick() {
    let mut s = make_state();
    s.hit_markers.push(IVec2::new(1, 1));
    let s2 = advance_projectiles(&s, &mut seeded_rng());
    assert!(s2.hit_markers.is_empty());
}

#[test]
fn advance_does_not_mutate_original() {
    let mut s = make_state();
    s.targets.push(target_at(300, 200));
    let s = with_shot(s, shot_landing_at(0, IVec2::new(300, 200)));
    let _ = advance_targets(&s, &mut seeded_rng());
    let _ = advance_projectiles(&s, &mut seeded_rng());
    assert_eq!(s.score, 0);
    assert_eq!(s.targets[0].pos, IVec2::new(300, 200));
    assert!(s.projectiles[0].active);
}
