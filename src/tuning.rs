/// Gameplay tuning for one round.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTuning {
    /// Size of the falling-target pool; constant for the whole round.
    pub target_count: usize,

    /// Inclusive fall-speed range in pixels per tick, rolled once per target.
    pub fall_speed_min: i32,
    pub fall_speed_max: i32,

    /// Respawn x lies in `[margin, width - margin]`.
    pub spawn_margin_x: i32,

    /// Respawn y lies in `[spawn_y_min, spawn_y_max]`, above the frame.
    pub spawn_y_min: i32,
    pub spawn_y_max: i32,

    /// Projectile speed in pixels per tick.
    pub projectile_speed: f32,

    /// Minimum interval between accepted shots on one hand slot.
    pub fire_cooldown: Duration,

    /// Half-width of the square hit box around a target centre.
    pub hit_half_extent: i32,

    pub round_duration: Duration,

    /// A round is won only with a score strictly above this.
    pub win_threshold: u32,

    /// How long the final frame stays on screen after the outcome.
    pub display_hold: Duration,
}

impl Default for RoundTuning {
    fn default() -> Self {
        Self {
            target_count: 5,
            fall_speed_min: 7,
            fall_speed_max: 10,
            spawn_margin_x: 50,
            spawn_y_min: -500,
            spawn_y_max: -50,
            projectile_speed: 20.0,
            fire_cooldown: Duration::from_millis(200),
            hit_half_extent: 20,
            round_duration: Duration::from_secs(60),
            win_threshold: 40,
            display_hold: Duration::from_secs(2),
        }
    }
}
