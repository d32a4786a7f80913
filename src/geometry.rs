/// 2D helpers over glam vectors.
///
/// Positions are integer frame pixels (`IVec2`, y grows downward); directions
/// are unit `Vec2`s.

use glam::{IVec2, Vec2};

/// Euclidean distance between two pixel positions.
pub fn distance(a: IVec2, b: IVec2) -> f32 {
    a.as_vec2().distance(b.as_vec2())
}

/// Unit vector pointing from `from` to `to`, or `None` when the points coincide.
pub fn aim_direction(from: IVec2, to: IVec2) -> Option<Vec2> {
    let length = distance(from, to);
    if length > 0.0 {
        Some((to - from).as_vec2() / length)
    } else {
        None
    }
}

/// Move `pos` by `speed` along `direction`, rounding each axis to whole pixels.
pub fn advance(pos: IVec2, direction: Vec2, speed: f32) -> IVec2 {
    pos + (direction * speed).round().as_ivec2()
}

/// Strict axis-aligned box test: `|p - center| < half_extent` on both axes.
pub fn within_box(p: IVec2, center: IVec2, half_extent: i32) -> bool {
    let d = (p - center).abs();
    d.x < half_extent && d.y < half_extent
}

/// Inclusive `[0, width] x [0, height]` frame test.
pub fn inside_frame(p: IVec2, width: i32, height: i32) -> bool {
    (0..=width).contains(&p.x) && (0..=height).contains(&p.y)
}
