use crate::coords::Vec2;
use crate::render::LineRenderer;

/// The two diagonals of an X marker centred on `center`.
///
/// Bottom-left to top-right first, then bottom-right to top-left.
pub fn cross_segments(center: Vec2, half_length: f32) -> [(Vec2, Vec2); 2] {
    let Vec2 { x, y } = center;
    let l = half_length;
    [
        (Vec2::new(x - l, y - l), Vec2::new(x + l, y + l)),
        (Vec2::new(x + l, y - l), Vec2::new(x - l, y + l)),
    ]
}

/// Queues an X marker on `lines`.
pub fn draw_cross(lines: &mut LineRenderer, center: Vec2, half_length: f32) {
    for (a, b) in cross_segments(center, half_length) {
        lines.push_line(a, b);
    }
}
