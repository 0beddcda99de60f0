//! Mouse-driven projection of the cube points onto the screen.
//!
//! The cursor's offset from the window centre is turned into two angles: a
//! spin about the vertical axis (horizontal offset) and a tilt (vertical
//! offset). Each model point is expressed in cylindrical form around the
//! vertical axis, spun and tilted, magnified to pixels, and finally mapped to
//! normalized device coordinates. No state survives between frames.

use wirecube_engine::coords::{Vec2, Viewport};
use wirecube_engine::input::PointerState;
use wirecube_engine::render::{draw_cross, LineRenderer};

use crate::config::ProjectionConfig;
use crate::cube::{ModelPoint, CUBE_POINTS};

/// Spin (`x`) and tilt (`y`) in radians derived from the cursor.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ViewAngle {
    pub x: f32,
    pub y: f32,
}

impl ViewAngle {
    /// `sensitivity` pixels of cursor offset from the window centre make one
    /// radian.
    pub fn from_pointer(pointer: &PointerState, sensitivity: f32) -> Self {
        let offset = pointer.offset_from_center();
        Self {
            x: offset.x / sensitivity,
            y: offset.y / sensitivity,
        }
    }
}

/// Projects one model point to normalized device coordinates.
///
/// `window` must be non-empty; a zero dimension divides by zero.
pub fn project_point(point: ModelPoint, angle: ViewAngle, window: Viewport, scale: f32) -> Vec2 {
    let ModelPoint { x, y, z } = point;

    // atan(0/0) is NaN; a point on the vertical axis has no bearing.
    let bearing = if x == 0.0 && z == 0.0 { 0.0 } else { (z / x).atan() };
    let radius = (x * x + z * z).sqrt();

    // atan only covers half the circle, so points behind the vertical axis
    // (x < 0) are folded through the opposite direction.
    let (x_t, y_t) = if x < 0.0 {
        let a = angle.x - bearing;
        (
            -radius * scale * a.cos(),
            -radius * scale * a.sin() * angle.y.sin() + y * scale * angle.y.cos(),
        )
    } else {
        let a = angle.x + bearing;
        (
            radius * scale * a.cos(),
            radius * scale * a.sin() * angle.y.sin() + y * scale * angle.y.cos(),
        )
    };

    // Window y grows downward.
    let center = window.center();
    window.to_ndc(Vec2::new(center.x + x_t, center.y - y_t))
}

/// Projects a fixed set of model points and marks each with a cross.
#[derive(Debug, Clone)]
pub struct CubeProjector {
    points: Vec<ModelPoint>,
    config: ProjectionConfig,
}

impl CubeProjector {
    /// Projector over [`CUBE_POINTS`].
    pub fn new(config: ProjectionConfig) -> Self {
        Self::with_points(CUBE_POINTS.to_vec(), config)
    }

    pub fn with_points(points: Vec<ModelPoint>, config: ProjectionConfig) -> Self {
        Self { points, config }
    }

    pub fn points(&self) -> &[ModelPoint] {
        &self.points
    }

    /// Projected positions for this frame's pointer, in point order.
    pub fn project<'a>(&'a self, pointer: &PointerState) -> impl Iterator<Item = Vec2> + 'a {
        let angle = ViewAngle::from_pointer(pointer, self.config.sensitivity);
        let window = pointer.window;
        let scale = self.config.scale;
        self.points
            .iter()
            .map(move |&p| project_point(p, angle, window, scale))
    }

    /// Queues one cross marker per projected point.
    pub fn draw(&self, pointer: &PointerState, lines: &mut LineRenderer) {
        let half = self.config.marker_half_length;
        for p in self.project(pointer) {
            draw_cross(lines, p, half);
        }
    }
}
