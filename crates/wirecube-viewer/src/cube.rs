/// A fixed point of the model, in model units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ModelPoint {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl ModelPoint {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// The eight corners of a 2×2×2 cube centred on the origin, followed by the
/// origin itself.
pub const CUBE_POINTS: [ModelPoint; 9] = [
    ModelPoint::new(-1.0, 1.0, 1.0),
    ModelPoint::new(1.0, 1.0, -1.0),
    ModelPoint::new(1.0, -1.0, -1.0),
    ModelPoint::new(-1.0, -1.0, 1.0),
    ModelPoint::new(1.0, 1.0, 1.0),
    ModelPoint::new(1.0, -1.0, 1.0),
    ModelPoint::new(-1.0, 1.0, -1.0),
    ModelPoint::new(-1.0, -1.0, -1.0),
    ModelPoint::new(0.0, 0.0, 0.0),
];
