use super::Vec2;

/// Window size in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A zero-area or non-finite viewport cannot be mapped to NDC.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Maps a window position to normalized device coordinates.
    ///
    /// `[0, width] -> [-1, 1]` and `[0, height] -> [-1, 1]`, axis by axis.
    /// No Y flip happens here; callers that want +Y up flip before mapping.
    /// Undefined for an invalid viewport (division by zero).
    #[inline]
    pub fn to_ndc(self, p: Vec2) -> Vec2 {
        Vec2::new(p.x / self.width * 2.0 - 1.0, p.y / self.height * 2.0 - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn corners_map_to_ndc_extremes() {
        let vp = Viewport::new(640.0, 480.0);
        assert_eq!(vp.to_ndc(Vec2::new(0.0, 0.0)), Vec2::new(-1.0, -1.0));
        assert_eq!(vp.to_ndc(Vec2::new(640.0, 480.0)), Vec2::new(1.0, 1.0));
    }

    #[test]
    fn center_maps_to_origin() {
        let vp = Viewport::new(640.0, 480.0);
        let c = vp.to_ndc(vp.center());
        assert!(approx(c.x, 0.0) && approx(c.y, 0.0));
    }

    #[test]
    fn validity() {
        assert!(Viewport::new(1.0, 1.0).is_valid());
        assert!(!Viewport::new(0.0, 480.0).is_valid());
        assert!(!Viewport::new(640.0, 0.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 480.0).is_valid());
    }
}
