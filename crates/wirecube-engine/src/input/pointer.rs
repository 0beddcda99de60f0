use crate::coords::{Vec2, Viewport};

/// Cursor position and window size for one frame, both in logical pixels.
///
/// Sampled fresh at the start of each frame; nothing carries over.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerState {
    pub cursor: Vec2,
    pub window: Viewport,
}

impl PointerState {
    #[inline]
    pub const fn new(cursor: Vec2, window: Viewport) -> Self {
        Self { cursor, window }
    }

    /// Cursor offset from the window centre, +Y down.
    #[inline]
    pub fn offset_from_center(&self) -> Vec2 {
        self.cursor - self.window.center()
    }
}

/// Last known cursor position for a window.
///
/// winit only reports the cursor through events, so the last position is kept
/// after the cursor leaves the window.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    pub fn moved(&mut self, pos: Vec2) {
        self.last = Some(pos);
    }

    /// Builds this frame's snapshot.
    ///
    /// Before any cursor event arrives the cursor is taken to be the window
    /// centre.
    pub fn sample(&self, window: Viewport) -> PointerState {
        PointerState::new(self.last.unwrap_or_else(|| window.center()), window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_cursor_defaults_to_center() {
        let t = PointerTracker::default();
        let s = t.sample(Viewport::new(640.0, 480.0));
        assert_eq!(s.cursor, Vec2::new(320.0, 240.0));
        assert_eq!(s.offset_from_center(), Vec2::zero());
    }

    #[test]
    fn last_move_wins() {
        let mut t = PointerTracker::default();
        t.moved(Vec2::new(1.0, 2.0));
        t.moved(Vec2::new(400.0, 100.0));
        let s = t.sample(Viewport::new(640.0, 480.0));
        assert_eq!(s.cursor, Vec2::new(400.0, 100.0));
        assert_eq!(s.offset_from_center(), Vec2::new(80.0, -140.0));
    }

    #[test]
    fn window_size_is_sampled_per_call() {
        let mut t = PointerTracker::default();
        t.moved(Vec2::new(10.0, 10.0));
        assert_eq!(t.sample(Viewport::new(640.0, 480.0)).window.width, 640.0);
        assert_eq!(t.sample(Viewport::new(1280.0, 480.0)).window.width, 1280.0);
    }
}
