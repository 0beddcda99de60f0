use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Monotonic frame counter.
    pub frame_index: u64,

    /// Frames per second over the last sampling window.
    ///
    /// `Some` only on the tick that closes a window.
    pub fps: Option<f32>,
}

/// Produces `FrameTime` snapshots and a periodic fps sample.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,

    sample_start: Instant,
    sample_frames: u32,
    sample_period: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            last: now,
            frame_index: 0,
            dt_min: Duration::from_micros(100),
            dt_max: Duration::from_millis(250),
            sample_start: now,
            sample_frames: 0,
            sample_period: Duration::from_secs(1),
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        self.sample_frames += 1;
        let elapsed = now.saturating_duration_since(self.sample_start);
        let fps = if elapsed >= self.sample_period {
            let fps = self.sample_frames as f32 / elapsed.as_secs_f32();
            self.sample_start = now;
            self.sample_frames = 0;
            Some(fps)
        } else {
            None
        };

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            frame_index: self.frame_index,
            fps,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_index_increments() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(16)).frame_index, 0);
        assert_eq!(clock.tick_at(t0 + Duration::from_millis(32)).frame_index, 1);
    }

    #[test]
    fn dt_is_clamped() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);
        let stalled = clock.tick_at(t0 + Duration::from_secs(5));
        assert!((stalled.dt - 0.25).abs() < 1e-6);

        let same = clock.tick_at(t0 + Duration::from_secs(5));
        assert!((same.dt - 0.0001).abs() < 1e-6);
    }

    #[test]
    fn fps_reported_once_per_period() {
        let t0 = Instant::now();
        let mut clock = FrameClock::starting_at(t0);

        let mut reported = Vec::new();
        for i in 1..=120u64 {
            let ft = clock.tick_at(t0 + Duration::from_millis(i * 10));
            if let Some(fps) = ft.fps {
                reported.push((i, fps));
            }
        }

        // 100 frames at 10ms close the first one-second window.
        assert_eq!(reported.len(), 1);
        assert_eq!(reported[0].0, 100);
        assert!((reported[0].1 - 100.0).abs() < 0.5);
    }
}
