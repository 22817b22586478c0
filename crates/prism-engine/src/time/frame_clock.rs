use std::time::{Duration, Instant};

/// Timing snapshot for one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick, clamped.
    pub dt: f32,

    /// Seconds since the clock was created (unclamped wall time).
    pub elapsed: f32,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}

/// Produces one `FrameTime` per presented frame.
///
/// Delta time is clamped: the lower bound avoids zero-dt frames from tight
/// loops, the upper bound keeps camera motion sane after a stall (debugger,
/// minimized window, window drag on some platforms).
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    pub const DEFAULT_DT_MIN: Duration = Duration::from_micros(100);
    pub const DEFAULT_DT_MAX: Duration = Duration::from_millis(250);

    pub fn new() -> Self {
        Self::with_clamps(Self::DEFAULT_DT_MIN, Self::DEFAULT_DT_MAX)
    }

    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        let now = Instant::now();
        Self {
            start: now,
            last: now,
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Moves the delta baseline to now, e.g. when the window is restored.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    pub(crate) fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = now
            .saturating_duration_since(self.last)
            .clamp(self.dt_min, self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            elapsed: now.saturating_duration_since(self.start).as_secs_f32(),
            frame_index: self.frame_index,
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
    fn dt_is_measured_between_ticks() {
        let mut clock = FrameClock::new();
        let t0 = clock.start;

        let _ = clock.tick_at(t0 + Duration::from_millis(10));
        let ft = clock.tick_at(t0 + Duration::from_millis(26));
        assert!((ft.dt - 0.016).abs() < 1e-6);
        assert!((ft.elapsed - 0.026).abs() < 1e-6);
    }

    #[test]
    fn long_stall_is_clamped() {
        let mut clock = FrameClock::new();
        let ft = clock.tick_at(clock.start + Duration::from_secs(5));
        assert_eq!(ft.dt, FrameClock::DEFAULT_DT_MAX.as_secs_f32());
        assert!((ft.elapsed - 5.0).abs() < 1e-6);
    }

    #[test]
    fn zero_interval_is_raised_to_minimum() {
        let mut clock = FrameClock::new();
        let t = clock.start;
        let ft = clock.tick_at(t);
        assert_eq!(ft.dt, FrameClock::DEFAULT_DT_MIN.as_secs_f32());
        assert!(ft.dt > 0.0);
    }

    #[test]
    fn frame_index_counts_ticks() {
        let mut clock = FrameClock::with_clamps(Duration::ZERO, Duration::from_secs(1));
        let t = clock.start;
        let indices: Vec<u64> = (1..=3)
            .map(|i| clock.tick_at(t + Duration::from_millis(i)).frame_index)
            .collect();
        assert_eq!(indices, [0, 1, 2]);
    }
}
