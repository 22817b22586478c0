/// Converts absolute cursor positions into per-event look offsets.
///
/// The first sample after construction (or after [`CursorTracker::reset`])
/// only seeds the last known position, so entering the window never produces
/// a jump. The vertical offset is inverted: screen Y grows downward while
/// pitch grows upward.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CursorTracker {
    last: Option<(f32, f32)>,
}

impl CursorTracker {
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Records a cursor position and returns `(x_offset, y_offset)` relative
    /// to the previous sample, or `None` for the seeding sample.
    pub fn offset(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        self.last
            .replace((x, y))
            .map(|(last_x, last_y)| (x - last_x, last_y - y))
    }

    /// Forgets the last position; the next sample seeds again.
    ///
    /// Call when the pointer leaves the window or focus is lost.
    pub fn reset(&mut self) {
        self.last = None;
    }

    #[inline]
    pub fn is_seeded(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_only_seeds() {
        let mut t = CursorTracker::new();
        assert!(!t.is_seeded());
        assert_eq!(t.offset(400.0, 300.0), None);
        assert!(t.is_seeded());
    }

    #[test]
    fn offsets_invert_vertical_axis() {
        let mut t = CursorTracker::new();
        let _ = t.offset(400.0, 300.0);
        // Cursor moved right and up on screen.
        assert_eq!(t.offset(410.0, 290.0), Some((10.0, 10.0)));
        // Right and down.
        assert_eq!(t.offset(415.0, 295.0), Some((5.0, -5.0)));
    }

    #[test]
    fn reset_rearms_seeding() {
        let mut t = CursorTracker::new();
        let _ = t.offset(0.0, 0.0);
        let _ = t.offset(5.0, 5.0);
        t.reset();
        // Far away re-entry must not produce a jump.
        assert_eq!(t.offset(1000.0, -1000.0), None);
        assert_eq!(t.offset(1001.0, -1000.0), Some((1.0, 0.0)));
    }
}
