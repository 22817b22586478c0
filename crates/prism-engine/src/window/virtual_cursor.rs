/// Distance from the anchor, in pixels, past which the position is re-based.
///
/// Well inside the range where `f32` still resolves one-pixel steps.
const REBASE_LIMIT: f64 = 1.0e6;

/// Pointer position synthesized from raw mouse motion while the cursor is
/// grabbed.
///
/// Accumulates in `f64` and jumps back to its anchor once it drifts too far,
/// so long sessions of mouse-look never lose precision.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub(crate) struct VirtualCursor {
    anchor: (f64, f64),
    pos: (f64, f64),
}

/// Result of feeding one raw motion delta.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct CursorStep {
    pub x: f32,
    pub y: f32,
    /// The position jumped back to the anchor; consumers must re-seed.
    pub rebased: bool,
}

impl VirtualCursor {
    /// Starts from the real pointer position at grab time.
    pub(crate) fn place(&mut self, x: f32, y: f32) {
        self.anchor = (x as f64, y as f64);
        self.pos = self.anchor;
    }

    pub(crate) fn advance(&mut self, dx: f64, dy: f64) -> CursorStep {
        self.pos.0 += dx;
        self.pos.1 += dy;

        let drift_x = (self.pos.0 - self.anchor.0).abs();
        let drift_y = (self.pos.1 - self.anchor.1).abs();
        // The delta that crosses the limit is dropped; the re-seed swallows it anyway.
        let rebased = drift_x > REBASE_LIMIT || drift_y > REBASE_LIMIT;
        if rebased {
            self.pos = self.anchor;
        }

        CursorStep {
            x: self.pos.0 as f32,
            y: self.pos.1 as f32,
            rebased,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::CursorTracker;

    #[test]
    fn sub_pixel_motion_accumulates() {
        let mut cursor = VirtualCursor::default();
        cursor.place(400.0, 300.0);
        for _ in 0..3 {
            cursor.advance(0.25, -0.5);
        }
        let step = cursor.advance(0.25, -0.5);
        assert_eq!((step.x, step.y), (401.0, 298.0));
        assert!(!step.rebased);
    }

    #[test]
    fn one_pixel_steps_still_register_near_the_limit() {
        let mut cursor = VirtualCursor::default();
        let mut tracker = CursorTracker::new();

        let step = cursor.advance(REBASE_LIMIT - 1.0, 0.0);
        assert!(!step.rebased);
        assert_eq!(tracker.offset(step.x, step.y), None);

        let step = cursor.advance(1.0, 0.0);
        assert!(!step.rebased);
        assert_eq!(tracker.offset(step.x, step.y), Some((1.0, 0.0)));
    }

    #[test]
    fn drifting_past_the_limit_returns_to_the_anchor() {
        let mut cursor = VirtualCursor::default();
        cursor.place(10.0, 20.0);

        cursor.advance(0.0, -REBASE_LIMIT);
        let step = cursor.advance(0.0, -1.0);
        assert!(step.rebased);
        assert_eq!((step.x, step.y), (10.0, 20.0));

        // Motion continues from the anchor afterwards.
        let step = cursor.advance(1.0, 1.0);
        assert!(!step.rebased);
        assert_eq!((step.x, step.y), (11.0, 21.0));
    }
}
