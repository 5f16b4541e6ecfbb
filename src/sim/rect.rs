//! Axis-aligned rectangles and iterative penetration resolution

use glam::Vec2;

use crate::consts::MAX_NUDGE_ITERATIONS;

/// An axis-aligned rectangle in world pixels (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict overlap test: rectangles that only share an edge do not overlap
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }
}

/// Result of a nudge loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Nudge {
    /// Number of steps taken
    pub steps: u32,
    /// False if the iteration cap was hit while still overlapping
    pub cleared: bool,
}

/// Move `rect` by `step` until it no longer overlaps `obstacle`
///
/// Bounded by `MAX_NUDGE_ITERATIONS`. Returns immediately with zero steps
/// when there is no overlap to begin with.
pub fn nudge_out(rect: &mut Rect, obstacle: &Rect, step: Vec2) -> Nudge {
    let mut steps = 0;
    while rect.overlaps(obstacle) {
        if steps >= MAX_NUDGE_ITERATIONS {
            log::warn!(
                "Nudge cap reached after {} steps ({:?} vs {:?})",
                steps,
                rect,
                obstacle
            );
            return Nudge {
                steps,
                cleared: false,
            };
        }
        rect.translate(step);
        steps += 1;
    }
    Nudge {
        steps,
        cleared: true,
    }
}
