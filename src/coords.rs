//! Walk-space to pixel-space translation.

use crate::walk::Point;
use crate::WalkConfig;

/// Scales a walk point by `step_length` and moves the origin to the centre
/// of a `width` x `height` surface.
///
/// Only axes 0 and 1 are used; a missing axis counts as 0. The result may lie
/// outside the surface, clipping is left to the canvas.
pub fn translate_coords(p: &Point, step_length: u32, width: u32, height: u32) -> Point {
    let scale = i64::from(step_length);
    let x = p.coord(0).unwrap_or(0) * scale + i64::from(width / 2);
    let y = p.coord(1).unwrap_or(0) * scale + i64::from(height / 2);
    Point::new(vec![x, y])
}

/// Holds the surface geometry so callers map points without repeating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateMapper {
    pub step_length: u32,
    pub width: u32,
    pub height: u32,
}

impl CoordinateMapper {
    pub fn new(step_length: u32, width: u32, height: u32) -> Self {
        Self {
            step_length,
            width,
            height,
        }
    }

    pub fn from_config(config: &WalkConfig) -> Self {
        Self::new(
            config.step_length,
            config.viewport.width,
            config.viewport.height,
        )
    }

    pub fn map(&self, p: &Point) -> Point {
        translate_coords(p, self.step_length, self.width, self.height)
    }
}
