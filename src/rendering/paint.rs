/// Paint styles and commands consumed by the canvas

use serde::{Deserialize, Serialize};

use crate::walk::Point;

/// RGBA colour, one byte per channel
pub type Rgba = [u8; 4];

/// Line style used for walk segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stroke {
    pub color: Rgba,
    /// Brush diameter in pixels
    pub width: u32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: [0x44, 0x44, 0x44, 0xff],
            width: 5,
        }
    }
}

impl Stroke {
    pub(crate) fn radius(&self) -> i64 {
        i64::from(self.width / 2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Segment between two pixel-space points
    Line { from: Point, to: Point, stroke: Stroke },
}
