//! randwalk
//!
//! A two-dimensional discrete random walk rendered as a line drawing into a
//! raster image and served over HTTP as PNG.
//!
//! # Overview
//!
//! - [`walk::RandomWalk`] keeps the append-only walk history and its random stream
//! - [`coords::CoordinateMapper`] places walk-space points on the image, origin at the centre
//! - [`session::Session`] owns both plus a [`rendering::raster::Canvas`] and draws new steps incrementally
//! - `server` (feature `server`, default) exposes `GET /step?count=N`
//!
//! # Example
//!
//! ```
//! use randwalk::{session::Session, WalkConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = WalkConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//!
//! let mut session = Session::from_config(&config)?;
//! let frame = session.step_and_render(25)?;
//! assert_eq!(session.walk().len(), 26);
//! assert_eq!(&frame.png_data[0..4], b"\x89PNG");
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod coords;
pub mod rendering;
pub mod session;
pub mod walk;

#[cfg(feature = "server")]
pub mod server;

use rendering::paint::{Rgba, Stroke};

/// Configuration for a walk session and the server around it
///
/// Defaults reproduce the classic setup: an 850x850 surface, 20 pixels per
/// walk unit, a 5 pixel dark grey stroke on a transparent background.
///
/// # Examples
///
/// ```
/// let cfg = randwalk::WalkConfig::default();
/// assert_eq!(cfg.viewport.width, 850);
/// assert_eq!(cfg.step_length, 20);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkConfig {
    /// Address the HTTP server binds to
    pub bind: String,
    /// Output image dimensions
    pub viewport: Viewport,
    /// Pixels per walk unit
    pub step_length: u32,
    /// Number of axes the walk moves along
    pub dimensions: usize,
    /// Fixed seed for reproducible walks; time-seeded when unset
    pub seed: Option<u64>,
    /// Line style for walk segments
    pub stroke: Stroke,
    /// Initial fill of the surface
    pub background: Rgba,
    /// Upper bound on `count` for a single request
    pub max_steps_per_request: u64,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
            viewport: Viewport::default(),
            step_length: 20,
            dimensions: 2,
            seed: None,
            stroke: Stroke::default(),
            background: [0, 0, 0, 0],
            max_steps_per_request: 100_000,
        }
    }
}

impl WalkConfig {
    /// Read a JSON config file. Missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(Error::ConfigError(format!(
                "viewport must be non-empty, got {}x{}",
                self.viewport.width, self.viewport.height
            )));
        }
        let longest_side = self.viewport.width.max(self.viewport.height);
        if self.step_length == 0 || self.step_length > longest_side {
            return Err(Error::ConfigError(format!(
                "step_length must be in 1..={}, got {}",
                longest_side, self.step_length
            )));
        }
        if self.dimensions == 0 {
            return Err(Error::InvalidDimensions(self.dimensions));
        }
        if self.stroke.width == 0 || self.stroke.width > longest_side {
            return Err(Error::ConfigError(format!(
                "stroke width must be in 1..={}, got {}",
                longest_side, self.stroke.width
            )));
        }
        Ok(())
    }
}

/// Output surface dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 850,
            height: 850,
        }
    }
}
