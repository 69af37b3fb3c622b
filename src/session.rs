//! Walk session: owns one walk together with the surface it is drawn on.
//!
//! Each call to [`Session::advance`] draws only the segments for the new
//! steps, starting from the pen position left by the previous call. The
//! history is never replayed, so work per call is proportional to the number
//! of steps requested.

use log::debug;
use rand::rngs::StdRng;
use rand::RngCore;

use crate::coords::CoordinateMapper;
use crate::rendering::paint::{PaintCommand, Stroke};
use crate::rendering::raster::Canvas;
use crate::rendering::Screenshot;
use crate::walk::{Point, RandomWalk};
use crate::{Result, WalkConfig};

pub struct Session<R = StdRng> {
    walk: RandomWalk<R>,
    mapper: CoordinateMapper,
    canvas: Canvas,
    stroke: Stroke,
    pen: Point,
}

impl Session<StdRng> {
    /// Build a session from a validated config. Uses `config.seed` when set,
    /// otherwise a time-seeded stream.
    pub fn from_config(config: &WalkConfig) -> Result<Self> {
        config.validate()?;
        let walk = match config.seed {
            Some(seed) => RandomWalk::seeded(config.dimensions, seed)?,
            None => RandomWalk::new(config.dimensions)?,
        };
        Ok(Self::with_walk(config, walk))
    }
}

impl<R: RngCore> Session<R> {
    /// Wrap an existing walk; the pen starts at the walk's current position.
    pub fn with_walk(config: &WalkConfig, walk: RandomWalk<R>) -> Self {
        let mapper = CoordinateMapper::from_config(config);
        let pen = mapper.map(walk.position());
        Self {
            walk,
            mapper,
            canvas: Canvas::new(config.viewport.width, config.viewport.height, config.background),
            stroke: config.stroke,
            pen,
        }
    }

    pub fn walk(&self) -> &RandomWalk<R> {
        &self.walk
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Pixel-space position of the walk's latest point.
    pub fn pen(&self) -> &Point {
        &self.pen
    }

    /// Take `count` steps, stroking one segment per step. Returns the number
    /// of segments drawn.
    pub fn advance(&mut self, count: u64) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            let next = self.mapper.map(&self.walk.step());
            let cmd = PaintCommand::Line {
                from: std::mem::replace(&mut self.pen, next.clone()),
                to: next,
                stroke: self.stroke,
            };
            self.canvas.apply(&cmd);
            drawn += 1;
        }
        debug!(
            "advanced {} steps, walk length {}, position {}",
            drawn,
            self.walk.len(),
            self.walk.position()
        );
        drawn
    }

    pub fn render_png(&self) -> Result<Screenshot> {
        self.canvas.render_png()
    }

    /// Advance then encode the whole canvas.
    pub fn step_and_render(&mut self, count: u64) -> Result<Screenshot> {
        self.advance(count);
        self.render_png()
    }
}
