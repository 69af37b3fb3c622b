//! Random walk state machine.
//!
//! A [`RandomWalk`] keeps every position it has visited, starting at the
//! origin. Each [`RandomWalk::step`] moves exactly one axis by exactly one
//! unit, both chosen from a single long-lived random stream.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::{Error, Result};

/// A lattice point in walk-space (or, after mapping, pixel-space).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    coords: Vec<i64>,
}

impl Point {
    pub fn new(coords: Vec<i64>) -> Self {
        Self { coords }
    }

    /// The all-zero point of the given dimensionality.
    pub fn origin(dimensions: usize) -> Self {
        Self {
            coords: vec![0; dimensions],
        }
    }

    pub fn dimensions(&self) -> usize {
        self.coords.len()
    }

    pub fn coords(&self) -> &[i64] {
        &self.coords
    }

    /// Coordinate on `axis`, or `None` when the point has fewer axes.
    pub fn coord(&self, axis: usize) -> Option<i64> {
        self.coords.get(axis).copied()
    }

    fn displaced(&self, axis: usize, delta: i64) -> Self {
        let mut coords = self.coords.clone();
        coords[axis] += delta;
        Self { coords }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

/// Append-only random walk over a D-dimensional integer lattice.
#[derive(Debug)]
pub struct RandomWalk<R = StdRng> {
    dimensions: usize,
    history: Vec<Point>,
    rng: R,
}

impl RandomWalk<StdRng> {
    /// Create a walk seeded once from the current wall-clock time.
    pub fn new(dimensions: usize) -> Result<Self> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::seeded(dimensions, nanos)
    }

    /// Create a walk with a fixed seed, producing the same path on every run.
    pub fn seeded(dimensions: usize, seed: u64) -> Result<Self> {
        Self::with_rng(dimensions, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> RandomWalk<R> {
    /// Create a walk drawing from an injected random stream.
    pub fn with_rng(dimensions: usize, rng: R) -> Result<Self> {
        if dimensions == 0 {
            return Err(Error::InvalidDimensions(dimensions));
        }
        Ok(Self {
            dimensions,
            history: vec![Point::origin(dimensions)],
            rng,
        })
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Number of points in the walk, origin included.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// A walk is never empty; it always holds at least the origin.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn history(&self) -> &[Point] {
        &self.history
    }

    /// The most recently appended point.
    pub fn position(&self) -> &Point {
        // history starts with the origin and is append-only
        &self.history[self.history.len() - 1]
    }

    /// Move one unit along one randomly chosen axis and return the new point.
    pub fn step(&mut self) -> Point {
        let axis = (self.rng.next_u64() % self.dimensions as u64) as usize;
        let delta = self.random_sign();
        let next = self.position().displaced(axis, delta);
        self.history.push(next.clone());
        next
    }

    // maps a draw of {0, 1} onto {-1, +1}
    fn random_sign(&mut self) -> i64 {
        ((self.rng.next_u64() % 2) as i64 + 1) * 2 - 3
    }
}
