//! Fundamental geometric and simulation types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Simulation time tracking.
///
/// The coordinate convention is screen-like: x grows right, y grows down,
/// with the origin at the top-left corner of the world rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of simulation steps executed so far.
    pub tick: u64,
    /// Elapsed simulated time in milliseconds.
    pub elapsed_ms: f64,
}

impl SimTime {
    /// Advance by one step covering `delta_ms` of simulated time.
    pub fn advance(&mut self, delta_ms: f64) {
        self.tick += 1;
        self.elapsed_ms += delta_ms;
    }
}

/// Axis-aligned world rectangle anchored at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Center point of the world rectangle.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Whether `point` lies inside the rectangle grown by `margin` on all sides.
    pub fn contains_with_margin(&self, point: Vec2, margin: f32) -> bool {
        point.x >= -margin
            && point.y >= -margin
            && point.x <= self.width + margin
            && point.y <= self.height + margin
    }

    /// Clamp `point` so a circle of `radius` around it stays fully inside.
    pub fn clamp_inside(&self, point: Vec2, radius: f32) -> Vec2 {
        Vec2::new(
            point.x.clamp(radius, self.width - radius),
            point.y.clamp(radius, self.height - radius),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            width: crate::constants::WORLD_WIDTH,
            height: crate::constants::WORLD_HEIGHT,
        }
    }
}
