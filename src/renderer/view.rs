//! World-to-screen mapping
//!
//! The play field (field width x view_floors floors) is letterboxed into the
//! canvas so it keeps its aspect ratio at any window size.

use glam::Vec2;

use crate::tuning::Tuning;

/// Maps world coordinates to normalized device coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas size in pixels
    pub size: (u32, u32),
    /// Visible world extent
    pub world: Vec2,
}

impl Viewport {
    pub fn new(width: u32, height: u32, tuning: &Tuning) -> Self {
        Self {
            size: (width, height),
            world: Vec2::new(
                tuning.field_width,
                tuning.view_floors as f32 * tuning.slab_height,
            ),
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }

    /// Per-axis scale that fits the world inside -1..1 without stretching
    fn fit(&self) -> Vec2 {
        let (w, h) = self.size;
        if w == 0 || h == 0 {
            return Vec2::ONE;
        }
        let screen_aspect = w as f32 / h as f32;
        let world_aspect = self.world.x / self.world.y;

        if screen_aspect > world_aspect {
            // Wider than the field: bars left and right
            Vec2::new(world_aspect / screen_aspect, 1.0)
        } else {
            // Taller than the field: bars top and bottom
            Vec2::new(1.0, screen_aspect / world_aspect)
        }
    }

    /// Convert a world position to NDC (-1..1, y up)
    pub fn to_ndc(&self, pos: Vec2) -> Vec2 {
        let unit = pos / self.world * 2.0 - Vec2::ONE;
        unit * self.fit()
    }
}
