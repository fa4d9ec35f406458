//! Shape generation for the tower scene
//!
//! Everything here works in world coordinates: x across the play field,
//! y upward from the base of the tower with the camera offset already applied.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::consts::SLAB_GAP;
use crate::hsl_to_rgb;
use crate::sim::{Snapshot, slab_hue};
use crate::tuning::Tuning;

/// Glow spread around a slab
const GLOW_SPREAD: f32 = 6.0;
/// Glow drop below a slab
const GLOW_DROP: f32 = 10.0;

/// Generate vertices for an axis-aligned rectangle (two triangles)
pub fn rect(min: Vec2, max: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Color of the slab at `depth`
pub fn slab_color(depth: u32, tuning: &Tuning, alpha: f32) -> [f32; 4] {
    let hue = slab_hue(depth, tuning) as f32;
    let [r, g, b] = hsl_to_rgb(hue, tuning.saturation, tuning.lightness);
    [r, g, b, alpha]
}

/// Bottom edge (world y) of a floor after camera scroll
pub fn floor_y(depth: u32, camera_offset: f32, tuning: &Tuning) -> f32 {
    depth as f32 * tuning.slab_height - camera_offset
}

/// A slab body plus the soft glow drawn behind it
pub fn slab(x: f32, width: f32, depth: u32, camera_offset: f32, tuning: &Tuning) -> Vec<Vertex> {
    let bottom = floor_y(depth, camera_offset, tuning);
    let top = bottom + tuning.slab_height - SLAB_GAP;

    let mut vertices = rect(
        Vec2::new(x - GLOW_SPREAD, bottom - GLOW_DROP),
        Vec2::new(x + width + GLOW_SPREAD, top - GLOW_DROP + GLOW_SPREAD),
        slab_color(depth, tuning, colors::GLOW_ALPHA),
    );
    vertices.extend(rect(
        Vec2::new(x, bottom),
        Vec2::new(x + width, top),
        slab_color(depth, tuning, 1.0),
    ));
    vertices
}

/// Build the full scene for one frame
pub fn scene(snapshot: &Snapshot<'_>, tuning: &Tuning) -> Vec<Vertex> {
    let view_height = tuning.view_floors as f32 * tuning.slab_height;
    let camera = snapshot.camera_offset;

    // Play field backdrop with a thin edge on each side
    let mut vertices = rect(
        Vec2::new(0.0, 0.0),
        Vec2::new(tuning.field_width, view_height),
        colors::FIELD,
    );
    vertices.extend(rect(
        Vec2::new(-2.0, 0.0),
        Vec2::new(0.0, view_height),
        colors::FIELD_EDGE,
    ));
    vertices.extend(rect(
        Vec2::new(tuning.field_width, 0.0),
        Vec2::new(tuning.field_width + 2.0, view_height),
        colors::FIELD_EDGE,
    ));

    // Floors scrolled below the view are skipped
    let first_visible = (camera / tuning.slab_height).floor().max(0.0) as usize;
    for placed in snapshot.slabs.iter().skip(first_visible.saturating_sub(1)) {
        vertices.extend(slab(placed.x, placed.width, placed.depth, camera, tuning));
    }

    if let Some(moving) = snapshot.moving {
        vertices.extend(slab(moving.x, moving.width, moving.depth, camera, tuning));
    }

    vertices
}
