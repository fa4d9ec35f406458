//! Append-only tower of placed slabs
//!
//! Colour and camera scroll are derived from depth/score on demand and never stored.

use serde::Serialize;

use super::state::Slab;
use crate::tuning::Tuning;

/// Ordered slabs, index 0 = base. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Stack {
    slabs: Vec<Slab>,
}

impl Stack {
    /// Start a stack with its base slab
    pub fn new(base: Slab) -> Self {
        Self { slabs: vec![base] }
    }

    /// Most recently placed slab
    pub fn top(&self) -> &Slab {
        // Non-empty from construction, and nothing removes slabs
        &self.slabs[self.slabs.len() - 1]
    }

    pub(super) fn push(&mut self, slab: Slab) {
        self.slabs.push(slab);
    }

    pub fn len(&self) -> usize {
        self.slabs.len()
    }

    /// Always false; present for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.slabs.is_empty()
    }

    pub fn as_slice(&self) -> &[Slab] {
        &self.slabs
    }
}

/// Hue (degrees) of the slab at `depth`
pub fn slab_hue(depth: u32, tuning: &Tuning) -> u32 {
    let hue = tuning.hue_base as u64 + depth as u64 * tuning.hue_step as u64;
    (hue % 360) as u32
}

/// Vertical scroll that keeps the most recent floors in view
pub fn camera_offset(score: u32, tuning: &Tuning) -> f32 {
    score.saturating_sub(tuning.visible_floors) as f32 * tuning.slab_height
}
