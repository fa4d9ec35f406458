//! Demo player
//!
//! Drops when the moving slab passes over an aim point near the top slab. The
//! aim drifts further off with every floor, so a demo run always ends.

use crate::sim::TowerState;

/// Deterministic autoplayer
#[derive(Debug, Clone, Copy)]
pub struct Autoplay {
    /// How far (field units) the aim point drifts per placed floor
    pub drift_per_floor: f32,
}

impl Default for Autoplay {
    fn default() -> Self {
        Self {
            drift_per_floor: 4.0,
        }
    }
}

impl Autoplay {
    pub fn new(drift_per_floor: f32) -> Self {
        Self { drift_per_floor }
    }

    /// Left edge the bot is aiming for at the current floor
    pub fn aim(&self, state: &TowerState) -> f32 {
        let top = state.stack().top();
        let score = state.score();
        // Alternate sides so the tower leans both ways
        let side = if score % 2 == 0 { 1.0 } else { -1.0 };
        let target = top.x + side * score as f32 * self.drift_per_floor;
        let max_x = (state.tuning.field_width - state.moving_width()).max(0.0);
        target.clamp(0.0, max_x)
    }

    /// True when the moving slab is within half a frame step of the aim point
    pub fn wants_drop(&self, state: &TowerState) -> bool {
        if state.is_game_over() {
            return false;
        }
        (state.motion.position - self.aim(state)).abs() <= state.speed() / 2.0
    }
}
