//! Per-frame motion of the moving slab
//!
//! One call = one frame callback. Motion is not scaled by elapsed time, so the
//! slab moves faster on high refresh-rate displays.

use super::state::{Direction, Motion, TowerState};
use crate::tuning::Tuning;

/// Moving slab speed for a given score (field units per frame)
pub fn speed_for_score(score: u32, tuning: &Tuning) -> f32 {
    tuning.base_speed + score as f32 * tuning.speed_growth
}

impl Motion {
    /// Advance one frame and bounce off the field edges.
    /// Returns true if the direction changed.
    pub fn step(&mut self, speed: f32, width: f32, field_width: f32) -> bool {
        let before = self.direction;
        self.position += speed * self.direction.sign();

        if self.position + width >= field_width {
            self.direction = Direction::Left;
        }
        if self.position <= 0.0 {
            self.direction = Direction::Right;
        }

        self.direction != before
    }
}

/// Run the clock for one frame. No-op once the game is over.
pub fn advance(state: &mut TowerState) {
    if state.is_game_over() {
        return;
    }

    // Speed follows the current score, so it changes right after a drop
    let speed = state.speed();
    let width = state.moving_width();
    let field_width = state.tuning.field_width;

    state.frame_ticks += 1;
    if state.motion.step(speed, width, field_width) {
        log::trace!(
            "Slab turned {:?} at x={:.1}",
            state.motion.direction,
            state.motion.position
        );
    }
}
