//! One frame of the game
//!
//! A pending drop is resolved before the slab moves, so a click is applied at
//! the exact position the player saw on the previous frame.

use super::clock::advance;
use super::resolve::resolve_drop;
use super::state::{GameEvent, TowerState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Drop the moving slab (click/tap/space)
    pub drop: bool,
}

/// Advance the game by one frame callback
pub fn tick(state: &mut TowerState, input: &TickInput) -> Option<GameEvent> {
    if state.is_game_over() {
        return None;
    }

    let event = if input.drop {
        resolve_drop(state)
    } else {
        None
    };

    // A collapse ends the session before the slab moves again
    advance(state);

    event
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Direction, GamePhase, Slab};
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const DROP: TickInput = TickInput { drop: true };
    const IDLE: TickInput = TickInput { drop: false };

    fn run_frames(state: &mut TowerState, frames: u32) {
        for _ in 0..frames {
            tick(state, &IDLE);
        }
    }

    #[test]
    fn test_idle_tick_only_moves() {
        let mut state = TowerState::new(Tuning::default());
        assert_eq!(tick(&mut state, &IDLE), None);
        assert_eq!(state.motion.position, 2.0);
        assert_eq!(state.stack().len(), 1);
    }

    #[test]
    fn test_drop_resolves_before_motion() {
        let mut state = TowerState::new(Tuning::default());
        // 75 frames at speed 2 puts the slab at x=150
        run_frames(&mut state, 75);
        assert_eq!(state.motion.position, 150.0);

        let event = tick(&mut state, &DROP);
        assert_eq!(
            event,
            Some(GameEvent::Placed {
                floor: 1,
                slab: Slab::new(150.0, 150.0, 1),
                trimmed: 50.0,
            })
        );
        // Same frame then moves from the landing edge at the new speed (2.1)
        assert!((state.motion.position - 152.1).abs() < 1e-4);
    }

    #[test]
    fn test_collapse_freezes_motion() {
        let mut state = TowerState::new(Tuning::default());
        state.motion.position = 310.0;

        assert_eq!(
            tick(&mut state, &DROP),
            Some(GameEvent::Collapsed { floor: 0 })
        );
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.motion.position, 310.0);

        assert_eq!(tick(&mut state, &IDLE), None);
        assert_eq!(state.motion.position, 310.0);
    }

    #[test]
    fn test_speed_after_five_drops() {
        let mut state = TowerState::new(Tuning::default());
        assert_eq!(state.speed(), 2.0);
        for _ in 0..5 {
            state.motion.position = state.stack().top().x;
            tick(&mut state, &DROP);
        }
        assert_eq!(state.score(), 5);
        assert!((state.speed() - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_direction_flips_at_edges() {
        let mut state = TowerState::new(Tuning::default());
        run_frames(&mut state, 99);
        assert_eq!(state.motion.direction, Direction::Right);
        tick(&mut state, &IDLE);
        assert_eq!(state.motion.position, 200.0);
        assert_eq!(state.motion.direction, Direction::Left);
        run_frames(&mut state, 100);
        assert_eq!(state.motion.position, 0.0);
        assert_eq!(state.motion.direction, Direction::Right);
    }

    proptest! {
        #[test]
        fn prop_length_tracks_score(
            script in proptest::collection::vec((0u32..40, any::<bool>()), 1..60)
        ) {
            let mut state = TowerState::new(Tuning::default());
            for (frames, drop) in script {
                run_frames(&mut state, frames);
                tick(&mut state, &TickInput { drop });
                prop_assert_eq!(state.stack().len(), state.score() as usize + 1);
                prop_assert!(state.stack().as_slice().iter().all(|s| s.width > 0.0));
            }
        }

        #[test]
        fn prop_game_over_is_terminal(
            script in proptest::collection::vec((0u32..80, any::<bool>()), 1..80)
        ) {
            let mut state = TowerState::new(Tuning::default());
            let mut seen_over = false;
            let mut frozen = None;
            for (frames, drop) in script {
                run_frames(&mut state, frames);
                tick(&mut state, &TickInput { drop });
                if seen_over {
                    prop_assert!(state.is_game_over());
                    prop_assert_eq!(Some((state.stack().len(), state.score())), frozen);
                }
                if state.is_game_over() && !seen_over {
                    seen_over = true;
                    frozen = Some((state.stack().len(), state.score()));
                }
            }
        }

        #[test]
        fn prop_slab_widths_never_grow(
            script in proptest::collection::vec(0u32..120, 1..30)
        ) {
            let mut state = TowerState::new(Tuning::default());
            for frames in script {
                run_frames(&mut state, frames);
                tick(&mut state, &DROP);
            }
            let widths: Vec<f32> = state.stack().as_slice().iter().map(|s| s.width).collect();
            prop_assert!(widths.windows(2).all(|w| w[1] <= w[0] + 1e-3));
        }

        #[test]
        fn prop_motion_stays_near_field(frames in 0u32..2000) {
            let mut state = TowerState::new(Tuning::default());
            run_frames(&mut state, frames);
            let speed = state.speed();
            let pos = state.motion.position;
            prop_assert!(pos >= -speed - 1e-3);
            prop_assert!(pos + state.moving_width() <= state.tuning.field_width + speed + 1e-3);
        }
    }
}
