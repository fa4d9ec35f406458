//! Drop resolution
//!
//! Intersects the moving slab with the top of the tower. A positive overlap
//! lands as a new (possibly trimmed) slab; anything else collapses the tower.

use super::state::{GameEvent, Slab, TowerState};

/// Horizontal intersection of two spans
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overlap {
    pub left: f32,
    pub right: f32,
}

impl Overlap {
    /// Intersection length; zero or negative means the spans do not share interior
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Exact edge contact counts as a miss
    pub fn lands(&self) -> bool {
        self.width() > 0.0
    }
}

/// Overlap between a moving slab at `x` of `width` and the top slab
pub fn overlap(x: f32, width: f32, top: &Slab) -> Overlap {
    Overlap {
        left: x.max(top.x),
        right: (x + width).min(top.right()),
    }
}

/// Resolve a drop command against the current state.
///
/// Returns `None` when the drop is ignored (game already over).
pub fn resolve_drop(state: &mut TowerState) -> Option<GameEvent> {
    if state.is_game_over() {
        return None;
    }

    let top = *state.stack().top();
    let width = state.moving_width();
    let hit = overlap(state.motion.position, width, &top);

    if !hit.lands() {
        let floor = state.score();
        state.collapse();
        log::info!("Tower collapsed at floor {floor}");
        return Some(GameEvent::Collapsed { floor });
    }

    let slab = Slab::new(hit.left, hit.width(), state.stack().len() as u32);
    state.place(slab);
    // Next slab starts where this one landed; direction is kept
    state.motion.position = hit.left;

    let floor = state.score();
    let trimmed = width - slab.width;
    log::debug!(
        "Floor {floor}: x={:.1} width={:.1} (trimmed {trimmed:.1})",
        slab.x,
        slab.width
    );

    Some(GameEvent::Placed {
        floor,
        slab,
        trimmed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Direction, GamePhase};
    use crate::tuning::Tuning;

    fn state_at(position: f32) -> TowerState {
        let mut state = TowerState::new(Tuning::default());
        state.motion.position = position;
        state
    }

    #[test]
    fn test_overlap_partial() {
        let top = Slab::new(100.0, 200.0, 0);
        let hit = overlap(150.0, 200.0, &top);
        assert_eq!(hit.left, 150.0);
        assert_eq!(hit.right, 300.0);
        assert_eq!(hit.width(), 150.0);
        assert!(hit.lands());
    }

    #[test]
    fn test_overlap_from_the_left() {
        let top = Slab::new(100.0, 200.0, 0);
        let hit = overlap(40.0, 200.0, &top);
        assert_eq!(hit.left, 100.0);
        assert_eq!(hit.right, 240.0);
        assert_eq!(hit.width(), 140.0);
    }

    #[test]
    fn test_overlap_edge_touch_is_a_miss() {
        let top = Slab::new(100.0, 200.0, 0);
        let right_touch = overlap(300.0, 200.0, &top);
        assert_eq!(right_touch.width(), 0.0);
        assert!(!right_touch.lands());

        let left_touch = overlap(-100.0, 200.0, &top);
        assert_eq!(left_touch.width(), 0.0);
        assert!(!left_touch.lands());
    }

    #[test]
    fn test_drop_partial_overlap_places_trimmed_slab() {
        let mut state = state_at(150.0);
        let event = resolve_drop(&mut state);

        let expected = Slab::new(150.0, 150.0, 1);
        assert_eq!(
            event,
            Some(GameEvent::Placed {
                floor: 1,
                slab: expected,
                trimmed: 50.0,
            })
        );
        assert_eq!(state.score(), 1);
        assert_eq!(*state.stack().top(), expected);
        assert_eq!(state.moving_width(), 150.0);
        assert_eq!(state.motion.position, 150.0);
    }

    #[test]
    fn test_drop_keeps_direction() {
        let mut state = state_at(120.0);
        state.motion.direction = Direction::Left;
        resolve_drop(&mut state);
        assert_eq!(state.motion.direction, Direction::Left);
        assert_eq!(state.motion.position, 120.0);
    }

    #[test]
    fn test_drop_miss_collapses() {
        let mut state = state_at(310.0);
        let event = resolve_drop(&mut state);

        assert_eq!(event, Some(GameEvent::Collapsed { floor: 0 }));
        assert_eq!(state.phase(), GamePhase::GameOver);
        assert_eq!(state.stack().len(), 1);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_drop_exact_touch_collapses() {
        let mut state = state_at(300.0);
        assert_eq!(
            resolve_drop(&mut state),
            Some(GameEvent::Collapsed { floor: 0 })
        );
        assert!(state.is_game_over());
        assert_eq!(state.stack().len(), 1);
    }

    #[test]
    fn test_drop_after_game_over_is_ignored() {
        let mut state = state_at(310.0);
        resolve_drop(&mut state);

        state.motion.position = 100.0;
        assert_eq!(resolve_drop(&mut state), None);
        assert_eq!(resolve_drop(&mut state), None);
        assert!(state.is_game_over());
        assert_eq!(state.stack().len(), 1);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_perfect_drop_keeps_width() {
        let mut state = state_at(100.0);
        let event = resolve_drop(&mut state);
        assert!(matches!(
            event,
            Some(GameEvent::Placed { trimmed, .. }) if trimmed == 0.0
        ));
        assert_eq!(state.moving_width(), 200.0);
    }

    #[test]
    fn test_depth_follows_stack_length() {
        let mut state = state_at(100.0);
        for expected_depth in 1..=4 {
            resolve_drop(&mut state);
            assert_eq!(state.stack().top().depth, expected_depth);
        }
        assert_eq!(state.stack().len(), 5);
        assert_eq!(state.score(), 4);
    }
}
