//! Game state and core simulation types
//!
//! `TowerState` is the single source of truth for a session. `Motion` is the
//! transient position of the moving slab and is never part of the placed history.

use serde::Serialize;

use super::clock::speed_for_score;
use super::stack::{Stack, camera_offset, slab_hue};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Moving slab oscillates, drops are accepted
    Playing,
    /// Tower collapsed (terminal for the session)
    GameOver,
}

/// A placed rectangle on the tower
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Slab {
    pub width: f32,
    /// Left edge in play-field coordinates
    pub x: f32,
    /// Stack index this slab was placed at (drives its colour)
    pub depth: u32,
}

impl Slab {
    pub fn new(x: f32, width: f32, depth: u32) -> Self {
        Self { width, x, depth }
    }

    /// Right edge in play-field coordinates
    pub fn right(&self) -> f32 {
        self.x + self.width
    }
}

/// Horizontal travel direction of the moving slab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Transient motion of the moving slab
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Motion {
    /// Left edge of the moving slab
    pub position: f32,
    pub direction: Direction,
}

/// The not-yet-placed slab as the presentation layer sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MovingSlab {
    pub x: f32,
    pub width: f32,
    /// Depth the slab would occupy if placed
    pub depth: u32,
    pub hue: u32,
}

/// Read-only view handed to the presentation layer each frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub slabs: &'a [Slab],
    pub score: u32,
    pub game_over: bool,
    /// None once the game is over
    pub moving: Option<MovingSlab>,
    /// Vertical scroll applied to every floor
    pub camera_offset: f32,
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    /// A slab landed; `trimmed` is the width cut off the moving slab
    Placed { floor: u32, slab: Slab, trimmed: f32 },
    /// The drop missed the tower entirely
    Collapsed { floor: u32 },
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize)]
pub struct TowerState {
    /// Constants this session was started with
    pub tuning: Tuning,
    stack: Stack,
    score: u32,
    phase: GamePhase,
    /// Moving slab motion (transient)
    pub motion: Motion,
    /// Frame callbacks processed while playing
    pub frame_ticks: u64,
}

impl TowerState {
    /// Create a fresh tower holding only the base slab.
    /// Unplayable tuning is replaced by the defaults.
    pub fn new(tuning: Tuning) -> Self {
        let tuning = tuning.or_default();
        let base = Slab::new(tuning.initial_x, tuning.initial_width, 0);
        Self {
            tuning,
            stack: Stack::new(base),
            score: 0,
            phase: GamePhase::Playing,
            motion: Motion::default(),
            frame_ticks: 0,
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Width of the moving slab (mirrors the top slab)
    pub fn moving_width(&self) -> f32 {
        self.stack.top().width
    }

    /// Current speed of the moving slab
    pub fn speed(&self) -> f32 {
        speed_for_score(self.score, &self.tuning)
    }

    /// Vertical camera scroll for the current score
    pub fn camera_offset(&self) -> f32 {
        camera_offset(self.score, &self.tuning)
    }

    /// Append a landed slab. The only mutation of the stack.
    pub(super) fn place(&mut self, slab: Slab) {
        self.stack.push(slab);
        self.score += 1;
    }

    /// Enter the terminal phase
    pub(super) fn collapse(&mut self) {
        self.phase = GamePhase::GameOver;
    }

    /// Build the read-only view for rendering
    pub fn snapshot(&self) -> Snapshot<'_> {
        let moving = (!self.is_game_over()).then(|| {
            let depth = self.stack.len() as u32;
            MovingSlab {
                x: self.motion.position,
                width: self.moving_width(),
                depth,
                hue: slab_hue(depth, &self.tuning),
            }
        });

        Snapshot {
            slabs: self.stack.as_slice(),
            score: self.score,
            game_over: self.is_game_over(),
            moving,
            camera_offset: self.camera_offset(),
        }
    }
}
