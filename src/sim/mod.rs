//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame callback, no wall-clock time
//! - No randomness
//! - No rendering or platform dependencies

pub mod clock;
pub mod resolve;
pub mod stack;
pub mod state;
pub mod tick;

pub use clock::{advance, speed_for_score};
pub use resolve::{Overlap, overlap, resolve_drop};
pub use stack::{Stack, camera_offset, slab_hue};
pub use state::{Direction, GameEvent, GamePhase, Motion, MovingSlab, Slab, Snapshot, TowerState};
pub use tick::{TickInput, tick};
