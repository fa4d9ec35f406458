//! The tower game component
//!
//! Owns the game state, the clock registration and the input gathered between
//! frames. Input handlers only queue commands; all state changes happen inside
//! [`Session::on_frame`], so a drop never interleaves with a motion update.

use crate::platform::{Clock, ClockToken, FrameSource, HeadlessFrames};
use crate::sim::{GameEvent, Snapshot, TickInput, TowerState, tick};
use crate::tuning::Tuning;

/// One play session driven by a frame source
pub struct Session<S: FrameSource> {
    state: TowerState,
    clock: Clock<S>,
    token: Option<ClockToken>,
    input: TickInput,
}

impl<S: FrameSource> Session<S> {
    /// Create a session; the clock stays idle until [`Session::start`]
    pub fn new(tuning: Tuning, source: S) -> Self {
        Self {
            state: TowerState::new(tuning),
            clock: Clock::new(source),
            token: None,
            input: TickInput::default(),
        }
    }

    /// Arm the clock. Returns false if it was already running or the game is over.
    pub fn start(&mut self) -> bool {
        if self.state.is_game_over() {
            return false;
        }
        match self.clock.start() {
            Some(token) => {
                self.token = Some(token);
                true
            }
            None => false,
        }
    }

    /// Queue a drop for the next frame. No-op once the tower has collapsed.
    pub fn queue_drop(&mut self) {
        if !self.state.is_game_over() {
            self.input.drop = true;
        }
    }

    /// Frame callback body: tick once, then re-arm or stop the clock
    pub fn on_frame(&mut self) -> Option<GameEvent> {
        if self.token.is_none() {
            // Late callback after stop/teardown
            return None;
        }

        let input = std::mem::take(&mut self.input);
        let event = tick(&mut self.state, &input);

        if self.state.is_game_over() {
            self.stop_clock();
        } else {
            self.clock.rearm();
        }

        event
    }

    /// Start a fresh tower with the same tuning and re-arm the clock
    pub fn restart(&mut self) {
        self.state = TowerState::new(self.state.tuning);
        self.input = TickInput::default();
        if self.token.is_none() {
            self.start();
        }
        log::info!("Tower rebuilt");
    }

    /// Stop the clock for good (component torn down)
    pub fn teardown(&mut self) {
        self.stop_clock();
    }

    fn stop_clock(&mut self) {
        if let Some(token) = self.token.take() {
            self.clock.stop(token);
            log::info!(
                "Clock stopped after {} frames at floor {}",
                self.state.frame_ticks,
                self.state.score()
            );
        }
    }

    pub fn is_running(&self) -> bool {
        self.token.is_some()
    }

    pub fn state(&self) -> &TowerState {
        &self.state
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        self.state.snapshot()
    }

    pub fn clock(&self) -> &Clock<S> {
        &self.clock
    }
}

impl Session<HeadlessFrames> {
    /// Deliver one pending frame, if the clock has one scheduled
    pub fn pump(&mut self) -> Option<GameEvent> {
        if self.clock.source_mut().fire() {
            self.on_frame()
        } else {
            None
        }
    }
}
