//! Platform abstraction layer
//!
//! The game advances once per display frame. Hosts provide a [`FrameSource`]
//! (`requestAnimationFrame` in the browser, [`HeadlessFrames`] natively) and
//! the [`Clock`] owns the single pending registration.

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::HeadlessFrames;
#[cfg(target_arch = "wasm32")]
pub use web::BrowserFrames;

/// Host handle for one requested frame callback
pub type FrameId = i32;

/// Something that can schedule and cancel a one-shot frame callback
pub trait FrameSource {
    /// Request the next frame callback. None if the host refused.
    fn request_frame(&mut self) -> Option<FrameId>;
    /// Cancel a previously requested callback
    fn cancel_frame(&mut self, id: FrameId);
}

/// Proof that the clock is running. Consumed by [`Clock::stop`].
#[derive(Debug)]
#[must_use = "dropping the token leaves the clock running with no way to stop it"]
pub struct ClockToken {
    _private: (),
}

/// Owns the repeating frame registration of one game session
pub struct Clock<S: FrameSource> {
    source: S,
    pending: Option<FrameId>,
    running: bool,
}

impl<S: FrameSource> Clock<S> {
    /// Wrap a frame source; nothing is scheduled yet
    pub fn new(source: S) -> Self {
        Self {
            source,
            pending: None,
            running: false,
        }
    }

    /// Arm the clock. Returns None if it is already running.
    pub fn start(&mut self) -> Option<ClockToken> {
        if self.running {
            return None;
        }
        self.running = true;
        self.pending = self.source.request_frame();
        if self.pending.is_none() {
            log::warn!("Frame request refused, clock is idle");
        }
        Some(ClockToken { _private: () })
    }

    /// Request the next frame from inside a frame callback.
    /// Does nothing once the clock has been stopped.
    pub fn rearm(&mut self) {
        if !self.running {
            return;
        }
        // The callback that is running has already consumed the old id
        self.pending = self.source.request_frame();
        if self.pending.is_none() {
            log::warn!("Frame request refused, clock is idle");
        }
    }

    /// Cancel the pending frame and stop the clock
    pub fn stop(&mut self, token: ClockToken) {
        let ClockToken { _private: () } = token;
        self.running = false;
        if let Some(id) = self.pending.take() {
            self.source.cancel_frame(id);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Id of the outstanding frame request, if any
    #[cfg(test)]
    fn pending(&self) -> Option<FrameId> {
        self.pending
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }
}

impl<S: FrameSource> Drop for Clock<S> {
    fn drop(&mut self) {
        // Teardown without an explicit stop must not leave a frame loop behind
        if let Some(id) = self.pending.take() {
            self.source.cancel_frame(id);
        }
    }
}
