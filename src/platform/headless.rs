//! Frame source for native runs and tests
//!
//! Frames fire only when the driver calls [`HeadlessFrames::fire`].

use super::{FrameId, FrameSource};

/// Manually pumped frame source that records what was asked of it
#[derive(Debug, Default)]
pub struct HeadlessFrames {
    next_id: FrameId,
    pending: Option<FrameId>,
    requested: u32,
    cancelled: u32,
    refuse: bool,
}

impl HeadlessFrames {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Default::default()
        }
    }

    /// A source that refuses every request (host without frame callbacks)
    pub fn refusing() -> Self {
        Self {
            refuse: true,
            ..Self::new()
        }
    }

    /// Deliver the pending frame. Returns false if nothing was scheduled.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total frame requests accepted
    pub fn requested(&self) -> u32 {
        self.requested
    }

    /// Total cancellations received
    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }
}

impl FrameSource for HeadlessFrames {
    fn request_frame(&mut self) -> Option<FrameId> {
        if self.refuse {
            return None;
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.pending = Some(id);
        self.requested += 1;
        Some(id)
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if self.pending == Some(id) {
            self.pending = None;
        }
        self.cancelled += 1;
    }
}
