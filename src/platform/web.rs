//! Browser frame source backed by `requestAnimationFrame`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{FrameId, FrameSource};

/// Shared slot holding the frame closure. Filled after the game exists,
/// since the closure captures the game.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// `requestAnimationFrame` / `cancelAnimationFrame` on the page window
pub struct BrowserFrames {
    window: web_sys::Window,
    callback: FrameCallback,
}

impl BrowserFrames {
    pub fn new(window: web_sys::Window, callback: FrameCallback) -> Self {
        Self { window, callback }
    }
}

impl FrameSource for BrowserFrames {
    fn request_frame(&mut self) -> Option<FrameId> {
        let slot = self.callback.borrow();
        let Some(closure) = slot.as_ref() else {
            log::error!("Frame requested before the callback was installed");
            return None;
        };
        match self
            .window
            .request_animation_frame(closure.as_ref().unchecked_ref())
        {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, id: FrameId) {
        if let Err(e) = self.window.cancel_animation_frame(id) {
            log::warn!("cancelAnimationFrame failed: {:?}", e);
        }
    }
}
