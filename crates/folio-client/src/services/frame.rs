//! `requestAnimationFrame` scheduler.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{FrameId, FrameScheduler};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Drives one frame loop with the browser's animation frames.
#[derive(Default)]
pub struct RafScheduler {
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl RafScheduler {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Same scheduler, as the trait object the core loop expects.
    pub fn shared() -> Rc<dyn FrameScheduler> {
        Self::new()
    }
}

impl FrameScheduler for RafScheduler {
    fn install(&self, callback: Box<dyn FnMut(f64)>) {
        *self.callback.borrow_mut() = Some(Closure::wrap(callback));
    }

    fn request(&self) -> Option<FrameId> {
        let window = web_sys::window()?;
        let callback = self.callback.borrow();
        let closure = callback.as_ref()?;
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                tracing::error!("requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel(&self, id: FrameId) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(id);
        }
    }

    fn uninstall(&self) {
        self.callback.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use folio_core::{LoopControl, start_frame_loop};
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn test_request_needs_installed_callback() {
        let scheduler = RafScheduler::new();
        assert!(scheduler.request().is_none());
        scheduler.install(Box::new(|_| {}));
        let id = scheduler.request();
        assert!(id.is_some());
        scheduler.cancel(id.unwrap_or_default());
        scheduler.uninstall();
        assert!(scheduler.request().is_none());
    }

    #[wasm_bindgen_test]
    async fn test_dropped_loop_never_ticks() {
        let ticks = Rc::new(Cell::new(0));
        let handle = {
            let ticks = ticks.clone();
            start_frame_loop(RafScheduler::shared(), move |_| {
                ticks.set(ticks.get() + 1);
                LoopControl::Continue
            })
        };
        drop(handle);
        gloo::timers::future::TimeoutFuture::new(100).await;
        assert_eq!(ticks.get(), 0);
    }
}
