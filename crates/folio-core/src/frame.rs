//! Per-frame callback loops with scoped cancellation.
//!
//! [`start_frame_loop`] registers a tick with a [`FrameScheduler`] and returns
//! a [`FrameHandle`]. The loop lives exactly as long as the handle: dropping
//! it cancels the pending frame and releases the callback.

use std::cell::Cell;
use std::rc::{Rc, Weak};

/// Identifier of a scheduled frame (`requestAnimationFrame` return value).
pub type FrameId = i32;

/// Source of animation frames.
///
/// A scheduler drives one loop: the callback passed to [`install`] is
/// invoked once for every successful [`request`], with a millisecond
/// timestamp.
///
/// [`install`]: FrameScheduler::install
/// [`request`]: FrameScheduler::request
pub trait FrameScheduler {
    fn install(&self, callback: Box<dyn FnMut(f64)>);
    fn request(&self) -> Option<FrameId>;
    fn cancel(&self, id: FrameId);
    fn uninstall(&self);
}

/// What a tick wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

struct LoopShared {
    scheduler: Rc<dyn FrameScheduler>,
    pending: Cell<Option<FrameId>>,
    stopped: Cell<bool>,
}

/// Owns a running frame loop.
#[must_use = "dropping a FrameHandle stops the loop immediately"]
pub struct FrameHandle {
    shared: Rc<LoopShared>,
}

impl FrameHandle {
    /// Whether the loop still schedules frames.
    pub fn is_running(&self) -> bool {
        !self.shared.stopped.get()
    }
}

impl Drop for FrameHandle {
    fn drop(&mut self) {
        self.shared.stopped.set(true);
        if let Some(id) = self.shared.pending.take() {
            self.shared.scheduler.cancel(id);
        }
        self.shared.scheduler.uninstall();
    }
}

/// Starts calling `tick` once per frame until it returns [`LoopControl::Stop`]
/// or the returned handle is dropped.
pub fn start_frame_loop<F>(scheduler: Rc<dyn FrameScheduler>, mut tick: F) -> FrameHandle
where
    F: FnMut(f64) -> LoopControl + 'static,
{
    let shared = Rc::new(LoopShared {
        scheduler: scheduler.clone(),
        pending: Cell::new(None),
        stopped: Cell::new(false),
    });

    // The installed callback only holds a weak reference, so the scheduler
    // (owned by the loop) and the loop never keep each other alive.
    let weak: Weak<LoopShared> = Rc::downgrade(&shared);
    scheduler.install(Box::new(move |timestamp| {
        let Some(shared) = weak.upgrade() else {
            return;
        };
        shared.pending.set(None);
        if shared.stopped.get() {
            return;
        }
        match tick(timestamp) {
            LoopControl::Continue => {
                if !shared.stopped.get() {
                    shared.pending.set(shared.scheduler.request());
                }
            }
            LoopControl::Stop => shared.stopped.set(true),
        }
    }));

    shared.pending.set(scheduler.request());
    if shared.pending.get().is_none() {
        tracing::warn!("frame scheduler refused the first frame request");
    }
    FrameHandle { shared }
}

/// Drops frames so that work runs at most `fps` times per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLimiter {
    interval_ms: f64,
    last: Option<f64>,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);
        Self {
            interval_ms: 1000.0 / f64::from(fps),
            last: None,
        }
    }

    /// Returns true if a frame at `timestamp` (ms) should be rendered.
    pub fn ready(&mut self, timestamp: f64) -> bool {
        match self.last {
            // Small tolerance so a 60 Hz display does not drop every other
            // frame when limited to 60 fps.
            Some(last) if timestamp - last < self.interval_ms - 1.0 => false,
            _ => {
                self.last = Some(timestamp);
                true
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::ManualScheduler;
    use super::*;

    #[test]
    fn test_loop_ticks_once_per_frame() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let handle = start_frame_loop(scheduler.clone(), move |_| {
            counter.set(counter.get() + 1);
            LoopControl::Continue
        });

        assert!(scheduler.has_pending());
        for i in 0..5 {
            assert!(scheduler.fire(f64::from(i) * 16.0));
        }
        assert_eq!(ticks.get(), 5);
        assert!(handle.is_running());
        assert_eq!(scheduler.requested.get(), 6);
    }

    #[test]
    fn test_drop_cancels_pending_frame() {
        let scheduler = ManualScheduler::new();
        let ticks = Rc::new(Cell::new(0));
        let counter = ticks.clone();
        let handle = start_frame_loop(scheduler.clone(), move |_| {
            counter.set(counter.get() + 1);
            LoopControl::Continue
        });
        scheduler.fire(0.0);
        assert_eq!(ticks.get(), 1);

        drop(handle);

        assert_eq!(scheduler.cancelled.borrow().as_slice(), &[2]);
        assert!(!scheduler.has_pending());
        assert!(!scheduler.is_installed());
        assert!(!scheduler.fire(16.0));
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn test_stop_ends_loop_without_cancel() {
        let scheduler = ManualScheduler::new();
        let handle = start_frame_loop(scheduler.clone(), |_| LoopControl::Stop);
        scheduler.fire(0.0);

        assert!(!handle.is_running());
        assert!(!scheduler.has_pending());
        drop(handle);
        assert!(scheduler.cancelled.borrow().is_empty());
    }

    #[test]
    fn test_limiter_halves_60hz_to_30fps() {
        let mut limiter = FrameLimiter::new(30);
        let rendered = (0..60)
            .filter(|i| limiter.ready(f64::from(*i) * (1000.0 / 60.0)))
            .count();
        assert_eq!(rendered, 30);
    }

    #[test]
    fn test_limiter_at_display_rate_keeps_every_frame() {
        let mut limiter = FrameLimiter::new(60);
        let rendered = (0..60)
            .filter(|i| limiter.ready(f64::from(*i) * (1000.0 / 60.0)))
            .count();
        assert_eq!(rendered, 60);
    }
}
