//! Global pointer state and its broadcast channel.
//!
//! One producer (the root listener set) writes into a [`PointerBus`]; any
//! number of consumers read the latest [`PointerState`] or subscribe to
//! changes. Subscriptions are scoped: dropping the [`Subscription`] removes
//! the callback.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Viewport, clamp};

/// Latest pointer position and button state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerState {
    /// Horizontal position normalized to `[0, 1]` across the viewport.
    pub x: f64,
    /// Vertical position normalized to `[0, 1]` across the viewport.
    pub y: f64,
    /// Horizontal position in pixels.
    pub raw_x: f64,
    /// Vertical position in pixels.
    pub raw_y: f64,
    /// Whether a mouse button is held down.
    pub is_active: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            x: 0.5,
            y: 0.5,
            raw_x: 0.0,
            raw_y: 0.0,
            is_active: false,
        }
    }
}

/// Raw input fed into the bus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Move { client_x: f64, client_y: f64 },
    Down,
    Up,
}

impl PointerState {
    /// Returns the state after `event`.
    pub fn apply(self, event: PointerEvent, viewport: Viewport) -> Self {
        match event {
            PointerEvent::Move { client_x, client_y } => Self {
                x: normalize(client_x, viewport.width),
                y: normalize(client_y, viewport.height),
                raw_x: client_x,
                raw_y: client_y,
                ..self
            },
            PointerEvent::Down => Self {
                is_active: true,
                ..self
            },
            PointerEvent::Up => Self {
                is_active: false,
                ..self
            },
        }
    }

    /// Pixel position of the pointer.
    pub fn position(&self) -> Point {
        Point::new(self.raw_x, self.raw_y)
    }
}

fn normalize(value: f64, extent: f64) -> f64 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.5;
    }
    clamp(value / extent, 0.0, 1.0)
}

type Listener = Rc<dyn Fn(&PointerState)>;

struct BusInner {
    state: PointerState,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Single-producer, multi-subscriber pointer broadcast.
///
/// Cloning the bus yields another handle to the same channel.
#[derive(Clone)]
pub struct PointerBus {
    inner: Rc<RefCell<BusInner>>,
}

impl Default for PointerBus {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for PointerBus {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for PointerBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("PointerBus")
            .field("state", &inner.state)
            .field("subscribers", &inner.listeners.len())
            .finish()
    }
}

impl PointerBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(BusInner {
                state: PointerState::default(),
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Latest published state.
    pub fn state(&self) -> PointerState {
        self.inner.borrow().state
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Applies `event` and notifies every subscriber.
    pub fn dispatch(&self, event: PointerEvent, viewport: Viewport) {
        let (state, listeners) = {
            let mut inner = self.inner.borrow_mut();
            inner.state = inner.state.apply(event, viewport);
            let listeners: Vec<Listener> =
                inner.listeners.iter().map(|(_, l)| l.clone()).collect();
            (inner.state, listeners)
        };
        // Borrow is released so callbacks may subscribe or unsubscribe.
        for listener in listeners {
            listener(&state);
        }
    }

    /// Registers `listener`; it stays registered until the returned handle drops.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&PointerState) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }
}

/// Keeps a [`PointerBus`] listener alive.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    bus: Weak<RefCell<BusInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.listeners.retain(|(id, _)| *id != self.id);
            } else {
                tracing::warn!(id = self.id, "pointer subscription dropped while bus was borrowed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const VIEWPORT: Viewport = Viewport::new(800.0, 600.0);

    #[test]
    fn test_default_state_is_centered() {
        let bus = PointerBus::new();
        let state = bus.state();
        assert_eq!(state.x, 0.5);
        assert_eq!(state.y, 0.5);
        assert!(!state.is_active);
    }

    #[test]
    fn test_move_normalizes_and_clamps() {
        let state = PointerState::default().apply(
            PointerEvent::Move {
                client_x: 200.0,
                client_y: 450.0,
            },
            VIEWPORT,
        );
        assert!((state.x - 0.25).abs() < 1e-9);
        assert!((state.y - 0.75).abs() < 1e-9);
        assert_eq!(state.raw_x, 200.0);

        let outside = state.apply(
            PointerEvent::Move {
                client_x: -50.0,
                client_y: 9000.0,
            },
            VIEWPORT,
        );
        assert_eq!(outside.x, 0.0);
        assert_eq!(outside.y, 1.0);
        assert_eq!(outside.raw_x, -50.0);
    }

    #[test]
    fn test_zero_viewport_falls_back_to_center() {
        let state = PointerState::default().apply(
            PointerEvent::Move {
                client_x: 10.0,
                client_y: 10.0,
            },
            Viewport::new(0.0, 0.0),
        );
        assert_eq!(state.x, 0.5);
        assert_eq!(state.y, 0.5);
    }

    #[test]
    fn test_press_and_release_keep_position() {
        let bus = PointerBus::new();
        bus.dispatch(
            PointerEvent::Move {
                client_x: 400.0,
                client_y: 300.0,
            },
            VIEWPORT,
        );
        bus.dispatch(PointerEvent::Down, VIEWPORT);
        assert!(bus.state().is_active);
        assert_eq!(bus.state().raw_x, 400.0);
        bus.dispatch(PointerEvent::Up, VIEWPORT);
        assert!(!bus.state().is_active);
    }

    #[test]
    fn test_all_subscribers_see_same_state() {
        let bus = PointerBus::new();
        let seen_a = Rc::new(Cell::new(0.0));
        let seen_b = Rc::new(Cell::new(0.0));

        let a = seen_a.clone();
        let _sub_a = bus.subscribe(move |s| a.set(s.raw_x));
        let b = seen_b.clone();
        let _sub_b = bus.subscribe(move |s| b.set(s.raw_x));

        bus.dispatch(
            PointerEvent::Move {
                client_x: 123.0,
                client_y: 1.0,
            },
            VIEWPORT,
        );
        assert_eq!(seen_a.get(), 123.0);
        assert_eq!(seen_b.get(), 123.0);
    }

    #[test]
    fn test_dropping_subscription_unsubscribes() {
        let bus = PointerBus::new();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let sub = bus.subscribe(move |_| counter.set(counter.get() + 1));
        assert_eq!(bus.subscriber_count(), 1);

        bus.dispatch(PointerEvent::Down, VIEWPORT);
        drop(sub);
        bus.dispatch(PointerEvent::Up, VIEWPORT);

        assert_eq!(calls.get(), 1);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_subscriber_may_drop_itself_during_dispatch() {
        let bus = PointerBus::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let slot_in_cb = slot.clone();
        let sub = bus.subscribe(move |_| {
            slot_in_cb.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        bus.dispatch(PointerEvent::Down, VIEWPORT);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_bus_is_harmless() {
        let bus = PointerBus::new();
        let sub = bus.subscribe(|_| {});
        drop(bus);
        drop(sub);
    }
}
