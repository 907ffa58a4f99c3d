//! Pointer-proximity effect.
//!
//! Every frame, the distance from the pointer to a target element is turned
//! into a closeness scalar in `[0, 1]` and mapped to a set of visual
//! properties, which are tweened onto the element.

use std::rc::Rc;

use crate::frame::{FrameHandle, FrameScheduler, LoopControl, start_frame_loop};
use crate::geometry::{Point, Rect, Viewport, clamp};
use crate::pointer::PointerBus;
use crate::tween::{Easing, Tween, TweenVars, Tweener};

/// Duration of the per-frame proximity tween, in seconds.
pub const PROXIMITY_TWEEN_SECS: f64 = 0.4;

/// Closeness of `pointer` to the centre of `rect`.
///
/// Falls off linearly from 1 at the centre to 0 at half the viewport
/// diagonal and beyond.
pub fn proximity(pointer: Point, rect: &Rect, viewport: Viewport) -> f64 {
    falloff(pointer.distance(rect.center()), viewport)
}

/// Closeness of `pointer` to the nearest edge of `rect`; 1 anywhere inside.
pub fn edge_proximity(pointer: Point, rect: &Rect, viewport: Viewport) -> f64 {
    falloff(rect.edge_distance(pointer), viewport)
}

fn falloff(distance: f64, viewport: Viewport) -> f64 {
    let max_distance = viewport.half_diagonal();
    if max_distance <= 0.0 || !max_distance.is_finite() {
        return if distance == 0.0 { 1.0 } else { 0.0 };
    }
    if !distance.is_finite() {
        return 0.0;
    }
    clamp(1.0 - distance / max_distance, 0.0, 1.0)
}

/// Which distance the falloff is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProximityMeasure {
    /// Distance to the centre of the element.
    #[default]
    Center,
    /// Distance to the nearest edge; 1 anywhere inside the element.
    Edge,
}

impl ProximityMeasure {
    pub fn proximity(self, pointer: Point, rect: &Rect, viewport: Viewport) -> f64 {
        match self {
            Self::Center => proximity(pointer, rect, viewport),
            Self::Edge => edge_proximity(pointer, rect, viewport),
        }
    }
}

/// An on-screen element whose bounding box can be measured.
pub trait ProximityTarget {
    /// Current bounding rectangle, or `None` while the element is not mounted.
    fn bounding_rect(&self) -> Option<Rect>;
}

/// Binds a target element to a proximity → properties mapping.
pub struct ProximityEffect<E, M> {
    element: E,
    map: M,
    measure: ProximityMeasure,
}

impl<E, M> ProximityEffect<E, M>
where
    E: ProximityTarget,
    M: Fn(f64) -> TweenVars,
{
    pub fn new(element: E, map: M) -> Self {
        Self {
            element,
            map,
            measure: ProximityMeasure::Center,
        }
    }

    pub fn measured_by(mut self, measure: ProximityMeasure) -> Self {
        self.measure = measure;
        self
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Computes the current proximity and tweens the mapped properties.
    ///
    /// Returns the proximity, or `None` (doing nothing) if the element is not
    /// mounted.
    pub fn tick<T>(&self, pointer: Point, viewport: Viewport, tweener: &T) -> Option<f64>
    where
        T: Tweener<E> + ?Sized,
    {
        let rect = self.element.bounding_rect()?;
        let value = self.measure.proximity(pointer, &rect, viewport);
        let tween = Tween::new((self.map)(value))
            .duration(PROXIMITY_TWEEN_SECS)
            .easing(Easing::Power2Out);
        tweener.to(&self.element, &tween);
        Some(value)
    }

    /// Snaps the element to its far-away state without a tween.
    pub fn rest<T>(&self, tweener: &T)
    where
        T: Tweener<E> + ?Sized,
    {
        tweener.set(&self.element, &(self.map)(0.0));
    }
}

/// Runs `effect` on every animation frame.
///
/// With `reduced_motion` set the element is snapped to rest and `None` is
/// returned without scheduling anything. Otherwise the loop runs until the
/// returned handle is dropped. A preference change is handled by dropping
/// the handle and calling this again.
pub fn run_proximity_effect<E, M, T, V>(
    scheduler: Rc<dyn FrameScheduler>,
    effect: ProximityEffect<E, M>,
    tweener: Rc<T>,
    pointer: PointerBus,
    viewport: V,
    reduced_motion: bool,
) -> Option<FrameHandle>
where
    E: ProximityTarget + 'static,
    M: Fn(f64) -> TweenVars + 'static,
    T: Tweener<E> + ?Sized + 'static,
    V: Fn() -> Viewport + 'static,
{
    if reduced_motion {
        tracing::debug!("reduced motion requested, proximity effect disabled");
        effect.rest(tweener.as_ref());
        return None;
    }
    Some(start_frame_loop(scheduler, move |_| {
        effect.tick(pointer.state().position(), viewport(), tweener.as_ref());
        LoopControl::Continue
    }))
}
