//! Pointer-proximity animation bound to a node.

use std::rc::Rc;

use folio_core::{ProximityEffect, ProximityMeasure, TweenVars, run_proximity_effect};
use yew::prelude::*;

use crate::hooks::{use_pointer_bus, use_reduced_motion};
use crate::services::{CssTweener, NodeTarget, RafScheduler};
use crate::util::window_viewport;

/// Tweens `node` every frame with `map(proximity)`, measuring closeness with
/// `measure`.
///
/// Nothing is scheduled while reduced motion is preferred; switching the
/// preference on stops the loop and snaps the node to `map(0.0)`. The loop
/// is cancelled on unmount.
#[hook]
pub fn use_proximity<M>(node: NodeRef, measure: ProximityMeasure, map: M)
where
    M: Fn(f64) -> TweenVars + 'static,
{
    let bus = use_pointer_bus();
    let reduced = use_reduced_motion();

    use_effect_with(reduced, move |&reduced| {
        let handle = run_proximity_effect(
            RafScheduler::shared(),
            ProximityEffect::new(NodeTarget(node), map).measured_by(measure),
            Rc::new(CssTweener),
            bus,
            window_viewport,
            reduced,
        );
        move || drop(handle)
    });
}

/// Named proximity mappings used across the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityStyle {
    /// Slight zoom and skew as the pointer nears the section.
    Focus,
    /// Drifts up and left, away from the pointer.
    Drift,
    /// Lifts the element towards the viewer, fully once the pointer is over it.
    Lift,
}

impl ProximityStyle {
    pub fn measure(self) -> ProximityMeasure {
        match self {
            Self::Focus | Self::Drift => ProximityMeasure::Center,
            Self::Lift => ProximityMeasure::Edge,
        }
    }

    pub fn vars(self, proximity: f64) -> TweenVars {
        match self {
            Self::Focus => TweenVars::new()
                .scale(1.0 + proximity * 0.01)
                .skew_x(proximity * 2.0)
                .skew_y(proximity * 2.0),
            Self::Drift => TweenVars::new().x(-proximity * 20.0).y(-proximity * 20.0),
            Self::Lift => TweenVars::new()
                .y(-proximity * 8.0)
                .scale(1.0 + proximity * 0.03),
        }
    }
}
