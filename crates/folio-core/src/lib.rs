//! Folio Core Library
//!
//! Target-independent logic behind the portfolio site: pointer broadcast,
//! proximity effects, frame-loop handles, tweening, scroll reveals, the
//! decorative physics background and the GitHub contributions fallback.
//!
//! Nothing in this crate touches the DOM; the client crate provides the
//! browser implementations of [`frame::FrameScheduler`] and [`tween::Tweener`].

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod background;
pub mod config;
pub mod contact;
pub mod content;
pub mod contributions;
pub mod frame;
pub mod geometry;
pub mod physics;
pub mod pointer;
pub mod proximity;
pub mod reveal;
pub mod scroll;
pub mod tween;

pub use background::{FloatingScene, RenderProfile, RenderQuality};
pub use config::GithubConfig;
pub use contact::{ContactError, ContactField, ContactForm};
pub use contributions::{
    ContributionGrid, ContributionLevel, ContributionSource, Contributions, ContributionsError,
};
pub use frame::{FrameHandle, FrameId, FrameLimiter, FrameScheduler, LoopControl, start_frame_loop};
pub use geometry::{Point, Rect, Viewport, clamp, map_range};
pub use physics::{BackgroundWorld, PHYSICS_DT};
pub use pointer::{PointerBus, PointerEvent, PointerState, Subscription};
pub use proximity::{
    ProximityEffect, ProximityMeasure, ProximityTarget, edge_proximity, proximity,
    run_proximity_effect,
};
pub use reveal::{Reveal, RevealAction, RevealTrigger, TriggerRange};
pub use scroll::{NavbarMetrics, Throttle, ThrottleDecision, interpolate, scroll_progress};
pub use tween::{Easing, Rgb, Tween, TweenProperty, TweenValue, TweenVars, Tweener};
