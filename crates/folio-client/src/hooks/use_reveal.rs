use std::cell::RefCell;

use folio_core::{ProximityTarget, Reveal, RevealAction, Tween, Tweener};
use gloo::events::EventListener;
use yew::prelude::*;

use crate::hooks::use_reduced_motion;
use crate::services::{CssTweener, NodeTarget};
use crate::util::window_viewport;

/// Plays `reveal` when `node` scrolls into its trigger window.
///
/// With reduced motion the shown state is applied at once and no scroll
/// listener is installed.
#[hook]
pub fn use_reveal(node: NodeRef, reveal: Reveal) {
    let reduced = use_reduced_motion();

    use_effect_with(reduced, move |&reduced| {
        let target = NodeTarget(node);
        let listener = if reduced {
            CssTweener.set(&target, &reveal.shown.vars);
            None
        } else {
            CssTweener.set(&target, &reveal.hidden);
            let hide = Tween::new(reveal.hidden.clone())
                .duration(reveal.shown.duration)
                .easing(reveal.shown.easing);
            let trigger = RefCell::new(reveal.trigger());
            let check = move || {
                let Some(rect) = target.bounding_rect() else {
                    return;
                };
                let action = trigger.borrow_mut().update(&rect, window_viewport());
                match action {
                    Some(RevealAction::Play) => CssTweener.to(&target, &reveal.shown),
                    Some(RevealAction::Reverse) => CssTweener.to(&target, &hide),
                    None => {}
                }
            };
            // Elements already on screen play without waiting for a scroll.
            check();
            web_sys::window().map(|window| EventListener::new(&window, "scroll", move |_| check()))
        };
        move || drop(listener)
    });
}
