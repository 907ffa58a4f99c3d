//! Scroll-triggered entrance animations.
//!
//! A [`RevealTrigger`] watches an element's bounding box as the page scrolls
//! and reports when the entrance animation should play or reverse.

use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Viewport};
use crate::tween::{Easing, Tween, TweenVars};

/// Trigger window expressed as fractions of the viewport height.
///
/// `start = 0.85` means "when the element's top crosses 85% of the viewport";
/// `end = 0.15` means "until the element's bottom passes 15%".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriggerRange {
    pub start: f64,
    pub end: f64,
}

impl Default for TriggerRange {
    fn default() -> Self {
        Self {
            start: 0.8,
            end: 0.2,
        }
    }
}

/// What to do with the entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealAction {
    Play,
    Reverse,
}

/// Tracks whether an element has scrolled into its trigger window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTrigger {
    range: TriggerRange,
    once: bool,
    played: bool,
    done: bool,
}

impl RevealTrigger {
    pub fn new(range: TriggerRange, once: bool) -> Self {
        Self {
            range,
            once,
            played: false,
            done: false,
        }
    }

    /// True once a `once` trigger has fired; no further updates matter.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Feeds the element's current rect. Plays when the top crosses the
    /// start line; reverses when scrolled back above it.
    pub fn update(&mut self, rect: &Rect, viewport: Viewport) -> Option<RevealAction> {
        if self.done {
            return None;
        }
        let start_line = viewport.height * self.range.start;
        let end_line = viewport.height * self.range.end;
        let entered = rect.top <= start_line && rect.bottom() >= end_line;
        // Leaving past the end line keeps the element shown; only scrolling
        // back above the start reverses ("play none none reverse").
        let left_back = rect.top > start_line;

        if entered && !self.played {
            self.played = true;
            if self.once {
                self.done = true;
            }
            return Some(RevealAction::Play);
        }
        if left_back && self.played {
            self.played = false;
            return Some(RevealAction::Reverse);
        }
        None
    }
}

/// An entrance animation: the hidden starting state, the shown end state
/// and when to trigger it.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    pub hidden: TweenVars,
    pub shown: Tween,
    pub range: TriggerRange,
    pub once: bool,
}

impl Reveal {
    /// Fade in while rising 20px; "top 85%" to "bottom 15%".
    pub fn fade_in_up(delay: f64) -> Self {
        Self {
            hidden: TweenVars::new().opacity(0.0).y(20.0),
            shown: Tween::new(TweenVars::new().opacity(1.0).y(0.0))
                .duration(0.8)
                .delay(delay)
                .easing(Easing::Power3Out),
            range: TriggerRange {
                start: 0.85,
                end: 0.15,
            },
            once: true,
        }
    }

    /// Grow from 80% with a slight overshoot; "top 90%" to "bottom 10%".
    pub fn scale_in(delay: f64) -> Self {
        Self {
            hidden: TweenVars::new().opacity(0.0).scale(0.8),
            shown: Tween::new(TweenVars::new().opacity(1.0).scale(1.0))
                .duration(0.8)
                .delay(delay)
                .easing(Easing::BACK_OUT),
            range: TriggerRange {
                start: 0.9,
                end: 0.1,
            },
            once: true,
        }
    }

    /// Plain opacity fade.
    pub fn fade_in(delay: f64) -> Self {
        Self {
            hidden: TweenVars::new().opacity(0.0),
            shown: Tween::new(TweenVars::new().opacity(1.0))
                .duration(0.6)
                .delay(delay)
                .easing(Easing::EaseOut),
            range: TriggerRange::default(),
            once: true,
        }
    }

    /// Slide in horizontally from `offset` pixels.
    pub fn slide_in(offset: f64, delay: f64) -> Self {
        Self {
            hidden: TweenVars::new().opacity(0.0).x(offset),
            shown: Tween::new(TweenVars::new().opacity(1.0).x(0.0))
                .duration(0.8)
                .delay(delay)
                .easing(Easing::Power2Out),
            range: TriggerRange::default(),
            once: true,
        }
    }

    /// Same animation, replaying in reverse when scrolled back.
    pub fn repeating(mut self) -> Self {
        self.once = false;
        self
    }

    pub fn trigger(&self) -> RevealTrigger {
        RevealTrigger::new(self.range, self.once)
    }
}

/// Start delays for `count` staggered items.
pub fn stagger_delays(count: usize, delay: f64, stagger: f64) -> Vec<f64> {
    (0..count)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let i = i as f64;
            delay + i * stagger
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1000.0, 1000.0);

    fn at(top: f64) -> Rect {
        Rect::new(0.0, top, 100.0, 200.0)
    }

    #[test]
    fn test_plays_when_top_crosses_start() {
        let mut trigger = RevealTrigger::new(TriggerRange::default(), false);
        assert_eq!(trigger.update(&at(1_200.0), VIEWPORT), None);
        assert_eq!(trigger.update(&at(850.0), VIEWPORT), None);
        assert_eq!(trigger.update(&at(790.0), VIEWPORT), Some(RevealAction::Play));
        assert_eq!(trigger.update(&at(500.0), VIEWPORT), None);
    }

    #[test]
    fn test_reverses_when_scrolled_back() {
        let mut trigger = RevealTrigger::new(TriggerRange::default(), false);
        trigger.update(&at(700.0), VIEWPORT);
        // Scrolling far past keeps it shown.
        assert_eq!(trigger.update(&at(-500.0), VIEWPORT), None);
        assert_eq!(trigger.update(&at(900.0), VIEWPORT), Some(RevealAction::Reverse));
        assert_eq!(trigger.update(&at(700.0), VIEWPORT), Some(RevealAction::Play));
    }

    #[test]
    fn test_once_fires_a_single_time() {
        let mut trigger = RevealTrigger::new(TriggerRange::default(), true);
        assert_eq!(trigger.update(&at(100.0), VIEWPORT), Some(RevealAction::Play));
        assert!(trigger.is_done());
        assert_eq!(trigger.update(&at(900.0), VIEWPORT), None);
        assert_eq!(trigger.update(&at(100.0), VIEWPORT), None);
    }

    #[test]
    fn test_element_already_scrolled_past_does_not_play() {
        let mut trigger = RevealTrigger::new(TriggerRange::default(), false);
        // Bottom above the end line.
        assert_eq!(trigger.update(&at(-400.0), VIEWPORT), None);
    }

    #[test]
    fn test_presets() {
        let fade = Reveal::fade_in_up(0.2);
        assert_eq!(fade.shown.delay, 0.2);
        assert_eq!(fade.range.start, 0.85);
        assert!(fade.once);
        assert!(!fade.clone().repeating().once);

        let scale = Reveal::scale_in(0.0);
        assert_eq!(scale.shown.easing, Easing::BACK_OUT);
    }

    #[test]
    fn test_repeating_presets_replay() {
        for reveal in [
            Reveal::scale_in(0.0).repeating(),
            Reveal::slide_in(-40.0, 0.0).repeating(),
        ] {
            let start_line = VIEWPORT.height * reveal.range.start;
            let mut trigger = reveal.trigger();
            assert_eq!(trigger.update(&at(start_line - 10.0), VIEWPORT), Some(RevealAction::Play));
            assert_eq!(trigger.update(&at(start_line + 10.0), VIEWPORT), Some(RevealAction::Reverse));
            assert_eq!(trigger.update(&at(start_line - 10.0), VIEWPORT), Some(RevealAction::Play));
            assert!(!trigger.is_done());
        }
    }

    #[test]
    fn test_stagger_delays() {
        assert_eq!(stagger_delays(3, 0.5, 0.1).len(), 3);
        let delays = stagger_delays(4, 0.0, 0.25);
        assert_eq!(delays, vec![0.0, 0.25, 0.5, 0.75]);
        assert!(stagger_delays(0, 1.0, 1.0).is_empty());
    }
}
