//! Scroll-driven values: navbar shrinking, page progress, throttling.

use crate::geometry::{clamp, map_range};

/// Maps `value` from `input` onto `output`, clamping to the output range.
pub fn interpolate(value: f64, input: [f64; 2], output: [f64; 2]) -> f64 {
    let mapped = map_range(value, input[0], input[1], output[0], output[1]);
    let (lo, hi) = if output[0] <= output[1] {
        (output[0], output[1])
    } else {
        (output[1], output[0])
    };
    clamp(mapped, lo, hi)
}

/// Scroll distance over which the navbar collapses, in pixels.
pub const NAVBAR_COLLAPSE_PX: f64 = 100.0;

/// Navbar geometry for a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavbarMetrics {
    pub height: f64,
    pub padding: f64,
    pub link_scale: f64,
    pub border_radius: f64,
}

impl NavbarMetrics {
    pub fn from_scroll(scroll_y: f64) -> Self {
        let range = [0.0, NAVBAR_COLLAPSE_PX];
        Self {
            height: interpolate(scroll_y, range, [80.0, 60.0]),
            padding: interpolate(scroll_y, range, [16.0, 8.0]),
            link_scale: interpolate(scroll_y, range, [1.0, 0.8]),
            border_radius: interpolate(scroll_y, range, [0.0, 12.0]),
        }
    }

    /// Inline style for the `<nav>` element.
    pub fn nav_style(&self) -> String {
        format!(
            "height: {:.1}px; padding-top: {:.1}px; padding-bottom: {:.1}px; border-radius: {:.1}px;",
            self.height, self.padding, self.padding, self.border_radius
        )
    }
}

/// Fraction of the page scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, viewport_height: f64, document_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    clamp(scroll_y / scrollable, 0.0, 1.0)
}

/// What a throttled caller should do with an event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Handle it now.
    Run,
    /// Inside the window: arrange one trailing call after `wait_ms`, then
    /// call [`Throttle::flush`].
    Schedule { wait_ms: f64 },
    /// Inside the window with a trailing call already arranged.
    Skip,
}

/// Leading-edge throttle with a trailing call, so the last event of a
/// burst is never lost.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Throttle {
    limit_ms: f64,
    open_at: Option<f64>,
    trailing: bool,
}

impl Throttle {
    pub fn new(limit_ms: f64) -> Self {
        Self {
            limit_ms,
            open_at: None,
            trailing: false,
        }
    }

    pub fn acquire(&mut self, now: f64) -> ThrottleDecision {
        match self.open_at {
            Some(open_at) if now < open_at => {
                if self.trailing {
                    ThrottleDecision::Skip
                } else {
                    self.trailing = true;
                    ThrottleDecision::Schedule {
                        wait_ms: open_at - now,
                    }
                }
            }
            _ => {
                self.open_at = Some(now + self.limit_ms);
                self.trailing = false;
                ThrottleDecision::Run
            }
        }
    }

    /// Runs the arranged trailing call. Returns false when a leading call
    /// already handled the burst in the meantime.
    pub fn flush(&mut self, now: f64) -> bool {
        if !self.trailing {
            return false;
        }
        self.trailing = false;
        self.open_at = Some(now + self.limit_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate_clamps() {
        assert_eq!(interpolate(-50.0, [0.0, 100.0], [80.0, 60.0]), 80.0);
        assert_eq!(interpolate(50.0, [0.0, 100.0], [80.0, 60.0]), 70.0);
        assert_eq!(interpolate(500.0, [0.0, 100.0], [80.0, 60.0]), 60.0);
    }

    #[test]
    fn test_navbar_metrics() {
        let top = NavbarMetrics::from_scroll(0.0);
        assert_eq!(top.height, 80.0);
        assert_eq!(top.link_scale, 1.0);
        assert_eq!(top.border_radius, 0.0);

        let collapsed = NavbarMetrics::from_scroll(2_000.0);
        assert_eq!(collapsed.height, 60.0);
        assert_eq!(collapsed.padding, 8.0);
        assert!((collapsed.link_scale - 0.8).abs() < 1e-9);
        assert_eq!(collapsed.border_radius, 12.0);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 2_800.0), 0.0);
        assert_eq!(scroll_progress(1_000.0, 800.0, 2_800.0), 0.5);
        assert_eq!(scroll_progress(5_000.0, 800.0, 2_800.0), 1.0);
        // Page shorter than the viewport.
        assert_eq!(scroll_progress(10.0, 800.0, 600.0), 0.0);
    }

    #[test]
    fn test_throttle_window() {
        let mut throttle = Throttle::new(16.0);
        assert_eq!(throttle.acquire(0.0), ThrottleDecision::Run);
        assert_eq!(
            throttle.acquire(5.0),
            ThrottleDecision::Schedule { wait_ms: 11.0 }
        );
        assert_eq!(throttle.acquire(15.9), ThrottleDecision::Skip);
        assert!(throttle.flush(16.0));
        assert!(!throttle.flush(16.5));
        assert_eq!(throttle.acquire(32.0), ThrottleDecision::Run);
    }

    #[test]
    fn test_scroll_burst_ends_on_last_offset() {
        // 120 Hz scroll events that stop inside the first window.
        let events = [(0.0, 40.0), (8.3, 100.0)];
        let mut throttle = Throttle::new(16.0);
        let mut rendered = 0.0;
        let mut latest = 0.0;
        let mut trailing_at = None;
        for (now, offset) in events {
            latest = offset;
            match throttle.acquire(now) {
                ThrottleDecision::Run => rendered = latest,
                ThrottleDecision::Schedule { wait_ms } => trailing_at = Some(now + wait_ms),
                ThrottleDecision::Skip => {}
            }
        }
        assert_eq!(rendered, 40.0);

        let at = trailing_at.expect("trailing call arranged");
        if throttle.flush(at) {
            rendered = latest;
        }
        assert_eq!(rendered, 100.0);
        assert_eq!(NavbarMetrics::from_scroll(rendered).height, 60.0);
    }

    #[test]
    fn test_leading_call_cancels_stale_trailing() {
        let mut throttle = Throttle::new(16.0);
        throttle.acquire(0.0);
        assert!(matches!(throttle.acquire(4.0), ThrottleDecision::Schedule { .. }));
        // The timer fired late; a new event already ran.
        assert_eq!(throttle.acquire(40.0), ThrottleDecision::Run);
        assert!(!throttle.flush(41.0));
    }
}
