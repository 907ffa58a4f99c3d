use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{Throttle, ThrottleDecision, scroll_progress};
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::util::{document_height, now_ms, scroll_y, window_viewport};

/// Minimum spacing between scroll-driven re-renders, in milliseconds.
const SCROLL_THROTTLE_MS: f64 = 16.0;

/// Vertical scroll offset, re-rendering at most once per frame interval.
/// The last event of a burst is delivered once the interval closes.
#[hook]
pub fn use_scroll_y() -> f64 {
    let offset = use_state(scroll_y);
    {
        let setter = offset.setter();
        use_effect_with((), move |()| {
            let throttle = Rc::new(RefCell::new(Throttle::new(SCROLL_THROTTLE_MS)));
            let trailing: Rc<RefCell<Option<Timeout>>> = Rc::default();
            let listener = {
                let trailing = trailing.clone();
                web_sys::window().map(|window| {
                    EventListener::new(&window, "scroll", move |_| {
                        let decision = throttle.borrow_mut().acquire(now_ms());
                        match decision {
                            ThrottleDecision::Run => setter.set(scroll_y()),
                            ThrottleDecision::Schedule { wait_ms } => {
                                let throttle = throttle.clone();
                                let setter = setter.clone();
                                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                                let wait = wait_ms.ceil() as u32;
                                *trailing.borrow_mut() = Some(Timeout::new(wait, move || {
                                    if throttle.borrow_mut().flush(now_ms()) {
                                        setter.set(scroll_y());
                                    }
                                }));
                            }
                            ThrottleDecision::Skip => {}
                        }
                    })
                })
            };
            move || {
                drop(listener);
                trailing.borrow_mut().take();
            }
        });
    }
    *offset
}

/// Page scroll progress in `[0, 1]`, read on demand.
pub fn current_scroll_progress() -> f64 {
    scroll_progress(scroll_y(), window_viewport().height, document_height())
}
