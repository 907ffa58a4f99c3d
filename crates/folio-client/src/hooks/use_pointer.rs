//! Root-scoped pointer broadcast.
//!
//! [`PointerProvider`] owns the only `mousemove`/`mousedown`/`mouseup`
//! listeners on the window and publishes through a [`PointerBus`] context.

use folio_core::{PointerBus, PointerEvent, PointerState};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::util::window_viewport;

#[derive(Properties, PartialEq)]
pub struct PointerProviderProps {
    pub children: Children,
}

#[function_component(PointerProvider)]
pub fn pointer_provider(props: &PointerProviderProps) -> Html {
    let bus = use_memo((), |()| PointerBus::new());

    {
        let bus = (*bus).clone();
        use_effect_with((), move |()| {
            let listeners = web_sys::window().map(|window| {
                let on_move = {
                    let bus = bus.clone();
                    EventListener::new(&window, "mousemove", move |event| {
                        let Some(event) = event.dyn_ref::<web_sys::MouseEvent>() else {
                            return;
                        };
                        bus.dispatch(
                            PointerEvent::Move {
                                client_x: f64::from(event.client_x()),
                                client_y: f64::from(event.client_y()),
                            },
                            window_viewport(),
                        );
                    })
                };
                let on_down = {
                    let bus = bus.clone();
                    EventListener::new(&window, "mousedown", move |_| {
                        bus.dispatch(PointerEvent::Down, window_viewport());
                    })
                };
                let on_up = EventListener::new(&window, "mouseup", move |_| {
                    bus.dispatch(PointerEvent::Up, window_viewport());
                });
                [on_move, on_down, on_up]
            });
            tracing::debug!("pointer listeners installed");
            move || drop(listeners)
        });
    }

    html! {
        <ContextProvider<PointerBus> context={(*bus).clone()}>
            {props.children.clone()}
        </ContextProvider<PointerBus>>
    }
}

/// The shared bus, without subscribing to changes.
/// Panics if no `PointerProvider` ancestor.
#[hook]
pub fn use_pointer_bus() -> PointerBus {
    use_context::<PointerBus>().expect("use_pointer_bus: PointerProvider not found")
}

/// Latest pointer state; the component re-renders on every change.
#[hook]
pub fn use_pointer() -> PointerState {
    let bus = use_pointer_bus();
    let state = use_state(|| bus.state());
    {
        let setter = state.setter();
        use_effect_with(bus, move |bus| {
            let subscription = bus.subscribe(move |pointer| setter.set(*pointer));
            move || drop(subscription)
        });
    }
    *state
}
