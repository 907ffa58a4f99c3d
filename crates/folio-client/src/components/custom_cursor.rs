//! Dot and ring following the pointer.

use folio_core::background::CYAN_COLOR;
use folio_core::{Easing, PointerState, Rgb, Tween, TweenVars, Tweener};
use yew::prelude::*;

use crate::hooks::{use_pointer, use_reduced_motion};
use crate::services::{CssTweener, NodeTarget};

const IDLE_COLOR: Rgb = Rgb::new(255, 204, 0);
const ACTIVE_COLOR: Rgb = CYAN_COLOR;

/// Target styles for the dot and the ring.
fn cursor_vars(pointer: &PointerState) -> (TweenVars, TweenVars) {
    let (color, dot_scale, ring_scale, ring_opacity) = if pointer.is_active {
        (ACTIVE_COLOR, 1.2, 1.5, 0.5)
    } else {
        (IDLE_COLOR, 1.0, 1.0, 0.2)
    };
    let dot = TweenVars::new()
        .x(pointer.raw_x)
        .y(pointer.raw_y)
        .scale(dot_scale)
        .background_color(color);
    let ring = TweenVars::new()
        .x(pointer.raw_x)
        .y(pointer.raw_y)
        .scale(ring_scale)
        .border_color(color)
        .opacity(ring_opacity);
    (dot, ring)
}

#[function_component(CustomCursor)]
pub fn custom_cursor() -> Html {
    let pointer = use_pointer();
    let reduced = use_reduced_motion();
    let dot = use_node_ref();
    let ring = use_node_ref();

    {
        let dot = NodeTarget(dot.clone());
        let ring = NodeTarget(ring.clone());
        use_effect_with((pointer, reduced), move |(pointer, reduced)| {
            let (dot_vars, ring_vars) = cursor_vars(pointer);
            if *reduced {
                CssTweener.set(&dot, &dot_vars);
                CssTweener.set(&ring, &ring_vars);
            } else {
                CssTweener.to(
                    &dot,
                    &Tween::new(dot_vars).duration(0.2).easing(Easing::Power2Out),
                );
                CssTweener.to(
                    &ring,
                    &Tween::new(ring_vars).duration(0.3).easing(Easing::Power2Out),
                );
            }
        });
    }

    html! {
        <>
            <div ref={dot} class="cursor-dot" aria-hidden="true"></div>
            <div ref={ring} class="cursor-ring" aria-hidden="true"></div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use folio_core::TweenValue;
    use folio_core::tween::TweenProperty;
    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn test_pressed_cursor_is_emphasised() {
        let pressed = PointerState {
            raw_x: 10.0,
            raw_y: 20.0,
            is_active: true,
            ..PointerState::default()
        };
        let (dot, ring) = cursor_vars(&pressed);
        assert_eq!(dot.get(TweenProperty::Scale), Some(TweenValue::Number(1.2)));
        assert_eq!(dot.get(TweenProperty::BackgroundColor), Some(TweenValue::Color(ACTIVE_COLOR)));
        assert_eq!(ring.get(TweenProperty::Scale), Some(TweenValue::Number(1.5)));
        assert_eq!(ring.get(TweenProperty::X), Some(TweenValue::Number(10.0)));

        let (idle_dot, _) = cursor_vars(&PointerState::default());
        assert_eq!(idle_dot.get(TweenProperty::BackgroundColor), Some(TweenValue::Color(IDLE_COLOR)));
    }
}
