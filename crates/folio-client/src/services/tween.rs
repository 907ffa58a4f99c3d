//! CSS-transition tween engine.
//!
//! Each tween writes a `transition` declaration covering the animated
//! properties followed by their end values; the browser interpolates.

use folio_core::{ProximityTarget, Rect, Tween, TweenVars, Tweener};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;
use yew::NodeRef;

use crate::util::dom_rect;

/// Applies tweens as inline styles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CssTweener;

fn transition(tween: &Tween, declarations: &[(&'static str, String)]) -> String {
    declarations
        .iter()
        .map(|(name, _)| {
            format!(
                "{name} {}s {} {}s",
                tween.duration,
                tween.easing.css(),
                tween.delay
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn write(element: &HtmlElement, transition: &str, declarations: &[(&'static str, String)]) {
    let style = element.style();
    if let Err(e) = style.set_property("transition", transition) {
        tracing::warn!("failed to set transition: {:?}", e);
    }
    for (name, value) in declarations {
        if let Err(e) = style.set_property(name, value) {
            tracing::warn!(property = name, "failed to set style: {:?}", e);
        }
    }
}

impl Tweener<HtmlElement> for CssTweener {
    fn to(&self, target: &HtmlElement, tween: &Tween) {
        let declarations = tween.vars.css_declarations();
        if declarations.is_empty() {
            return;
        }
        write(target, &transition(tween, &declarations), &declarations);
    }

    fn set(&self, target: &HtmlElement, vars: &TweenVars) {
        write(target, "none", &vars.css_declarations());
    }
}

/// A Yew node measured and animated through its `NodeRef`.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeTarget(pub NodeRef);

impl NodeTarget {
    pub fn element(&self) -> Option<HtmlElement> {
        self.0.cast::<HtmlElement>()
    }
}

impl ProximityTarget for NodeTarget {
    fn bounding_rect(&self) -> Option<Rect> {
        self.0
            .get()
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|element| dom_rect(&element))
    }
}

impl Tweener<NodeTarget> for CssTweener {
    fn to(&self, target: &NodeTarget, tween: &Tween) {
        if let Some(element) = target.element() {
            Tweener::<HtmlElement>::to(self, &element, tween);
        }
    }

    fn set(&self, target: &NodeTarget, vars: &TweenVars) {
        if let Some(element) = target.element() {
            Tweener::<HtmlElement>::set(self, &element, vars);
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_core::Easing;
    use wasm_bindgen_test::*;

    use super::*;

    fn element() -> HtmlElement {
        gloo::utils::document()
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_to_writes_transition_and_values() {
        let el = element();
        let tween = Tween::new(TweenVars::new().opacity(0.5).x(10.0))
            .duration(0.4)
            .easing(Easing::Power2Out);
        CssTweener.to(&el, &tween);

        let style = el.style();
        assert_eq!(style.get_property_value("opacity").unwrap(), "0.5");
        assert!(style.get_property_value("transform").unwrap().contains("translate(10px"));
        assert!(style.get_property_value("transition").unwrap().contains("0.4s"));
    }

    #[wasm_bindgen_test]
    fn test_set_disables_transition() {
        let el = element();
        CssTweener.set(&el, &TweenVars::new().opacity(1.0));
        assert_eq!(el.style().get_property_value("transition").unwrap(), "none");
        assert_eq!(el.style().get_property_value("opacity").unwrap(), "1");
    }

    #[wasm_bindgen_test]
    fn test_unmounted_node_has_no_rect() {
        let target = NodeTarget(NodeRef::default());
        assert!(target.bounding_rect().is_none());
        CssTweener.to(&target, &Tween::new(TweenVars::new().opacity(0.0)));
    }
}
