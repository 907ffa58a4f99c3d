//! Wrappers that attach the reveal and proximity hooks to a `<div>`.
//!
//! Hooks cannot run inside loops, so list items animate through these.

use folio_core::Reveal;
use yew::prelude::*;

use crate::hooks::{ProximityStyle, use_proximity, use_reveal};

#[derive(Properties, PartialEq)]
pub struct RevealBoxProps {
    pub reveal: Reveal,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    pub children: Children,
}

#[function_component(RevealBox)]
pub fn reveal_box(props: &RevealBoxProps) -> Html {
    let node = use_node_ref();
    use_reveal(node.clone(), props.reveal.clone());

    html! {
        <div ref={node} id={props.id.clone()} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProximityBoxProps {
    pub style: ProximityStyle,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

#[function_component(ProximityBox)]
pub fn proximity_box(props: &ProximityBoxProps) -> Html {
    let node = use_node_ref();
    let style = props.style;
    use_proximity(node.clone(), style.measure(), move |proximity| {
        style.vars(proximity)
    });

    html! {
        <div ref={node} class={props.class.clone()}>
            { for props.children.iter() }
        </div>
    }
}
