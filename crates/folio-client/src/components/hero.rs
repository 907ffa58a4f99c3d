//! Intro section: portrait, name, about text, status and links.

use folio_core::content::{PROFILE, SOCIAL_LINKS};
use folio_core::{Reveal, Tween, TweenVars, Tweener};
use gloo::timers::callback::Timeout;
use yew::prelude::*;

use crate::components::{ContentIcon, ProximityBox, RevealBox};
use crate::hooks::{ProximityStyle, use_reduced_motion};
use crate::services::{CssTweener, NodeTarget};

/// Slides the portrait and heading in on mount, independent of scroll.
#[hook]
fn use_entrance(node: NodeRef, from_x: f64, delay: f64) {
    let reduced = use_reduced_motion();
    use_effect_with(reduced, move |&reduced| {
        let target = NodeTarget(node);
        let shown = TweenVars::new().opacity(1.0).x(0.0);
        let pending = if reduced {
            CssTweener.set(&target, &shown);
            None
        } else {
            CssTweener.set(&target, &TweenVars::new().opacity(0.0).x(from_x));
            // Let the hidden state paint before transitioning away from it.
            Some(Timeout::new(16, move || {
                CssTweener.to(&target, &Tween::new(shown).duration(0.8).delay(delay));
            }))
        };
        move || drop(pending)
    });
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let image_failed = use_state(|| false);
    let portrait = use_node_ref();
    let heading = use_node_ref();
    use_entrance(portrait.clone(), -20.0, 0.0);
    use_entrance(heading.clone(), 20.0, 0.2);

    let on_image_error = {
        let image_failed = image_failed.clone();
        Callback::from(move |_: Event| {
            tracing::warn!(src = PROFILE.image, "profile image failed to load");
            image_failed.set(true);
        })
    };

    html! {
        <section id="home" class="hero">
            <div class="hero-top">
                <div class="hero-portrait" ref={portrait}>
                    <div class="hero-portrait-frame">
                        if *image_failed {
                            <div class="hero-initials">{ PROFILE.initials }</div>
                        } else {
                            <img
                                src={PROFILE.image}
                                alt={PROFILE.full_name}
                                width="192"
                                height="192"
                                onerror={on_image_error}
                            />
                        }
                    </div>
                    <span class="hero-online-dot"></span>
                </div>
                <div class="hero-heading" ref={heading}>
                    <h1>
                        { PROFILE.first_name }{ " " }
                        <span class="gradient-text">{ PROFILE.last_name }</span>
                    </h1>
                    <div class="hero-title"><span class="gradient-text">{ PROFILE.title }</span></div>
                    <p class="hero-location">{ PROFILE.location }</p>
                </div>
            </div>

            <div class="hero-details">
                <RevealBox reveal={Reveal::fade_in_up(0.4)}>
                    <ProximityBox style={ProximityStyle::Focus} class="hero-about">
                        <h2>{ "About" }</h2>
                        <p>{ PROFILE.about }</p>
                    </ProximityBox>
                </RevealBox>

                <RevealBox reveal={Reveal::fade_in_up(0.6)} class="hero-status">
                    <div>
                        <h3>{ "STATUS" }</h3>
                        <ul class="hero-status-list">
                            { for PROFILE.status.iter().map(|status| html! {
                                <li><span class="status-dot"></span>{ *status }</li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h3>{ "FOCUS" }</h3>
                        <ul class="hero-focus-list">
                            { for PROFILE.focus.iter().map(|focus| html! {
                                <li><span class="gradient-text">{ *focus }</span></li>
                            }) }
                        </ul>
                    </div>
                    <div class="hero-links">
                        { for SOCIAL_LINKS.iter().map(|link| html! {
                            <a
                                href={link.href}
                                title={link.label}
                                aria-label={link.label}
                                target={link.opens_new_tab().then_some("_blank")}
                                rel={link.opens_new_tab().then_some("noopener noreferrer")}
                            >
                                <ContentIcon icon={link.icon} />
                            </a>
                        }) }
                    </div>
                </RevealBox>
            </div>
        </section>
    }
}
