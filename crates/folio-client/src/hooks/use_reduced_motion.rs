use gloo::events::EventListener;
use web_sys::MediaQueryList;
use yew::prelude::*;

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

fn media_query() -> Option<MediaQueryList> {
    web_sys::window()?.match_media(REDUCED_MOTION_QUERY).ok()?
}

/// Current reduced-motion preference.
pub fn prefers_reduced_motion() -> bool {
    media_query().is_some_and(|query| query.matches())
}

/// Reduced-motion preference, updated when the user changes it.
#[hook]
pub fn use_reduced_motion() -> bool {
    let reduced = use_state(prefers_reduced_motion);
    {
        let setter = reduced.setter();
        use_effect_with((), move |()| {
            let listener = media_query().map(|query| {
                let source = query.clone();
                EventListener::new(&query, "change", move |_| {
                    let matches = source.matches();
                    tracing::info!(reduced_motion = matches, "motion preference changed");
                    setter.set(matches);
                })
            });
            move || drop(listener)
        });
    }
    *reduced
}
