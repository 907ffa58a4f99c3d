//! Error page shown after an unrecoverable panic.
//!
//! Yew has no component-level error boundary, so the whole page is
//! replaced: the panic hook stores the message and navigates here.

use gloo::storage::{LocalStorage, Storage};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

const PANIC_INFO_KEY: &str = "$folio$/panic-info";

fn take_panic_info() -> Option<String> {
    let info = LocalStorage::get::<String>(PANIC_INFO_KEY).ok();
    LocalStorage::delete(PANIC_INFO_KEY);
    info
}

/// Installs a panic hook that records the panic message and redirects to
/// the error page.
pub fn set_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map_or_else(
            || "unknown location".to_string(),
            |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
        );
        let message = format!("{info}\n\nLocation: {location}");

        console_error_panic_hook::hook(info);

        record_and_redirect(
            &message,
            |message| LocalStorage::set(PANIC_INFO_KEY, message).is_ok(),
            redirect_to_panic_page,
        );
    }));
}

/// Stores the message, then redirects. A failed store still redirects; the
/// page then shows without details.
fn record_and_redirect(
    message: &str,
    store: impl FnOnce(&str) -> bool,
    redirect: impl FnOnce(),
) {
    if !store(message) {
        tracing::warn!("panic details could not be stored");
    }
    redirect();
}

fn redirect_to_panic_page() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_pathname("/panic");
    }
}

#[function_component(PanicPage)]
pub fn panic_page() -> Html {
    let panic_info = use_state(take_panic_info);

    html! {
        <main class="page panic-page">
            <h1>{ "Something went wrong." }</h1>
            if let Some(info) = &*panic_info {
                <pre class="panic-details">{ info }</pre>
            } else {
                <p class="panic-cleared">{ "No error details were recorded." }</p>
            }
            <Link<Route> to={Route::Home} classes="btn-primary">
                { "Back to home" }
            </Link<Route>>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use wasm_bindgen_test::*;

    use super::*;

    #[wasm_bindgen_test]
    fn test_redirects_when_storage_fails() {
        let redirected = Cell::new(false);
        record_and_redirect("boom", |_| false, || redirected.set(true));
        assert!(redirected.get());
    }

    #[wasm_bindgen_test]
    fn test_stored_details_are_taken_once() {
        let redirected = Cell::new(false);
        record_and_redirect(
            "boom",
            |message| LocalStorage::set(PANIC_INFO_KEY, message).is_ok(),
            || redirected.set(true),
        );
        assert!(redirected.get());
        assert_eq!(take_panic_info().as_deref(), Some("boom"));
        assert_eq!(take_panic_info(), None);
    }
}
