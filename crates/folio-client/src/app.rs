//! Main application component.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::hooks::PointerProvider;
use crate::pages::{HomePage, NotFoundPage, PanicPage};
use crate::routes::Route;

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Panic => html! { <PanicPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Root application component with router.
///
/// The pointer provider sits above the router so every page shares one set
/// of window listeners.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <PointerProvider>
                <Switch<Route> render={switch} />
            </PointerProvider>
        </BrowserRouter>
    }
}
