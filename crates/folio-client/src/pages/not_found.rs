//! 404 Not Found page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="page not-found-page">
            <h1>{ "404" }</h1>
            <p>{ "This page does not exist." }</p>
            <Link<Route> to={Route::Home}>{ "Go to Home" }</Link<Route>>
        </main>
    }
}
