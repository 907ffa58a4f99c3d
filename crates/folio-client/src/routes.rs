//! Application routes.

use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    /// The portfolio itself; sections are anchors within it.
    #[at("/")]
    Home,
    /// Shown after a panic.
    #[at("/panic")]
    Panic,
    #[not_found]
    #[at("/404")]
    NotFound,
}
