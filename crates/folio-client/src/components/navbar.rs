//! Fixed navigation bar that tightens as the page scrolls.

use folio_core::NavbarMetrics;
use folio_core::content::NAV_ITEMS;
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::components::ThemeToggle;
use crate::hooks::use_scroll_y;
use crate::util::scroll_to_section;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let is_open = use_state(|| false);
    let metrics = NavbarMetrics::from_scroll(use_scroll_y());

    let go_to = |section: &'static str| {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            scroll_to_section(section);
            is_open.set(false);
        })
    };

    let toggle_menu = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let links_style = format!("transform: scale({:.3});", metrics.link_scale);

    html! {
        <nav class="navbar" style={metrics.nav_style()}>
            <div class="navbar-inner">
                <div class="navbar-spacer"></div>
                <div class="navbar-links" style={links_style}>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <button key={item.section} class="nav-link" onclick={go_to(item.section)}>
                            { item.name }
                        </button>
                    }) }
                </div>
                <div class="navbar-actions">
                    <ThemeToggle />
                    <button
                        class="navbar-menu-btn"
                        aria-label="Toggle menu"
                        aria-expanded={is_open.to_string()}
                        onclick={toggle_menu}
                    >
                        if *is_open {
                            <Icon data={IconData::LUCIDE_X} width="22px" height="22px" />
                        } else {
                            <Icon data={IconData::LUCIDE_MENU} width="22px" height="22px" />
                        }
                    </button>
                </div>
            </div>
            if *is_open {
                <div class="navbar-mobile">
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <button key={item.section} class="nav-link" onclick={go_to(item.section)}>
                            { item.name }
                        </button>
                    }) }
                </div>
            }
        </nav>
    }
}
