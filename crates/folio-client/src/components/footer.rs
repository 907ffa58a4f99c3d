use folio_core::Reveal;
use folio_core::content::{PROFILE, footer_links};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::components::{ContentIcon, RevealBox};
use crate::util::current_year;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <RevealBox reveal={Reveal::fade_in(0.0)} class="footer-made-with">
                <span>{ "Made with" }</span>
                <Icon data={IconData::LUCIDE_HEART} width="16px" height="16px" />
                <span>{ format!("by {}", PROFILE.full_name) }</span>
            </RevealBox>
            <RevealBox reveal={Reveal::fade_in(0.2)} class="footer-links">
                { for footer_links().map(|link| html! {
                    <a
                        key={link.label}
                        href={link.href}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={link.label}
                    >
                        <ContentIcon icon={link.icon} />
                    </a>
                }) }
            </RevealBox>
            <p class="footer-copyright">
                { format!("© {} {}. All rights reserved.", current_year(), PROFILE.full_name) }
            </p>
        </footer>
    }
}
