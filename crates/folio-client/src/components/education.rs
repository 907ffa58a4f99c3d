use folio_core::Reveal;
use folio_core::content::EDUCATION;
use yew::prelude::*;

use crate::components::{ContentIcon, RevealBox};

#[function_component(Education)]
pub fn education() -> Html {
    html! {
        <section id="education" class="section education">
            <RevealBox reveal={Reveal::fade_in_up(0.0)}>
                <h2 class="section-title">
                    { "Educational " }<span class="gradient-text">{ "Background" }</span>
                </h2>
            </RevealBox>
            <div class="timeline">
                { for EDUCATION.iter().enumerate().map(|(index, edu)| {
                    #[allow(clippy::cast_precision_loss)]
                    let delay = index as f64 * 0.1;
                    html! {
                        <RevealBox key={edu.institution} reveal={Reveal::fade_in_up(delay)} class="timeline-entry">
                            <div class="timeline-icon">
                                if let Some(logo) = edu.logo {
                                    <img src={logo} alt={format!("{} logo", edu.institution)} width="28" height="28" />
                                } else {
                                    <ContentIcon icon={edu.icon} size="24px" />
                                }
                            </div>
                            <div class="timeline-body">
                                <div class="timeline-header">
                                    <h3>{ edu.institution }</h3>
                                    <span class="timeline-period">{ edu.period }</span>
                                </div>
                                <p class="timeline-role">{ edu.degree }</p>
                                <p class="timeline-description">{ edu.description }</p>
                            </div>
                        </RevealBox>
                    }
                }) }
            </div>
        </section>
    }
}
