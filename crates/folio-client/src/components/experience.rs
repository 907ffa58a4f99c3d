use folio_core::content::EXPERIENCE;
use folio_core::{Reveal, reveal::stagger_delays};
use yew::prelude::*;

use crate::components::{ContentIcon, ProximityBox, RevealBox};
use crate::hooks::ProximityStyle;

#[function_component(Experience)]
pub fn experience() -> Html {
    let delays = stagger_delays(EXPERIENCE.len(), 0.0, 0.1);

    html! {
        <section id="experience" class="section experience">
            <RevealBox reveal={Reveal::fade_in_up(0.0)}>
                <h2 class="section-title">
                    { "Professional " }<span class="gradient-text">{ "Experience" }</span>
                </h2>
            </RevealBox>
            <div class="timeline">
                { for EXPERIENCE.iter().zip(delays).map(|(exp, delay)| html! {
                    <RevealBox key={exp.company} reveal={Reveal::fade_in_up(delay)} class="timeline-entry">
                        <div class="timeline-icon">
                            <ContentIcon icon={exp.icon} size="24px" />
                        </div>
                        <ProximityBox style={ProximityStyle::Drift} class="timeline-body">
                            <div class="timeline-header">
                                <h3>{ exp.company }</h3>
                                <span class="timeline-period">{ exp.period }</span>
                            </div>
                            <p class="timeline-role">{ exp.role }</p>
                            <p class="timeline-description">{ exp.description }</p>
                        </ProximityBox>
                    </RevealBox>
                }) }
            </div>
        </section>
    }
}
