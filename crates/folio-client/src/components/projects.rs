use folio_core::content::PROJECTS;
use folio_core::{Reveal, reveal::stagger_delays};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::components::{ContentIcon, ProximityBox, RevealBox};
use crate::hooks::ProximityStyle;

#[function_component(Projects)]
pub fn projects() -> Html {
    let delays = stagger_delays(PROJECTS.len(), 0.0, 0.15);

    html! {
        <section id="projects" class="section projects">
            <h2 class="section-title centered">{ "Featured Projects" }</h2>
            <div class="project-grid">
                { for PROJECTS.iter().zip(delays).map(|(project, delay)| html! {
                    <RevealBox key={project.title} reveal={Reveal::scale_in(delay).repeating()}>
                        <ProximityBox style={ProximityStyle::Lift} class="project-card">
                            <div class="project-banner">
                                <ContentIcon icon={project.icon} size="48px" />
                                <span class="project-category">{ project.category }</span>
                            </div>
                            <div class="project-body">
                                <h3>{ project.title }</h3>
                                <p>{ project.description }</p>
                                <div class="tag-list">
                                    { for project.technologies.iter().map(|tech| html! {
                                        <span key={*tech} class="tag">{ *tech }</span>
                                    }) }
                                </div>
                                <h4>{ "Key Features:" }</h4>
                                <ul class="project-features">
                                    { for project.highlights().iter().map(|feature| html! {
                                        <li>{ *feature }</li>
                                    }) }
                                </ul>
                                <a
                                    class="btn-primary"
                                    href={project.repository}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <Icon data={IconData::LUCIDE_GITHUB} width="16px" height="16px" />
                                    { "View Code" }
                                </a>
                            </div>
                        </ProximityBox>
                    </RevealBox>
                }) }
            </div>
        </section>
    }
}
