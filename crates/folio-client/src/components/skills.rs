use folio_core::Reveal;
use folio_core::content::SKILLS;
use yew::prelude::*;

use crate::components::{ContentIcon, RevealBox};

#[function_component(Skills)]
pub fn skills() -> Html {
    html! {
        <section id="skills" class="section skills">
            <h2 class="section-title centered">{ "Skills & Technologies" }</h2>
            <div class="skill-categories">
                { for SKILLS.iter().enumerate().map(|(index, category)| {
                    // Alternate sides so the list zig-zags in.
                    let offset = if index % 2 == 0 { -40.0 } else { 40.0 };
                    html! {
                        <RevealBox key={category.title} reveal={Reveal::slide_in(offset, 0.0).repeating()} class="skill-category">
                            <div class="skill-category-header">
                                <ContentIcon icon={category.icon} size="24px" />
                                <h3>{ category.title }</h3>
                            </div>
                            <div class="tag-list">
                                { for category.skills.iter().map(|skill| html! {
                                    <span key={*skill} class="tag">{ *skill }</span>
                                }) }
                            </div>
                        </RevealBox>
                    }
                }) }
            </div>
        </section>
    }
}
