//! Contribution calendar with a sample-data fallback.

use folio_core::content::GITHUB_URL;
use folio_core::{ContributionLevel, Contributions, Reveal};
use yew::prelude::*;
use yew_icons::{Icon, IconData};

use crate::components::RevealBox;
use crate::hooks::{ContributionsState, use_contributions};
use crate::services::github_config;

#[derive(Properties, PartialEq)]
struct CalendarProps {
    login: AttrValue,
    children: Children,
}

#[function_component(Calendar)]
fn calendar(props: &CalendarProps) -> Html {
    html! {
        <div class="contrib-card">
            <div class="contrib-user">
                <Icon data={IconData::LUCIDE_GITHUB} width="20px" height="20px" />
                <span>{ props.login.clone() }</span>
            </div>
            { for props.children.iter() }
        </div>
    }
}

fn grid(contributions: &Contributions) -> Html {
    html! {
        <>
            <div class="contrib-grid">
                { for contributions.grid.weeks.iter().enumerate().map(|(week_index, week)| html! {
                    <div key={week_index} class="contrib-week">
                        { for week.iter().map(|day| {
                            let level = ContributionLevel::from_count(day.count);
                            let title = match day.date {
                                Some(date) => format!("{} contributions on {date}", day.count),
                                None => format!("{} contributions", day.count),
                            };
                            html! { <div class={classes!("contrib-day", level.css_class())} {title}></div> }
                        }) }
                    </div>
                }) }
            </div>
            <div class="contrib-legend">
                <span>{ "Less" }</span>
                { for ContributionLevel::ALL.iter().map(|level| html! {
                    <div class={classes!("contrib-day", level.css_class())}></div>
                }) }
                <span>{ "More" }</span>
            </div>
        </>
    }
}

#[function_component(GithubContributions)]
pub fn github_contributions() -> Html {
    let config = github_config();
    let login = AttrValue::from(config.login.clone());
    let state = use_contributions(config);

    let heading = html! {
        <h2 class="section-title">{ "GitHub " }<span class="gradient-text">{ "Contributions" }</span></h2>
    };

    match &state {
        ContributionsState::Loading => html! {
            <section class="section contributions">
                { heading }
                <Calendar login={login}>
                    <div class="contrib-loading">{ "Loading contributions..." }</div>
                </Calendar>
            </section>
        },
        ContributionsState::Ready(contributions) => html! {
            <section class="section contributions">
                <RevealBox reveal={Reveal::fade_in_up(0.0)}>
                    { heading }
                    if let Some(notice) = contributions.notice() {
                        <p class="contrib-notice">{ notice }</p>
                    }
                    if !contributions.is_sample() {
                        <p class="contrib-total">
                            { format!("{} contributions in the last year", contributions.grid.total) }
                        </p>
                    }
                </RevealBox>
                <RevealBox reveal={Reveal::fade_in_up(0.2)} class="contrib-center">
                    <Calendar login={login}>
                        { grid(contributions) }
                    </Calendar>
                </RevealBox>
                <RevealBox reveal={Reveal::fade_in_up(0.4)} class="contrib-center">
                    <a class="btn-secondary" href={GITHUB_URL} target="_blank" rel="noopener noreferrer">
                        <Icon data={IconData::LUCIDE_GITHUB} width="20px" height="20px" />
                        { "View Full Profile" }
                    </a>
                </RevealBox>
            </section>
        },
    }
}
