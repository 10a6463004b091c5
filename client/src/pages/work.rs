//! Work history timeline.

use leptos::prelude::*;
use portfolio::content::{EXPERIENCES, Experience};

use crate::components::page_transition::PageTransition;

#[component]
pub fn WorkPage() -> impl IntoView {
    view! {
        <PageTransition>
            <section class="work">
                <h1 class="section-title">"Work Experience"</h1>
                <ol class="timeline">
                    {EXPERIENCES.iter().map(|e| view! { <ExperienceEntry experience=*e/> }).collect_view()}
                </ol>
            </section>
        </PageTransition>
    }
}

#[component]
fn ExperienceEntry(experience: Experience) -> impl IntoView {
    view! {
        <li class="timeline__entry">
            <header>
                <h3>{experience.title}</h3>
                <p class="timeline__company">{experience.company}" · "{experience.location}</p>
                <p class="timeline__period">{experience.period}" · "{experience.employment}</p>
            </header>
            <p>{experience.description}</p>
            <ul class="timeline__achievements">
                {experience.achievements.iter().map(|a| view! { <li>{*a}</li> }).collect_view()}
            </ul>
            <ul class="timeline__tech">
                {experience.technologies.iter().map(|t| view! { <li class="badge">{*t}</li> }).collect_view()}
            </ul>
        </li>
    }
}
