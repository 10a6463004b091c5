//! About page.

use leptos::prelude::*;

use crate::components::page_transition::PageTransition;

const SKILLS: &[&str] =
    &["TypeScript", "React", "Next.js", "Rust", "Node.js", "CSS", "Testing", "Accessibility"];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageTransition>
            <section class="about">
                <h1 class="section-title">"About Me"</h1>
                <p>
                    "I have spent the last several years building product interfaces for startups "
                    "and agencies, from design systems to data-heavy dashboards."
                </p>
                <p>"Outside of work I contribute to open source and write about front-end tooling."</p>
                <h2 class="section-subtitle">"Skills"</h2>
                <ul class="skills">
                    {SKILLS.iter().map(|skill| view! { <li class="badge">{*skill}</li> }).collect_view()}
                </ul>
            </section>
        </PageTransition>
    }
}
