//! Projects page: featured cards first, then the rest.

use leptos::prelude::*;
use portfolio::content::{PROJECTS, Project, badge_overflow, partition_projects};

use crate::components::page_transition::PageTransition;

const BADGE_LIMIT: usize = 3;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let (featured, others) = partition_projects(PROJECTS);

    view! {
        <PageTransition>
            <section class="projects">
                <h1 class="section-title">"Projects"</h1>
                <h2 class="section-subtitle">"Featured"</h2>
                <div class="projects__grid projects__grid--featured">
                    {featured.into_iter().map(|p| view! { <ProjectCard project=*p/> }).collect_view()}
                </div>
                <h2 class="section-subtitle">"Other Projects"</h2>
                <div class="projects__grid">
                    {others.into_iter().map(|p| view! { <ProjectCard project=*p/> }).collect_view()}
                </div>
            </section>
        </PageTransition>
    }
}

fn card_class(featured: bool) -> &'static str {
    if featured { "project-card project-card--featured" } else { "project-card" }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let (shown, hidden) = badge_overflow(project.technologies, BADGE_LIMIT);

    view! {
        <article class=card_class(project.featured)>
            <header class="project-card__header">
                <h3>{project.title}</h3>
                <span class="project-card__stars">{format!("★ {}", project.stars)}</span>
            </header>
            <p>{project.description}</p>
            <ul class="project-card__tech">
                {shown.iter().map(|t| view! { <li class="badge">{*t}</li> }).collect_view()}
                <Show when=move || { hidden > 0 }>
                    <li class="badge badge--more">{format!("+{hidden}")}</li>
                </Show>
            </ul>
            <footer class="project-card__links">
                <a href=project.github_url target="_blank" rel="noopener noreferrer">"Code"</a>
                <a href=project.live_url target="_blank" rel="noopener noreferrer">"Live"</a>
            </footer>
        </article>
    }
}
