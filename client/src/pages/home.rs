//! Landing page.

use leptos::prelude::*;

use crate::components::page_transition::PageTransition;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageTransition>
            <section class="hero">
                <p class="hero__greeting">"Hi, my name is"</p>
                <h1 class="hero__name">"Alex Morgan"</h1>
                <h2 class="hero__tagline">"I build things for the web."</h2>
                <p class="hero__intro">
                    "Front-end developer focused on fast, accessible interfaces and the "
                    "systems that keep them running."
                </p>
                <div class="hero__actions">
                    <a href="/projects" class="button">"View My Work"</a>
                    <a href="/contact" class="button button--outline">"Get In Touch"</a>
                </div>
            </section>
        </PageTransition>
    }
}
