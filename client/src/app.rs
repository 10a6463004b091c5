//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use portfolio::content::HOME_PATH;
use portfolio::transition::TransitionOrchestrator;

use crate::components::navigation::Navigation;
use crate::pages::{
    about::AboutPage, contact::ContactPage, home::HomePage, projects::ProjectsPage, work::WorkPage,
};
use crate::state::site::SiteState;

/// Root application component.
///
/// Provides the transition orchestrator and site config as context, kicks
/// off the one-time site config fetch, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let orchestrator = RwSignal::new(TransitionOrchestrator::new(crate::util::motion::transition_config()));
    let site = RwSignal::new(SiteState::default());

    provide_context(orchestrator);
    provide_context(site);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_site_config().await {
            Ok(config) => site.set(SiteState::Ready(config.emailjs)),
            Err(e) => {
                log::error!("site config unavailable: {e}");
                site.set(SiteState::Unavailable(e));
            }
        }
    });

    view! {
        <Title text="Portfolio"/>

        <Router>
            <Navigation/>
            <main class="main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("about-me") view=AboutPage/>
                    <Route path=StaticSegment("projects") view=ProjectsPage/>
                    <Route path=StaticSegment("work") view=WorkPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </Routes>
            </main>
        </Router>
    }
}
