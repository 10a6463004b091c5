//! Route-level wrapper that animates a page in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page mounts one `PageTransition`. On mount it reports the current
//! route to the shared `TransitionOrchestrator` and runs the returned
//! effects; its class follows the orchestrator's phase for that route.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use portfolio::transition::{TransitionEffect, TransitionOrchestrator, TransitionPhase};

use crate::util::motion::phase_classes;

/// Wrap a page body in the transition container.
#[component]
pub fn PageTransition(children: Children) -> impl IntoView {
    let orchestrator = expect_context::<RwSignal<TransitionOrchestrator>>();
    let location = use_location();
    let route = route_key(&location.pathname.get_untracked());

    let effects = orchestrator
        .try_update(|o| o.observe_route(&route))
        .unwrap_or_default();
    run_effects(orchestrator, effects);

    let class = move || {
        let phase = orchestrator
            .with(|o| o.phase_of(&route))
            .unwrap_or(TransitionPhase::Settled);
        phase_classes(phase)
    };

    view! { <div class=class>{children()}</div> }
}

/// Route identity for the orchestrator: pathname without a trailing slash.
fn route_key(pathname: &str) -> String {
    let trimmed = pathname.trim_end_matches('/');
    if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
}

fn run_effects(orchestrator: RwSignal<TransitionOrchestrator>, effects: Vec<TransitionEffect>) {
    for effect in effects {
        match effect {
            TransitionEffect::StartEnter { id, .. } => schedule_enter_complete(orchestrator, id),
            TransitionEffect::StartExit { id } => {
                // The router has already dropped the previous page.
                let follow_up = orchestrator.try_update(|o| o.exit_complete(id)).unwrap_or_default();
                run_effects(orchestrator, follow_up);
            }
            TransitionEffect::ShowImmediately { .. }
            | TransitionEffect::Abandon { .. }
            | TransitionEffect::Unmount { .. } => {}
        }
    }
}

#[cfg(feature = "csr")]
fn schedule_enter_complete(
    orchestrator: RwSignal<TransitionOrchestrator>,
    id: portfolio::transition::InstanceId,
) {
    gloo_timers::callback::Timeout::new(crate::util::motion::ENTER_DURATION_MS, move || {
        let _ = orchestrator.try_update(|o| o.enter_complete(id));
    })
    .forget();
}

#[cfg(not(feature = "csr"))]
fn schedule_enter_complete(
    orchestrator: RwSignal<TransitionOrchestrator>,
    id: portfolio::transition::InstanceId,
) {
    let _ = orchestrator.try_update(|o| o.enter_complete(id));
}
