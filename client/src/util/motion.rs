//! Animation environment probing and phase styling.
//!
//! Leptos unmounts the previous route as soon as the location changes, so
//! exit animations are never deferred here. Users who ask for reduced motion
//! get instantaneous display.

#[cfg(test)]
#[path = "motion_test.rs"]
mod motion_test;

use portfolio::transition::{TransitionConfig, TransitionMode, TransitionPhase};

/// Matches the CSS enter animation duration.
pub const ENTER_DURATION_MS: u32 = 500;

/// Whether the user asked the browser for reduced motion.
pub fn prefers_reduced_motion() -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Transition config for this host.
pub fn transition_config() -> TransitionConfig {
    config_for(animation_runtime_available() && !prefers_reduced_motion())
}

fn config_for(animations: bool) -> TransitionConfig {
    TransitionConfig { mode: TransitionMode::Concurrent, animations, deferred_unmount: false }
}

/// Timers drive enter completion; without them nothing would ever settle.
fn animation_runtime_available() -> bool {
    cfg!(feature = "csr")
}

/// Class list for a page wrapper in `phase`.
pub fn phase_classes(phase: TransitionPhase) -> String {
    format!("page-transition {}", phase.css_class())
}
