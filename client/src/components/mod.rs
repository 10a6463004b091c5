//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the page transition wrapper while
//! reading shared state from Leptos context providers.

pub mod navigation;
pub mod page_transition;
