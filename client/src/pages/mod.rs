//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps its body in `PageTransition` and renders static content
//! from `portfolio::content`; the contact page also owns a submission
//! controller.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
pub mod work;
