//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only state that outlives a single page lives here. Contact form state is
//! owned by the contact page instance and dropped with it.

pub mod site;
