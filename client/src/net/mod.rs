//! Network helpers for same-origin server endpoints.
//!
//! Outbound email goes through `portfolio::provider`, not through here.

pub mod api;
