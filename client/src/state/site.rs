#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use portfolio::config::PublicEmailConfig;

/// Deployment config as seen by the browser.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SiteState {
    #[default]
    Loading,
    Ready(PublicEmailConfig),
    Unavailable(String),
}

impl SiteState {
    pub fn email_config(&self) -> Option<&PublicEmailConfig> {
        match self {
            Self::Ready(config) => Some(config),
            _ => None,
        }
    }

    /// Placeholder shown where the contact form would be.
    pub fn status_text(&self) -> &'static str {
        match self {
            Self::Loading => "Loading contact form...",
            Self::Ready(_) => "",
            Self::Unavailable(_) => "The contact form is unavailable right now.",
        }
    }
}
