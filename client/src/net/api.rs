//! REST API helpers for communicating with the site server.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these endpoints are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use portfolio::config::SiteConfig;

pub const SITE_CONFIG_ENDPOINT: &str = "/api/site-config";

#[cfg(any(test, feature = "csr"))]
fn site_config_failed_message(status: u16) -> String {
    format!("site config request failed: {status}")
}

/// Fetch the public provider identifiers from `/api/site-config`.
///
/// # Errors
///
/// Returns an error string if the request fails, the server answers with a
/// non-success status, or the body does not parse.
pub async fn fetch_site_config() -> Result<SiteConfig, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(SITE_CONFIG_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(site_config_failed_message(resp.status()));
        }
        resp.json::<SiteConfig>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err("not available outside the browser".to_owned())
    }
}
