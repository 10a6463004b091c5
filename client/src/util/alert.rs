//! Blocking browser alert used as the contact notification surface.

/// Show `text` in a browser alert. No-op outside the browser.
pub fn show(text: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(text);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
    }
}
